//! People data module - per-user profile records.
//!
//! Tracks, for each user profile, whether the user is unlocked and a record
//! per application package. Packages can hold exclusive default-handler
//! roles (dialer, SMS app).
//!
//! # Domain Invariants
//!
//! 1. A profile's user never changes
//! 2. One record per package name per profile
//! 3. Each role is held by at most one package per profile
//! 4. Setting a role never creates a package record

mod default_role;
mod package_data;
mod registry;
mod summary;
mod user_data;

pub use default_role::DefaultRole;
pub use package_data::PackageData;
pub use registry::{PackageNamePolicy, UserDataRegistry};
pub use summary::UserDataSummary;
pub use user_data::UserData;
