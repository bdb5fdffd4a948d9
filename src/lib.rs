//! People Data - per-user profile records
//!
//! This crate tracks, for each user profile on a device, whether the user is
//! unlocked and a record per application package, including which package
//! holds the default dialer and default SMS app roles.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod telemetry;
