//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `people` - User profiles, package records and default roles

pub mod foundation;
pub mod people;
