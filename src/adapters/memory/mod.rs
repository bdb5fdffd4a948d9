//! In-process adapters.

mod shared_registry;

pub use shared_registry::SharedUserDataRegistry;
