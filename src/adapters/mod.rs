//! Adapters - Ways of hosting the domain in a running process.
//!
//! - `memory` - Thread-safe in-process registry handle

pub mod memory;

pub use memory::SharedUserDataRegistry;
