//! Thread-safe handle to a [`UserDataRegistry`].
//!
//! `UserData` itself carries no locking. Callers that touch profiles from
//! more than one thread share this handle instead; every access runs inside
//! the lock, so a visitor can never observe a concurrent insert.
//!
//! # Example
//!
//! ```ignore
//! let registry = SharedUserDataRegistry::new(UserDataRegistry::default());
//! registry.on_user_unlocked(UserId::new(0));
//!
//! registry.with(|r| {
//!     r.get_or_create_package_data(UserId::new(0), "com.android.dialer")?;
//!     r.set_default_dialer(UserId::new(0), Some("com.android.dialer"))
//! })?;
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::foundation::UserId;
use crate::domain::people::{UserData, UserDataRegistry, UserDataSummary};

/// Cloneable, lock-guarded registry handle.
#[derive(Debug, Clone, Default)]
pub struct SharedUserDataRegistry {
    inner: Arc<Mutex<UserDataRegistry>>,
}

impl SharedUserDataRegistry {
    pub fn new(registry: UserDataRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Runs `f` with exclusive access to the registry.
    ///
    /// A lock poisoned by a panicking caller is recovered; the registry's
    /// per-operation invariants hold between calls regardless.
    pub fn with<R>(&self, f: impl FnOnce(&mut UserDataRegistry) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn on_user_unlocked(&self, user_id: UserId) {
        self.with(|registry| {
            registry.on_user_unlocked(user_id);
        });
    }

    pub fn on_user_stopped(&self, user_id: UserId) {
        self.with(|registry| registry.on_user_stopped(user_id));
    }

    pub fn is_user_unlocked(&self, user_id: UserId) -> bool {
        self.with(|registry| registry.is_user_unlocked(user_id))
    }

    /// Summary of the profile for `user_id`, whether or not it is unlocked.
    pub fn summary(&self, user_id: UserId) -> Option<UserDataSummary> {
        self.with(|registry| registry.user_data(user_id).map(UserData::summary))
    }
}
