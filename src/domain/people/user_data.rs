//! UserData aggregate - the data associated with one user profile.
//!
//! # Design Decisions
//!
//! - **Lazy records**: package records are created on first reference and
//!   never removed by this type
//! - **Exclusive roles**: each [`DefaultRole`] is held by at most one package
//! - **Single owner**: no internal locking; share through
//!   [`SharedUserDataRegistry`](crate::adapters::memory::SharedUserDataRegistry)

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::domain::foundation::UserId;

use super::{DefaultRole, PackageData, UserDataSummary};

/// Data associated with a user profile.
///
/// # Invariants
///
/// - `user_id` never changes after construction
/// - Package names are unique keys; each record carries this profile's `user_id`
/// - At most one record holds each [`DefaultRole`] once set through this type
#[derive(Debug, Clone)]
pub struct UserData {
    user_id: UserId,
    unlocked: bool,
    package_data: HashMap<String, PackageData>,
}

impl UserData {
    /// Create an empty, locked profile.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            unlocked: false,
            package_data: HashMap::new(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Visit every package record once, in unspecified order.
    pub fn for_all_packages<F>(&self, mut visitor: F)
    where
        F: FnMut(&PackageData),
    {
        for data in self.package_data.values() {
            visitor(data);
        }
    }

    /// Read-only view over every package record, in unspecified order.
    pub fn packages(&self) -> impl Iterator<Item = &PackageData> + '_ {
        self.package_data.values()
    }

    pub fn package_count(&self) -> usize {
        self.package_data.len()
    }

    pub fn mark_unlocked(&mut self) {
        self.unlocked = true;
    }

    pub fn mark_stopped(&mut self) {
        self.unlocked = false;
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Gets the record for `package_name`, creating it if absent.
    ///
    /// The name is not validated. Repeated calls return the same stored record.
    pub fn get_or_create_package_data(&mut self, package_name: &str) -> &mut PackageData {
        let user_id = self.user_id;
        match self.package_data.entry(package_name.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(user_id = %user_id, package = package_name, "Creating package data");
                entry.insert(PackageData::new(package_name, user_id))
            }
        }
    }

    /// Gets the record for `package_name` if it exists.
    pub fn package_data(&self, package_name: &str) -> Option<&PackageData> {
        self.package_data.get(package_name)
    }

    pub fn package_data_mut(&mut self, package_name: &str) -> Option<&mut PackageData> {
        self.package_data.get_mut(package_name)
    }

    /// The package currently holding `role`, if any.
    pub fn default_package(&self, role: DefaultRole) -> Option<&PackageData> {
        self.package_data.values().find(|data| data.is_default(role))
    }

    pub fn set_default_dialer(&mut self, package_name: Option<&str>) {
        self.set_default(DefaultRole::Dialer, package_name);
    }

    pub fn set_default_sms_app(&mut self, package_name: Option<&str>) {
        self.set_default(DefaultRole::SmsApp, package_name);
    }

    /// Moves `role` to `package_name` in a single pass over existing records.
    ///
    /// Never creates a record. If no record matches `package_name` (or it is
    /// `None`), every record ends up without `role`.
    pub fn set_default(&mut self, role: DefaultRole, package_name: Option<&str>) {
        let mut assigned = false;
        for data in self.package_data.values_mut() {
            if data.is_default(role) {
                data.set_is_default(role, false);
            }
            if package_name == Some(data.package_name()) {
                data.set_is_default(role, true);
                assigned = true;
            }
        }

        debug!(
            user_id = %self.user_id,
            role = %role,
            package = package_name.unwrap_or("<none>"),
            assigned,
            "Updated default role"
        );
    }

    /// Serializable diagnostic view of this profile.
    pub fn summary(&self) -> UserDataSummary {
        UserDataSummary::from_user_data(self)
    }
}
