//! Registry of user profiles.
//!
//! Owns every [`UserData`] and drives the unlock/stop lifecycle. Package
//! operations through the registry are only allowed for unlocked users.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::foundation::{DomainError, PackageName, UserId};

use super::{PackageData, UserData, UserDataSummary};

/// How package names are checked before a record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageNamePolicy {
    /// Accept any name, including empty ones.
    #[default]
    Lenient,

    /// Require a valid [`PackageName`].
    Strict,
}

impl PackageNamePolicy {
    /// Checks `package_name` against this policy.
    pub fn check(&self, package_name: &str) -> Result<(), DomainError> {
        match self {
            PackageNamePolicy::Lenient => Ok(()),
            PackageNamePolicy::Strict => {
                PackageName::new(package_name)?;
                Ok(())
            }
        }
    }
}

/// Owner of all user profiles, keyed by user.
#[derive(Debug, Clone, Default)]
pub struct UserDataRegistry {
    users: HashMap<UserId, UserData>,
    policy: PackageNamePolicy,
}

impl UserDataRegistry {
    pub fn new(policy: PackageNamePolicy) -> Self {
        Self {
            users: HashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> PackageNamePolicy {
        self.policy
    }

    /// Gets or creates the profile for `user_id` and marks it unlocked.
    pub fn on_user_unlocked(&mut self, user_id: UserId) -> &mut UserData {
        info!(user_id = %user_id, "User unlocked");
        let user_data = self
            .users
            .entry(user_id)
            .or_insert_with(|| UserData::new(user_id));
        user_data.mark_unlocked();
        user_data
    }

    /// Marks the profile stopped. Its package records are kept.
    pub fn on_user_stopped(&mut self, user_id: UserId) {
        if let Some(user_data) = self.users.get_mut(&user_id) {
            info!(user_id = %user_id, "User stopped");
            user_data.mark_stopped();
        }
    }

    /// Tears down the profile and hands it back to the caller.
    pub fn on_user_removed(&mut self, user_id: UserId) -> Option<UserData> {
        let removed = self.users.remove(&user_id);
        if removed.is_some() {
            info!(user_id = %user_id, "User removed");
        }
        removed
    }

    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.users.contains_key(&user_id)
    }

    /// The profile for `user_id` in any state.
    pub fn user_data(&self, user_id: UserId) -> Option<&UserData> {
        self.users.get(&user_id)
    }

    pub fn is_user_unlocked(&self, user_id: UserId) -> bool {
        self.unlocked_user_data(user_id).is_some()
    }

    /// The profile for `user_id`, only if it is currently unlocked.
    pub fn unlocked_user_data(&self, user_id: UserId) -> Option<&UserData> {
        self.users.get(&user_id).filter(|data| data.is_unlocked())
    }

    pub fn unlocked_user_data_mut(&mut self, user_id: UserId) -> Option<&mut UserData> {
        self.users.get_mut(&user_id).filter(|data| data.is_unlocked())
    }

    /// Visit every unlocked profile once, in unspecified order.
    pub fn for_all_unlocked_users<F>(&self, mut visitor: F)
    where
        F: FnMut(&UserData),
    {
        for user_data in self.users.values().filter(|data| data.is_unlocked()) {
            visitor(user_data);
        }
    }

    /// Summaries of every profile, ordered by user.
    pub fn summaries(&self) -> Vec<UserDataSummary> {
        let mut summaries: Vec<UserDataSummary> =
            self.users.values().map(UserData::summary).collect();
        summaries.sort_by_key(|summary| summary.user_id);
        summaries
    }

    /// Pretty-printed JSON of [`summaries`](Self::summaries), for diagnostics.
    pub fn dump(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.summaries())
    }

    /// Checks the name against the policy, then gets or creates its record.
    ///
    /// # Errors
    ///
    /// - `UserLocked` if the user is unknown or stopped
    /// - `ValidationFailed` if the strict policy rejects the name
    pub fn get_or_create_package_data(
        &mut self,
        user_id: UserId,
        package_name: &str,
    ) -> Result<&mut PackageData, DomainError> {
        if let Err(err) = self.policy.check(package_name) {
            warn!(user_id = %user_id, package = package_name, error = %err, "Rejected package name");
            return Err(err);
        }
        let user_data = self.require_unlocked(user_id)?;
        Ok(user_data.get_or_create_package_data(package_name))
    }

    /// Record for `package_name`, if the user is unlocked and the record exists.
    pub fn package_data(&self, user_id: UserId, package_name: &str) -> Option<&PackageData> {
        self.unlocked_user_data(user_id)?.package_data(package_name)
    }

    /// # Errors
    ///
    /// Returns `UserLocked` if the user is unknown or stopped.
    pub fn set_default_dialer(
        &mut self,
        user_id: UserId,
        package_name: Option<&str>,
    ) -> Result<(), DomainError> {
        self.require_unlocked(user_id)?.set_default_dialer(package_name);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `UserLocked` if the user is unknown or stopped.
    pub fn set_default_sms_app(
        &mut self,
        user_id: UserId,
        package_name: Option<&str>,
    ) -> Result<(), DomainError> {
        self.require_unlocked(user_id)?.set_default_sms_app(package_name);
        Ok(())
    }

    fn require_unlocked(&mut self, user_id: UserId) -> Result<&mut UserData, DomainError> {
        match self.unlocked_user_data_mut(user_id) {
            Some(user_data) => Ok(user_data),
            None => {
                warn!(user_id = %user_id, "Operation on user that is not unlocked");
                Err(DomainError::user_locked(user_id))
            }
        }
    }
}
