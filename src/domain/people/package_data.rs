//! Per-package record within a user profile.

use crate::domain::foundation::UserId;

use super::DefaultRole;

/// Data associated with one application package for one user.
///
/// # Invariants
///
/// - `package_name` and `user_id` are fixed at construction
/// - Default-role flags are only kept exclusive by the owning [`UserData`];
///   setting them directly bypasses that guarantee
///
/// [`UserData`]: super::UserData
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageData {
    package_name: String,
    user_id: UserId,
    is_default_dialer: bool,
    is_default_sms_app: bool,
}

impl PackageData {
    /// Create a record for `package_name` owned by `user_id`, holding no roles.
    pub fn new(package_name: impl Into<String>, user_id: UserId) -> Self {
        Self {
            package_name: package_name.into(),
            user_id,
            is_default_dialer: false,
            is_default_sms_app: false,
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn is_default_dialer(&self) -> bool {
        self.is_default_dialer
    }

    pub fn set_is_default_dialer(&mut self, value: bool) {
        self.is_default_dialer = value;
    }

    pub fn is_default_sms_app(&self) -> bool {
        self.is_default_sms_app
    }

    pub fn set_is_default_sms_app(&mut self, value: bool) {
        self.is_default_sms_app = value;
    }

    /// Whether this package currently holds `role`.
    pub fn is_default(&self, role: DefaultRole) -> bool {
        match role {
            DefaultRole::Dialer => self.is_default_dialer,
            DefaultRole::SmsApp => self.is_default_sms_app,
        }
    }

    /// Set or clear `role` on this package.
    pub fn set_is_default(&mut self, role: DefaultRole, value: bool) {
        match role {
            DefaultRole::Dialer => self.is_default_dialer = value,
            DefaultRole::SmsApp => self.is_default_sms_app = value,
        }
    }
}
