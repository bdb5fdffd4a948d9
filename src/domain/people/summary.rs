//! Diagnostic snapshot of a user profile.

use serde::Serialize;

use crate::domain::foundation::UserId;

use super::{DefaultRole, PackageData, UserData};

/// Point-in-time view of a [`UserData`], suitable for dumping to logs.
///
/// There is no path back from a summary to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDataSummary {
    pub user_id: UserId,
    pub unlocked: bool,
    pub package_count: usize,
    pub default_dialer: Option<String>,
    pub default_sms_app: Option<String>,
    /// Package names, sorted.
    pub packages: Vec<String>,
}

impl UserDataSummary {
    pub fn from_user_data(user_data: &UserData) -> Self {
        let holder = |role| {
            user_data
                .default_package(role)
                .map(|data: &PackageData| data.package_name().to_string())
        };

        let mut packages: Vec<String> = user_data
            .packages()
            .map(|data| data.package_name().to_string())
            .collect();
        packages.sort();

        Self {
            user_id: user_data.user_id(),
            unlocked: user_data.is_unlocked(),
            package_count: packages.len(),
            default_dialer: holder(DefaultRole::Dialer),
            default_sms_app: holder(DefaultRole::SmsApp),
            packages,
        }
    }
}
