//! Default handler roles.
//!
//! A role can be held by at most one package per user profile.

use serde::{Deserialize, Serialize};

/// A default-handler role a package can hold for its user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultRole {
    /// The default phone dialer.
    Dialer,

    /// The default SMS application.
    SmsApp,
}

impl DefaultRole {
    /// All roles, in declaration order.
    pub const ALL: [DefaultRole; 2] = [DefaultRole::Dialer, DefaultRole::SmsApp];

    /// Returns the display name for this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            DefaultRole::Dialer => "default dialer",
            DefaultRole::SmsApp => "default SMS app",
        }
    }
}

impl std::fmt::Display for DefaultRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
