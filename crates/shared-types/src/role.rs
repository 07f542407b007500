use serde::{Deserialize, Serialize};
use std::fmt;

/// The two portal user categories.
///
/// - `Admin`: full administrator panel, sees the admin dashboard.
/// - `SubAdmin`: operations manager, sees the operations dashboard.
///
/// The role is fixed at login and reset to the default on logout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    #[default]
    Admin,
    SubAdmin,
}

/// Both roles in login-selector order.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::SubAdmin];

impl Role {
    /// Wire key, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SubAdmin => "sub-admin",
        }
    }

    /// Name used in the welcome toast.
    pub fn welcome_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::SubAdmin => "Operations Manager",
        }
    }

    /// Name shown on the sidebar user card.
    pub fn profile_name(&self) -> &'static str {
        match self {
            Role::Admin => "System Admin",
            Role::SubAdmin => "Operations Manager",
        }
    }

    /// Name shown in the header profile dropdown.
    pub fn full_title(&self) -> &'static str {
        match self {
            Role::Admin => "System Administrator",
            Role::SubAdmin => "Operations Manager",
        }
    }

    pub fn badge_label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::SubAdmin => "Sub-Admin",
        }
    }

    /// Label used on the login role selector and the header profile button.
    pub fn short_label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::SubAdmin => "Sub-Admin",
        }
    }

    /// Subtitle rendered under the header page title.
    pub fn panel_subtitle(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator Panel",
            Role::SubAdmin => "Operations Dashboard",
        }
    }

    /// Contact address displayed in the profile dropdown.
    pub fn contact_email(&self) -> String {
        format!("{}@transport.com", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_role_is_admin() {
        assert_eq!(Role::default(), Role::Admin);
    }

    #[test]
    fn wire_key_matches_serde() {
        for role in ALL_ROLES {
            let json = serde_json::to_string(role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        assert_eq!(serde_json::to_string(&Role::SubAdmin).unwrap(), r#""sub-admin""#);
        let role: Role = serde_json::from_str(r#""admin""#).unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn contact_email_uses_role_key() {
        assert_eq!(Role::SubAdmin.contact_email(), "sub-admin@transport.com");
    }
}
