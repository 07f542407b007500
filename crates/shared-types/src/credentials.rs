use crate::{AppError, Role};

/// A fixed email/password pair for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credential {
    pub email: &'static str,
    pub password: &'static str,
}

const ADMIN: Credential = Credential {
    email: "admin@transport.com",
    password: "admin123",
};

const SUB_ADMIN: Credential = Credential {
    email: "subadmin@transport.com",
    password: "sub123",
};

/// Demo credential table. Exactly one entry per role, compiled in.
pub const CREDENTIALS: &[(Role, Credential)] = &[(Role::Admin, ADMIN), (Role::SubAdmin, SUB_ADMIN)];

/// The table entry for `role`.
pub fn credential_for(role: Role) -> Credential {
    match role {
        Role::Admin => ADMIN,
        Role::SubAdmin => SUB_ADMIN,
    }
}

/// True iff `email`/`password` exactly equal the entry for `role`.
///
/// Case-sensitive, no trimming.
pub fn check(role: Role, email: &str, password: &str) -> bool {
    let expected = credential_for(role);
    email == expected.email && password == expected.password
}

/// Credential check expressed as the login verdict the session consumes.
pub fn authenticate(role: Role, email: &str, password: &str) -> Result<Role, AppError> {
    if check(role, email, password) {
        Ok(role)
    } else {
        Err(AppError::invalid_credentials())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALL_ROLES;

    #[test]
    fn table_has_one_entry_per_role() {
        assert_eq!(CREDENTIALS.len(), ALL_ROLES.len());
        for role in ALL_ROLES {
            let (table_role, cred) = CREDENTIALS
                .iter()
                .find(|(r, _)| r == role)
                .copied()
                .unwrap();
            assert_eq!(table_role, *role);
            assert_eq!(credential_for(*role), cred);
        }
    }

    #[test]
    fn exact_pair_is_accepted() {
        assert!(check(Role::Admin, "admin@transport.com", "admin123"));
        assert!(check(Role::SubAdmin, "subadmin@transport.com", "sub123"));
    }

    #[test]
    fn wrong_password_is_rejected() {
        assert!(!check(Role::Admin, "admin@transport.com", "wrongpass"));
    }

    #[test]
    fn swapped_role_is_rejected() {
        assert!(!check(Role::SubAdmin, "admin@transport.com", "admin123"));
        assert!(!check(Role::Admin, "subadmin@transport.com", "sub123"));
    }

    #[test]
    fn comparison_is_case_sensitive_and_untrimmed() {
        assert!(!check(Role::Admin, "Admin@transport.com", "admin123"));
        assert!(!check(Role::Admin, " admin@transport.com", "admin123"));
        assert!(!check(Role::Admin, "admin@transport.com", "admin123 "));
        assert!(!check(Role::Admin, "", ""));
    }

    #[test]
    fn authenticate_maps_to_verdict() {
        assert_eq!(
            authenticate(Role::SubAdmin, "subadmin@transport.com", "sub123"),
            Ok(Role::SubAdmin)
        );
        assert_eq!(
            authenticate(Role::Admin, "admin@transport.com", "nope"),
            Err(AppError::invalid_credentials())
        );
    }
}
