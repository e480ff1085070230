use serde::{Deserialize, Serialize};

/// Console roles. `super_admin` additionally manages user accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "admin" => Ok(Role::Admin),
            "super_admin" => Ok(Role::SuperAdmin),
            _ => Err(()),
        }
    }
}

pub trait RequiredRole {
    fn required() -> Role;
}

pub struct SuperAdminRole;

impl RequiredRole for SuperAdminRole {
    fn required() -> Role {
        Role::SuperAdmin
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user id
    pub exp: usize,  // expiry (unix)
    pub iat: usize,  // issued at
    pub roles: Vec<Role>,
}

#[derive(Debug)]
pub struct TokenBundle {
    pub access_token: String,
    pub session_token: String,
    pub token_type: &'static str,
    pub expires_in: usize,
}

#[cfg(test)]
mod tests {
    use super::{RequiredRole, Role, SuperAdminRole};

    #[test]
    fn role_string_roundtrip() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::SuperAdmin.as_str(), "super_admin");

        assert_eq!(Role::try_from("admin"), Ok(Role::Admin));
        assert_eq!(Role::try_from("super_admin"), Ok(Role::SuperAdmin));
        assert!(Role::try_from("editor").is_err());
    }

    #[test]
    fn required_role_marker_maps_to_expected_role() {
        assert_eq!(SuperAdminRole::required(), Role::SuperAdmin);
    }
}
