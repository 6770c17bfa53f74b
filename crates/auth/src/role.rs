//! RBAC roles known to the client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role granted to an authenticated user.
///
/// The API is not consistent about casing ("Admin" vs "admin"), so parsing is
/// case-insensitive; the wire form written by this client is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct RoleParseError(String);

impl TryFrom<String> for Role {
    type Error = RoleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim() {
            s if s.eq_ignore_ascii_case("admin") => Ok(Role::Admin),
            s if s.eq_ignore_ascii_case("user") => Ok(Role::User),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_is_case_insensitive() {
        for raw in ["Admin", "admin", "ADMIN", " admin "] {
            let role: Role = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(role, Role::Admin);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = serde_json::from_value::<Role>(serde_json::json!("librarian"));
        assert!(result.is_err());
    }

    #[test]
    fn wire_form_is_lowercase() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), "admin");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
    }
}
