//! Session record and login credentials.

use serde::{Deserialize, Serialize};

use bibliotek_core::UserId;

use crate::Role;

/// An authenticated session as the client knows it.
///
/// Created on successful login or restored from the session store; destroyed
/// on logout or when a silent refresh fails. The bearer token is deliberately
/// *not* part of this record — it lives only in client memory and is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            email: email.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Credentials submitted to the login endpoint.
#[derive(Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs.
impl core::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_with_camel_case_keys() {
        let session = Session::new(UserId::new(), "reader@example.com", Role::User);
        let json = serde_json::to_value(&session).unwrap();

        assert!(json.get("userId").is_some());
        assert_eq!(json["role"], "user");

        let back: Session = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn session_restores_from_a_record_with_mixed_case_role() {
        let session: Session = serde_json::from_value(serde_json::json!({
            "userId": UserId::new().to_string(),
            "email": "admin@example.com",
            "role": "Admin",
        }))
        .unwrap();

        assert!(session.is_admin());
    }

    #[test]
    fn credentials_debug_redacts_password() {
        let creds = LoginCredentials::new("reader@example.com", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("reader@example.com"));
    }
}
