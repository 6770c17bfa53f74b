//! Client error taxonomy and normalization to user-facing messages.

use thiserror::Error;

use bibliotek_core::DomainError;

/// Message shown when a failure carries no structured errors.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Failure of an API call as seen by the caller.
///
/// Silent-refresh recoveries are invisible here: an error of this type means
/// the call is over. `RefreshFailed` and `SessionExpired` both imply the
/// persisted session has already been removed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The silent token refresh failed; the session is gone.
    #[error("unable to refresh token: {0}")]
    RefreshFailed(String),

    /// The server rejected credentials again after a successful refresh.
    #[error("session expired")]
    SessionExpired,

    /// Structured validation/business errors reported by the API (or caught
    /// locally before the request was sent).
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Transport-level failure (connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Unexpected status without a structured error payload.
    #[error("API error ({0}): {1}")]
    Api(u16, String),

    /// The response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The session store could not be read or written.
    #[error("session store error: {0}")]
    Store(String),
}

impl ClientError {
    /// Flatten any failure into the list of messages a UI would display.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ClientError::Validation(errors) if !errors.is_empty() => errors.clone(),
            ClientError::SessionExpired => vec!["Session expired".to_string()],
            ClientError::RefreshFailed(_) => vec!["Unable to refresh token".to_string()],
            _ => vec![FALLBACK_MESSAGE.to_string()],
        }
    }
}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        ClientError::Validation(vec![err.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_passed_through_verbatim() {
        let err = ClientError::Validation(vec![
            "title must not be empty".to_string(),
            "author must not be empty".to_string(),
        ]);
        assert_eq!(
            err.messages(),
            vec!["title must not be empty", "author must not be empty"]
        );
    }

    #[test]
    fn opaque_failures_collapse_to_the_fallback_message() {
        for err in [
            ClientError::Network("connection refused".to_string()),
            ClientError::Api(500, "internal".to_string()),
            ClientError::Parse("bad json".to_string()),
        ] {
            assert_eq!(err.messages(), vec![FALLBACK_MESSAGE.to_string()]);
        }
    }

    #[test]
    fn auth_failures_have_dedicated_notices() {
        assert_eq!(ClientError::SessionExpired.messages(), vec!["Session expired"]);
        assert_eq!(
            ClientError::RefreshFailed("boom".to_string()).messages(),
            vec!["Unable to refresh token"]
        );
    }

    #[test]
    fn domain_errors_become_validation_errors() {
        let err: ClientError = DomainError::validation("title must not be empty").into();
        match err {
            ClientError::Validation(messages) => {
                assert_eq!(messages, vec!["validation failed: title must not be empty"]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
