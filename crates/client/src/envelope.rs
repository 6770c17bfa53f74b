//! The response envelope every API endpoint wraps its payload in.

use serde::Deserialize;

use crate::error::{ClientError, FALLBACK_MESSAGE};

/// Wire envelope: `{ success, statusCode, errors, content }`.
///
/// Callers never see this type on the success path — the client unwraps it
/// and hands back only the inner content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default = "Option::default")]
    pub content: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the envelope, discarding it on success and normalizing
    /// failures.
    pub fn into_content(self) -> Result<T, ClientError> {
        if self.success {
            self.content
                .ok_or_else(|| ClientError::Parse("success response without content".to_string()))
        } else {
            Err(self.into_error())
        }
    }

    /// Like [`Self::into_content`], but for endpoints whose content does not
    /// matter (delete, logout).
    pub fn expect_success(self) -> Result<(), ClientError> {
        if self.success {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    fn into_error(self) -> ClientError {
        match self.errors {
            Some(errors) if !errors.is_empty() => ClientError::Validation(errors),
            _ => ClientError::Api(self.status_code, FALLBACK_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_yields_only_the_inner_content() {
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_value(serde_json::json!({
            "success": true,
            "statusCode": 200,
            "errors": null,
            "content": [1, 2, 3],
        }))
        .unwrap();

        assert_eq!(envelope.into_content().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn populated_errors_surface_exactly() {
        let envelope: ApiEnvelope<()> = serde_json::from_value(serde_json::json!({
            "success": false,
            "statusCode": 400,
            "errors": ["title must not be empty", "author must not be empty"],
            "content": null,
        }))
        .unwrap();

        match envelope.into_content().unwrap_err() {
            ClientError::Validation(errors) => {
                assert_eq!(
                    errors,
                    vec!["title must not be empty", "author must not be empty"]
                );
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_errors_falls_back_to_generic_api_error() {
        let envelope: ApiEnvelope<()> = serde_json::from_value(serde_json::json!({
            "success": false,
            "statusCode": 500,
            "errors": [],
            "content": null,
        }))
        .unwrap();

        match envelope.into_content().unwrap_err() {
            ClientError::Api(500, message) => assert_eq!(message, FALLBACK_MESSAGE),
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn success_without_content_is_a_parse_error() {
        let envelope: ApiEnvelope<u32> = serde_json::from_value(serde_json::json!({
            "success": true,
            "statusCode": 200,
        }))
        .unwrap();

        assert!(matches!(
            envelope.into_content(),
            Err(ClientError::Parse(_))
        ));
    }

    #[test]
    fn expect_success_ignores_missing_content() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_value(serde_json::json!({
                "success": true,
                "statusCode": 200,
                "content": null,
            }))
            .unwrap();

        assert!(envelope.expect_success().is_ok());
    }
}
