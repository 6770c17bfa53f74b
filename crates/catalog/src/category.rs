//! Category read model and write payload.

use serde::{Deserialize, Serialize};

use bibliotek_core::{CategoryId, DomainError, DomainResult};

use crate::book::Book;

/// A category as returned by the API, with the books currently filed under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub books: Vec<Book>,
}

/// Payload for creating or renaming a category (the API takes the same body
/// for both).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}

impl CategoryPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("category name must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_payload_passes() {
        assert!(CategoryPayload::new("Science Fiction").validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(CategoryPayload::new("  ").validate().is_err());
    }

    #[test]
    fn category_deserializes_without_books() {
        let category: Category = serde_json::from_value(serde_json::json!({
            "id": CategoryId::new().to_string(),
            "name": "Mystery",
        }))
        .unwrap();
        assert!(category.books.is_empty());
    }
}
