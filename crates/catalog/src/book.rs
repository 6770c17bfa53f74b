//! Book read model and write payloads.

use serde::{Deserialize, Serialize};

use bibliotek_core::{BookId, CategoryId, DomainError, DomainResult};

use crate::category::Category;

/// A book as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub edition_number: u32,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub quantity: u32,
    pub is_available: bool,
}

impl Book {
    /// Whether a borrow request may include this book.
    pub fn is_borrowable(&self) -> bool {
        self.is_available && self.quantity > 0
    }
}

/// Payload for creating a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub edition_number: u32,
    pub category_ids: Vec<CategoryId>,
}

impl CreateBook {
    /// Validate the payload before it is sent to the API.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(DomainError::validation("author must not be empty"));
        }
        if self.edition_number == 0 {
            return Err(DomainError::validation("edition number must be at least 1"));
        }
        Ok(())
    }
}

/// Payload for updating a book. Extends [`CreateBook`] with stock fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub title: String,
    pub author: String,
    pub edition_number: u32,
    pub category_ids: Vec<CategoryId>,
    pub quantity: u32,
    pub is_available: bool,
}

impl UpdateBook {
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(DomainError::validation("author must not be empty"));
        }
        if self.edition_number == 0 {
            return Err(DomainError::validation("edition number must be at least 1"));
        }
        if self.is_available && self.quantity == 0 {
            return Err(DomainError::invariant(
                "a book with zero copies cannot be marked available",
            ));
        }
        Ok(())
    }
}
