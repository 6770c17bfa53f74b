//! Borrow request model, payloads, and status transitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bibliotek_catalog::Book;
use bibliotek_core::{BookId, DomainError, DomainResult, RequestId};

/// A borrow request may cover at most this many distinct books.
pub const MAX_BOOKS_PER_REQUEST: usize = 5;

/// Status of a borrow request.
///
/// `Waiting` is the only non-terminal state: once a request is approved or
/// rejected it stays that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Waiting,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn is_settled(self) -> bool {
        self != RequestStatus::Waiting
    }

    /// Whether moving to `next` is a legal transition.
    pub fn can_transition_to(self, next: RequestStatus) -> bool {
        self == RequestStatus::Waiting && next.is_settled()
    }
}

impl core::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            RequestStatus::Waiting => "waiting",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// A borrow request as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    pub id: RequestId,
    /// Email of the requesting user.
    pub requestor: String,
    pub date_requested: NaiveDate,
    #[serde(default)]
    pub books: Vec<Book>,
    pub status: RequestStatus,
}

impl BorrowRequest {
    /// Build the update payload that settles this request, enforcing the
    /// lifecycle rule locally before any HTTP round-trip.
    pub fn settle(&self, status: RequestStatus) -> DomainResult<UpdateBorrowRequest> {
        if !self.status.can_transition_to(status) {
            return Err(DomainError::invariant(format!(
                "cannot move request from {} to {}",
                self.status, status
            )));
        }
        Ok(UpdateBorrowRequest { status })
    }
}

/// Payload for creating a borrow request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrowRequest {
    pub book_ids: Vec<BookId>,
}

impl CreateBorrowRequest {
    pub fn new(book_ids: Vec<BookId>) -> Self {
        Self { book_ids }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.book_ids.is_empty() {
            return Err(DomainError::validation(
                "a borrow request must include at least one book",
            ));
        }
        if self.book_ids.len() > MAX_BOOKS_PER_REQUEST {
            return Err(DomainError::validation(format!(
                "a borrow request may include at most {MAX_BOOKS_PER_REQUEST} books"
            )));
        }
        let mut seen = self.book_ids.clone();
        seen.sort_unstable_by_key(|id| *id.as_uuid());
        seen.dedup();
        if seen.len() != self.book_ids.len() {
            return Err(DomainError::validation(
                "a borrow request must not list the same book twice",
            ));
        }
        Ok(())
    }
}

/// Payload for updating a borrow request's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBorrowRequest {
    pub status: RequestStatus,
}
