//! `bibliotek-lending` — borrow requests and their status lifecycle.

pub mod request;

pub use request::{
    BorrowRequest, CreateBorrowRequest, RequestStatus, UpdateBorrowRequest, MAX_BOOKS_PER_REQUEST,
};
