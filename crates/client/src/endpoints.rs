//! Paths of the remote API.

use bibliotek_core::{BookId, CategoryId, RequestId};

/// Prefix shared by every authentication endpoint. Calls under this prefix
/// are exempt from the token-attachment/refresh logic.
pub const AUTH_PREFIX: &str = "/api/auth";

pub const LOGIN: &str = "/api/auth/login";
pub const LOGOUT: &str = "/api/auth/logout";
pub const REFRESH: &str = "/api/auth/refresh";

pub const BOOKS: &str = "/api/books";
pub const CATEGORIES: &str = "/api/categories";
pub const CATEGORIES_NO_PAGINATE: &str = "/api/categories/no-paginate";
pub const BORROW_REQUESTS: &str = "/api/borrowing-requests";

pub fn book(id: BookId) -> String {
    format!("{BOOKS}/{id}")
}

pub fn category(id: CategoryId) -> String {
    format!("{CATEGORIES}/{id}")
}

pub fn borrow_request(id: RequestId) -> String {
    format!("{BORROW_REQUESTS}/{id}")
}

/// Whether a path targets an authentication endpoint.
pub fn is_auth(path: &str) -> bool {
    path.starts_with(AUTH_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_endpoints_are_recognized() {
        assert!(is_auth(LOGIN));
        assert!(is_auth(LOGOUT));
        assert!(is_auth(REFRESH));
        assert!(!is_auth(BOOKS));
        assert!(!is_auth(CATEGORIES_NO_PAGINATE));
    }

    #[test]
    fn item_paths_embed_the_id() {
        let id = BookId::new();
        assert_eq!(book(id), format!("/api/books/{id}"));
    }
}
