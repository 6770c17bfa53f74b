//! Pagination primitives matching the remote API's wire shapes.

use serde::{Deserialize, Serialize};

/// Page size the API defaults to when the caller does not override it.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// One page of results as returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub total_page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether a further page exists after this one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_page
    }
}

/// Query parameters for a paginated list call.
///
/// Resource-specific filters (`title`, `name`, `userId`) are appended by the
/// endpoint methods; this type only carries the shared page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub current_page: u32,
    pub limit: u32,
}

impl PageQuery {
    pub fn new(current_page: u32) -> Self {
        Self {
            current_page,
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Wire-level query parameters (`currentPage`, `limit`).
    pub fn to_params(self) -> Vec<(&'static str, String)> {
        vec![
            ("currentPage", self.current_page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_first_page_of_five() {
        let q = PageQuery::default();
        assert_eq!(q.current_page, 1);
        assert_eq!(q.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn params_use_the_api_field_names() {
        let params = PageQuery::new(3).with_limit(10).to_params();
        assert_eq!(
            params,
            vec![
                ("currentPage", "3".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }

    #[test]
    fn page_deserializes_from_camel_case() {
        let page: Page<String> = serde_json::from_value(serde_json::json!({
            "data": ["a", "b"],
            "currentPage": 1,
            "totalPage": 2,
            "limit": 5,
        }))
        .unwrap();

        assert_eq!(page.len(), 2);
        assert!(page.has_next());
    }

    #[test]
    fn last_page_has_no_next() {
        let page = Page::<u32> {
            data: vec![],
            current_page: 2,
            total_page: 2,
            limit: 5,
        };
        assert!(!page.has_next());
        assert!(page.is_empty());
    }
}
