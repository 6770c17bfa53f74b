//! Book endpoints.

use bibliotek_catalog::{Book, CreateBook, UpdateBook};
use bibliotek_core::{BookId, Page, PageQuery};

use crate::client::{ApiClient, ApiRequest};
use crate::endpoints;
use crate::error::ClientError;

impl ApiClient {
    /// List books, one page at a time, optionally filtered by title.
    pub async fn list_books(
        &self,
        page: PageQuery,
        title: Option<&str>,
    ) -> Result<Page<Book>, ClientError> {
        let mut params = page.to_params();
        if let Some(title) = title {
            params.push(("title", title.to_string()));
        }
        self.dispatch(ApiRequest::get(endpoints::BOOKS).query(params))
            .await
    }

    pub async fn get_book(&self, id: BookId) -> Result<Book, ClientError> {
        self.dispatch(ApiRequest::get(endpoints::book(id))).await
    }

    /// Create a book. The payload is validated locally before any request is
    /// sent; server-side rejections surface as [`ClientError::Validation`]
    /// with the server's messages verbatim.
    pub async fn create_book(&self, book: &CreateBook) -> Result<Book, ClientError> {
        book.validate()?;
        self.dispatch(ApiRequest::post(endpoints::BOOKS).json(book)?)
            .await
    }

    pub async fn update_book(&self, id: BookId, book: &UpdateBook) -> Result<Book, ClientError> {
        book.validate()?;
        self.dispatch(ApiRequest::put(endpoints::book(id)).json(book)?)
            .await
    }

    pub async fn delete_book(&self, id: BookId) -> Result<(), ClientError> {
        self.dispatch_unit(ApiRequest::delete(endpoints::book(id)))
            .await
    }
}
