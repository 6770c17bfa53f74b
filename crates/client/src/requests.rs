//! Borrowing-request endpoints.

use bibliotek_core::{Page, PageQuery, RequestId, UserId};
use bibliotek_lending::{BorrowRequest, CreateBorrowRequest, RequestStatus, UpdateBorrowRequest};

use crate::client::{ApiClient, ApiRequest};
use crate::endpoints;
use crate::error::ClientError;

impl ApiClient {
    /// List borrowing requests, optionally restricted to one requestor.
    pub async fn list_requests(
        &self,
        page: PageQuery,
        user_id: Option<UserId>,
    ) -> Result<Page<BorrowRequest>, ClientError> {
        let mut params = page.to_params();
        if let Some(user_id) = user_id {
            params.push(("userId", user_id.to_string()));
        }
        self.dispatch(ApiRequest::get(endpoints::BORROW_REQUESTS).query(params))
            .await
    }

    pub async fn get_request(&self, id: RequestId) -> Result<BorrowRequest, ClientError> {
        self.dispatch(ApiRequest::get(endpoints::borrow_request(id)))
            .await
    }

    pub async fn create_request(
        &self,
        request: &CreateBorrowRequest,
    ) -> Result<BorrowRequest, ClientError> {
        request.validate()?;
        self.dispatch(ApiRequest::post(endpoints::BORROW_REQUESTS).json(request)?)
            .await
    }

    pub async fn update_request(
        &self,
        id: RequestId,
        update: &UpdateBorrowRequest,
    ) -> Result<BorrowRequest, ClientError> {
        self.dispatch(ApiRequest::put(endpoints::borrow_request(id)).json(update)?)
            .await
    }

    /// Approve a waiting request. The lifecycle guard runs locally first, so
    /// settling an already-settled request never reaches the server.
    pub async fn approve_request(
        &self,
        request: &BorrowRequest,
    ) -> Result<BorrowRequest, ClientError> {
        let update = request.settle(RequestStatus::Approved)?;
        self.update_request(request.id, &update).await
    }

    /// Reject a waiting request.
    pub async fn reject_request(
        &self,
        request: &BorrowRequest,
    ) -> Result<BorrowRequest, ClientError> {
        let update = request.settle(RequestStatus::Rejected)?;
        self.update_request(request.id, &update).await
    }

    pub async fn delete_request(&self, id: RequestId) -> Result<(), ClientError> {
        self.dispatch_unit(ApiRequest::delete(endpoints::borrow_request(id)))
            .await
    }
}
