//! Category endpoints.

use bibliotek_catalog::{Category, CategoryPayload};
use bibliotek_core::{CategoryId, Page, PageQuery};

use crate::client::{ApiClient, ApiRequest};
use crate::endpoints;
use crate::error::ClientError;

impl ApiClient {
    /// List categories, one page at a time, optionally filtered by name.
    pub async fn list_categories(
        &self,
        page: PageQuery,
        name: Option<&str>,
    ) -> Result<Page<Category>, ClientError> {
        let mut params = page.to_params();
        if let Some(name) = name {
            params.push(("name", name.to_string()));
        }
        self.dispatch(ApiRequest::get(endpoints::CATEGORIES).query(params))
            .await
    }

    /// Every category at once, for populating selection lists.
    pub async fn list_all_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.dispatch(ApiRequest::get(endpoints::CATEGORIES_NO_PAGINATE))
            .await
    }

    pub async fn get_category(&self, id: CategoryId) -> Result<Category, ClientError> {
        self.dispatch(ApiRequest::get(endpoints::category(id)))
            .await
    }

    pub async fn create_category(
        &self,
        payload: &CategoryPayload,
    ) -> Result<Category, ClientError> {
        payload.validate()?;
        self.dispatch(ApiRequest::post(endpoints::CATEGORIES).json(payload)?)
            .await
    }

    pub async fn update_category(
        &self,
        id: CategoryId,
        payload: &CategoryPayload,
    ) -> Result<Category, ClientError> {
        payload.validate()?;
        self.dispatch(ApiRequest::put(endpoints::category(id)).json(payload)?)
            .await
    }

    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ClientError> {
        self.dispatch_unit(ApiRequest::delete(endpoints::category(id)))
            .await
    }
}
