use crate::{PAGE_SIZE, Product, requests};
use reqwest::StatusCode;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    async fn get(&self, url: &str) -> ReqwestResult {
        self.inner_client.get(url).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Full URL of a product listing request.
    ///
    /// The category and search fragments are appended as-is, so an empty
    /// fragment leaves no trace in the URL.
    pub fn products_url(&self, query: &requests::ProductQuery) -> String {
        format!(
            "{}/items?page={}&limit={PAGE_SIZE}{}&sortBy={}&order={}{}",
            self.address.trim_end_matches('/'),
            query.current_page,
            query.category,
            query.sort_by,
            query.order,
            query.search,
        )
    }

    /// List one page of products, filtered and sorted by the backend.
    pub async fn list_products(
        &self,
        query: &requests::ProductQuery,
    ) -> Result<Vec<Product>, ClientError> {
        let response = self.get(&self.products_url(query)).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}
