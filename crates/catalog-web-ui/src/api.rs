//! HTTP client for the catalog backend

use async_trait::async_trait;
use catalog_core::{Endpoints, Error, Product, ProductApi, ProductDraft, ProductId, Result};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// `ProductApi` over `fetch`, via gloo-net
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    endpoints: Endpoints,
}

impl HttpProductApi {
    pub fn new(api_base: &str) -> Self {
        Self {
            endpoints: Endpoints::new(api_base),
        }
    }
}

/// Turn a non-2xx response into an `Error`, reading the body for `details`.
async fn ensure_success(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    debug!("HTTP {} from {}: {}", status, response.url(), body);
    Err(Error::from_response(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| Error::decode(e.to_string()))
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> Result<Vec<Product>> {
        let response = Request::get(&self.endpoints.collection())
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        read_json(ensure_success(response).await?).await
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Product> {
        let response = Request::post(&self.endpoints.collection())
            .header("Content-Type", "application/json")
            .json(draft)
            .map_err(|e| Error::encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        read_json(ensure_success(response).await?).await
    }

    async fn update(&self, id: &ProductId, draft: &ProductDraft) -> Result<()> {
        let response = Request::put(&self.endpoints.item(id))
            .header("Content-Type", "application/json")
            .json(draft)
            .map_err(|e| Error::encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        ensure_success(response).await.map(|_| ())
    }

    async fn delete(&self, id: &ProductId) -> Result<()> {
        let response = Request::delete(&self.endpoints.item(id))
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        ensure_success(response).await.map(|_| ())
    }
}
