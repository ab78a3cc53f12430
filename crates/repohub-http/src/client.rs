//! HTTP client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
};

/// Mockable HTTP client trait
///
/// Responses are returned whatever their status: callers that relay upstream
/// answers need the 4xx/5xx bodies too.
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    /// Execute a GET request
    async fn get(&self, url: &str) -> Result<Response> {
        self.request(Method::GET, url).await
    }

    /// Execute a request
    async fn request(&self, method: Method, url: &str) -> Result<Response>;
}

/// Production HTTP client
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let inner = builder
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .pool_idle_timeout(config.pool_idle_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn request(&self, method: Method, url: &str) -> Result<Response> {
        let url = url
            .parse::<url::Url>()
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        debug!("HTTP {}: {}", method, url);

        let response = self.inner.request(method, url).send().await?;
        Ok(response)
    }
}

/// Create a shared HTTP client (Arc-wrapped for cloning)
pub fn shared_client(config: HttpConfig) -> Result<Arc<dyn HttpClientTrait>> {
    Ok(Arc::new(HttpClient::new(config)?))
}

/// GET a JSON document, mapping 404 to `None`
pub async fn fetch_json<T>(client: &dyn HttpClientTrait, url: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let response = client.get(url).await?;
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    if !status.is_success() {
        return Err(HttpError::HttpStatus {
            status,
            message: response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string()),
        });
    }

    Ok(Some(response.json::<T>().await?))
}
