//! HTTP Transport
//!
//! The seam between the caching client and the network.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::models::ErrorBody;

/// Issues the underlying read and write requests.
///
/// Any failure is reported as an [`ApiError`]; the client records its
/// message and hands the error back to the caller unchanged.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value>;

    async fn patch(&self, url: &str, body: &Value) -> Result<Value>;
}

// == HTTP Transport ==
/// reqwest-backed transport resolving request paths against a base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        // Request paths nest under the base path, so it must end in a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `url` against the base URL. Absolute URLs pass through;
    /// anything else, leading slash or not, is appended to the base path.
    pub fn resolve(&self, url: &str) -> Result<Url> {
        if let Ok(absolute) = Url::parse(url) {
            return Ok(absolute);
        }
        self.base_url
            .join(url.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", url, e)))
    }

    /// Turns a response into its JSON body, or a transport error for
    /// non-2xx statuses. An empty body reads as `null`.
    async fn read_body(response: Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|b| b.error)
                .filter(|e| !e.is_empty());
            let message = match detail {
                Some(detail) => format!(
                    "Request failed with status code {}: {}",
                    status.as_u16(),
                    detail
                ),
                None => format!("Request failed with status code {}", status.as_u16()),
            };
            return Err(ApiError::Transport(message));
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Transport(e.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value> {
        let target = self.resolve(url)?;
        debug!(url = %target, "GET");
        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_body(response).await
    }

    async fn patch(&self, url: &str, body: &Value) -> Result<Value> {
        let target = self.resolve(url)?;
        debug!(url = %target, "PATCH");
        let response = self
            .client
            .patch(target)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_body(response).await
    }
}
