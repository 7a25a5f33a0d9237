//! Base HTTP client shared by the per-service gateway clients.

use gateway_types::TransportError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Connection settings for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL, e.g. `http://localhost:8003`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(100),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Thin wrapper over `reqwest::Client` bound to one base URL.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, TransportError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Connection {
                endpoint: config.base_url.clone(),
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a GET request, with optional query parameters.
    pub async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<Response, TransportError> {
        let mut request = self.http_client.get(self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        tracing::debug!("GET {}", path);
        request
            .send()
            .await
            .map_err(|e| connection_error(&format!("GET {path}"), e))
    }

    /// Send a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, TransportError> {
        tracing::debug!("POST {}", path);
        self.http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| connection_error(&format!("POST {path}"), e))
    }
}

fn connection_error(endpoint: &str, e: reqwest::Error) -> TransportError {
    TransportError::Connection {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    }
}

/// Check the status of `response` and decode its JSON body.
pub async fn parse_response<T: DeserializeOwned>(
    endpoint: &str,
    response: Response,
) -> Result<T, TransportError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TransportError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| TransportError::Decode {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
}
