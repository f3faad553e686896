use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::Serialize;

use crate::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

/// An API request described as plain data, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    /// JSON text.
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, TransportError> {
        Self::with_json(HttpMethod::Post, path.into(), body)
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, TransportError> {
        Self::with_json(HttpMethod::Put, path.into(), body)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    fn with_json<B: Serialize>(
        method: HttpMethod,
        path: String,
        body: &B,
    ) -> Result<Self, TransportError> {
        let body = serde_json::to_string(body).map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self {
            method,
            path,
            query: Vec::new(),
            body: Some(body),
        })
    }
}

/// Executes one HTTP round-trip and yields the raw response body.
///
/// Implementations must not interpret the status code; the body is returned
/// as-is so the backend's own envelope reaches the caller.
pub trait Transport {
    fn send(&self, url: String, request: HttpRequest)
        -> LocalBoxFuture<'_, Result<String, TransportError>>;
}

/// `fetch`-based transport for the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    async fn execute(url: String, request: HttpRequest) -> Result<String, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
        };
        let builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let response = if let Some(body) = request.body {
            builder
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?
        } else {
            builder
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?
        };

        response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

impl Transport for GlooTransport {
    fn send(
        &self,
        url: String,
        request: HttpRequest,
    ) -> LocalBoxFuture<'_, Result<String, TransportError>> {
        Self::execute(url, request).boxed_local()
    }
}
