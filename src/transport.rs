//! The HTTP engine behind a [`Client`](crate::Client).
//!
//! The client describes each call as an [`HttpRequest`] and hands it to a
//! [`Transport`]. The default transport is [`ReqwestTransport`]; tests and
//! embedders can inject their own through
//! [`ClientBuilder::transport`](crate::ClientBuilder::transport).

use async_trait::async_trait;
use http::{HeaderMap, Method, StatusCode};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Boxed error returned by transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A fully resolved request, ready to go on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL, query string included.
    pub url: Url,
    pub headers: HeaderMap,
    /// JSON body for write verbs; `None` for GET.
    pub body: Option<Value>,
}

/// A response as received, before any decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// The body as text. Invalid UTF-8 sequences become `U+FFFD`.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations must not turn 4xx/5xx statuses into errors: the client
/// classifies every status itself. `Err` is reserved for failures where no
/// response was received (connection refused, timeout, TLS).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        (**self).send(request).await
    }
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with the given timeout and `User-Agent`.
    ///
    /// TLS certificates are always verified.
    pub fn new(timeout: Duration, user_agent: &str) -> crate::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .danger_accept_invalid_certs(false)
            .build()
            .map_err(|e| {
                crate::Error::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { http_client })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn from_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self
            .http_client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
