//! The client: request dispatch, response classification and product facades.
//!
//! [`Client`] is the entry point. Use [`Client::new`] for the production
//! endpoint or [`ClientBuilder`] to change the base URL, timeout, headers or
//! transport.

use crate::{
    api::{Accounting, Domain, Mailcow, RootServer, Vpn},
    credentials::{Credentials, DEFAULT_BASE_URL},
    error::ApiError,
    metadata::RequestMetadata,
    transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport},
    Error, Response, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};
use url::Url;

/// Default request timeout of the built-in transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default `User-Agent` of the built-in transport.
pub const DEFAULT_USER_AGENT: &str = "ExbilCloudApiClient/1.0";

/// Issues requests and classifies responses.
///
/// Cloning is cheap; every facade holds a clone that points at the same
/// credentials and transport.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

struct DispatcherInner {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
    default_headers: HeaderMap,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.inner.credentials.base_url())
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub(crate) fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Sends one request and classifies the answer. Never retries.
    pub(crate) async fn call(&self, metadata: RequestMetadata) -> Result<Response> {
        let url = match self.resolve_url(&metadata) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    base_url = %self.inner.credentials.base_url(),
                    path = %metadata.path,
                    "Could not resolve request URL"
                );
                return Err(ApiError::transport(Box::new(e)).into());
            }
        };

        let mut headers = self.inner.default_headers.clone();
        headers.extend(metadata.headers);

        tracing::debug!(
            method = %metadata.method,
            url = %url,
            "Executing HTTP request"
        );

        let request = HttpRequest {
            method: metadata.method.clone(),
            url,
            headers,
            body: metadata.body,
        };

        let start_time = Instant::now();
        let response = match self.inner.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    method = %metadata.method,
                    path = %metadata.path,
                    "Request failed"
                );
                return Err(ApiError::transport(e).into());
            }
        };

        handle_response(response, start_time.elapsed())
    }

    fn resolve_url(&self, metadata: &RequestMetadata) -> std::result::Result<Url, url::ParseError> {
        let base = self.inner.credentials.base_url();
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{}/", base))?
        };

        let mut url = base.join(metadata.relative_path())?;
        if !metadata.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(&metadata.query_params);
        }
        Ok(url)
    }

    pub(crate) async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let metadata = RequestMetadata::new(Method::GET, path).with_query_params(query.iter().copied());
        Ok(self.call(metadata).await?.data)
    }

    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let metadata = RequestMetadata::new(Method::POST, path).with_json(body)?;
        Ok(self.call(metadata).await?.data)
    }

    pub(crate) async fn put<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let metadata = RequestMetadata::new(Method::PUT, path).with_json(body)?;
        Ok(self.call(metadata).await?.data)
    }

    pub(crate) async fn delete<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let metadata = RequestMetadata::new(Method::DELETE, path).with_json(body)?;
        Ok(self.call(metadata).await?.data)
    }
}

/// Decodes the body and maps the status onto success or an [`ApiError`].
///
/// An empty body decodes to `null`. A body that is not JSON fails with
/// [`Error::InvalidJson`] whatever the status.
fn handle_response(response: HttpResponse, latency: Duration) -> Result<Response> {
    let status = response.status;
    let raw_body = String::from_utf8_lossy(&response.body).into_owned();

    tracing::info!(
        status = status.as_u16(),
        latency_ms = latency.as_millis(),
        "Received HTTP response"
    );

    // `raw_body` is lossy and only feeds logs and error context
    let data = if response.body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice::<Value>(&response.body) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    status = status.as_u16(),
                    raw_response = %raw_body,
                    "Response body is not valid JSON"
                );
                return Err(Error::InvalidJson {
                    raw_response: raw_body,
                    serde_error: e.to_string(),
                    status,
                });
            }
        }
    };

    if status.is_success() {
        return Ok(Response::new(data, raw_body, status, response.headers, latency));
    }

    if status.is_client_error() {
        tracing::error!(
            status = status.as_u16(),
            response = %raw_body,
            "Client error (4xx)"
        );
    } else {
        tracing::warn!(
            status = status.as_u16(),
            response = %raw_body,
            "Server error"
        );
    }

    Err(ApiError::from_response(response, data).into())
}

/// Async client for the reselling portal API.
///
/// The client is cheap to clone and safe to share between tasks. Clones share
/// the transport and the lazily built product facades.
///
/// # Examples
///
/// ```no_run
/// use exbil_cloud::Client;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), exbil_cloud::Error> {
/// let client = Client::new("my-api-key")?;
///
/// let records = client.domain().dns().get("example.com").await?;
/// println!("Records: {}", records);
///
/// client
///     .domain()
///     .dns()
///     .create("example.com", &json!({"type": "A", "name": "www", "content": "192.0.2.1"}))
///     .await?;
///
/// client.root_server().power().reboot(42).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    dispatcher: Dispatcher,
    facades: Arc<Facades>,
}

#[derive(Default)]
struct Facades {
    accounting: OnceLock<Accounting>,
    domain: OnceLock<Domain>,
    root_server: OnceLock<RootServer>,
    vpn: OnceLock<Vpn>,
    mailcow: OnceLock<Mailcow>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("credentials", self.dispatcher.credentials())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client for the production endpoint with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigurationError`] if the key is empty or cannot be
    /// used as a header value.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use exbil_cloud::Client;
    /// use std::time::Duration;
    ///
    /// # fn example() -> Result<(), exbil_cloud::Error> {
    /// let client = Client::builder()
    ///     .api_key("my-api-key")
    ///     .base_url("https://staging.reselling-portal.de/api/")
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn credentials(&self) -> &Credentials {
        self.dispatcher.credentials()
    }

    /// Sends a request described by `metadata` and returns the full response.
    ///
    /// Non-2xx statuses come back as [`Error::Api`].
    pub async fn call(&self, metadata: RequestMetadata) -> Result<Response> {
        self.dispatcher.call(metadata).await
    }

    /// Makes a GET request. Query pairs are URL-encoded; an empty slice adds no query string.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: exbil_cloud::Client) -> Result<(), exbil_cloud::Error> {
    /// let logs = client
    ///     .get("v1/products/rootserver/42/logs", &[("limit", "10")])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        self.dispatcher.get(path, query).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.dispatcher.post(path, body).await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.dispatcher.put(path, body).await
    }

    /// Makes a DELETE request with a JSON body.
    pub async fn delete<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.dispatcher.delete(path, body).await
    }

    /// Billing, invoices, credit status and usage.
    pub fn accounting(&self) -> &Accounting {
        self.facades
            .accounting
            .get_or_init(|| Accounting::new(self.dispatcher.clone()))
    }

    /// Registration, transfer, DNS, nameservers and handles.
    pub fn domain(&self) -> &Domain {
        self.facades
            .domain
            .get_or_init(|| Domain::new(self.dispatcher.clone()))
    }

    /// Virtual servers, power control and statistics.
    pub fn root_server(&self) -> &RootServer {
        self.facades
            .root_server
            .get_or_init(|| RootServer::new(self.dispatcher.clone()))
    }

    /// VPN accounts, configurations and servers.
    pub fn vpn(&self) -> &Vpn {
        self.facades
            .vpn
            .get_or_init(|| Vpn::new(self.dispatcher.clone()))
    }

    /// Mail domains, mailboxes, aliases and domain admins.
    pub fn mailcow(&self) -> &Mailcow {
        self.facades
            .mailcow
            .get_or_init(|| Mailcow::new(self.dispatcher.clone()))
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use exbil_cloud::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), exbil_cloud::Error> {
/// let client = ClientBuilder::new()
///     .api_key("my-api-key")
///     .timeout(Duration::from_secs(60))
///     .user_agent("my-reseller-panel/2.1")
///     .default_header("X-Reseller-Id", "1234")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    default_headers: HeaderMap,
    timeout: Duration,
    user_agent: String,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_headers: HeaderMap::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            transport: None,
        }
    }

    /// Sets the API key sent as `Authorization: Bearer <key>`.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the base URL all request paths are resolved against.
    ///
    /// The URL is not parsed here; a malformed value fails the first request.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::ConfigurationError(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the request timeout of the built-in transport.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` of the built-in transport.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Replaces the built-in reqwest transport.
    ///
    /// The client still adds the `Accept`, `Content-Type` and `Authorization`
    /// headers to every request; timeout and TLS are up to the transport.
    pub fn transport<T>(mut self, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or empty, or if the HTTP
    /// client cannot be built.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::ConfigurationError("API key is required".to_string()))?;
        let credentials = Credentials::new(api_key, self.base_url)?;

        let mut authorization = HeaderValue::try_from(format!("Bearer {}", credentials.api_key()))
            .map_err(|e| Error::ConfigurationError(format!("Invalid API key: {}", e)))?;
        authorization.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(header::AUTHORIZATION, authorization);
        default_headers.extend(self.default_headers);

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.timeout, &self.user_agent)?),
        };

        Ok(Client {
            dispatcher: Dispatcher {
                inner: Arc::new(DispatcherInner {
                    credentials,
                    transport,
                    default_headers,
                }),
            },
            facades: Arc::new(Facades::default()),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
