//! Error types for reselling portal API calls.
//!
//! Failures come in two tiers. API errors ([`ApiError`]) are produced when the
//! server answers with a non-2xx status or the request never reaches the
//! server; each one carries an [`ErrorKind`] picked by [`ErrorKind::from_status`].
//! Local errors (undecodable bodies, bad configuration) are separate variants of
//! [`Error`] and are never reported as API errors.

use crate::transport::{BoxError, HttpResponse};
use http::StatusCode;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Message used when an error body carries no `message` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// The classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 401: the API key was missing, malformed or revoked.
    Authentication,
    /// 403: the key is valid but not allowed to touch the resource.
    Forbidden,
    /// 404: the resource does not exist.
    NotFound,
    /// 422: the request body failed validation; see [`ApiError::validation_errors`].
    Validation,
    /// Any other non-2xx status, and transport failures.
    Api,
}

impl ErrorKind {
    /// Maps a non-2xx status code to its error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use exbil_cloud::ErrorKind;
    /// use http::StatusCode;
    ///
    /// assert_eq!(ErrorKind::from_status(StatusCode::NOT_FOUND), ErrorKind::NotFound);
    /// assert_eq!(ErrorKind::from_status(StatusCode::BAD_GATEWAY), ErrorKind::Api);
    /// ```
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            401 => ErrorKind::Authentication,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            422 => ErrorKind::Validation,
            _ => ErrorKind::Api,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Authentication => "authentication",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not found",
            ErrorKind::Validation => "validation",
            ErrorKind::Api => "api",
        };
        f.write_str(name)
    }
}

/// An error reported by the API, or a request that never got an answer.
///
/// `status` and `response` are `None` for transport failures, in which case
/// `source` holds the underlying transport error.
#[derive(thiserror::Error, Debug)]
#[error("{kind} error: {message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    response: Option<HttpResponse>,
    payload: Map<String, Value>,
    #[source]
    source: Option<BoxError>,
}

impl ApiError {
    /// Classifies a decoded non-2xx response.
    ///
    /// `message` and `errors` are pulled from the body when present. Validation
    /// errors keep only `{"errors": ...}` as payload; every other kind keeps
    /// the whole decoded body.
    pub(crate) fn from_response(response: HttpResponse, data: Value) -> Self {
        let status = response.status;
        let kind = ErrorKind::from_status(status);

        let message = data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_string();

        let payload = match kind {
            ErrorKind::Validation => {
                let errors = match data.get("errors") {
                    Some(errors) if !errors.is_null() => errors.clone(),
                    _ => Value::Object(Map::new()),
                };
                let mut payload = Map::new();
                payload.insert("errors".to_string(), errors);
                payload
            }
            _ => match data {
                Value::Object(map) => map,
                Value::Null => Map::new(),
                other => {
                    let mut payload = Map::new();
                    payload.insert("body".to_string(), other);
                    payload
                }
            },
        };

        Self {
            kind,
            message,
            status: Some(status),
            response: Some(response),
            payload,
            source: None,
        }
    }

    /// Wraps a failure that happened before any response was received.
    pub(crate) fn transport(source: BoxError) -> Self {
        Self {
            kind: ErrorKind::Api,
            message: format!("HTTP request failed: {}", source),
            status: None,
            response: None,
            payload: Map::new(),
            source: Some(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status, or `None` when the request failed in transport.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// The raw response the error was built from.
    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Structured context: the decoded body, or `{"errors": ...}` for validation failures.
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Field-level validation messages, keyed by field name.
    ///
    /// Only populated for [`ErrorKind::Validation`]. Entries whose value is a
    /// single string instead of a list are returned as a one-element list.
    pub fn validation_errors(&self) -> BTreeMap<String, Vec<String>> {
        if self.kind != ErrorKind::Validation {
            return BTreeMap::new();
        }
        let Some(Value::Object(errors)) = self.payload.get("errors") else {
            return BTreeMap::new();
        };

        errors
            .iter()
            .map(|(field, messages)| {
                let messages = match messages {
                    Value::Array(items) => items
                        .iter()
                        .map(|m| match m {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect(),
                    Value::String(s) => vec![s.clone()],
                    other => vec![other.to_string()],
                };
                (field.clone(), messages)
            })
            .collect()
    }
}

/// The main error type for reselling portal API calls.
///
/// # Examples
///
/// ```no_run
/// use exbil_cloud::{Client, Error, ErrorKind};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::new("my-api-key")?;
///
/// match client.domain().get("example.com").await {
///     Ok(domain) => println!("Domain: {}", domain),
///     Err(Error::Api(e)) if e.kind() == ErrorKind::NotFound => {
///         eprintln!("No such domain: {}", e.message());
///     }
///     Err(Error::Api(e)) if e.kind() == ErrorKind::Validation => {
///         for (field, messages) in e.validation_errors() {
///             eprintln!("{}: {}", field, messages.join(", "));
///         }
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server rejected the request, or it could not be delivered.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body was not valid JSON.
    ///
    /// This is raised regardless of the status code and is never turned into
    /// an [`ApiError`].
    #[error("Invalid JSON response (status {status}): {serde_error}")]
    InvalidJson {
        /// The raw response body that failed to decode
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// A decoded success body did not match the requested type.
    #[error("Failed to deserialize response (status {status}): {serde_error}")]
    DeserializationFailed {
        /// The raw response body
        raw_response: String,
        /// The serde error message
        serde_error: String,
        /// The HTTP status code
        status: StatusCode,
    },

    /// Invalid configuration was provided.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Failed to serialize the request body.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),
}

impl Error {
    /// Returns the API error kind, or `None` for local errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Api(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Returns the HTTP status code if this error has one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(e) => e.status(),
            Error::InvalidJson { status, .. } => Some(*status),
            Error::DeserializationFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body if this error has one.
    ///
    /// Bodies that are not valid UTF-8 are decoded lossily.
    pub fn raw_response(&self) -> Option<Cow<'_, str>> {
        match self {
            Error::Api(e) => e.response().map(HttpResponse::text),
            Error::InvalidJson { raw_response, .. } => Some(Cow::Borrowed(raw_response)),
            Error::DeserializationFailed { raw_response, .. } => Some(Cow::Borrowed(raw_response)),
            _ => None,
        }
    }

    /// Returns the API error if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// A specialized `Result` type for reselling portal API calls.
pub type Result<T> = std::result::Result<T, Error>;
