//! # exbil-cloud - client for the Exbil reselling portal API
//!
//! Async access to the reselling portal's domains, root servers, mail hosting
//! (mailcow), VPN and accounting endpoints, built on top of `reqwest`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use exbil_cloud::Client;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), exbil_cloud::Error> {
//!     let client = Client::new("my-api-key")?;
//!
//!     // Product facades are built on first use and cached on the client
//!     let credit = client.accounting().credit_status().await?;
//!     println!("Credit: {}", credit);
//!
//!     let records = client.domain().dns().get("example.com").await?;
//!     println!("DNS records: {}", records);
//!
//!     client.root_server().power().reboot(42).await?;
//!
//!     // Endpoints without a facade method go through the raw verbs
//!     let created = client
//!         .post("v1/domains/check", &json!({"domain": "example.org"}))
//!         .await?;
//!     println!("Availability: {}", created);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **One round trip per call** - no hidden retries, caching or queuing
//! - **Typed failures** - every non-2xx status maps to one [`ErrorKind`], with
//!   the message, status, raw response and field-level validation errors kept
//! - **Lazy facades** - product and sub-product handles are created once per
//!   client and shared between clones
//! - **Pluggable transport** - swap the reqwest engine for anything that
//!   implements [`Transport`]
//! - **Structured logging** with `tracing`
//!
//! ## Error Handling
//!
//! ```no_run
//! use exbil_cloud::{Client, Error, ErrorKind};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new("my-api-key")?;
//! let handle = json!({"type": "person", "email": ""});
//! match client.post("v1/domains/handles", &handle).await {
//!     Ok(created) => println!("Created: {}", created),
//!     Err(Error::Api(e)) if e.kind() == ErrorKind::Validation => {
//!         for (field, messages) in e.validation_errors() {
//!             eprintln!("{}: {}", field, messages.join(", "));
//!         }
//!     }
//!     Err(Error::Api(e)) if e.status().is_none() => {
//!         eprintln!("Request never reached the API: {}", e);
//!     }
//!     Err(Error::InvalidJson { raw_response, .. }) => {
//!         eprintln!("Server sent something that is not JSON: {}", raw_response);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod credentials;
mod error;
pub mod metadata;
mod response;
pub mod transport;

pub use client::{Client, ClientBuilder, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use credentials::{Credentials, DEFAULT_BASE_URL};
pub use error::{ApiError, Error, ErrorKind, Result, DEFAULT_ERROR_MESSAGE};
pub use response::Response;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
