//! Product facades.
//!
//! Each facade turns its arguments into a path under the base URL and makes
//! exactly one call through the client's dispatcher. Facades hold no state of
//! their own beyond lazily built sub-facades, so the instances handed out by
//! [`Client`](crate::Client) can be shared freely.

mod accounting;
mod domain;
mod mailcow;
mod root_server;
mod vpn;

pub use accounting::Accounting;
pub use domain::{Dns, Domain, Handle, Nameserver, Pricing};
pub use mailcow::{Alias, DomainAdmin, Mailbox, Mailcow};
pub use root_server::{Cluster, Location, Power, RootServer};
pub use vpn::{Account, Config, Vpn};

use serde_json::{Map, Value};

/// A JSON object used as a request body or as extra fields merged into one.
pub type Fields = Map<String, Value>;

/// `{}`, sent by actions that take no parameters.
pub(crate) fn empty_body() -> Value {
    Value::Object(Map::new())
}

/// Appends `/{id}` to `path` when an id is given.
pub(crate) fn with_optional_id(path: String, id: Option<impl std::fmt::Display>) -> String {
    match id {
        Some(id) => format!("{}/{}", path, id),
        None => path,
    }
}
