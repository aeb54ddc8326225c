//! Domain registration, transfer and lifecycle, plus DNS, nameserver, handle
//! and pricing sub-facades.

mod dns;
mod handle;
mod nameserver;
mod pricing;

pub use dns::Dns;
pub use handle::Handle;
pub use nameserver::Nameserver;
pub use pricing::Pricing;

use crate::api::{empty_body, Fields};
use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};
use std::sync::OnceLock;

const BASE_PATH: &str = "v1/domains";

/// Domain registration and management.
///
/// Handle configurations passed to [`register`](Domain::register),
/// [`transfer`](Domain::transfer) and
/// [`update_handles`](Domain::update_handles) use the keys `owner_handle`,
/// `admin_handle`, `tech_handle` and optionally `billing_handle`.
#[derive(Debug)]
pub struct Domain {
    dispatcher: Dispatcher,
    dns: OnceLock<Dns>,
    nameserver: OnceLock<Nameserver>,
    handle: OnceLock<Handle>,
    pricing: OnceLock<Pricing>,
}

impl Domain {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            dns: OnceLock::new(),
            nameserver: OnceLock::new(),
            handle: OnceLock::new(),
            pricing: OnceLock::new(),
        }
    }

    /// All domains of the account.
    pub async fn list(&self) -> Result<Value> {
        self.dispatcher.get(BASE_PATH, &[]).await
    }

    pub async fn get(&self, domain: &str) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/{}", BASE_PATH, domain), &[])
            .await
    }

    pub async fn check_availability(&self, domain: &str) -> Result<Value> {
        self.dispatcher
            .post(&format!("{}/check", BASE_PATH), &json!({ "domain": domain }))
            .await
    }

    /// Registers `domain` for `period` years.
    ///
    /// Keys in `handles` are merged into the body last and win over the
    /// generated fields.
    pub async fn register(
        &self,
        domain: &str,
        handles: &Fields,
        nameservers: &[&str],
        period: u32,
    ) -> Result<Value> {
        let mut body = Fields::new();
        body.insert("domain".to_string(), json!(domain));
        body.insert("period".to_string(), json!(period));
        body.insert("nameservers".to_string(), json!(nameservers));
        body.extend(handles.clone());

        self.dispatcher
            .post(&format!("{}/register", BASE_PATH), &body)
            .await
    }

    /// Starts an inbound transfer using the current registrar's `authcode`.
    pub async fn transfer(
        &self,
        domain: &str,
        authcode: &str,
        handles: &Fields,
        nameservers: &[&str],
    ) -> Result<Value> {
        let mut body = Fields::new();
        body.insert("domain".to_string(), json!(domain));
        body.insert("authcode".to_string(), json!(authcode));
        body.insert("nameservers".to_string(), json!(nameservers));
        body.extend(handles.clone());

        self.dispatcher
            .post(&format!("{}/transfer", BASE_PATH), &body)
            .await
    }

    /// Pulls the current state of `domain` from the registrar.
    pub async fn sync(&self, domain: &str) -> Result<Value> {
        self.dispatcher
            .post(&format!("{}/{}/sync", BASE_PATH, domain), &empty_body())
            .await
    }

    pub async fn authcode(&self, domain: &str) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/{}/authcode", BASE_PATH, domain), &[])
            .await
    }

    pub async fn update_handles(&self, domain: &str, handles: &Fields) -> Result<Value> {
        self.dispatcher
            .put(&format!("{}/{}/handles", BASE_PATH, domain), handles)
            .await
    }

    pub async fn request_deletion(&self, domain: &str) -> Result<Value> {
        self.dispatcher
            .post(&format!("{}/{}/delete", BASE_PATH, domain), &empty_body())
            .await
    }

    pub async fn cancel_deletion(&self, domain: &str) -> Result<Value> {
        self.dispatcher
            .post(&format!("{}/{}/undelete", BASE_PATH, domain), &empty_body())
            .await
    }

    /// DNS records and zones.
    pub fn dns(&self) -> &Dns {
        self.dns.get_or_init(|| Dns::new(self.dispatcher.clone()))
    }

    pub fn nameserver(&self) -> &Nameserver {
        self.nameserver
            .get_or_init(|| Nameserver::new(self.dispatcher.clone()))
    }

    /// Contact handles.
    pub fn handle(&self) -> &Handle {
        self.handle.get_or_init(|| Handle::new(self.dispatcher.clone()))
    }

    pub fn pricing(&self) -> &Pricing {
        self.pricing
            .get_or_init(|| Pricing::new(self.dispatcher.clone()))
    }
}
