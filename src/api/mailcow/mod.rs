//! Hosted mail (mailcow): nodes, mail domains, and the mailbox, alias and
//! domain admin sub-facades.

mod alias;
mod domain_admin;
mod mailbox;

pub use alias::Alias;
pub use domain_admin::DomainAdmin;
pub use mailbox::Mailbox;

use crate::api::{empty_body, with_optional_id, Fields};
use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};
use std::fmt::Display;
use std::sync::OnceLock;

pub(crate) const BASE_PATH: &str = "v1/products/mailcow";

/// Mail domains and the nodes they run on.
///
/// Mail domains can be addressed by name or numeric ID wherever an `id`
/// parameter is taken.
#[derive(Debug)]
pub struct Mailcow {
    dispatcher: Dispatcher,
    mailbox: OnceLock<Mailbox>,
    alias: OnceLock<Alias>,
    domain_admin: OnceLock<DomainAdmin>,
}

impl Mailcow {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            mailbox: OnceLock::new(),
            alias: OnceLock::new(),
            domain_admin: OnceLock::new(),
        }
    }

    async fn get_in_datacenter(&self, path: String, datacenter: Option<&str>) -> Result<Value> {
        match datacenter {
            Some(datacenter) => {
                self.dispatcher
                    .get(&path, &[("datacenter", datacenter)])
                    .await
            }
            None => self.dispatcher.get(&path, &[]).await,
        }
    }

    /// Mail nodes, optionally limited to one datacenter slug.
    pub async fn nodes(&self, datacenter: Option<&str>) -> Result<Value> {
        self.get_in_datacenter(format!("{}/nodes", BASE_PATH), datacenter)
            .await
    }

    pub async fn load_balancer_stats(&self, datacenter: Option<&str>) -> Result<Value> {
        self.get_in_datacenter(format!("{}/load-balancer/stats", BASE_PATH), datacenter)
            .await
    }

    /// Quotes a mail domain on `node_or_datacenter` (ID or slug).
    pub async fn calculate_price(
        &self,
        node_or_datacenter: &str,
        mailboxes: u32,
        aliases: u32,
        quota_mb: u64,
    ) -> Result<Value> {
        self.dispatcher
            .post(
                &format!("{}/{}/calculate", BASE_PATH, node_or_datacenter),
                &json!({
                    "mailboxes": mailboxes,
                    "aliases": aliases,
                    "quota_mb": quota_mb,
                }),
            )
            .await
    }

    /// All mail domains, or only the one matching `id`.
    pub async fn list(&self, id: Option<impl Display>) -> Result<Value> {
        let path = with_optional_id(format!("{}/domains", BASE_PATH), id);
        self.dispatcher.get(&path, &[]).await
    }

    pub async fn get(&self, id: impl Display) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/domains/{}", BASE_PATH, id), &[])
            .await
    }

    /// Creates a mail domain on `node_or_datacenter` (ID or slug).
    pub async fn create(&self, node_or_datacenter: &str, config: &Fields) -> Result<Value> {
        self.dispatcher
            .post(
                &format!("{}/{}/create", BASE_PATH, node_or_datacenter),
                config,
            )
            .await
    }

    pub async fn update(&self, id: impl Display, config: &Fields) -> Result<Value> {
        self.dispatcher
            .put(&format!("{}/domains/{}", BASE_PATH, id), config)
            .await
    }

    pub async fn delete(&self, id: impl Display) -> Result<Value> {
        self.dispatcher
            .delete(&format!("{}/domains/{}", BASE_PATH, id), &empty_body())
            .await
    }

    pub fn mailbox(&self) -> &Mailbox {
        self.mailbox
            .get_or_init(|| Mailbox::new(self.dispatcher.clone()))
    }

    pub fn alias(&self) -> &Alias {
        self.alias.get_or_init(|| Alias::new(self.dispatcher.clone()))
    }

    pub fn domain_admin(&self) -> &DomainAdmin {
        self.domain_admin
            .get_or_init(|| DomainAdmin::new(self.dispatcher.clone()))
    }
}
