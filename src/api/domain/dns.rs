use crate::api::{empty_body, Fields};
use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};
use std::fmt::Display;

/// DNS records and zones of a domain.
///
/// Record bodies use the keys `type` (`A`, `AAAA`, `CNAME`, `MX`, `TXT`, ...),
/// `name`, `content`, and optionally `ttl` and `priority`.
#[derive(Debug)]
pub struct Dns {
    dispatcher: Dispatcher,
}

impl Dns {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn get(&self, domain: &str) -> Result<Value> {
        self.dispatcher
            .get(&format!("v1/domains/{}/dns", domain), &[])
            .await
    }

    pub async fn create(&self, domain: &str, record: &Value) -> Result<Value> {
        self.dispatcher
            .post(&format!("v1/domains/{}/dns", domain), record)
            .await
    }

    pub async fn update(&self, domain: &str, record_id: impl Display, data: &Value) -> Result<Value> {
        self.dispatcher
            .put(&format!("v1/domains/{}/dns/{}", domain, record_id), data)
            .await
    }

    /// Replaces the record set of `domain` in one call.
    pub async fn bulk_update(&self, domain: &str, records: &[Value]) -> Result<Value> {
        self.dispatcher
            .put(
                &format!("v1/domains/{}/dns", domain),
                &json!({ "records": records }),
            )
            .await
    }

    pub async fn delete(&self, domain: &str, record_id: impl Display) -> Result<Value> {
        self.dispatcher
            .delete(
                &format!("v1/domains/{}/dns/{}", domain, record_id),
                &empty_body(),
            )
            .await
    }

    pub async fn zones(&self, domain: &str) -> Result<Value> {
        self.dispatcher
            .get(&format!("v1/domains/{}/dns/zones", domain), &[])
            .await
    }

    pub async fn create_zone(&self, domain: &str, zone: &Fields) -> Result<Value> {
        self.dispatcher
            .post(&format!("v1/domains/{}/dns/zones", domain), zone)
            .await
    }

    pub async fn update_zone(&self, domain: &str, zone_id: impl Display, data: &Fields) -> Result<Value> {
        self.dispatcher
            .put(&format!("v1/domains/{}/dns/zones/{}", domain, zone_id), data)
            .await
    }

    pub async fn delete_zone(&self, domain: &str, zone_id: impl Display) -> Result<Value> {
        self.dispatcher
            .delete(
                &format!("v1/domains/{}/dns/zones/{}", domain, zone_id),
                &empty_body(),
            )
            .await
    }
}
