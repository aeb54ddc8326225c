use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};

/// Nameserver delegation of a domain.
#[derive(Debug)]
pub struct Nameserver {
    dispatcher: Dispatcher,
}

impl Nameserver {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn get(&self, domain: &str) -> Result<Value> {
        self.dispatcher
            .get(&format!("v1/domains/{}/nameservers", domain), &[])
            .await
    }

    pub async fn update(&self, domain: &str, nameservers: &[&str]) -> Result<Value> {
        self.dispatcher
            .put(
                &format!("v1/domains/{}/nameservers", domain),
                &json!({ "nameservers": nameservers }),
            )
            .await
    }
}
