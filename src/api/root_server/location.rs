use super::BASE_PATH;
use crate::client::Dispatcher;
use crate::Result;
use serde_json::Value;

/// Datacenters that host root servers.
#[derive(Debug)]
pub struct Location {
    dispatcher: Dispatcher,
}

impl Location {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/locations", BASE_PATH), &[])
            .await
    }

    /// Clusters in the datacenter identified by `datacenter_slug`.
    pub async fn clusters(&self, datacenter_slug: &str) -> Result<Value> {
        self.dispatcher
            .get(
                &format!("{}/locations/{}/clusters", BASE_PATH, datacenter_slug),
                &[],
            )
            .await
    }
}
