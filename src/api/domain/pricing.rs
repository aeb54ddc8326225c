use crate::client::Dispatcher;
use crate::Result;
use serde_json::Value;

/// Registration, renewal and transfer prices.
#[derive(Debug)]
pub struct Pricing {
    dispatcher: Dispatcher,
}

impl Pricing {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Result<Value> {
        self.dispatcher.get("v1/domains/prices", &[]).await
    }

    pub async fn tlds(&self) -> Result<Value> {
        self.dispatcher.get("v1/domains/prices/tlds", &[]).await
    }

    /// Prices for one TLD, given without the dot (`"com"`, `"de"`).
    pub async fn by_tld(&self, tld: &str) -> Result<Value> {
        self.dispatcher
            .get(&format!("v1/domains/prices/{}", tld), &[])
            .await
    }
}
