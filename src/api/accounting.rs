//! Billing, invoices, credit status and usage.

use crate::client::Dispatcher;
use crate::Result;
use serde_json::Value;

const BASE_PATH: &str = "v1/accounting";

#[derive(Debug)]
pub struct Accounting {
    dispatcher: Dispatcher,
}

impl Accounting {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Account holder details of the API key's owner.
    pub async fn user_data(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/user-data", BASE_PATH), &[])
            .await
    }

    pub async fn credit_status(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/credit-status", BASE_PATH), &[])
            .await
    }

    /// Usage summary for the current billing period.
    pub async fn usage(&self) -> Result<Value> {
        self.dispatcher.get(&format!("{}/usage", BASE_PATH), &[]).await
    }

    /// Individual usage records.
    ///
    /// Supported filters: `start` and `end` (`YYYY-MM-DD`), `product_type`,
    /// `limit`, `offset`.
    pub async fn usage_details(&self, filters: &[(&str, &str)]) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/usage/details", BASE_PATH), filters)
            .await
    }

    pub async fn invoices(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/invoices", BASE_PATH), &[])
            .await
    }

    pub async fn invoice(&self, id: u64) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/invoices/{}", BASE_PATH, id), &[])
            .await
    }
}
