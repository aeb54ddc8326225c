use super::BASE_PATH;
use crate::api::{empty_body, with_optional_id, Fields};
use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};

/// Forwarding aliases of a mail domain.
#[derive(Debug)]
pub struct Alias {
    dispatcher: Dispatcher,
}

impl Alias {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self, domain: &str, alias_id: Option<u64>) -> Result<Value> {
        let path = with_optional_id(format!("{}/{}/aliases", BASE_PATH, domain), alias_id);
        self.dispatcher.get(&path, &[]).await
    }

    pub async fn get(&self, domain: &str, alias_id: u64) -> Result<Value> {
        self.dispatcher
            .get(
                &format!("{}/{}/aliases/{}", BASE_PATH, domain, alias_id),
                &[],
            )
            .await
    }

    /// Forwards `address` (local part or full address) to every address in `goto`.
    pub async fn create(&self, domain: &str, address: &str, goto: &[&str]) -> Result<Value> {
        self.dispatcher
            .post(
                &format!("{}/{}/aliases", BASE_PATH, domain),
                &json!({ "address": address, "goto": goto }),
            )
            .await
    }

    /// `active` is left untouched on the server when `None`.
    pub async fn update(
        &self,
        domain: &str,
        address: &str,
        goto: &[&str],
        active: Option<bool>,
    ) -> Result<Value> {
        let mut body = Fields::new();
        body.insert("address".to_string(), json!(address));
        body.insert("goto".to_string(), json!(goto));
        if let Some(active) = active {
            body.insert("active".to_string(), json!(active));
        }
        self.dispatcher
            .put(&format!("{}/{}/aliases", BASE_PATH, domain), &body)
            .await
    }

    pub async fn delete(&self, domain: &str, local_part: &str) -> Result<Value> {
        self.dispatcher
            .delete(
                &format!("{}/{}/aliases/{}", BASE_PATH, domain, local_part),
                &empty_body(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client_with, RecordingTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_update_only_sends_active_when_set() {
        let transport = RecordingTransport::responding(200, "{}");
        let client = client_with(transport.clone());
        let alias = client.mailcow().alias();

        alias
            .update("example.com", "sales", &["a@example.net"], None)
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().body.unwrap(),
            json!({"address": "sales", "goto": ["a@example.net"]})
        );

        alias
            .update("example.com", "sales", &["a@example.net"], Some(false))
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().body.unwrap(),
            json!({"address": "sales", "goto": ["a@example.net"], "active": false})
        );
    }

    #[tokio::test]
    async fn test_list_with_id() {
        let transport = RecordingTransport::responding(200, "[]");
        let client = client_with(transport.clone());

        client.mailcow().alias().list("example.com", Some(3)).await.unwrap();
        assert_eq!(
            transport.last_request().url.path(),
            "/api/v1/products/mailcow/example.com/aliases/3"
        );
    }
}
