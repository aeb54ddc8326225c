use super::BASE_PATH;
use crate::api::{empty_body, with_optional_id, Fields};
use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};

/// Mailboxes of a mail domain.
///
/// `config` accepts `password` (at least 12 characters), `name`, `quota_mb`
/// and `active`.
#[derive(Debug)]
pub struct Mailbox {
    dispatcher: Dispatcher,
}

impl Mailbox {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self, domain: &str, mailbox_id: Option<u64>) -> Result<Value> {
        let path = with_optional_id(format!("{}/{}/mailboxes", BASE_PATH, domain), mailbox_id);
        self.dispatcher.get(&path, &[]).await
    }

    pub async fn get(&self, domain: &str, mailbox_id: u64) -> Result<Value> {
        self.dispatcher
            .get(
                &format!("{}/{}/mailboxes/{}", BASE_PATH, domain, mailbox_id),
                &[],
            )
            .await
    }

    /// `address` is a local part or a full address; it overrides any
    /// `address` key in `config`.
    pub async fn create(&self, domain: &str, address: &str, config: &Fields) -> Result<Value> {
        let mut body = config.clone();
        body.insert("address".to_string(), json!(address));
        self.dispatcher
            .post(&format!("{}/{}/mailboxes", BASE_PATH, domain), &body)
            .await
    }

    pub async fn update(&self, domain: &str, address: &str, config: &Fields) -> Result<Value> {
        let mut body = config.clone();
        body.insert("address".to_string(), json!(address));
        self.dispatcher
            .put(&format!("{}/{}/mailboxes", BASE_PATH, domain), &body)
            .await
    }

    pub async fn delete(&self, domain: &str, local_part: &str) -> Result<Value> {
        self.dispatcher
            .delete(
                &format!("{}/{}/mailboxes/{}", BASE_PATH, domain, local_part),
                &empty_body(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::Fields;
    use crate::client::tests::{client_with, RecordingTransport};
    use http::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_sets_address() {
        let transport = RecordingTransport::responding(201, "{}");
        let client = client_with(transport.clone());

        let mut config = Fields::new();
        config.insert("quota_mb".to_string(), json!(1024));
        config.insert("address".to_string(), json!("ignored"));

        client
            .mailcow()
            .mailbox()
            .create("example.com", "info", &config)
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/api/v1/products/mailcow/example.com/mailboxes");
        assert_eq!(request.body.unwrap(), json!({"quota_mb": 1024, "address": "info"}));
    }

    #[tokio::test]
    async fn test_delete_by_local_part() {
        let transport = RecordingTransport::responding(200, "{}");
        let client = client_with(transport.clone());

        client.mailcow().mailbox().delete("example.com", "info").await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(
            request.url.path(),
            "/api/v1/products/mailcow/example.com/mailboxes/info"
        );
    }
}
