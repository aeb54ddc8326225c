use super::BASE_PATH;
use crate::api::empty_body;
use crate::client::Dispatcher;
use crate::Result;
use serde_json::Value;

/// Power control of a root server. Every action is a POST with `{}`.
#[derive(Debug)]
pub struct Power {
    dispatcher: Dispatcher,
}

impl Power {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    async fn action(&self, vm_id: u64, action: &str) -> Result<Value> {
        self.dispatcher
            .post(
                &format!("{}/{}/power/{}", BASE_PATH, vm_id, action),
                &empty_body(),
            )
            .await
    }

    pub async fn start(&self, vm_id: u64) -> Result<Value> {
        self.action(vm_id, "start").await
    }

    /// Graceful shutdown through ACPI.
    pub async fn stop(&self, vm_id: u64) -> Result<Value> {
        self.action(vm_id, "stop").await
    }

    pub async fn reboot(&self, vm_id: u64) -> Result<Value> {
        self.action(vm_id, "reboot").await
    }

    /// Cuts power immediately.
    pub async fn force_stop(&self, vm_id: u64) -> Result<Value> {
        self.action(vm_id, "force-stop").await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client_with, RecordingTransport};
    use http::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_start_posts_empty_body() {
        let transport = RecordingTransport::responding(200, r#"{"status": "starting"}"#);
        let client = client_with(transport.clone());

        let data = client.root_server().power().start(42).await.unwrap();
        assert_eq!(data, json!({"status": "starting"}));

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.as_str(),
            "https://api.test/api/v1/products/rootserver/42/power/start"
        );
        assert_eq!(request.body.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_force_stop_path() {
        let transport = RecordingTransport::responding(200, "{}");
        let client = client_with(transport.clone());

        client.root_server().power().force_stop(3).await.unwrap();
        assert_eq!(
            transport.last_request().url.path(),
            "/api/v1/products/rootserver/3/power/force-stop"
        );
    }
}
