use super::BASE_PATH;
use crate::api::Fields;
use crate::client::Dispatcher;
use crate::Result;
use serde_json::Value;

/// Hypervisor clusters: available OS images and prices.
#[derive(Debug)]
pub struct Cluster {
    dispatcher: Dispatcher,
}

impl Cluster {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/clusters", BASE_PATH), &[])
            .await
    }

    pub async fn get(&self, cluster_slug: &str) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/clusters/{}", BASE_PATH, cluster_slug), &[])
            .await
    }

    pub async fn os_list(&self, cluster_slug: &str) -> Result<Value> {
        self.dispatcher
            .get(
                &format!("{}/clusters/{}/os-list", BASE_PATH, cluster_slug),
                &[],
            )
            .await
    }

    pub async fn prices(&self, cluster_slug: &str) -> Result<Value> {
        self.dispatcher
            .get(
                &format!("{}/clusters/{}/prices", BASE_PATH, cluster_slug),
                &[],
            )
            .await
    }

    /// Quotes a configuration (`cores`, `ram_mb`, `disk_gb`) without ordering it.
    pub async fn calculate_price(&self, cluster_slug: &str, config: &Fields) -> Result<Value> {
        self.dispatcher
            .post(
                &format!("{}/clusters/{}/price-calc", BASE_PATH, cluster_slug),
                config,
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
    async fn test_calculate_price() {
        let transport = RecordingTransport::responding(200, r#"{"monthly": 9.99}"#);
        let client = client_with(transport.clone());

        let mut config = Fields::new();
        config.insert("cores".to_string(), json!(4));

        let quote = client
            .root_server()
            .cluster()
            .calculate_price("fra-1", &config)
            .await
            .unwrap();
        assert_eq!(quote["monthly"], json!(9.99));

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url.path(),
            "/api/v1/products/rootserver/clusters/fra-1/price-calc"
        );
        assert_eq!(request.body.unwrap(), json!({"cores": 4}));
    }
}
