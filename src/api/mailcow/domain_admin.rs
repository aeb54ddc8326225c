use super::BASE_PATH;
use crate::api::{with_optional_id, Fields};
use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};

/// Administrators scoped to a single mail domain.
#[derive(Debug)]
pub struct DomainAdmin {
    dispatcher: Dispatcher,
}

impl DomainAdmin {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self, domain: &str, admin_id: Option<u64>) -> Result<Value> {
        let path = with_optional_id(format!("{}/domain-admin/{}", BASE_PATH, domain), admin_id);
        self.dispatcher.get(&path, &[]).await
    }

    pub async fn get(&self, domain: &str, admin_id: u64) -> Result<Value> {
        self.dispatcher
            .get(
                &format!("{}/domain-admin/{}/{}", BASE_PATH, domain, admin_id),
                &[],
            )
            .await
    }

    /// The server generates a password (at least 12 characters) when `password` is `None`.
    pub async fn create(&self, domain: &str, username: &str, password: Option<&str>) -> Result<Value> {
        let mut body = Fields::new();
        body.insert("username".to_string(), json!(username));
        if let Some(password) = password {
            body.insert("password".to_string(), json!(password));
        }
        self.dispatcher
            .post(&format!("{}/domain-admin/{}", BASE_PATH, domain), &body)
            .await
    }

    /// Updates the admin currently named `username`. `config` may carry
    /// `new_username`, `password` and `active`.
    pub async fn update(&self, domain: &str, username: &str, config: &Fields) -> Result<Value> {
        let mut body = config.clone();
        body.insert("username".to_string(), json!(username));
        self.dispatcher
            .put(&format!("{}/domain-admin/{}", BASE_PATH, domain), &body)
            .await
    }

    /// Admins are deleted by name, sent in the body.
    pub async fn delete(&self, domain: &str, username: &str) -> Result<Value> {
        self.dispatcher
            .delete(
                &format!("{}/domain-admin/{}", BASE_PATH, domain),
                &json!({ "username": username }),
            )
            .await
    }
}
