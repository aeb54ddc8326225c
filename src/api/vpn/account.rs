use super::BASE_PATH;
use crate::api::{empty_body, Fields};
use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};

/// VPN accounts.
#[derive(Debug)]
pub struct Account {
    dispatcher: Dispatcher,
}

impl Account {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub async fn list(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/accounts", BASE_PATH), &[])
            .await
    }

    pub async fn get(&self, id: u64) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/accounts/{}", BASE_PATH, id), &[])
            .await
    }

    /// Creates an account. The server generates a password when `password` is `None`.
    pub async fn create(&self, username: &str, password: Option<&str>) -> Result<Value> {
        let mut body = Fields::new();
        body.insert("username".to_string(), json!(username));
        if let Some(password) = password {
            body.insert("password".to_string(), json!(password));
        }
        self.dispatcher
            .post(&format!("{}/accounts", BASE_PATH), &body)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Value> {
        self.dispatcher
            .delete(&format!("{}/accounts/{}", BASE_PATH, id), &empty_body())
            .await
    }

    /// Pushes the account to all VPN servers again.
    pub async fn sync(&self, id: u64) -> Result<Value> {
        self.dispatcher
            .post(
                &format!("{}/accounts/{}/sync", BASE_PATH, id),
                &empty_body(),
            )
            .await
    }

    pub async fn change_password(&self, id: u64, password: &str) -> Result<Value> {
        self.dispatcher
            .put(
                &format!("{}/accounts/{}/password", BASE_PATH, id),
                &json!({ "password": password }),
            )
            .await
    }
}
