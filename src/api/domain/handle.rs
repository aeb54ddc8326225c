use crate::api::{empty_body, Fields};
use crate::client::Dispatcher;
use crate::Result;
use serde_json::Value;
use std::fmt::Display;

/// Contact handles (owner, admin, tech, billing) used in registrations.
#[derive(Debug)]
pub struct Handle {
    dispatcher: Dispatcher,
}

impl Handle {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Handle types the registry accepts (person, organisation, ...).
    pub async fn types(&self) -> Result<Value> {
        self.dispatcher.get("v1/domains/handles/types", &[]).await
    }

    pub async fn list(&self) -> Result<Value> {
        self.dispatcher.get("v1/domains/handles", &[]).await
    }

    pub async fn get(&self, handle_id: impl Display) -> Result<Value> {
        self.dispatcher
            .get(&format!("v1/domains/handles/{}", handle_id), &[])
            .await
    }

    pub async fn create(&self, data: &Fields) -> Result<Value> {
        self.dispatcher.post("v1/domains/handles", data).await
    }

    pub async fn update(&self, handle_id: impl Display, data: &Fields) -> Result<Value> {
        self.dispatcher
            .put(&format!("v1/domains/handles/{}", handle_id), data)
            .await
    }

    pub async fn delete(&self, handle_id: impl Display) -> Result<Value> {
        self.dispatcher
            .delete(&format!("v1/domains/handles/{}", handle_id), &empty_body())
            .await
    }

    /// Makes `handle_id` the default for new registrations.
    pub async fn set_default(&self, handle_id: impl Display) -> Result<Value> {
        self.dispatcher
            .post(
                &format!("v1/domains/handles/{}/default", handle_id),
                &empty_body(),
            )
            .await
    }
}
