//! Virtual root servers: lifecycle, statistics, power control, and the
//! locations and clusters they are placed in.

mod cluster;
mod location;
mod power;

pub use cluster::Cluster;
pub use location::Location;
pub use power::Power;

use crate::api::{empty_body, Fields};
use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};
use std::sync::OnceLock;

pub(crate) const BASE_PATH: &str = "v1/products/rootserver";

const DEFAULT_LOG_LIMIT: u32 = 50;

#[derive(Debug)]
pub struct RootServer {
    dispatcher: Dispatcher,
    location: OnceLock<Location>,
    cluster: OnceLock<Cluster>,
    power: OnceLock<Power>,
}

impl RootServer {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            location: OnceLock::new(),
            cluster: OnceLock::new(),
            power: OnceLock::new(),
        }
    }

    /// All servers, optionally narrowed by `state`, `datacenter_id`,
    /// `cluster_id` or `team_id`.
    pub async fn list(&self, filters: &[(&str, &str)]) -> Result<Value> {
        self.dispatcher.get(BASE_PATH, filters).await
    }

    pub async fn get(&self, vm_id: u64) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/{}", BASE_PATH, vm_id), &[])
            .await
    }

    /// Orders a server in the cluster identified by `cluster_slug`.
    ///
    /// `config` carries the hostname, OS template and sizing (`cores`,
    /// `ram_mb`, `disk_gb`).
    pub async fn create(&self, cluster_slug: &str, config: &Fields) -> Result<Value> {
        self.dispatcher
            .post(
                &format!("{}/cluster/{}/create", BASE_PATH, cluster_slug),
                config,
            )
            .await
    }

    /// Resizes a server. Disks can only grow.
    pub async fn update(&self, vm_id: u64, config: &Fields) -> Result<Value> {
        self.dispatcher
            .put(&format!("{}/{}", BASE_PATH, vm_id), config)
            .await
    }

    pub async fn delete(&self, vm_id: u64) -> Result<Value> {
        self.dispatcher
            .delete(&format!("{}/{}", BASE_PATH, vm_id), &empty_body())
            .await
    }

    /// Sets a new root password; the server generates one when `password` is `None`.
    pub async fn reset_root_password(&self, vm_id: u64, password: Option<&str>) -> Result<Value> {
        let mut body = Fields::new();
        if let Some(password) = password {
            body.insert("password".to_string(), json!(password));
        }
        self.dispatcher
            .post(
                &format!("{}/{}/reset-root-password", BASE_PATH, vm_id),
                &body,
            )
            .await
    }

    pub async fn reinstall(&self, vm_id: u64, config: &Fields) -> Result<Value> {
        self.dispatcher
            .post(&format!("{}/{}/reinstall", BASE_PATH, vm_id), config)
            .await
    }

    pub async fn stats(&self, vm_id: u64) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/{}/stats", BASE_PATH, vm_id), &[])
            .await
    }

    /// The latest log entries, at most `limit` (50 when `None`).
    pub async fn logs(&self, vm_id: u64, limit: Option<u32>) -> Result<Value> {
        let limit = limit.unwrap_or(DEFAULT_LOG_LIMIT).to_string();
        self.dispatcher
            .get(
                &format!("{}/{}/logs", BASE_PATH, vm_id),
                &[("limit", limit.as_str())],
            )
            .await
    }

    /// The latest tasks, at most `limit` (50 when `None`).
    pub async fn tasks(&self, vm_id: u64, limit: Option<u32>) -> Result<Value> {
        let limit = limit.unwrap_or(DEFAULT_LOG_LIMIT).to_string();
        self.dispatcher
            .get(
                &format!("{}/{}/tasks", BASE_PATH, vm_id),
                &[("limit", limit.as_str())],
            )
            .await
    }

    pub fn location(&self) -> &Location {
        self.location
            .get_or_init(|| Location::new(self.dispatcher.clone()))
    }

    pub fn cluster(&self) -> &Cluster {
        self.cluster
            .get_or_init(|| Cluster::new(self.dispatcher.clone()))
    }

    /// Start, stop and reboot.
    pub fn power(&self) -> &Power {
        self.power.get_or_init(|| Power::new(self.dispatcher.clone()))
    }
}
