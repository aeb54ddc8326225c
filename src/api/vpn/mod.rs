//! VPN service: servers, ports, pricing, and the account and config sub-facades.

mod account;
mod config;

pub use account::Account;
pub use config::Config;

use crate::client::Dispatcher;
use crate::Result;
use serde_json::{json, Value};
use std::sync::OnceLock;

pub(crate) const BASE_PATH: &str = "v1/products/vpn";

#[derive(Debug)]
pub struct Vpn {
    dispatcher: Dispatcher,
    account: OnceLock<Account>,
    config: OnceLock<Config>,
}

impl Vpn {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            account: OnceLock::new(),
            config: OnceLock::new(),
        }
    }

    pub async fn servers(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/servers", BASE_PATH), &[])
            .await
    }

    pub async fn ports(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/ports", BASE_PATH), &[])
            .await
    }

    pub async fn pricing(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/pricing", BASE_PATH), &[])
            .await
    }

    /// Geolocation of the caller's IP as seen by the VPN service.
    pub async fn geoip(&self) -> Result<Value> {
        self.dispatcher
            .get(&format!("{}/geoip", BASE_PATH), &[])
            .await
    }

    /// Whether `username` (3-50 characters) is still free.
    pub async fn check_username(&self, username: &str) -> Result<Value> {
        self.dispatcher
            .post(
                &format!("{}/check-username", BASE_PATH),
                &json!({ "username": username }),
            )
            .await
    }

    pub fn account(&self) -> &Account {
        self.account
            .get_or_init(|| Account::new(self.dispatcher.clone()))
    }

    /// OpenVPN and WireGuard client configurations.
    pub fn config(&self) -> &Config {
        self.config.get_or_init(|| Config::new(self.dispatcher.clone()))
    }
}
