use super::BASE_PATH;
use crate::client::Dispatcher;
use crate::Result;
use serde_json::Value;

/// Client configuration files for a VPN account.
#[derive(Debug)]
pub struct Config {
    dispatcher: Dispatcher,
}

impl Config {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    async fn openvpn_at(&self, path: String, server_id: u64, port_id: u64) -> Result<Value> {
        let server_id = server_id.to_string();
        let port_id = port_id.to_string();
        self.dispatcher
            .get(
                &path,
                &[("server_id", server_id.as_str()), ("port_id", port_id.as_str())],
            )
            .await
    }

    async fn wireguard_at(&self, path: String, server_id: u64) -> Result<Value> {
        let server_id = server_id.to_string();
        self.dispatcher
            .get(&path, &[("server_id", server_id.as_str())])
            .await
    }

    pub async fn openvpn(&self, account_id: u64, server_id: u64, port_id: u64) -> Result<Value> {
        self.openvpn_at(
            format!("{}/accounts/{}/config/openvpn", BASE_PATH, account_id),
            server_id,
            port_id,
        )
        .await
    }

    /// Same as [`openvpn`](Config::openvpn) but packaged as a downloadable file.
    pub async fn download_openvpn(&self, account_id: u64, server_id: u64, port_id: u64) -> Result<Value> {
        self.openvpn_at(
            format!("{}/accounts/{}/config/openvpn/download", BASE_PATH, account_id),
            server_id,
            port_id,
        )
        .await
    }

    pub async fn wireguard(&self, account_id: u64, server_id: u64) -> Result<Value> {
        self.wireguard_at(
            format!("{}/accounts/{}/config/wireguard", BASE_PATH, account_id),
            server_id,
        )
        .await
    }

    pub async fn download_wireguard(&self, account_id: u64, server_id: u64) -> Result<Value> {
        self.wireguard_at(
            format!("{}/accounts/{}/config/wireguard/download", BASE_PATH, account_id),
            server_id,
        )
        .await
    }
}
