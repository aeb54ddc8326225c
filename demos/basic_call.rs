//! Basic example: read account data and list domains.
//!
//! This example shows how to:
//! - Create a client from an API key
//! - Call product facades
//! - Deserialize a raw response into a typed struct
//! - Branch on the error kind
//!
//! Run with: `EXBIL_API_KEY=... cargo run --example basic_call`

use exbil_cloud::metadata::RequestMetadata;
use exbil_cloud::{Client, Error, ErrorKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct CreditStatus {
    balance: f64,
    currency: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("exbil_cloud=debug,basic_call=info")
        .init();

    let api_key = std::env::var("EXBIL_API_KEY")?;
    let client = Client::new(api_key)?;

    println!("=== Account ===");
    let user = client.accounting().user_data().await?;
    println!("User: {}", user);

    let response = client
        .call(RequestMetadata::new(
            http::Method::GET,
            "v1/accounting/credit-status",
        ))
        .await?;
    println!("Request latency: {:?}", response.latency);
    match response.json::<CreditStatus>() {
        Ok(credit) => println!("Credit: {:?}", credit),
        Err(e) => println!("Unexpected credit payload: {}", e),
    }
    println!();

    println!("=== Domains ===");
    let domains = client.domain().list().await?;
    println!("Domains: {}", domains);

    match client.domain().get("does-not-exist.example").await {
        Ok(domain) => println!("Found: {}", domain),
        Err(Error::Api(e)) if e.kind() == ErrorKind::NotFound => {
            println!("Not found ({:?}): {}", e.status(), e.message());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
