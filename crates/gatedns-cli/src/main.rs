//! gatedns - DNS registration for deployed applications.
//!
//! Points a conventional hostname at an application's load balancer
//! after deployment.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    gatedns_cli::run().await
}
