//! CLI argument parsing and workflow dispatch.

pub mod args;

use anyhow::{Context as _, Result};
use args::Cli;
use clap::Parser;
use gatedns::{ApplicationRequest, DnsWorkflow, Exposure, FlowConfig};
use gatedns::{HttpDnsProvider, RegistryClient};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    // Load configuration; flags and env vars win over the file
    let config = Config::load()?;

    let registry_url = cli
        .registry_url
        .or(config.registry_url)
        .context("registry URL required: pass --registry-url, set GATEDNS_REGISTRY_URL, or add registry_url to the config file")?;

    let dns_url = cli
        .dns_url
        .or(config.dns_url)
        .context("DNS provider URL required: pass --dns-url, set GATEDNS_DNS_URL, or add dns_url to the config file")?;

    let domain = cli
        .domain
        .or(config.domain)
        .unwrap_or_else(|| "example.com".to_string());

    let mut flow_config = FlowConfig::new(domain);
    if let Some(ttl) = config.record_ttl {
        flow_config = flow_config.record_ttl(ttl);
    }

    let workflow = DnsWorkflow::new(
        RegistryClient::new(registry_url),
        Arc::new(HttpDnsProvider::new(dns_url)),
        flow_config,
    );

    let request = ApplicationRequest::new(
        cli.app,
        cli.env,
        cli.region,
        Exposure::from_subnet(&cli.elb_subnet),
    );

    let dns_name = workflow.run(&request).await?;
    println!("{dns_name}");

    Ok(())
}

fn init_tracing(debug: bool) {
    let default = if debug { "gatedns=debug,debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
