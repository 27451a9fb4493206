//! Command-line argument definitions using clap.

use clap::Parser;

/// Register an application's load-balancer DNS record after deployment
///
/// Verifies the application against the deployment registry, resolves
/// its load balancer for the target environment and region, and UPSERTs
/// a CNAME in the matching hosted zones.
#[derive(Parser, Debug)]
#[command(name = "gatedns")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The application name to register
    #[arg(long)]
    pub app: String,

    /// The region the load balancer lives in
    #[arg(long)]
    pub region: String,

    /// The environment to register DNS in
    #[arg(long)]
    pub env: String,

    /// Load-balancer subnet purpose; "external" also publishes to
    /// public zones
    #[arg(long = "elb_subnet")]
    pub elb_subnet: String,

    /// DEBUG output
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Registry (Gate) API base URL
    #[arg(long, env = "GATEDNS_REGISTRY_URL")]
    pub registry_url: Option<String>,

    /// DNS provider API base URL
    #[arg(long, env = "GATEDNS_DNS_URL")]
    pub dns_url: Option<String>,

    /// Organization DNS domain records live under
    #[arg(long, env = "GATEDNS_DOMAIN")]
    pub domain: Option<String>,
}
