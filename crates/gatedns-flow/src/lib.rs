//! DNS registration workflow for deployed applications.
//!
//! Sequences the registry and DNS provider clients into the
//! resolution-and-upsert flow: verify the application exists, resolve
//! its load-balancer endpoint, select the hosted zones for the target
//! environment, and UPSERT the CNAME record in each.
//!
//! ```rust,ignore
//! use gatedns_client::{HttpDnsProvider, RegistryClient};
//! use gatedns_core::{ApplicationRequest, Exposure};
//! use gatedns_flow::{DnsWorkflow, FlowConfig};
//! use std::sync::Arc;
//!
//! # async fn run() -> gatedns_core::Result<()> {
//! let registry = RegistryClient::new("https://gate.example.com");
//! let provider = Arc::new(HttpDnsProvider::new("https://dns.example.com"));
//! let workflow = DnsWorkflow::new(registry, provider, FlowConfig::new("example.com"));
//!
//! let request = ApplicationRequest::new("sample-app", "stage", "us-east-1", Exposure::Internal);
//! let dns_name = workflow.run(&request).await?;
//! println!("registered {dns_name}");
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/gatedns-flow/1.0.0")]

mod resolver;
mod template;
mod upsert;
mod workflow;
mod zones;

pub use resolver::EndpointResolver;
pub use template::ChangeBatchTemplates;
pub use upsert::UpsertEngine;
pub use workflow::{DnsWorkflow, FlowConfig};
pub use zones::ZoneSelector;

pub use gatedns_core::{GateDnsError, Result};
