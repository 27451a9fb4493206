//! Post-deployment DNS registration for applications behind a
//! Spinnaker-like deployment platform.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gatedns::{ApplicationRequest, DnsWorkflow, Exposure, FlowConfig};
//! use gatedns::{HttpDnsProvider, RegistryClient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> gatedns::Result<()> {
//!     let workflow = DnsWorkflow::new(
//!         RegistryClient::new("https://gate.example.com"),
//!         Arc::new(HttpDnsProvider::new("https://dns.example.com")),
//!         FlowConfig::new("example.com"),
//!     );
//!
//!     let request = ApplicationRequest::new(
//!         "sample-app",
//!         "stage",
//!         "us-east-1",
//!         Exposure::Internal,
//!     );
//!
//!     let dns_name = workflow.run(&request).await?;
//!     println!("registered {dns_name}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/gatedns/1.0.0")]

// Re-export core types
pub use gatedns_core::*;

// Re-export clients
pub use gatedns_client::{
    DnsProvider, HttpDnsProvider, HttpDnsProviderBuilder, RegistryClient, RegistryClientBuilder,
};

// Re-export the workflow
pub use gatedns_flow::{
    ChangeBatchTemplates, DnsWorkflow, EndpointResolver, FlowConfig, UpsertEngine, ZoneSelector,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
