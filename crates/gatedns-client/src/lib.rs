//! HTTP clients for the gatedns workflow.
//!
//! This crate provides [`RegistryClient`] for the deployment platform's
//! Gate API and [`HttpDnsProvider`], a [`DnsProvider`] implementation for
//! a Route53-shaped hosted-zone API.

#![doc(html_root_url = "https://docs.rs/gatedns-client/1.0.0")]

mod dns;
mod registry;

pub use dns::{DnsProvider, HttpDnsProvider, HttpDnsProviderBuilder};
pub use registry::{RegistryClient, RegistryClientBuilder};

pub use gatedns_core::{GateDnsError, Result};
