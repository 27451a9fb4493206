//! The linear registration workflow.

use gatedns_client::{DnsProvider, RegistryClient};
use gatedns_core::{ApplicationRequest, GateDnsError, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::resolver::EndpointResolver;
use crate::upsert::UpsertEngine;
use crate::zones::ZoneSelector;

/// Default CNAME TTL in seconds
const DEFAULT_RECORD_TTL: u32 = 60;

/// Workflow-level configuration, passed in explicitly — no process-wide
/// defaults
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Organization DNS domain records live under
    pub domain: String,

    /// TTL for created CNAME records
    pub record_ttl: u32,
}

impl FlowConfig {
    /// Config for the given domain with the default TTL
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            record_ttl: DEFAULT_RECORD_TTL,
        }
    }

    /// Override the record TTL
    #[must_use]
    pub const fn record_ttl(mut self, ttl: u32) -> Self {
        self.record_ttl = ttl;
        self
    }
}

/// Sequences verification, resolution, zone selection, and upsert.
///
/// Each stage fails fast with its typed error; DNS records written
/// before a later failure stay in place.
pub struct DnsWorkflow {
    registry: RegistryClient,
    resolver: EndpointResolver,
    selector: ZoneSelector,
    engine: UpsertEngine,
    config: FlowConfig,
}

impl DnsWorkflow {
    /// Wire the workflow over one registry client and one DNS provider
    #[must_use]
    pub fn new(
        registry: RegistryClient,
        provider: Arc<dyn DnsProvider>,
        config: FlowConfig,
    ) -> Self {
        let resolver = EndpointResolver::new(registry.clone(), config.domain.clone());
        let selector = ZoneSelector::new(Arc::clone(&provider));
        let engine = UpsertEngine::new(provider, config.domain.clone(), config.record_ttl);
        Self {
            registry,
            resolver,
            selector,
            engine,
            config,
        }
    }

    /// Run the full workflow; returns the canonical DNS name on success.
    pub async fn run(&self, request: &ApplicationRequest) -> Result<String> {
        let app = self
            .registry
            .app_exists(&request.app)
            .await
            .map_err(|e| e.with_target(&request.environment, &request.region))?;

        let endpoint = self
            .resolver
            .resolve(&app, &request.environment, &request.region)
            .await?;

        let suffix = request.dns_suffix(&self.config.domain);
        let zones = self
            .selector
            .select_zones(&suffix, request.exposure)
            .await
            .map_err(|e| creation_failed(request, e.to_string()))?;

        if zones.is_empty() {
            warn!(
                suffix = %suffix,
                exposure = %request.exposure,
                "no hosted zone selected; nothing to update"
            );
            return Ok(endpoint.canonical_hostname);
        }

        let outcomes = self
            .engine
            .upsert(&app, &request.environment, &zones, &endpoint)
            .await
            .map_err(|e| creation_failed(request, e.to_string()))?;

        let failures: Vec<(String, String)> = outcomes
            .iter()
            .filter_map(|o| match &o.result {
                Ok(_) => None,
                Err(e) => Some((o.zone_id.clone(), e.clone())),
            })
            .collect();

        // Overall success as long as one zone took the record; failed
        // zones are surfaced, not rolled back.
        if failures.len() == outcomes.len() {
            let detail = failures
                .iter()
                .map(|(zone, error)| format!("{zone}: {error}"))
                .collect::<Vec<_>>()
                .join("; ");
            return Err(creation_failed(request, detail));
        }

        for (zone, error) in &failures {
            warn!(zone = %zone, error = %error, "zone upsert failed");
        }

        info!(dns = %endpoint.canonical_hostname, "application DNS registered");
        Ok(endpoint.canonical_hostname)
    }
}

fn creation_failed(request: &ApplicationRequest, message: String) -> GateDnsError {
    GateDnsError::DnsCreationFailed {
        app: request.app.clone(),
        environment: request.environment.clone(),
        region: request.region.clone(),
        message,
    }
}
