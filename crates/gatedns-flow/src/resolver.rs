//! Load-balancer endpoint resolution.

use gatedns_client::RegistryClient;
use gatedns_core::hostname::HostnameGenerator;
use gatedns_core::{GateDnsError, ResolvedEndpoint, Result};
use tracing::{debug, warn};

/// Resolves an application's DNS-facing endpoint from registry metadata
/// and its live load-balancer bindings
pub struct EndpointResolver {
    client: RegistryClient,
    domain: String,
}

impl EndpointResolver {
    /// Create a resolver over the given registry client and DNS domain
    #[must_use]
    pub fn new(client: RegistryClient, domain: impl Into<String>) -> Self {
        Self {
            client,
            domain: domain.into(),
        }
    }

    /// Resolve the endpoint for one application in one environment/region.
    ///
    /// The canonical hostname is derived from the application's repository
    /// identifiers; the record target is the load balancer actually
    /// provisioned for the requested environment and region.
    pub async fn resolve(
        &self,
        app: &str,
        environment: &str,
        region: &str,
    ) -> Result<ResolvedEndpoint> {
        let detail = self
            .client
            .application_detail(app)
            .await
            .map_err(|e| e.with_target(environment, region))?;

        let generator = HostnameGenerator::new(
            detail.repo_group(),
            detail.repo_slug(),
            environment,
            &self.domain,
        );
        let canonical_hostname = generator.elb();
        debug!(app = %app, canonical = %canonical_hostname, "derived canonical hostname");

        let balancers = self.client.load_balancers(app).await?;
        let mut matches = balancers
            .iter()
            .filter(|lb| lb.matches(environment, region));

        let Some(selected) = matches.next() else {
            return Err(GateDnsError::LoadBalancerNotFound {
                app: app.to_string(),
                environment: environment.to_string(),
                region: region.to_string(),
            });
        };

        // The registry can hand back duplicates for one environment/region
        // pair; we keep the first in returned order.
        let extra = matches.count();
        if extra > 0 {
            warn!(
                app = %app,
                environment = %environment,
                region = %region,
                extra,
                "multiple load balancers matched; using the first"
            );
        }

        if selected.dns_name != canonical_hostname {
            debug!(
                canonical = %canonical_hostname,
                actual = %selected.dns_name,
                "load balancer DNS name differs from the canonical hostname"
            );
        }

        Ok(ResolvedEndpoint {
            canonical_hostname,
            load_balancer_dns: selected.dns_name.clone(),
        })
    }
}
