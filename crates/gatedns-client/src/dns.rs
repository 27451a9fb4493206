//! DNS provider client.
//!
//! The workflow talks to the provider through the [`DnsProvider`] trait
//! so the upsert engine can be exercised against fakes; the shipped
//! implementation speaks a Route53-shaped JSON API over HTTP.

use async_trait::async_trait;
use gatedns_core::{
    ChangeBatch, ChangeInfo, ChangeResponse, GateDnsError, HostedZone, HostedZoneList, Result,
};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Hosted-zone discovery and record-set changes
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// List hosted zones whose name matches the given DNS name
    async fn list_hosted_zones_by_name(&self, dns_name: &str) -> Result<Vec<HostedZone>>;

    /// Submit a record-set change batch to one hosted zone
    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo>;
}

/// [`DnsProvider`] backed by a Route53-shaped HTTP API
#[derive(Clone)]
pub struct HttpDnsProvider {
    inner: Arc<ProviderInner>,
}

struct ProviderInner {
    http: HttpClient,
    base_url: String,
}

impl HttpDnsProvider {
    /// Create a provider client against the given base URL with defaults
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpDnsProviderBuilder::new(base_url).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> HttpDnsProviderBuilder {
        HttpDnsProviderBuilder::new(base_url)
    }

    async fn read_error(response: reqwest::Response) -> GateDnsError {
        let code = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        GateDnsError::Api { code, message }
    }
}

#[async_trait]
impl DnsProvider for HttpDnsProvider {
    async fn list_hosted_zones_by_name(&self, dns_name: &str) -> Result<Vec<HostedZone>> {
        let url = format!("{}/hostedzonesbyname", self.inner.base_url);
        debug!(url = %url, dns_name = %dns_name, "listing hosted zones");

        let response = self
            .inner
            .http
            .get(&url)
            .query(&[("dnsname", dns_name)])
            .send()
            .await
            .map_err(|e| GateDnsError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let list: HostedZoneList = response
            .json()
            .await
            .map_err(|e| GateDnsError::Http(e.to_string()))?;
        Ok(list.hosted_zones)
    }

    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        // Zone ids come back as "/hostedzone/Z..."; the change endpoint
        // wants the bare id in the path.
        let bare_id = zone_id.trim_start_matches("/hostedzone/");
        let url = format!("{}/hostedzone/{bare_id}/rrset", self.inner.base_url);
        debug!(url = %url, "submitting record-set change");

        let response = self
            .inner
            .http
            .post(&url)
            .json(batch.as_json())
            .send()
            .await
            .map_err(|e| GateDnsError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::read_error(response).await);
        }

        let change: ChangeResponse = response
            .json()
            .await
            .map_err(|e| GateDnsError::Http(e.to_string()))?;
        Ok(change.change_info.unwrap_or(ChangeInfo {
            id: None,
            status: None,
        }))
    }
}

/// Builder for configuring an [`HttpDnsProvider`]
pub struct HttpDnsProviderBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl HttpDnsProviderBuilder {
    /// Create a new builder for the given provider base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("gatedns/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the provider client
    #[must_use]
    pub fn build(self) -> HttpDnsProvider {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        HttpDnsProvider {
            inner: Arc::new(ProviderInner {
                http,
                base_url: self.base_url.trim_end_matches('/').to_string(),
            }),
        }
    }
}
