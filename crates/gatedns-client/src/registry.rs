//! Client for the deployment platform's application registry (Gate API).

use gatedns_core::{
    ApplicationDetail, ApplicationSummary, GateDnsError, LoadBalancer, Result,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the registry's application catalog and load-balancer bindings
#[derive(Clone)]
pub struct RegistryClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
}

impl RegistryClient {
    /// Create a client against the given registry base URL with defaults
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        RegistryClientBuilder::new(base_url).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> RegistryClientBuilder {
        RegistryClientBuilder::new(base_url)
    }

    /// Fetch the full application catalog
    pub async fn list_applications(&self) -> Result<Vec<ApplicationSummary>> {
        self.get("/applications")
            .await
            .map_err(|e| GateDnsError::application_list(e.to_string()))
    }

    /// Fetch one application's metadata.
    ///
    /// Only an error response from the registry means the application is
    /// missing; transport and decode failures keep their own kind.
    pub async fn application_detail(&self, name: &str) -> Result<ApplicationDetail> {
        self.get(&format!("/applications/{name}"))
            .await
            .map_err(|e| match e {
                GateDnsError::Api { .. } => GateDnsError::app_not_found(name),
                other => other,
            })
    }

    /// Fetch all load-balancer bindings for an application, across
    /// environments and regions
    pub async fn load_balancers(&self, name: &str) -> Result<Vec<LoadBalancer>> {
        self.get(&format!("/applications/{name}/loadBalancers")).await
    }

    /// Check that an application exists in the catalog.
    ///
    /// Matching is case-insensitive but otherwise exact; returns the
    /// canonical (lowercased) name.
    pub async fn app_exists(&self, requested: &str) -> Result<String> {
        let apps = self
            .list_applications()
            .await
            .map_err(|e| e.for_app(requested))?;
        let wanted = requested.to_lowercase();

        for app in apps {
            if app.name.to_lowercase() == wanted {
                info!(app = %wanted, "application found in registry");
                return Ok(wanted);
            }
        }

        info!(app = %wanted, "application not in registry catalog");
        Err(GateDnsError::app_not_found(requested))
    }

    /// Perform a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GateDnsError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| GateDnsError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(GateDnsError::Json)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GateDnsError::Api {
                code: status.as_u16(),
                message,
            })
        }
    }
}

/// Builder for configuring a [`RegistryClient`]
pub struct RegistryClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl RegistryClientBuilder {
    /// Create a new builder for the given registry base URL
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

    /// Build the client
    #[must_use]
    pub fn build(self) -> RegistryClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .expect("Failed to build HTTP client");

        RegistryClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url.trim_end_matches('/').to_string(),
            }),
        }
    }
}
