use serde::{Deserialize, Serialize};

/// Immutable input for one DNS registration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRequest {
    /// Application name as given by the caller
    pub app: String,

    /// Target deployment environment (registry "account")
    pub environment: String,

    /// Target cloud region
    pub region: String,

    /// Whether the load balancer is publicly reachable
    pub exposure: Exposure,
}

impl ApplicationRequest {
    /// Create a request for one application/environment/region target
    #[must_use]
    pub fn new(
        app: impl Into<String>,
        environment: impl Into<String>,
        region: impl Into<String>,
        exposure: Exposure,
    ) -> Self {
        Self {
            app: app.into(),
            environment: environment.into(),
            region: region.into(),
            exposure,
        }
    }

    /// DNS suffix the record lands under (`{environment}.{domain}`)
    #[must_use]
    pub fn dns_suffix(&self, domain: &str) -> String {
        format!("{}.{}", self.environment, domain)
    }
}

/// Publication policy for the load balancer's DNS record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exposure {
    /// Private-zone records only
    Internal,
    /// Private and public zone records
    External,
}

impl Default for Exposure {
    fn default() -> Self {
        Self::Internal
    }
}

impl Exposure {
    /// Parse a subnet-purpose label. Only the literal `external` opts in
    /// to public zones; every other value stays internal.
    #[must_use]
    pub fn from_subnet(label: &str) -> Self {
        if label.eq_ignore_ascii_case("external") {
            Self::External
        } else {
            Self::Internal
        }
    }

    /// Returns true if public zones should receive the record
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(self, Self::External)
    }
}

impl std::fmt::Display for Exposure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Internal => write!(f, "internal"),
            Self::External => write!(f, "external"),
        }
    }
}
