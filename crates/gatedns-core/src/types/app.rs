use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One entry in the registry's application catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSummary {
    /// Application name
    pub name: String,
}

/// Full application metadata from the registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationDetail {
    /// Application name
    #[serde(default)]
    pub name: Option<String>,

    /// Raw attribute map; repository identifiers live here
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl ApplicationDetail {
    /// Repository project key (group), empty string when absent
    #[must_use]
    pub fn repo_group(&self) -> &str {
        self.attribute_str("repoProjectKey")
    }

    /// Repository slug, empty string when absent
    #[must_use]
    pub fn repo_slug(&self) -> &str {
        self.attribute_str("repoSlug")
    }

    fn attribute_str(&self, key: &str) -> &str {
        self.attributes
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

/// One load-balancer binding for an application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBalancer {
    /// Deployment environment the balancer lives in (wire field "account")
    #[serde(rename = "account")]
    pub environment: String,

    /// Cloud region
    pub region: String,

    /// Provider-assigned DNS name
    #[serde(rename = "dnsname")]
    pub dns_name: String,
}

impl LoadBalancer {
    /// Returns true if this binding serves the given environment and region
    #[must_use]
    pub fn matches(&self, environment: &str, region: &str) -> bool {
        self.environment == environment && self.region == region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_attributes_default_to_empty() {
        let detail = ApplicationDetail::default();
        assert_eq!(detail.repo_group(), "");
        assert_eq!(detail.repo_slug(), "");
    }

    #[test]
    fn detail_reads_repo_identifiers() {
        let detail: ApplicationDetail = serde_json::from_str(
            r#"{"name":"sampleapp","attributes":{"repoProjectKey":"forrest","repoSlug":"gump"}}"#,
        )
        .unwrap();
        assert_eq!(detail.repo_group(), "forrest");
        assert_eq!(detail.repo_slug(), "gump");
    }

    #[test]
    fn load_balancer_wire_names() {
        let lb: LoadBalancer = serde_json::from_str(
            r#"{"account":"prod","region":"us-west-2","dnsname":"lb.aws.example.com"}"#,
        )
        .unwrap();
        assert!(lb.matches("prod", "us-west-2"));
        assert!(!lb.matches("prod", "us-east-1"));
    }
}
