//! Change-batch templating.
//!
//! Record-set changes are rendered from a fixed template contract: the
//! `dns_elb` template plus the data keys `app`, `env`, `domain`, `ttl`,
//! `dns_elb` (record name) and `dns_elb_aws` (record target).

use gatedns_core::{ChangeBatch, GateDnsError, Result};
use handlebars::Handlebars;
use serde_json::Value;
use tracing::debug;

/// The one UPSERT action submitted per zone
const DNS_ELB_TEMPLATE: &str = r#"{
    "Comment": "gatedns ELB record for {{app}} in {{env}}",
    "Changes": [
        {
            "Action": "UPSERT",
            "ResourceRecordSet": {
                "Name": "{{dns_elb}}",
                "Type": "CNAME",
                "TTL": {{ttl}},
                "ResourceRecords": [
                    { "Value": "{{dns_elb_aws}}" }
                ]
            }
        }
    ]
}"#;

/// Registry of change-batch templates
pub struct ChangeBatchTemplates {
    registry: Handlebars<'static>,
}

impl ChangeBatchTemplates {
    /// Build the registry with the built-in `dns_elb` template
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        // Output is JSON, not HTML
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string("dns_elb", DNS_ELB_TEMPLATE)
            .expect("built-in template must parse");
        Self { registry }
    }

    /// Render a named template into a ready-to-send change batch
    pub fn render(&self, template_name: &str, data: &Value) -> Result<ChangeBatch> {
        let rendered = self
            .registry
            .render(template_name, data)
            .map_err(|e| GateDnsError::Template(e.to_string()))?;

        let json: Value = serde_json::from_str(&rendered)?;
        debug!(template = %template_name, batch = %json, "rendered change batch");
        Ok(ChangeBatch(json))
    }
}

impl Default for ChangeBatchTemplates {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_data() -> Value {
        json!({
            "app": "gumpforrest",
            "env": "stage",
            "domain": "example.com",
            "ttl": 60,
            "dns_elb": "gumpforrest.stage.example.com",
            "dns_elb_aws": "sample-app-elb.aws.example.com",
        })
    }

    #[test]
    fn dns_elb_renders_one_upsert_action() {
        let templates = ChangeBatchTemplates::new();
        let batch = templates.render("dns_elb", &sample_data()).unwrap();

        let changes = batch.as_json()["Changes"].as_array().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0]["Action"], "UPSERT");

        let record_set = &changes[0]["ResourceRecordSet"];
        assert_eq!(record_set["Name"], "gumpforrest.stage.example.com");
        assert_eq!(record_set["Type"], "CNAME");
        assert_eq!(record_set["TTL"], 60);
        assert_eq!(
            record_set["ResourceRecords"][0]["Value"],
            "sample-app-elb.aws.example.com"
        );
    }

    #[test]
    fn unknown_template_is_a_template_error() {
        let templates = ChangeBatchTemplates::new();
        let err = templates.render("dns_missing", &sample_data()).unwrap_err();
        assert!(matches!(err, GateDnsError::Template(_)));
    }
}
