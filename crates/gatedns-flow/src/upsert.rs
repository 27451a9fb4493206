//! Multi-zone record upsert.

use futures_util::future::join_all;
use gatedns_client::DnsProvider;
use gatedns_core::{ChangeBatch, HostedZone, ResolvedEndpoint, Result, UpsertOutcome};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

use crate::template::ChangeBatchTemplates;

/// Submits one change batch to every selected zone
pub struct UpsertEngine {
    provider: Arc<dyn DnsProvider>,
    templates: ChangeBatchTemplates,
    domain: String,
    record_ttl: u32,
}

impl UpsertEngine {
    /// Create an engine over the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>, domain: impl Into<String>, record_ttl: u32) -> Self {
        Self {
            provider,
            templates: ChangeBatchTemplates::new(),
            domain: domain.into(),
            record_ttl,
        }
    }

    /// Render the change batch for one endpoint. The batch content is
    /// zone-independent, so it is built once and reused across zones.
    pub fn change_batch(
        &self,
        app: &str,
        environment: &str,
        endpoint: &ResolvedEndpoint,
    ) -> Result<ChangeBatch> {
        self.templates.render(
            "dns_elb",
            &json!({
                "app": app,
                "env": environment,
                "domain": self.domain,
                "ttl": self.record_ttl,
                "dns_elb": endpoint.canonical_hostname,
                "dns_elb_aws": endpoint.load_balancer_dns,
            }),
        )
    }

    /// UPSERT the endpoint's record into every zone.
    ///
    /// Submissions are independent: one zone failing never stops the
    /// others, and outcomes come back in input-zone order even though the
    /// submissions run concurrently.
    pub async fn upsert(
        &self,
        app: &str,
        environment: &str,
        zones: &[HostedZone],
        endpoint: &ResolvedEndpoint,
    ) -> Result<Vec<UpsertOutcome>> {
        let batch = self.change_batch(app, environment, endpoint)?;
        info!(record = %endpoint.canonical_hostname, zones = zones.len(), "updating application URL");

        let submissions = zones.iter().map(|zone| {
            let batch = &batch;
            async move {
                debug!(zone = %zone.id, "submitting change batch");
                let result = self
                    .provider
                    .change_record_sets(&zone.id, batch)
                    .await
                    .map_err(|e| e.to_string());
                UpsertOutcome {
                    zone_id: zone.id.clone(),
                    result,
                }
            }
        });

        Ok(join_all(submissions).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gatedns_core::{ChangeInfo, GateDnsError, ZoneConfig};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory provider: records batches per zone, fails listed zones
    struct FakeProvider {
        records: Mutex<HashMap<String, Vec<ChangeBatch>>>,
        failing: Vec<String>,
    }

    impl FakeProvider {
        fn new(failing: &[&str]) -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
                failing: failing.iter().map(ToString::to_string).collect(),
            }
        }
    }

    #[async_trait]
    impl DnsProvider for FakeProvider {
        async fn list_hosted_zones_by_name(&self, _dns_name: &str) -> Result<Vec<HostedZone>> {
            Ok(Vec::new())
        }

        async fn change_record_sets(
            &self,
            zone_id: &str,
            batch: &ChangeBatch,
        ) -> Result<ChangeInfo> {
            if self.failing.iter().any(|z| z == zone_id) {
                return Err(GateDnsError::Api {
                    code: 400,
                    message: "InvalidChangeBatch".into(),
                });
            }
            self.records
                .lock()
                .unwrap()
                .entry(zone_id.to_string())
                .or_default()
                .push(batch.clone());
            Ok(ChangeInfo {
                id: Some("/change/C1".into()),
                status: Some("PENDING".into()),
            })
        }
    }

    fn zone(id: &str) -> HostedZone {
        HostedZone {
            id: format!("/hostedzone/{id}"),
            name: "stage.example.com.".into(),
            config: ZoneConfig { private_zone: true },
        }
    }

    fn endpoint() -> ResolvedEndpoint {
        ResolvedEndpoint {
            canonical_hostname: "gumpforrest.stage.example.com".into(),
            load_balancer_dns: "sample-app-elb.aws.example.com".into(),
        }
    }

    #[tokio::test]
    async fn outcomes_preserve_zone_order() {
        let provider = Arc::new(FakeProvider::new(&[]));
        let engine = UpsertEngine::new(provider, "example.com", 60);

        let zones = vec![zone("Z1"), zone("Z2"), zone("Z3")];
        let outcomes = engine
            .upsert("gumpforrest", "stage", &zones, &endpoint())
            .await
            .unwrap();

        let ids: Vec<_> = outcomes.iter().map(|o| o.zone_id.as_str()).collect();
        assert_eq!(
            ids,
            ["/hostedzone/Z1", "/hostedzone/Z2", "/hostedzone/Z3"]
        );
        assert!(outcomes.iter().all(UpsertOutcome::is_success));
    }

    #[tokio::test]
    async fn one_zone_failing_does_not_stop_the_rest() {
        let provider = Arc::new(FakeProvider::new(&["/hostedzone/Z2"]));
        let engine = UpsertEngine::new(
            Arc::clone(&provider) as Arc<dyn gatedns_client::DnsProvider>,
            "example.com",
            60,
        );

        let zones = vec![zone("Z1"), zone("Z2"), zone("Z3")];
        let outcomes = engine
            .upsert("gumpforrest", "stage", &zones, &endpoint())
            .await
            .unwrap();

        assert!(outcomes[0].is_success());
        assert!(!outcomes[1].is_success());
        assert!(outcomes[2].is_success());

        let records = provider.records.lock().unwrap();
        assert!(records.contains_key("/hostedzone/Z1"));
        assert!(records.contains_key("/hostedzone/Z3"));
        assert!(!records.contains_key("/hostedzone/Z2"));
    }

    #[tokio::test]
    async fn resubmitting_the_same_batch_is_idempotent() {
        let provider = Arc::new(FakeProvider::new(&[]));
        let engine = UpsertEngine::new(
            Arc::clone(&provider) as Arc<dyn gatedns_client::DnsProvider>,
            "example.com",
            60,
        );

        let zones = vec![zone("Z1")];
        let ep = endpoint();
        engine.upsert("gumpforrest", "stage", &zones, &ep).await.unwrap();
        engine.upsert("gumpforrest", "stage", &zones, &ep).await.unwrap();

        let records = provider.records.lock().unwrap();
        let submitted = &records["/hostedzone/Z1"];
        assert_eq!(submitted.len(), 2);
        // UPSERT semantics: both submissions carry the identical record
        // value, so the final DNS state is unchanged by the second.
        assert_eq!(submitted[0].as_json(), submitted[1].as_json());
    }

    #[tokio::test]
    async fn empty_zone_list_yields_no_outcomes() {
        let provider = Arc::new(FakeProvider::new(&[]));
        let engine = UpsertEngine::new(provider, "example.com", 60);
        let outcomes = engine
            .upsert("gumpforrest", "stage", &[], &endpoint())
            .await
            .unwrap();
        assert!(outcomes.is_empty());
    }
}
