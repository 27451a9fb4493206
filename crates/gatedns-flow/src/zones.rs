//! Hosted zone discovery and filtering.

use gatedns_client::DnsProvider;
use gatedns_core::{Exposure, HostedZone, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Selects the hosted zones that should receive a record
pub struct ZoneSelector {
    provider: Arc<dyn DnsProvider>,
}

impl ZoneSelector {
    /// Create a selector over the given DNS provider
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>) -> Self {
        Self { provider }
    }

    /// Discover the zones matching `dns_suffix` and filter them by
    /// exposure policy: private zones always receive the record, public
    /// zones only for externally exposed load balancers.
    ///
    /// Zero selected zones is an empty result, not an error.
    pub async fn select_zones(
        &self,
        dns_suffix: &str,
        exposure: Exposure,
    ) -> Result<Vec<HostedZone>> {
        let zones = self.provider.list_hosted_zones_by_name(dns_suffix).await?;
        debug!(suffix = %dns_suffix, found = zones.len(), "hosted zones discovered");

        let selected: Vec<HostedZone> = zones
            .into_iter()
            .filter(|zone| zone.accepts(exposure))
            .collect();

        for zone in &selected {
            info!(zone = %zone.id, "zone selected for DNS record");
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use gatedns_core::{ChangeBatch, ChangeInfo, HostedZoneList, ZoneConfig};

    struct FixedZones(Vec<HostedZone>);

    #[async_trait]
    impl DnsProvider for FixedZones {
        async fn list_hosted_zones_by_name(&self, _dns_name: &str) -> Result<Vec<HostedZone>> {
            Ok(self.0.clone())
        }

        async fn change_record_sets(
            &self,
            _zone_id: &str,
            _batch: &ChangeBatch,
        ) -> Result<ChangeInfo> {
            unreachable!("zone selection never submits changes")
        }
    }

    fn zone(id: &str, private: bool) -> HostedZone {
        HostedZone {
            id: format!("/hostedzone/{id}"),
            name: "stage.example.com.".into(),
            config: ZoneConfig {
                private_zone: private,
            },
        }
    }

    fn selector(zones: Vec<HostedZone>) -> ZoneSelector {
        ZoneSelector::new(Arc::new(FixedZones(zones)))
    }

    #[tokio::test]
    async fn internal_selects_private_zones_only() {
        let s = selector(vec![zone("Z1", true), zone("Z2", false)]);
        let selected = s
            .select_zones("stage.example.com", Exposure::Internal)
            .await
            .unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "/hostedzone/Z1");
    }

    #[tokio::test]
    async fn external_selects_public_and_private_zones() {
        let s = selector(vec![zone("Z1", true), zone("Z2", false)]);
        let selected = s
            .select_zones("stage.example.com", Exposure::External)
            .await
            .unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[tokio::test]
    async fn external_selection_is_superset_of_internal() {
        let zones = vec![zone("Z1", true), zone("Z2", false), zone("Z3", true)];
        let internal = selector(zones.clone())
            .select_zones("stage.example.com", Exposure::Internal)
            .await
            .unwrap();
        let external = selector(zones)
            .select_zones("stage.example.com", Exposure::External)
            .await
            .unwrap();

        for z in &internal {
            assert!(external.iter().any(|e| e.id == z.id));
        }
    }

    #[tokio::test]
    async fn single_zone_still_gets_filtered_normally() {
        // A lone private zone is selected; a lone public zone is not
        // (unless external).
        let lone_private = selector(vec![zone("Z1", true)])
            .select_zones("stage.example.com", Exposure::Internal)
            .await
            .unwrap();
        assert_eq!(lone_private.len(), 1);

        let lone_public = selector(vec![zone("Z2", false)])
            .select_zones("stage.example.com", Exposure::Internal)
            .await
            .unwrap();
        assert!(lone_public.is_empty());
    }

    #[test]
    fn zone_list_round_trips_from_wire() {
        let list: HostedZoneList = serde_json::from_str(
            r#"{"HostedZones":[{"Id":"/hostedzone/Z1","Name":"stage.example.com."}]}"#,
        )
        .unwrap();
        assert!(!list.hosted_zones[0].config.private_zone);
    }
}
