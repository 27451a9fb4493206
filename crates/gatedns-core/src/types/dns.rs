use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Exposure;

/// A DNS provider hosted zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedZone {
    /// Provider zone identifier
    #[serde(rename = "Id")]
    pub id: String,

    /// Zone name suffix (e.g. `stage.example.com.`)
    #[serde(rename = "Name")]
    pub name: String,

    /// Zone configuration
    #[serde(rename = "Config", default)]
    pub config: ZoneConfig,
}

/// Hosted zone configuration block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneConfig {
    /// True for internal-network-only zones
    #[serde(rename = "PrivateZone", default)]
    pub private_zone: bool,
}

impl HostedZone {
    /// Returns true if this zone should receive the record under the
    /// given exposure policy. Private zones always do; public zones only
    /// for externally exposed load balancers.
    #[must_use]
    pub const fn accepts(&self, exposure: Exposure) -> bool {
        self.config.private_zone || exposure.is_external()
    }
}

/// Zone listing response from the DNS provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostedZoneList {
    /// Zones whose name matches the queried suffix
    #[serde(rename = "HostedZones", default)]
    pub hosted_zones: Vec<HostedZone>,
}

/// Expected and actual DNS names for one application endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedEndpoint {
    /// Conventionally generated hostname (`{app}.{env}.{domain}`)
    pub canonical_hostname: String,

    /// Live DNS name of the provisioned load balancer
    pub load_balancer_dns: String,
}

/// Rendered record-set change document; forwarded verbatim to the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeBatch(pub Value);

impl ChangeBatch {
    /// Borrow the underlying JSON document
    #[must_use]
    pub const fn as_json(&self) -> &Value {
        &self.0
    }
}

/// Provider acknowledgement of a submitted change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeInfo {
    /// Provider change identifier
    #[serde(rename = "Id", default)]
    pub id: Option<String>,

    /// Change status (e.g. PENDING, INSYNC)
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

/// Wrapper object returned by the record-change endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeResponse {
    /// Acknowledgement detail
    #[serde(rename = "ChangeInfo", default)]
    pub change_info: Option<ChangeInfo>,
}

/// Result of one zone's record submission
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    /// Zone the batch was submitted to
    pub zone_id: String,

    /// Provider acknowledgement, or the failure message
    pub result: Result<ChangeInfo, String>,
}

impl UpsertOutcome {
    /// Returns true if this zone's submission succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
