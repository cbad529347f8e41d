//! Region (installation) and availability zone records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::serde_helpers::{date, null_as_default};

/// Availability zone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Zone {
    /// ID of the region the zone belongs to.
    pub installation_id: u64,
    /// Zone name, e.g. `ru-central1-a`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "date")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Owning region, when the API embeds it.
    #[serde(rename = "installation")]
    pub region: Option<Region>,
}

/// Region (called "installation" by the API).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Region {
    /// Region code, e.g. `ru` or `kz`.
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    pub zones: Zones,
}

record_list!(
    /// List of zones.
    Zones,
    Zone
);

record_list!(
    /// List of regions.
    Regions,
    Region
);
