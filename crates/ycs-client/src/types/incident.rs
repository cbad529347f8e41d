//! Incident records and accessors.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::serde_helpers::{date, null_as_default};
use super::{Comments, Regions, Services, Zones};
use crate::consts::{Lang, STATUS_OPEN, STATUS_PAGE_URL, STATUS_RESOLVED};

/// Service disruption event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Incident {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Post-incident report, in the API's HTML subset.
    #[serde(deserialize_with = "null_as_default")]
    pub report: String,
    /// `open` or `resolved`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub is_report_published: bool,
    /// Severity, see `LEVEL_ID_*`.
    pub level_id: u8,
    #[serde(deserialize_with = "date")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "date")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "date")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "date")]
    pub report_published_time: Option<DateTime<Utc>>,
    pub level: Option<Level>,
    pub zones: Zones,
    #[serde(rename = "installations")]
    pub regions: Regions,
    pub services: Services,
    pub comments: Comments,
}

impl Incident {
    /// Whether the incident is resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status == STATUS_RESOLVED
    }

    /// Time between start and end.
    ///
    /// Zero while the incident has no end date (or no start date).
    #[must_use]
    pub fn duration(&self) -> Duration {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (end - start).to_std().unwrap_or_default(),
            _ => Duration::ZERO,
        }
    }

    /// Link to the incident on the public status page.
    ///
    /// Empty for records without an ID.
    #[must_use]
    pub fn url(&self, lang: Lang) -> String {
        if self.id == 0 {
            return String::new();
        }
        format!("{STATUS_PAGE_URL}/{lang}/incidents/{}", self.id)
    }

    /// Report rendered to lightweight markup.
    #[must_use]
    pub fn report_markdown(&self) -> String {
        ycs_markup::render(&self.report)
    }

    /// Codes of the affected regions.
    #[must_use]
    pub fn region_list(&self) -> Vec<&str> {
        self.regions.iter().map(|r| r.code.as_str()).collect()
    }

    /// Names of the affected zones, region by region.
    #[must_use]
    pub fn zone_list(&self) -> Vec<&str> {
        self.regions
            .iter()
            .flat_map(|r| r.zones.iter())
            .map(|z| z.id.as_str())
            .collect()
    }

    /// Names of the affected services.
    #[must_use]
    pub fn service_list(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Incident severity level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Level {
    pub level: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub theme: String,
    #[serde(deserialize_with = "date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "date")]
    pub updated_at: Option<DateTime<Utc>>,
}

record_list!(
    /// List of incidents.
    Incidents,
    Incident
);

impl Incidents {
    /// Whether any incident in the list is still open.
    #[must_use]
    pub fn has_open(&self) -> bool {
        self.iter().any(|i| i.status == STATUS_OPEN)
    }
}
