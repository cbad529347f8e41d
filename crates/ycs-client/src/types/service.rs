//! Cloud service records.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::Incidents;
use super::serde_helpers::{date, null_as_default};

/// Cloud service tracked by the status page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub iam_flag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub doc_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub prices_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub console_url: String,
    /// Code of the region the service runs in.
    #[serde(deserialize_with = "null_as_default")]
    pub installation_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon_name: String,
    pub order_number: u32,
    pub category_id: u64,
    pub page_id: u64,
    #[serde(deserialize_with = "date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "date")]
    pub updated_at: Option<DateTime<Utc>>,
    pub is_product: bool,
    /// Incidents affecting the service (only with `incidents=all`).
    pub incidents: Incidents,
}

record_list!(
    /// List of services.
    Services,
    Service
);

impl Services {
    /// Services running in the region with the given code.
    #[must_use]
    pub fn in_region(&self, code: &str) -> Vec<&Service> {
        self.iter().filter(|s| s.installation_code == code).collect()
    }

    /// Service IDs, in list order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.iter().map(|s| s.id).collect()
    }

    /// Service names, in list order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|s| s.name.as_str()).collect()
    }
}
