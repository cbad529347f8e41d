//! Incident operations.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use super::Client;
use crate::consts::{IncidentStatus, Lang, REGION_ALL};
use crate::error::{ClientError, Operation};
use crate::types::{Incident, Incidents};

/// Date format for `from`/`to` query parameters.
const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Filters for incident listings.
///
/// Unset fields are left out of the query; the API then applies its own
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentsRequest {
    pub lang: Lang,
    /// First day of the period.
    pub from: Option<NaiveDate>,
    /// Last day of the period.
    pub to: Option<NaiveDate>,
    pub status: Option<IncidentStatus>,
    /// Region code, `all` when unset or empty.
    pub region: Option<String>,
    /// Availability zones to include.
    pub zones: Vec<String>,
}

impl IncidentsRequest {
    /// Query parameters for this request, in a stable order.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let region = self
            .region
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(REGION_ALL);

        let mut query = vec![
            ("lang", self.lang.to_string()),
            ("installation", region.to_owned()),
        ];
        if let Some(from) = self.from {
            query.push(("from", from.format(QUERY_DATE_FORMAT).to_string()));
        }
        if let Some(to) = self.to {
            query.push(("to", to.format(QUERY_DATE_FORMAT).to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.to_string()));
        }
        query.extend(self.zones.iter().map(|zone| ("zones[]", zone.clone())));
        query
    }
}

/// Incident listing response.
#[derive(Deserialize)]
struct IncidentsResponse {
    #[serde(default)]
    items: Incidents,
}

impl Client {
    /// Get incidents matching the request filters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the response cannot be decoded.
    pub fn get_incidents(&self, request: &IncidentsRequest) -> Result<Incidents, ClientError> {
        let response: IncidentsResponse = self
            .get_json("/incidents", &request.to_query())
            .map_err(|e| ClientError::new(Operation::GetIncidents, e))?;

        info!("Found {} incidents", response.items.len());
        Ok(response.items)
    }

    /// Get a single incident with its report, services and comments.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API answers with a
    /// non-success status, or the response cannot be decoded.
    pub fn get_incident(&self, id: u64, lang: Lang) -> Result<Incident, ClientError> {
        self.get_json(&format!("/incidents/{id}"), &[("lang", lang.to_string())])
            .map_err(|e| ClientError::new(Operation::GetIncident(id), e))
    }
}
