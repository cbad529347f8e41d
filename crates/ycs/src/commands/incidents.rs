//! `ycs incidents` command implementation.

use chrono::NaiveDate;
use clap::Args;
use ycs_client::{Incident, IncidentStatus, IncidentsRequest};

use super::{ClientArgs, format_time};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the incidents command.
#[derive(Args)]
pub(crate) struct IncidentsArgs {
    #[command(flatten)]
    client: ClientArgs,

    /// First day of the period (YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day of the period (YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Incident status: open, resolved or withReport.
    #[arg(long)]
    status: Option<IncidentStatus>,

    /// Region code (default: all).
    #[arg(short, long)]
    region: Option<String>,

    /// Availability zone, may be repeated.
    #[arg(short, long = "zone")]
    zones: Vec<String>,
}

impl IncidentsArgs {
    /// Execute the incidents command.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is inverted, configuration fails, or
    /// the API request fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            return Err(CliError::Validation(format!(
                "--from {from} is after --to {to}"
            )));
        }

        let (client, lang) = self.client.connect()?;
        let request = IncidentsRequest {
            lang,
            from: self.from,
            to: self.to,
            status: self.status,
            region: self.region,
            zones: self.zones,
        };
        let incidents = client.get_incidents(&request)?;

        if incidents.is_empty() {
            output.success("No incidents found.");
            return Ok(());
        }

        for incident in &incidents {
            output.info(&format_incident(incident));
        }

        if incidents.has_open() {
            output.warning("\nSome incidents are still open");
        }
        Ok(())
    }
}

/// One listing line for an incident.
fn format_incident(incident: &Incident) -> String {
    format!(
        "#{:<6} {:<9} {}  {}",
        incident.id,
        incident.status,
        format_time(incident.start_date),
        incident.title
    )
}
