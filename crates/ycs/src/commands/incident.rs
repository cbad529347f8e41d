//! `ycs incident` command implementation.

use clap::Args;
use ycs_client::{Incident, Lang};

use super::{ClientArgs, format_duration, format_time, join_or_dash};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the incident command.
#[derive(Args)]
pub(crate) struct IncidentArgs {
    #[command(flatten)]
    client: ClientArgs,

    /// Incident ID.
    id: u64,

    /// Also print incident comments.
    #[arg(long)]
    comments: bool,
}

impl IncidentArgs {
    /// Execute the incident command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the API request fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (client, lang) = self.client.connect()?;
        let incident = client.get_incident(self.id, lang)?;

        output.highlight(&format!("#{} {}", incident.id, incident.title));
        for line in summary_lines(&incident, lang) {
            output.info(&line);
        }

        let report = incident.report_markdown();
        if !report.is_empty() {
            output.separator();
            output.info(report.trim_end());
        }

        if self.comments && !incident.comments.is_empty() {
            output.separator();
            for comment in &incident.comments {
                output.highlight(&format!(
                    "[{}] {}",
                    format_time(comment.created_at),
                    comment.kind
                ));
                output.info(comment.markdown().trim_end());
            }
        }

        if !incident.is_resolved() {
            output.warning("\nIncident is still open");
        }
        Ok(())
    }
}

/// Key facts about an incident, one per line.
fn summary_lines(incident: &Incident, lang: Lang) -> Vec<String> {
    let level = incident
        .level
        .as_ref()
        .map_or("-", |level| level.label.as_str());
    let duration = if incident.is_resolved() {
        format_duration(incident.duration())
    } else {
        "ongoing".to_owned()
    };

    vec![
        format!("Status:   {}", incident.status),
        format!("Level:    {level}"),
        format!("Started:  {}", format_time(incident.start_date)),
        format!("Ended:    {}", format_time(incident.end_date)),
        format!("Duration: {duration}"),
        format!("Regions:  {}", join_or_dash(&incident.region_list())),
        format!("Zones:    {}", join_or_dash(&incident.zone_list())),
        format!("Services: {}", join_or_dash(&incident.service_list())),
        format!("URL:      {}", incident.url(lang)),
    ]
}
