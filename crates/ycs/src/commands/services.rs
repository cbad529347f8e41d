//! `ycs services` command implementation.

use clap::Args;
use ycs_client::Service;

use super::ClientArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the services command.
#[derive(Args)]
pub(crate) struct ServicesArgs {
    #[command(flatten)]
    client: ClientArgs,

    /// Only show services running in this region (e.g. ru, kz).
    #[arg(short, long)]
    region: Option<String>,
}

impl ServicesArgs {
    /// Execute the services command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the API request fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let (client, lang) = self.client.connect()?;
        let services = client.get_services(lang)?;

        let listed: Vec<&Service> = match self.region.as_deref() {
            Some(region) => services.in_region(region),
            None => services.iter().collect(),
        };

        if listed.is_empty() {
            output.warning("No services found.");
            return Ok(());
        }

        for service in &listed {
            output.info(&format_service(service));
        }

        let affected = listed.iter().filter(|s| s.incidents.has_open()).count();
        if affected > 0 {
            output.warning(&format!("\n{affected} service(s) with open incidents"));
        }
        Ok(())
    }
}

/// One listing line for a service.
fn format_service(service: &Service) -> String {
    let region = if service.installation_code.is_empty() {
        "-"
    } else {
        &service.installation_code
    };
    format!(
        "{:>5}  {:<4} {:<12} {}",
        service.id, region, service.status, service.name
    )
}
