//! CLI command implementations.

pub(crate) mod incident;
pub(crate) mod incidents;
pub(crate) mod services;

pub(crate) use incident::IncidentArgs;
pub(crate) use incidents::IncidentsArgs;
pub(crate) use services::ServicesArgs;

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Args;
use tracing::debug;
use ycs_client::{Client, Lang};
use ycs_config::{CliSettings, Config};

use crate::error::CliError;

/// Connection options shared by all commands.
#[derive(Args)]
pub(crate) struct ClientArgs {
    /// Path to configuration file (default: auto-discover ycs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Status API base URL (overrides config).
    #[arg(long, env = "YCS_API_URL")]
    api_url: Option<String>,

    /// Response language: ru or en (overrides config).
    #[arg(short, long)]
    lang: Option<Lang>,

    /// Request timeout in seconds (overrides config).
    #[arg(long)]
    timeout: Option<f64>,

    /// Requests per second, 0 for no limit (overrides config).
    #[arg(long)]
    rate_limit: Option<f64>,
}

impl ClientArgs {
    /// Load configuration and build the API client.
    ///
    /// Returns the client together with the effective response language.
    pub(crate) fn connect(self) -> Result<(Client, Lang), CliError> {
        let cli_settings = CliSettings {
            api_url: self.api_url,
            lang: self.lang.map(|lang| lang.to_string()),
            timeout: self.timeout,
            rate_limit: self.rate_limit,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            debug!("Using config {}", path.display());
        }

        let settings = &config.client;
        let lang = settings.lang.parse::<Lang>()?;

        let mut builder = Client::builder()
            .api_url(&settings.api_url)
            .timeout(settings.timeout_duration())
            .rate_limit(settings.rate_limit);
        if let Some(app_name) = &settings.app_name {
            builder = builder.user_agent(app_name, settings.app_version.as_deref().unwrap_or(""));
        }

        Ok((builder.build(), lang))
    }
}

/// Format a timestamp for listings, `-` when absent.
pub(crate) fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(
        || "-".to_owned(),
        |t| t.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}

/// Format a duration as hours and minutes.
pub(crate) fn format_duration(duration: Duration) -> String {
    let minutes = duration.as_secs() / 60;
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Join a list for display, `-` when empty.
pub(crate) fn join_or_dash(items: &[&str]) -> String {
    if items.is_empty() {
        "-".to_owned()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_time() {
        let time = Utc.with_ymd_and_hms(2025, 1, 22, 10, 5, 0).unwrap();
        assert_eq!(format_time(Some(time)), "2025-01-22 10:05 UTC");
        assert_eq!(format_time(None), "-");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::ZERO), "0m");
        assert_eq!(format_duration(Duration::from_secs(59)), "0m");
        assert_eq!(format_duration(Duration::from_secs(45 * 60)), "45m");
        assert_eq!(format_duration(Duration::from_secs(3 * 3600)), "3h");
        assert_eq!(
            format_duration(Duration::from_secs(7 * 3600 + 2 * 60)),
            "7h 2m"
        );
    }

    #[test]
    fn test_join_or_dash() {
        assert_eq!(join_or_dash(&[]), "-");
        assert_eq!(join_or_dash(&["ru", "kz"]), "ru, kz");
    }
}
