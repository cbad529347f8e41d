//! ycs CLI - cloud status API client.
//!
//! Provides commands for:
//! - `services`: List services and their status
//! - `incidents`: List incidents matching filters
//! - `incident`: Show one incident with its rendered report

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{IncidentArgs, IncidentsArgs, ServicesArgs};
use output::Output;

/// ycs - cloud status API client.
#[derive(Parser)]
#[command(name = "ycs", version, about)]
struct Cli {
    /// Enable verbose output (log every API request).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List services and their current status.
    Services(ServicesArgs),
    /// List incidents.
    Incidents(IncidentsArgs),
    /// Show a single incident.
    Incident(IncidentArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Services(args) => args.execute(&output),
        Commands::Incidents(args) => args.execute(&output),
        Commands::Incident(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_incidents_filters() {
        let cli = Cli::try_parse_from([
            "ycs",
            "incidents",
            "--lang",
            "en",
            "--from",
            "2025-01-01",
            "--status",
            "resolved",
            "--zone",
            "ru-central1-a",
            "--zone",
            "ru-central1-b",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Incidents(_)));
    }

    #[test]
    fn test_rejects_unknown_lang() {
        assert!(Cli::try_parse_from(["ycs", "services", "--lang", "de"]).is_err());
    }

    #[test]
    fn test_rejects_bad_date() {
        assert!(Cli::try_parse_from(["ycs", "incidents", "--from", "22.01.2025"]).is_err());
    }

    #[test]
    fn test_incident_requires_id() {
        assert!(Cli::try_parse_from(["ycs", "incident"]).is_err());
        assert!(Cli::try_parse_from(["ycs", "incident", "972", "--comments"]).is_ok());
    }
}
