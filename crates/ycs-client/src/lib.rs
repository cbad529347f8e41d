//! Client for the cloud status API.
//!
//! This crate provides:
//! - [`Client`]: sync HTTP client with rate limiting and request timeout
//! - Records ([`Service`], [`Incident`], [`Comment`], ...) with read-only
//!   accessors
//! - Incident reports and comments rendered to lightweight markup via
//!   [`Incident::report_markdown`] and [`Comment::markdown`]
//!
//! # Example
//!
//! ```no_run
//! use ycs_client::{Client, IncidentsRequest, Lang};
//!
//! let client = Client::builder()
//!     .user_agent("status-bot", "1.0.0")
//!     .rate_limit(2.0)
//!     .build();
//!
//! let incidents = client.get_incidents(&IncidentsRequest::default())?;
//! if incidents.has_open() {
//!     println!("Something is broken");
//! }
//!
//! let incident = client.get_incident(972, Lang::En)?;
//! println!("{}", incident.report_markdown());
//! # Ok::<(), ycs_client::ClientError>(())
//! ```

// API client
mod client;
pub use client::{Client, ClientBuilder, IncidentsRequest};

// Constants and enumerations
pub mod consts;
pub use consts::{IncidentStatus, Lang, ParseValueError};

// Records
mod types;
pub use types::{
    Comment, Comments, Incident, Incidents, Level, Region, Regions, Service, Services, Zone,
    Zones,
};

// Errors
pub mod error;
pub use error::{ClientError, Operation, RequestError};

#[cfg(test)]
mod test_server;
