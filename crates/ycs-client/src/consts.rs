//! Well-known values used by the status API.

use std::fmt;
use std::str::FromStr;

/// Default API base URL.
pub const DEFAULT_API_URL: &str = "https://status.yandex.cloud/api";

/// Public status page, used to build incident links.
pub const STATUS_PAGE_URL: &str = "https://status.yandex.cloud";

pub const REGION_ALL: &str = "all";
pub const REGION_RU: &str = "ru";
pub const REGION_KZ: &str = "kz";

/// All region (installation) codes, including the `all` pseudo-region.
pub const ALL_REGIONS: &[&str] = &[REGION_ALL, REGION_KZ, REGION_RU];

pub const ZONE_RU_A: &str = "ru-central1-a";
pub const ZONE_RU_B: &str = "ru-central1-b";
pub const ZONE_RU_C: &str = "ru-central1-c";
pub const ZONE_RU_D: &str = "ru-central1-d";
pub const ZONE_KZ_A: &str = "kz1-a";

/// All availability zones.
pub const ALL_ZONES: &[&str] = &[ZONE_KZ_A, ZONE_RU_A, ZONE_RU_B, ZONE_RU_C, ZONE_RU_D];

pub const STATUS_OPEN: &str = "open";
pub const STATUS_RESOLVED: &str = "resolved";

pub const COMMENT_INVESTIGATION: &str = "investigation";
pub const COMMENT_UPDATE: &str = "update";
pub const COMMENT_RESOLVED: &str = "resolved";

pub const LEVEL_MINOR: &str = "Minor";
pub const LEVEL_UNAVAILABLE: &str = "Unavailable";

pub const LEVEL_ID_MINOR: u8 = 1;
pub const LEVEL_ID_UNAVAILABLE: u8 = 2;

/// Response language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    Ru,
    En,
}

impl Lang {
    /// All supported languages.
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ru];

    /// Language code as sent to the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            _ => Err(ParseValueError {
                kind: "language",
                value: s.to_owned(),
                expected: "en, ru",
            }),
        }
    }
}

/// Incident status filter for incident listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentStatus {
    Open,
    Resolved,
    /// Resolved incidents with a published report.
    WithReport,
}

impl IncidentStatus {
    /// Status value as sent to the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => STATUS_OPEN,
            Self::Resolved => STATUS_RESOLVED,
            Self::WithReport => "withReport",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentStatus {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_OPEN => Ok(Self::Open),
            STATUS_RESOLVED => Ok(Self::Resolved),
            "withReport" => Ok(Self::WithReport),
            _ => Err(ParseValueError {
                kind: "incident status",
                value: s.to_owned(),
                expected: "open, resolved, withReport",
            }),
        }
    }
}

/// Unknown value for one of the enumerations above.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported {kind} {value:?}, expected one of: {expected}")]
pub struct ParseValueError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}
