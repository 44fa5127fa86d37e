use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output layout for every expiry date returned by the API (`31/12/2025`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Point in time at which a certificate or a registration expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpiryDate(DateTime<Utc>);

impl ExpiryDate {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Builds an expiry from a UNIX timestamp in seconds.
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Midnight UTC of the given calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| Self(dt.and_utc()))
    }

    /// Renders the date as `dd/mm/yyyy`.
    pub fn format(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// The two upstream sources an expiry can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Ssl,
    Whois,
}

impl LookupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ssl => "ssl",
            Self::Whois => "whois",
        }
    }

    /// Cache key for `domain`, scoped by lookup kind (`whois_example.com`).
    pub fn cache_key(&self, domain: &str) -> String {
        format!("{}_{}", self.as_str(), domain)
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
