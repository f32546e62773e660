//! Report identifiers
//!
//! A report id is derived from the wall-clock second the summary was
//! generated, so two summaries produced within the same second share an id.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const PREFIX: &str = "RPT-";
const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Identifier of a single summary generation, e.g. `RPT-20240305-140709`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Build the id for a summary generated at `now`
    pub fn from_timestamp(now: NaiveDateTime) -> Self {
        Self(format!("{}{}", PREFIX, now.format(TIMESTAMP_FORMAT)))
    }

    /// Parse an id of the form `RPT-YYYYMMDD-HHMMSS`
    ///
    /// The digits must also denote a real date and time.
    pub fn parse(s: &str) -> Option<Self> {
        let stamp = s.strip_prefix(PREFIX)?;
        let bytes = stamp.as_bytes();
        let shaped = bytes.len() == 15
            && bytes[8] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 8 || b.is_ascii_digit());
        if !shaped {
            return None;
        }

        NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
            .ok()
            .map(|_| Self(s.to_string()))
    }

    /// The generation time encoded in the id
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let stamp = self.0.strip_prefix(PREFIX)?;
        NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
