mod error;

pub use error::MalformedTimestamp;

use crate::classify::timestamp::derive_timestamp;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One access-log line that satisfied the active grammar.
///
/// Records are built once by the classifier and never mutated afterwards.
/// The timestamp is derived from the captured date/time text inside the
/// constructor, so the two can not drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    source_address: String,
    date_text: String,
    time_text: String,
    utc_offset_text: Option<String>,
    timestamp: Result<DateTime<FixedOffset>, MalformedTimestamp>,
    action_text: String,
    request: Option<RequestFields>,
}

/// Structured request clause, only produced by the extended grammar.
///
/// Everything is kept verbatim. The trailing status/size/referrer/user-agent
/// suffix is optional in the grammar, hence the `Option`s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestFields {
    pub method: String,
    pub endpoint: String,
    pub protocol_version: String,
    pub status_code: Option<String>,
    pub body_size: Option<String>,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

impl RequestFields {
    /// True when the status/size/referrer/user-agent suffix was present.
    pub fn has_suffix(&self) -> bool {
        self.status_code.is_some()
    }
}

/// Raw captures handed over by the classifier.
pub(crate) struct CapturedLine<'a> {
    pub address: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub utc_offset: Option<&'a str>,
    pub action: &'a str,
    pub request: Option<RequestFields>,
}

impl LogRecord {
    pub(crate) fn from_captured(line: CapturedLine<'_>) -> Self {
        Self {
            source_address: line.address.to_string(),
            date_text: line.date.to_string(),
            time_text: line.time.to_string(),
            utc_offset_text: line.utc_offset.map(str::to_string),
            timestamp: derive_timestamp(line.date, line.time, line.utc_offset),
            action_text: line.action.to_string(),
            request: line.request,
        }
    }

    pub fn source_address(&self) -> &str {
        &self.source_address
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn utc_offset_text(&self) -> Option<&str> {
        self.utc_offset_text.as_deref()
    }

    /// The ordering key, or the reason it could not be derived.
    pub fn timestamp(&self) -> Result<&DateTime<FixedOffset>, &MalformedTimestamp> {
        self.timestamp.as_ref()
    }

    pub fn is_malformed(&self) -> bool {
        self.timestamp.is_err()
    }

    pub fn action_text(&self) -> &str {
        &self.action_text
    }

    pub fn request(&self) -> Option<&RequestFields> {
        self.request.as_ref()
    }
}
