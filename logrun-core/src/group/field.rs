use crate::classify::GrammarTier;
use crate::group::error::GroupError;
use crate::record::LogRecord;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of record attributes a sequence can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    Address,
    Date,
    Time,
    Timestamp,
    Action,
    Method,
    Endpoint,
    Protocol,
    Status,
    Size,
    Referrer,
    UserAgent,
}

impl GroupField {
    pub const ALL: [GroupField; 12] = [
        GroupField::Address,
        GroupField::Date,
        GroupField::Time,
        GroupField::Timestamp,
        GroupField::Action,
        GroupField::Method,
        GroupField::Endpoint,
        GroupField::Protocol,
        GroupField::Status,
        GroupField::Size,
        GroupField::Referrer,
        GroupField::UserAgent,
    ];

    /// Canonical name, as accepted on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupField::Address => "address",
            GroupField::Date => "date",
            GroupField::Time => "time",
            GroupField::Timestamp => "timestamp",
            GroupField::Action => "action",
            GroupField::Method => "method",
            GroupField::Endpoint => "endpoint",
            GroupField::Protocol => "protocol",
            GroupField::Status => "status",
            GroupField::Size => "size",
            GroupField::Referrer => "referrer",
            GroupField::UserAgent => "user_agent",
        }
    }

    /// Alternative spellings, compared case-insensitively.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            GroupField::Address => &["ip", "source_address"],
            GroupField::Protocol => &["protocol_version", "http_version"],
            GroupField::Status => &["status_code", "response_code"],
            GroupField::Size => &["body_size"],
            GroupField::UserAgent => &["ua", "useragent", "user-agent"],
            _ => &[],
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GroupField::Address => "client address as written in the line",
            GroupField::Date => "raw date text (dd/Mon/yyyy)",
            GroupField::Time => "raw time text (HH:MM:SS)",
            GroupField::Timestamp => "derived instant",
            GroupField::Action => "raw quoted request clause",
            GroupField::Method => "request method",
            GroupField::Endpoint => "request path",
            GroupField::Protocol => "HTTP protocol version",
            GroupField::Status => "response status code",
            GroupField::Size => "response body size",
            GroupField::Referrer => "referrer",
            GroupField::UserAgent => "user agent",
        }
    }

    /// Fields read from the structured request clause only exist in the
    /// extended grammar.
    pub fn requires_request(&self) -> bool {
        matches!(
            self,
            GroupField::Method
                | GroupField::Endpoint
                | GroupField::Protocol
                | GroupField::Status
                | GroupField::Size
                | GroupField::Referrer
                | GroupField::UserAgent
        )
    }

    pub fn is_available(&self, tier: GrammarTier) -> bool {
        !self.requires_request() || tier.has_request_fields()
    }

    pub fn available_for(tier: GrammarTier) -> impl Iterator<Item = GroupField> {
        Self::ALL.into_iter().filter(move |f| f.is_available(tier))
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(GroupField::as_str).collect()
    }

    /// The value this field selects from a record.
    pub fn value_of<'a>(&self, record: &'a LogRecord) -> FieldValue<'a> {
        let request = record.request();
        match self {
            GroupField::Address => FieldValue::Text(record.source_address()),
            GroupField::Date => FieldValue::Text(record.date_text()),
            GroupField::Time => FieldValue::Text(record.time_text()),
            GroupField::Timestamp => match record.timestamp() {
                Ok(instant) => FieldValue::Instant(*instant),
                Err(err) => FieldValue::Malformed(&err.raw),
            },
            GroupField::Action => FieldValue::Text(record.action_text()),
            GroupField::Method => FieldValue::text(request.map(|r| r.method.as_str())),
            GroupField::Endpoint => FieldValue::text(request.map(|r| r.endpoint.as_str())),
            GroupField::Protocol => {
                FieldValue::text(request.map(|r| r.protocol_version.as_str()))
            }
            GroupField::Status => FieldValue::text(request.and_then(|r| r.status_code.as_deref())),
            GroupField::Size => FieldValue::text(request.and_then(|r| r.body_size.as_deref())),
            GroupField::Referrer => FieldValue::text(request.and_then(|r| r.referrer.as_deref())),
            GroupField::UserAgent => {
                FieldValue::text(request.and_then(|r| r.user_agent.as_deref()))
            }
        }
    }
}

impl FromStr for GroupField {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| {
                field.as_str().eq_ignore_ascii_case(wanted)
                    || field
                        .aliases()
                        .iter()
                        .any(|alias| alias.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| GroupError::unknown_field(s))
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected attribute value, compared by value.
///
/// Instants compare as absolute points in time, so the same moment written
/// with two different offsets is one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Instant(DateTime<FixedOffset>),
    /// Timestamp text that could not be parsed.
    Malformed(&'a str),
    /// Optional request field not present on this record.
    Absent,
}

impl<'a> FieldValue<'a> {
    fn text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::Text)
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Instant(instant) => write!(f, "{}", instant.to_rfc3339()),
            FieldValue::Malformed(raw) => write!(f, "<malformed: {raw}>"),
            FieldValue::Absent => f.write_str("<absent>"),
        }
    }
}

/// A group field that has been checked against the active grammar tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSelector {
    field: GroupField,
}

impl GroupSelector {
    /// Resolve a user-supplied field name for records produced by `tier`.
    pub fn resolve(name: &str, tier: GrammarTier) -> Result<Self, GroupError> {
        let field: GroupField = name.parse()?;
        Self::for_field(field, tier)
    }

    pub fn for_field(field: GroupField, tier: GrammarTier) -> Result<Self, GroupError> {
        if !field.is_available(tier) {
            return Err(GroupError::FieldUnavailable {
                field,
                tier,
                available: GroupField::available_for(tier)
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
        Ok(Self { field })
    }

    pub fn field(&self) -> GroupField {
        self.field
    }
}
