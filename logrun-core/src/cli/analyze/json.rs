use crate::classify::{GrammarTier, UnmatchedLine};
use crate::group::{Group, GroupField};
use crate::pipeline::LineCounts;
use crate::record::{LogRecord, RequestFields};
use crate::resolve::HostResolver;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tier: GrammarTier,
    group_field: GroupField,
    counts: LineCounts,
    groups: Vec<JsonGroup<'a>>,
    unmatched: &'a [UnmatchedLine],
}

#[derive(Debug, Serialize)]
struct JsonGroup<'a> {
    value: String,
    len: usize,
    records: Vec<JsonRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    source_address: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,
    date: &'a str,
    time: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    utc_offset: Option<&'a str>,
    /// RFC 3339, `null` when malformed.
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp_error: Option<String>,
    action: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<&'a RequestFields>,
}

impl<'a> JsonRecord<'a> {
    fn new(record: &'a LogRecord, resolver: &dyn HostResolver) -> Self {
        let (timestamp, timestamp_error) = match record.timestamp() {
            Ok(ts) => (Some(ts.to_rfc3339()), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            source_address: record.source_address(),
            hostname: resolver.lookup(record.source_address()),
            date: record.date_text(),
            time: record.time_text(),
            utc_offset: record.utc_offset_text(),
            timestamp,
            timestamp_error,
            action: record.action_text(),
            request: record.request(),
        }
    }
}

pub fn render_json(
    tier: GrammarTier,
    field: GroupField,
    counts: LineCounts,
    groups: &[Group<'_>],
    unmatched: &[UnmatchedLine],
    resolver: &dyn HostResolver,
) -> serde_json::Result<String> {
    let report = JsonReport {
        tier,
        group_field: field,
        counts,
        groups: groups
            .iter()
            .map(|group| JsonGroup {
                value: group.value.to_string(),
                len: group.len(),
                records: group
                    .records
                    .iter()
                    .map(|record| JsonRecord::new(record, resolver))
                    .collect(),
            })
            .collect(),
        unmatched,
    };

    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}
