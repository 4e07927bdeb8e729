use crate::classify::UnmatchedLine;
use crate::group::Group;
use crate::pipeline::LineCounts;
use crate::record::LogRecord;
use crate::resolve::HostResolver;
use chrono::{Local, Utc};
use owo_colors::OwoColorize;
use std::fmt::Write;

const DELIMITER: &str = "=====";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    pub color: bool,
    pub localtime: bool,
}

pub fn render_counts(counts: &LineCounts) -> String {
    let mut out = format!(
        "Matches:     {}\n\
         Nonmatches:  {}\n\
         Total lines: {}\n",
        counts.matched, counts.unmatched, counts.total
    );

    if counts.malformed > 0 {
        let _ = writeln!(out, "Malformed timestamps: {}", counts.malformed);
    }

    out.push('\n');
    out
}

pub fn render_groups(groups: &[Group<'_>], options: TextOptions, resolver: &dyn HostResolver) -> String {
    let mut out = String::new();

    for group in groups {
        let header = format!(
            "{DELIMITER} {}: {} ({} {})",
            group.field,
            group.value,
            group.len(),
            if group.len() == 1 { "record" } else { "records" }
        );
        if options.color {
            let _ = writeln!(out, "{}", header.cyan().bold());
        } else {
            let _ = writeln!(out, "{header}");
        }

        for record in group.records {
            render_record(&mut out, record, options, resolver);
        }

        let _ = writeln!(out, "{DELIMITER}\n");
    }

    out
}

fn render_record(out: &mut String, record: &LogRecord, options: TextOptions, resolver: &dyn HostResolver) {
    let _ = writeln!(out, "Timestamp: {}", format_timestamp(record, options));

    match resolver.lookup(record.source_address()) {
        Some(host) => {
            let _ = writeln!(out, "Hostname:  {host}");
        }
        None => {
            let _ = writeln!(out, "IP:        {}", record.source_address());
        }
    }

    let Some(request) = record.request() else {
        let _ = writeln!(out, "Action:    {}", record.action_text());
        return;
    };

    let _ = writeln!(out, "Method:    {}", request.method);
    let _ = writeln!(out, "Endpoint:  {}", request.endpoint);
    if let Some(status) = &request.status_code {
        let _ = writeln!(out, "Status:    {status}");
    }
    if let Some(agent) = &request.user_agent {
        let _ = writeln!(out, "UA:        {agent}");
    }
}

/// UTC unless local time was asked for. Malformed timestamps show their raw text.
pub fn format_timestamp(record: &LogRecord, options: TextOptions) -> String {
    match record.timestamp() {
        Ok(ts) if options.localtime => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S %z")
            .to_string(),
        Ok(ts) => ts.with_timezone(&Utc).format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        Err(err) => format!("<malformed: {}>", err.raw),
    }
}

pub fn render_unmatched(unmatched: &[UnmatchedLine]) -> String {
    let mut out = String::from("Unmatched lines:\n\n");
    for line in unmatched {
        let _ = writeln!(out, "{:>6}: {}", line.line_number, line.text);
    }
    out
}
