//! Line classification
//!
//! Turns raw access-log lines into [`LogRecord`]s. Every line ends up in exactly
//! one of two buckets: it either satisfies the active grammar and becomes a
//! record, or it is kept verbatim as an [`UnmatchedLine`]. Both buckets keep the
//! order in which the lines were encountered.
//!
//! Two grammars exist (see [`GrammarTier`]). The tier is picked when the
//! [`Classifier`] is built and never changes afterwards.

mod grammar;
pub(crate) mod timestamp;


pub use grammar::GrammarTier;

use crate::record::{CapturedLine, LogRecord, RequestFields};
use regex::{Captures, Regex};
use serde::Serialize;

/// Outcome of classifying a single line.
#[derive(Debug)]
pub enum Classification<'a> {
    Matched(LogRecord),
    Unmatched(&'a str),
}

/// A line that did not satisfy the grammar, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedLine {
    /// 1-based position in the input.
    pub line_number: usize,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct ClassifiedLines {
    pub matched: Vec<LogRecord>,
    pub unmatched: Vec<UnmatchedLine>,
}

impl ClassifiedLines {
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }
}

#[derive(Debug, Clone)]
pub struct Classifier {
    tier: GrammarTier,
    require_suffix: bool,
    pattern: &'static Regex,
}

impl Classifier {
    pub fn new(tier: GrammarTier) -> Self {
        Self {
            tier,
            require_suffix: false,
            pattern: tier.pattern(),
        }
    }

    /// Route extended-tier lines that lack the `status size "ref" "ua"` suffix
    /// to the unmatched bucket instead of accepting them with empty fields.
    ///
    /// Has no effect on the minimal tier.
    pub fn with_required_suffix(mut self, required: bool) -> Self {
        self.require_suffix = required;
        self
    }

    pub fn tier(&self) -> GrammarTier {
        self.tier
    }

    pub fn requires_suffix(&self) -> bool {
        self.require_suffix
    }

    pub fn classify<'a>(&self, line: &'a str) -> Classification<'a> {
        let Some(caps) = self.pattern.captures(line) else {
            return Classification::Unmatched(line);
        };

        let request = match self.tier {
            GrammarTier::Minimal => None,
            GrammarTier::Extended => Some(request_fields(&caps)),
        };

        if self.require_suffix && request.as_ref().is_some_and(|r| !r.has_suffix()) {
            return Classification::Unmatched(line);
        }

        Classification::Matched(LogRecord::from_captured(CapturedLine {
            address: capture(&caps, "address"),
            date: capture(&caps, "date"),
            time: capture(&caps, "time"),
            utc_offset: caps.name("offset").map(|m| m.as_str()),
            action: capture(&caps, "action"),
            request,
        }))
    }

    pub fn classify_all<'a, I>(&self, lines: I) -> ClassifiedLines
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut out = ClassifiedLines::default();

        for (index, line) in lines.into_iter().enumerate() {
            match self.classify(line) {
                Classification::Matched(record) => {
                    if let Err(err) = record.timestamp() {
                        tracing::warn!(
                            line_number = index + 1,
                            error = %err,
                            "record kept with malformed timestamp"
                        );
                    }
                    out.matched.push(record);
                }
                Classification::Unmatched(text) => {
                    tracing::debug!(
                        line_number = index + 1,
                        "line did not match the {} grammar",
                        self.tier
                    );
                    out.unmatched.push(UnmatchedLine {
                        line_number: index + 1,
                        text: text.to_string(),
                    });
                }
            }
        }

        out
    }
}

fn capture<'h>(caps: &Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn optional<'h>(caps: &Captures<'h>, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_string())
}

fn request_fields(caps: &Captures<'_>) -> RequestFields {
    RequestFields {
        method: capture(caps, "method").to_string(),
        endpoint: capture(caps, "endpoint").to_string(),
        protocol_version: capture(caps, "protocol").to_string(),
        status_code: optional(caps, "status"),
        body_size: optional(caps, "size"),
        referrer: optional(caps, "referrer"),
        user_agent: optional(caps, "user_agent"),
    }
}
