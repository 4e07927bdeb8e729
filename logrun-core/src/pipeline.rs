//! Analysis pipeline
//!
//! The overall data processing architecture is:
//!
//! byte buffer
//! split_lines
//! Classifier::classify_all
//! order_chronologically
//! Analysis
//! group_runs (per requested field)
//!
//! Every stage finishes before the next one starts. Grouping is the only step
//! that can fail, and it only runs after the counts are known.

use crate::classify::{Classifier, GrammarTier, UnmatchedLine};
use crate::group::{Group, GroupError, GroupSelector, group_runs};
use crate::order::order_chronologically;
use crate::record::LogRecord;
use serde::Serialize;

/// Line totals reported alongside the groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub matched: usize,
    pub unmatched: usize,
    pub total: usize,
    /// Matched records whose timestamp could not be derived.
    pub malformed: usize,
}

/// Classified and chronologically ordered content of one log buffer.
#[derive(Debug)]
pub struct Analysis {
    tier: GrammarTier,
    records: Vec<LogRecord>,
    unmatched: Vec<UnmatchedLine>,
    total_lines: usize,
}

impl Analysis {
    pub fn run(buffer: &[u8], classifier: &Classifier) -> Self {
        let text = String::from_utf8_lossy(buffer);
        let lines = split_lines(&text);
        let total_lines = lines.len();

        let classified = classifier.classify_all(lines);
        let records = order_chronologically(classified.matched);

        let analysis = Self {
            tier: classifier.tier(),
            records,
            unmatched: classified.unmatched,
            total_lines,
        };

        let counts = analysis.counts();
        tracing::info!(
            tier = %analysis.tier,
            matched = counts.matched,
            unmatched = counts.unmatched,
            malformed = counts.malformed,
            total = counts.total,
            "classified log lines"
        );

        analysis
    }

    pub fn tier(&self) -> GrammarTier {
        self.tier
    }

    /// Matched records, oldest first.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn unmatched(&self) -> &[UnmatchedLine] {
        &self.unmatched
    }

    pub fn counts(&self) -> LineCounts {
        LineCounts {
            matched: self.records.len(),
            unmatched: self.unmatched.len(),
            total: self.total_lines,
            malformed: self.records.iter().filter(|r| r.is_malformed()).count(),
        }
    }

    /// Resolve `field` against this analysis' tier, then group.
    ///
    /// Nothing is grouped when the name is rejected.
    pub fn group_by(&self, field: &str) -> Result<Vec<Group<'_>>, GroupError> {
        let selector = GroupSelector::resolve(field, self.tier)?;
        Ok(self.group_with(selector))
    }

    pub fn group_with(&self, selector: GroupSelector) -> Vec<Group<'_>> {
        group_runs(&self.records, selector)
    }
}

/// Split on `\n`. A terminating newline does not introduce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupField;
    use crate::test_support::AccessLine;
    use pretty_assertions::assert_eq;

    fn buffer(lines: &[String]) -> Vec<u8> {
        let mut out = lines.join("\n");
        out.push('\n');
        out.into_bytes()
    }

    #[test]
    fn split_lines_drops_only_the_terminating_empty_segment() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn extended_scenario_groups_one_address_in_time_order() {
        // Arrange
        let input = concat!(
            r#"203.0.113.5 - - [08/Apr/2018:07:54:56 +0000] "x" "GET /b HTTP/1.1" 200 50 "-" "ua2""#,
            "\n",
            r#"203.0.113.5 - - [08/Apr/2018:07:54:55 +0000] "x" "GET /a HTTP/1.1" 200 100 "-" "ua1""#,
            "\n",
            "\"garbage\"\n",
        );
        let classifier = Classifier::new(GrammarTier::Extended);

        // Act
        let analysis = Analysis::run(input.as_bytes(), &classifier);
        let groups = analysis.group_by("address").unwrap();

        // Assert
        assert_eq!(
            analysis.counts(),
            LineCounts {
                matched: 2,
                unmatched: 1,
                total: 3,
                malformed: 0,
            }
        );
        assert_eq!(groups.len(), 1);
        let endpoints: Vec<&str> = groups[0]
            .records
            .iter()
            .map(|r| r.request().map_or("", |q| q.endpoint.as_str()))
            .collect();
        assert_eq!(endpoints, vec!["/a", "/b"]);
    }

    #[test]
    fn unknown_field_is_rejected_after_counts_are_available() {
        // Arrange
        let lines = vec![
            AccessLine::new("10.0.0.1").build(),
            "garbage".to_string(),
        ];
        let analysis = Analysis::run(&buffer(&lines), &Classifier::new(GrammarTier::Extended));

        // Act
        let result = analysis.group_by("Nonexistent");

        // Assert
        assert!(matches!(result, Err(GroupError::UnknownGroupField { .. })));
        assert_eq!(analysis.counts().matched, 1);
        assert_eq!(analysis.counts().unmatched, 1);
    }

    #[test]
    fn malformed_records_are_counted_and_ordered_last() {
        // Arrange
        let lines = vec![
            AccessLine::new("10.0.0.9").on("31/Feb/2018").build(),
            AccessLine::new("10.0.0.1").at("08:00:00").build(),
        ];

        // Act
        let analysis = Analysis::run(&buffer(&lines), &Classifier::new(GrammarTier::Extended));

        // Assert
        assert_eq!(analysis.counts().malformed, 1);
        assert_eq!(analysis.records()[0].source_address(), "10.0.0.1");
        assert_eq!(analysis.records()[1].source_address(), "10.0.0.9");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        // Arrange
        let mut input = AccessLine::new("10.0.0.1").build().into_bytes();
        input.extend_from_slice(b"\n\xff\xfe broken\n");

        // Act
        let analysis = Analysis::run(&input, &Classifier::new(GrammarTier::Extended));

        // Assert
        assert_eq!(analysis.counts().matched, 1);
        assert_eq!(analysis.unmatched()[0].text, "\u{fffd}\u{fffd} broken");
    }

    #[test]
    fn group_with_uses_a_preresolved_selector() {
        // Arrange
        let lines = vec![
            AccessLine::new("10.0.0.1").at("07:00:00").method("GET").build(),
            AccessLine::new("10.0.0.2").at("07:00:01").method("GET").build(),
            AccessLine::new("10.0.0.1").at("07:00:02").method("POST").build(),
        ];
        let analysis = Analysis::run(&buffer(&lines), &Classifier::new(GrammarTier::Extended));
        let selector = GroupSelector::for_field(GroupField::Method, analysis.tier()).unwrap();

        // Act
        let groups = analysis.group_with(selector);

        // Assert
        assert_eq!(groups.iter().map(Group::len).collect::<Vec<_>>(), vec![2, 1]);
    }
}
