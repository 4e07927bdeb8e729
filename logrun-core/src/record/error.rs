use thiserror::Error;

/// The line matched the grammar but its date/time text is not a valid instant.
///
/// The record is kept and carries this instead of a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed timestamp '{raw}': {source}")]
pub struct MalformedTimestamp {
    /// The exact text that was handed to the parser.
    pub raw: String,
    #[source]
    pub source: chrono::ParseError,
}
