use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

//-----------------------------------------------------------------------------
// Line grammars
//-----------------------------------------------------------------------------

/// Address, ` - - `, `[dd/Mon/yyyy:HH:MM:SS`, filler, then the quoted request.
const MINIMAL_PATTERN: &str = concat!(
    r"(?P<address>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}) - - ",
    r"\[(?P<date>\d{1,2}/\w{3}/\d{4}):(?P<time>\d{2}:\d{2}:\d{2})",
    r".+",
    r#"(?P<action>"(?:GET|POST|HEAD) /[^"]* HTTP/\d\.\d")"#,
);

/// Same prefix as the minimal grammar plus an optional UTC offset inside the
/// brackets, a split request clause and the optional
/// `status size "referrer" "user-agent"` suffix.
const EXTENDED_PATTERN: &str = concat!(
    r"(?P<address>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}) - - ",
    r"\[(?P<date>\d{1,2}/\w{3}/\d{4}):(?P<time>\d{2}:\d{2}:\d{2})(?: (?P<offset>[+-]\d{4}))?",
    r".+",
    r#"(?P<action>"(?P<method>GET|POST|HEAD) (?P<endpoint>/[^"]*) (?P<protocol>HTTP/\d\.\d)""#,
    r#"(?: (?P<status>\d{3}) (?P<size>\d+|-) "(?P<referrer>[^"]*)" "(?P<user_agent>[^"]*)")?)"#,
);

static MINIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(MINIMAL_PATTERN).expect("valid regex literal"));

static EXTENDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(EXTENDED_PATTERN).expect("valid regex literal"));

//-----------------------------------------------------------------------------
// Tier selection
//-----------------------------------------------------------------------------

/// Which of the two line grammars a classifier runs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GrammarTier {
    /// Address, date, time and the quoted request as one opaque action.
    Minimal,
    /// Everything the minimal tier captures plus the structured request fields.
    #[default]
    Extended,
}

impl GrammarTier {
    pub const ALL: [GrammarTier; 2] = [GrammarTier::Minimal, GrammarTier::Extended];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrammarTier::Minimal => "minimal",
            GrammarTier::Extended => "extended",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(name.trim()))
    }

    pub fn has_request_fields(&self) -> bool {
        matches!(self, GrammarTier::Extended)
    }

    pub(crate) fn pattern(&self) -> &'static Regex {
        match self {
            GrammarTier::Minimal => &MINIMAL,
            GrammarTier::Extended => &EXTENDED,
        }
    }
}

impl fmt::Display for GrammarTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
