use serde::{Deserialize, Serialize};

/// On-disk shape of `logrun.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogrunConfig {
    pub grammar: GrammarConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrammarConfig {
    /// "minimal" or "extended"
    pub tier: String,

    /// Reject extended-tier lines without the status/size/referrer/agent suffix.
    pub require_suffix: bool,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            tier: "extended".to_string(),
            require_suffix: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Field name, validated only once the log has been classified.
    pub group: String,

    /// "pretty", "plain" or "json"
    pub format: String,

    pub localtime: bool,
    pub resolve: bool,
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            group: "address".to_string(),
            format: "pretty".to_string(),
            localtime: false,
            resolve: false,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Emit diagnostics as flattened JSON instead of text.
    pub json: bool,

    /// Filter directive used when RUST_LOG is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            level: "warn".to_string(),
        }
    }
}
