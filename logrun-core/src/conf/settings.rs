use crate::classify::GrammarTier;
use crate::conf::error::ConfigError;
use crate::conf::types::LogrunConfig;
use serde::Serialize;
use std::fmt;

/// How the analysis is presented on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Delimited blocks with colour
    #[default]
    Pretty,
    /// Delimited blocks without colour
    Plain,
    /// A single JSON document
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Pretty, OutputFormat::Plain, OutputFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values given on the command line. `None` defers to the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub tier: Option<GrammarTier>,
    pub require_suffix: Option<bool>,
    pub group: Option<String>,
    pub format: Option<OutputFormat>,
    pub localtime: Option<bool>,
    pub resolve: Option<bool>,
    pub verbose: Option<bool>,
    pub log_json: Option<bool>,
}

/// Effective settings for one run: CLI flag, then config file, then default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tier: GrammarTier,
    pub require_suffix: bool,
    /// Unvalidated field name; see `GroupSelector::resolve`.
    pub group: String,
    pub format: OutputFormat,
    pub localtime: bool,
    pub resolve: bool,
    pub verbose: bool,
    pub log_json: bool,
    pub log_level: String,
}

impl Settings {
    pub fn resolve(config: &LogrunConfig, overrides: SettingsOverrides) -> Result<Self, ConfigError> {
        let tier = match overrides.tier {
            Some(tier) => tier,
            None => GrammarTier::from_name(&config.grammar.tier).ok_or_else(|| {
                ConfigError::UnknownTier {
                    tier: config.grammar.tier.clone(),
                }
            })?,
        };

        let format = match overrides.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.format).ok_or_else(|| {
                ConfigError::UnknownFormat {
                    format: config.output.format.clone(),
                }
            })?,
        };

        Ok(Self {
            tier,
            require_suffix: overrides
                .require_suffix
                .unwrap_or(config.grammar.require_suffix),
            group: overrides
                .group
                .unwrap_or_else(|| config.output.group.clone()),
            format,
            localtime: overrides.localtime.unwrap_or(config.output.localtime),
            resolve: overrides.resolve.unwrap_or(config.output.resolve),
            verbose: overrides.verbose.unwrap_or(config.output.verbose),
            log_json: overrides.log_json.unwrap_or(config.logging.json),
            log_level: config.logging.level.clone(),
        })
    }
}
