use crate::conf::error::ConfigError;
use crate::conf::types::LogrunConfig;
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "logrun.toml";

/// Load an explicit config file, or fall back to `logrun.toml` in the working
/// directory, or to built-in defaults when neither exists.
pub fn load_config(path: Option<&Path>) -> Result<LogrunConfig, ConfigError> {
    match path {
        Some(path) => read_config(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.is_file() {
                read_config(fallback)
            } else {
                Ok(LogrunConfig::default())
            }
        }
    }
}

/// Hard fail on IO and parse errors.
pub fn read_config(path: &Path) -> Result<LogrunConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config: LogrunConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}
