mod error;
mod loader;
mod settings;
mod types;


pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, read_config};
pub use settings::{OutputFormat, Settings, SettingsOverrides};
pub use types::{GrammarConfig, LoggingConfig, LogrunConfig, OutputConfig};
