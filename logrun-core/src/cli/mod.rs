pub mod analyze;
pub mod conf;
pub mod fields;

use crate::conf::ConfigError;
use crate::group::{GroupError, group_error_hint};

/// Follow-up advice for errors that have one.
pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(err) = err.downcast_ref::<GroupError>() {
        return group_error_hint(err);
    }
    if let Some(err) = err.downcast_ref::<ConfigError>() {
        return conf::config_error_hint(err);
    }
    None
}
