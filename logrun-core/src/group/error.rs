use crate::classify::GrammarTier;
use crate::group::GroupField;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("unknown group field '{name}' (supported: {supported})")]
    UnknownGroupField { name: String, supported: String },

    #[error("group field '{field}' is not available with the {tier} grammar (available: {available})")]
    FieldUnavailable {
        field: GroupField,
        tier: GrammarTier,
        available: String,
    },
}

impl GroupError {
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownGroupField {
            name: name.into(),
            supported: GroupField::names().join(", "),
        }
    }
}

pub fn group_error_hint(err: &GroupError) -> Option<&'static str> {
    match err {
        GroupError::UnknownGroupField { .. } => Some(
            "Field names are case-insensitive; `ip` and `ua` are accepted as aliases.\n\
             \n\
             Run `logrun fields` to list every field for the active grammar.",
        ),
        GroupError::FieldUnavailable { .. } => Some(
            "Request fields are only captured by the extended grammar.\n\
             \n\
             Re-run with `--tier extended` or set `tier = \"extended\"` under [grammar].",
        ),
    }
}
