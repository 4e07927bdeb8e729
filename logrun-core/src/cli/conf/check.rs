use crate::conf::{ConfigError, Settings, SettingsOverrides, load_config};
use crate::group::{GroupField, GroupSelector};
use anyhow::Result;
use std::path::Path;

pub fn check(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let settings = Settings::resolve(&config, SettingsOverrides::default())?;

    // The group field can only be checked once the tier is known.
    let selector = GroupSelector::resolve(&settings.group, settings.tier)?;

    println!("✔ Config loaded successfully");
    println!("✔ grammar tier: {}", settings.tier);
    if settings.require_suffix && settings.tier.has_request_fields() {
        println!("✔ suffix required");
    }
    println!("✔ group field: {}", selector.field());
    println!("✔ output format: {}", settings.format);
    println!(
        "✔ {} of {} fields available",
        GroupField::available_for(settings.tier).count(),
        GroupField::ALL.len()
    );

    Ok(())
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Pass an existing file with --config, or create one with:\n\
             \n\
             logrun config init",
        ),

        ConfigError::Parse { .. } => Some(
            "Known sections are [grammar], [output] and [logging].\n\
             \n\
             Example:\n\
             \n\
             [grammar]\n\
             tier = \"extended\"\n\
             \n\
             [output]\n\
             group = \"address\"",
        ),

        ConfigError::UnknownTier { .. } => Some("Valid tiers are \"minimal\" and \"extended\"."),

        ConfigError::UnknownFormat { .. } => {
            Some("Valid formats are \"pretty\", \"plain\" and \"json\".")
        }
    }
}
