use crate::classify::GrammarTier;
use crate::group::GroupField;
use std::fmt::Write;

/// Table of group fields. With a tier, only the fields it can serve are
/// listed; without one, extended-only fields are marked.
pub fn render_fields(tier: Option<GrammarTier>) -> String {
    let width = GroupField::ALL
        .iter()
        .map(|f| f.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for field in GroupField::ALL {
        let note = match tier {
            Some(tier) if !field.is_available(tier) => continue,
            None if field.requires_request() => " (extended only)",
            _ => "",
        };
        let _ = writeln!(
            out,
            "{:<width$}  {}{note}",
            field.as_str(),
            field.description()
        );
    }
    out
}

pub fn run_fields(tier: Option<GrammarTier>) -> anyhow::Result<()> {
    print!("{}", render_fields(tier));
    Ok(())
}
