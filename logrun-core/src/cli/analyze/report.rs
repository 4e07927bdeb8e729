use crate::cli::analyze::json::render_json;
use crate::cli::analyze::render::{TextOptions, render_counts, render_groups, render_unmatched};
use crate::conf::{OutputFormat, Settings};
use crate::group::GroupSelector;
use crate::pipeline::Analysis;
use crate::resolve::HostResolver;
use anyhow::Result;

/// Render a finished analysis in the configured format.
///
/// The group field is validated before anything is rendered, so a rejected
/// field never produces partial output.
pub fn render_report(
    analysis: &Analysis,
    settings: &Settings,
    resolver: &dyn HostResolver,
) -> Result<String> {
    let selector = GroupSelector::resolve(&settings.group, analysis.tier())?;
    let groups = analysis.group_with(selector);

    tracing::debug!(
        field = %selector.field(),
        groups = groups.len(),
        "grouped records"
    );

    if settings.format == OutputFormat::Json {
        let out = render_json(
            analysis.tier(),
            selector.field(),
            analysis.counts(),
            &groups,
            analysis.unmatched(),
            resolver,
        )?;
        return Ok(out);
    }

    let options = TextOptions {
        color: settings.format == OutputFormat::Pretty,
        localtime: settings.localtime,
    };

    let mut out = String::new();
    if settings.verbose {
        out.push_str(&render_counts(&analysis.counts()));
    }
    out.push_str(&render_groups(&groups, options, resolver));
    if settings.verbose && !analysis.unmatched().is_empty() {
        out.push_str(&render_unmatched(analysis.unmatched()));
    }

    Ok(out)
}
