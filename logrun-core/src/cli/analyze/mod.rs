//! Analyze command
//!
//! The overall data processing architecture is:
//!
//! log file
//! Analysis::run
//! GroupSelector::resolve
//! group_runs
//! render_report (pretty, plain or json)
//! stdout
//!

mod json;
mod render;
mod report;
mod run;


pub use render::{TextOptions, format_timestamp, render_counts, render_groups, render_unmatched};
pub use report::render_report;
pub use run::{AnalyzeArgs, run_analyze};
