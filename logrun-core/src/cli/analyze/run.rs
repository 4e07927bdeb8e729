use crate::classify::{Classifier, GrammarTier};
use crate::cli::analyze::render::render_counts;
use crate::cli::analyze::report::render_report;
use crate::conf::{OutputFormat, Settings, SettingsOverrides, load_config};
use crate::logging::init_logging;
use crate::pipeline::Analysis;
use crate::resolve::{CachingResolver, NoResolver, SystemResolver};
use anyhow::{Context, Result, bail};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Access log to analyze
    #[arg(short, long)]
    pub file: PathBuf,

    /// Field to group contiguous records by [default: address]
    #[arg(short, long)]
    pub group: Option<String>,

    /// Line grammar [default: extended]
    #[arg(long, value_enum)]
    pub tier: Option<GrammarTier>,

    /// Reject extended lines without the status/size/referrer/user-agent suffix
    #[arg(long)]
    pub require_suffix: bool,

    /// Show timestamps in local time instead of UTC
    #[arg(long)]
    pub localtime: bool,

    /// Reverse-resolve client addresses to hostnames
    #[arg(long)]
    pub resolve: bool,

    /// Report line counts and list unmatched lines
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format [default: pretty]
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a logrun.toml config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit diagnostics as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl AnalyzeArgs {
    /// Boolean flags only override the config when they are set.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            tier: self.tier,
            require_suffix: self.require_suffix.then_some(true),
            group: self.group.clone(),
            format: self.format,
            localtime: self.localtime.then_some(true),
            resolve: self.resolve.then_some(true),
            verbose: self.verbose.then_some(true),
            log_json: self.log_json.then_some(true),
        }
    }
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&config, args.overrides())?;

    init_logging(&settings.log_level, settings.log_json);

    let buffer = read_log_file(&args.file)?;
    let classifier =
        Classifier::new(settings.tier).with_required_suffix(settings.require_suffix);
    let analysis = Analysis::run(&buffer, &classifier);

    let report = if settings.resolve {
        render_report(&analysis, &settings, &CachingResolver::new(SystemResolver))
    } else {
        render_report(&analysis, &settings, &NoResolver)
    };

    let output = match report {
        Ok(output) => output,
        Err(err) => {
            // The counts are still meaningful when the group field is rejected.
            if settings.verbose {
                eprint!("{}", render_counts(&analysis.counts()));
            }
            return Err(err);
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn read_log_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        bail!("file {} does not exist", path.display());
    }

    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
