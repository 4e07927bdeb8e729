use clap::{Parser, Subcommand};
use logrun_core::classify::GrammarTier;
use logrun_core::cli;
use logrun_core::cli::analyze::{AnalyzeArgs, run_analyze};
use logrun_core::cli::fields::run_fields;
use logrun_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "logrun",
    version,
    about = "logrun: group access-log requests into contiguous runs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify, order and group an access log
    Analyze(AnalyzeArgs),

    /// List the fields records can be grouped by
    Fields {
        /// Only list fields available with this grammar
        #[arg(long, value_enum)]
        tier: Option<GrammarTier>,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        // Logging is set up once the config file has been read.
        Command::Analyze(args) => run_analyze(args),

        Command::Fields { tier } => {
            init_logging("warn", false);
            run_fields(tier)
        }

        Command::Config { cmd } => {
            init_logging("warn", false);
            cli::conf::run(cmd)
        }
    };

    if let Err(err) = result {
        eprintln!("logrun: {err:#}");
        if let Some(hint) = cli::error_hint(&err) {
            eprintln!();
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}
