mod check;
mod init;

pub use check::*;
use clap::Subcommand;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a configuration file and exit
    Check {
        /// Path to the config file [default: ./logrun.toml]
        path: Option<PathBuf>,
    },

    /// Write a commented default configuration file
    Init {
        /// Path of the file to create
        #[arg(default_value = "logrun.toml")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path.as_deref()),
        ConfigCmd::Init { path } => init(&path),
    }
}
