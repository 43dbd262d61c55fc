pub mod balance;
pub mod init;
pub mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Reconcile weeks of Harvest entries into the ledger")]
    Run(run::RunArgs),
    #[command(about = "Show the over/under balance carried by the ledger")]
    Balance,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Configuration file to use instead of the one in the data directory
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let config_path = cli.config.as_deref();
        match cli.command {
            Commands::Init(args) => init::cmd(args, config_path),
            Commands::Run(args) => run::cmd(args, config_path).await,
            Commands::Balance => balance::cmd(config_path),
        }
    }
}
