use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tally")]
#[command(about = "Personal income/expense ledger with monthly summaries", long_about = None)]
pub struct Cli {
    /// Override Tally home directory (a config subdir will be created inside it).
    #[arg(long, env = "TALLY_HOME")]
    pub home: Option<PathBuf>,

    /// Ledger file to append to and summarize, overriding the configured one.
    #[arg(long, env = "TALLY_LEDGER")]
    pub ledger: Option<PathBuf>,

    /// Runs the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive numbered menu (the default).
    Menu,
    Add(AddArgs),
    Load(LoadArgs),
    Summary(SummaryArgs),
    Config,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// income or expense
    #[arg(long = "type")]
    pub kind: String,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub amount: String,

    /// yyyy-MM-dd
    #[arg(long)]
    pub date: String,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Summarize this file instead of the ledger.
    #[arg(long)]
    pub file: Option<PathBuf>,
}
