mod cli;
mod config;
mod domain;
mod error;
mod menu;
mod report;
mod store;
mod summary;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::{app_paths, load_or_init_config};
use crate::store::Store;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let paths = app_paths(cli.home.clone())?;
    let (cfg, cfg_path) = load_or_init_config(&paths)?;
    init_tracing(cfg.log_level());

    let ledger = cli.ledger.clone().unwrap_or_else(|| cfg.ledger_file.clone());
    tracing::debug!(config = %cfg_path.display(), ledger = %ledger.display(), "starting");

    let mut store = Store::new();
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let ok = match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            menu::run_menu(&mut input, &mut out, &mut store, &ledger)?;
            true
        }
        Command::Add(args) => {
            let tx = menu::parse_answers(&args.kind, &args.category, &args.amount, &args.date)?;
            menu::record_and_save(&mut out, &mut store, &ledger, tx)?;
            true
        }
        Command::Load(args) => menu::load_and_report(&mut out, &mut store, &args.path)?,
        Command::Summary(args) => {
            let path = args.file.unwrap_or(ledger);
            menu::show_summary(&mut out, &path)?
        }
        Command::Config => {
            writeln!(out, "config\t{}", cfg_path.display())?;
            writeln!(out, "ledger\t{}", ledger.display())?;
            writeln!(out, "log_level\t{}", cfg.log_level())?;
            true
        }
    };

    tracing::debug!(in_memory = store.transactions().len(), "finished");
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tally={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
