//! Console flows shared by the interactive menu and the one-shot subcommands.
//!
//! Bad menu input and bad values typed while adding a transaction come back
//! as `Err` and end the process. File problems while loading or summarizing
//! are printed and the menu carries on.

use crate::domain::{Transaction, TransactionType, parse_amount, parse_date};
use crate::report::write_summary;
use crate::store::{Store, append};
use crate::summary::summarize;
use anyhow::{Context, Result, anyhow};
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Load,
    Summary,
    Exit,
}

impl MenuChoice {
    /// `None` for a number outside 1-4.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Load),
            3 => Some(MenuChoice::Summary),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &mut Store,
    ledger: &Path,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "1. Add Transaction")?;
        writeln!(out, "2. Load Transactions from File")?;
        writeln!(out, "3. Show Monthly Summary")?;
        writeln!(out, "4. Exit")?;
        let raw = prompt(input, out, "Choose an option: ")?;
        let n: i64 = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid menu option: {raw}"))?;

        match MenuChoice::from_number(n) {
            Some(MenuChoice::Add) => add_transaction(input, out, store, ledger)?,
            Some(MenuChoice::Load) => {
                let filename = prompt(input, out, "Enter filename: ")?;
                load_and_report(out, store, Path::new(&filename))?;
            }
            Some(MenuChoice::Summary) => {
                show_summary(out, ledger)?;
            }
            Some(MenuChoice::Exit) => {
                tracing::debug!("exit requested from menu");
                return Ok(());
            }
            None => writeln!(out, "Invalid option.")?,
        }
    }
}

/// Prompts for each field in turn; any unparseable answer is fatal.
pub fn add_transaction<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    store: &mut Store,
    ledger: &Path,
) -> Result<()> {
    let kind = TransactionType::from_prompt(&prompt(input, out, "Enter type (income/expense): ")?)?;

    let category_prompt = match kind {
        TransactionType::Income => "Enter category (Salary/Business): ",
        TransactionType::Expense => "Enter category (Food/Rent/Travel): ",
    };
    let category = prompt(input, out, category_prompt)?;
    let amount = parse_amount(&prompt(input, out, "Enter amount: ")?)?;
    let date = parse_date(prompt(input, out, "Enter date (yyyy-MM-dd): ")?.trim())?;

    record_and_save(out, store, ledger, Transaction::new(kind, category, amount, date))
}

/// Builds a transaction from already-collected answers (the `add` subcommand).
pub fn parse_answers(kind: &str, category: &str, amount: &str, date: &str) -> Result<Transaction> {
    Ok(Transaction::new(
        TransactionType::from_prompt(kind)?,
        category,
        parse_amount(amount)?,
        parse_date(date.trim())?,
    ))
}

/// Keeps the record in memory even when the file write fails.
pub fn record_and_save<W: Write>(
    out: &mut W,
    store: &mut Store,
    ledger: &Path,
    tx: Transaction,
) -> Result<()> {
    let saved = append(ledger, &tx);
    store.record(tx);
    if let Err(err) = saved {
        tracing::warn!(ledger = %ledger.display(), "append failed: {err}");
        writeln!(out, "Failed to save transaction: {err}")?;
    }
    writeln!(out, "Transaction added.")?;
    Ok(())
}

/// Echoes each record read, including those before a failing line.
/// Returns `false` when the load failed; the failure has already been printed.
pub fn load_and_report<W: Write>(out: &mut W, store: &mut Store, path: &Path) -> Result<bool> {
    let start = store.transactions().len();
    let res = store.load_all(path);
    for tx in &store.transactions()[start..] {
        writeln!(out, "{tx}")?;
    }

    if let Err(err) = res {
        tracing::debug!(path = %path.display(), "load failed: {err}");
        writeln!(out, "Failed to load file: {err}")?;
        return Ok(false);
    }

    if store.is_empty() {
        writeln!(out, "No transaction found!!")?;
    } else {
        writeln!(out, "File loaded successfully.")?;
    }
    Ok(true)
}

/// Returns `false` when the summary could not be produced; nothing partial is printed.
pub fn show_summary<W: Write>(out: &mut W, path: &Path) -> Result<bool> {
    match summarize(path) {
        Ok(rows) => {
            write_summary(out, &rows)?;
            Ok(true)
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), "summary failed: {err}");
            writeln!(out, "Failed to read file or parse data: {err}")?;
            Ok(false)
        }
    }
}

/// Reads one answer with its line ending stripped. End of input is fatal.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{message}")?;
    out.flush().ok();

    let mut line = String::new();
    let n = input.read_line(&mut line).context("Failed to read from stdin")?;
    if n == 0 {
        return Err(anyhow!("Unexpected end of input"));
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
