use crate::domain::Transaction;
use crate::error::{LedgerError, LedgerResult};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// In-memory transaction list for the lifetime of one process.
///
/// Built once in `run()` and handed to each menu action; nothing here is
/// global.
#[derive(Debug, Default)]
pub struct Store {
    transactions: Vec<Transaction>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn record(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    /// Parses every line of `path` and appends each record to the list as
    /// it is read.
    ///
    /// Stops at the first bad line; records from earlier lines stay in the
    /// list. Returns the number of records added.
    pub fn load_all(&mut self, path: &Path) -> LedgerResult<usize> {
        let start = self.transactions.len();
        let res = for_each_line(path, |line_no, line| {
            let tx = line
                .parse::<Transaction>()
                .map_err(|e| e.at_line(line_no))?;
            self.transactions.push(tx);
            Ok(())
        });

        let added = self.transactions.len() - start;
        tracing::debug!(path = %path.display(), added, ok = res.is_ok(), "loaded transactions");
        res.map(|()| added)
    }
}

/// Appends one record as a line, creating the file when missing.
pub fn append(path: &Path, tx: &Transaction) -> LedgerResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::io(path, e))?;
    writeln!(file, "{}", tx.to_line()).map_err(|e| LedgerError::io(path, e))?;

    tracing::debug!(path = %path.display(), line = %tx.to_line(), "appended transaction");
    Ok(())
}

/// Streams `path` line by line; `f` receives the 1-based line number.
pub(crate) fn for_each_line<F>(path: &Path, mut f: F) -> LedgerResult<()>
where
    F: FnMut(usize, &str) -> LedgerResult<()>,
{
    let file = File::open(path).map_err(|e| LedgerError::io(path, e))?;
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| LedgerError::io(path, e))?;
        f(idx + 1, &line)?;
    }
    Ok(())
}
