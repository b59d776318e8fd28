use std::path::PathBuf;
use thiserror::Error;

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

// Messages embed their cause directly: they are printed as a single line by
// the caught-error flows ("Failed to load file: ...").
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("{}: {cause}", .path.display())]
    Io {
        path: PathBuf,
        cause: std::io::Error,
    },

    #[error("No enum constant for transaction type: {0}")]
    UnknownType(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Text '{0}' could not be parsed as yyyy-MM-dd")]
    InvalidDate(String),

    #[error("Expected 4 fields (TYPE,CATEGORY,AMOUNT,DATE), found {0}")]
    FieldCount(usize),

    /// A parse failure tied to a specific line of a ledger file.
    #[error("line {line}: {cause}")]
    Line { line: usize, cause: Box<LedgerError> },
}

impl LedgerError {
    pub fn io(path: impl Into<PathBuf>, cause: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            cause,
        }
    }

    pub fn at_line(self, line: usize) -> Self {
        Self::Line {
            line,
            cause: Box::new(self),
        }
    }
}
