use crate::error::{LedgerError, LedgerResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Date pattern used both on disk and at the interactive prompt.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }

    /// Lenient form used for typed-in answers: surrounding whitespace and case are ignored.
    pub fn from_prompt(raw: &str) -> LedgerResult<Self> {
        raw.trim().to_ascii_uppercase().parse()
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    /// Strict form used for stored lines: the token must match exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(LedgerError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub kind: TransactionType,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(kind: TransactionType, category: impl Into<String>, amount: f64, date: NaiveDate) -> Self {
        Self {
            kind,
            category: category.into(),
            amount,
            date,
        }
    }

    /// `TYPE,CATEGORY,AMOUNT,DATE` with the amount at two decimals.
    ///
    /// Categories are written verbatim; a comma inside one produces a line
    /// that no longer splits into four fields.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{:.2},{}",
            self.kind,
            self.category,
            self.amount,
            self.date.format(DATE_FORMAT)
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}

impl FromStr for Transaction {
    type Err = LedgerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(line);
        if fields.len() != FIELD_COUNT {
            return Err(LedgerError::FieldCount(fields.len()));
        }
        Ok(Transaction {
            kind: fields[0].parse()?,
            category: fields[1].to_string(),
            amount: parse_amount(fields[2])?,
            date: parse_date(fields[3])?,
        })
    }
}

/// Splits a stored line on commas. Trailing empty fields are dropped, so
/// `INCOME,Salary,10,` counts as three fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

pub fn parse_amount(raw: &str) -> LedgerResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LedgerError::InvalidAmount(raw.to_string())),
    }
}

/// Accepts only the fixed `YYYY-MM-DD` shape; chrono alone would also take
/// `2024-1-5`, a leading space or a signed year.
pub fn parse_date(raw: &str) -> LedgerResult<NaiveDate> {
    if !has_date_shape(raw) {
        return Err(LedgerError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}

fn has_date_shape(raw: &str) -> bool {
    let b = raw.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
