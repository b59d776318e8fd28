use crate::domain::{FIELD_COUNT, TransactionType, month_key, parse_amount, parse_date, split_fields};
use crate::error::LedgerResult;
use crate::store::for_each_line;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthRow {
    /// `YYYY-MM`
    pub month: String,
    pub income: f64,
    pub expense: f64,
    pub count: u32,
}

impl MonthRow {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

/// Re-reads `path` and buckets every transaction by month.
///
/// Lines with fewer than four fields are skipped. Any other parse failure
/// aborts the whole summary. Rows come back in ascending month order.
pub fn summarize(path: &Path) -> LedgerResult<Vec<MonthRow>> {
    let mut income: HashMap<String, f64> = HashMap::new();
    let mut expense: HashMap<String, f64> = HashMap::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for_each_line(path, |line_no, line| {
        let fields = split_fields(line);
        if fields.len() < FIELD_COUNT {
            return Ok(());
        }

        let (kind, amount, date) = parse_entry(&fields).map_err(|e| e.at_line(line_no))?;

        let month = month_key(date);
        *counts.entry(month.clone()).or_insert(0) += 1;
        match kind {
            TransactionType::Income => *income.entry(month).or_insert(0.0) += amount,
            TransactionType::Expense => *expense.entry(month).or_insert(0.0) += amount,
        }
        Ok(())
    })?;

    let mut months: BTreeMap<String, MonthRow> = BTreeMap::new();
    for month in income.keys().chain(expense.keys()) {
        months.entry(month.clone()).or_insert_with(|| MonthRow {
            month: month.clone(),
            income: income.get(month).copied().unwrap_or(0.0),
            expense: expense.get(month).copied().unwrap_or(0.0),
            count: counts.get(month).copied().unwrap_or(0),
        });
    }

    tracing::debug!(path = %path.display(), months = months.len(), "summarized ledger");
    Ok(months.into_values().collect())
}

// The category column plays no part in the totals.
fn parse_entry(fields: &[&str]) -> LedgerResult<(TransactionType, f64, NaiveDate)> {
    Ok((
        fields[0].parse()?,
        parse_amount(fields[2])?,
        parse_date(fields[3])?,
    ))
}
