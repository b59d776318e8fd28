use crate::summary::MonthRow;
use std::io::{self, Write};

pub const SUMMARY_HEADING: &str = "--- Monthly Summary from File ---";

const HEADERS: [&str; 5] = ["Month", "Income", "Expense", "Balance", "Total Transactions"];

pub fn write_summary<W: Write>(out: &mut W, rows: &[MonthRow]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{SUMMARY_HEADING}")?;
    if rows.is_empty() {
        writeln!(out, "(no transactions)")?;
        return Ok(());
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.month.clone(),
                format!("{:.2}", r.income),
                format!("{:.2}", r.expense),
                format!("{:.2}", r.balance()),
                r.count.to_string(),
            ]
        })
        .collect();

    // Each column is as wide as its longest cell, header included.
    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    write_row(out, &HEADERS, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    writeln!(out, "|{}|", rule.join("|"))?;
    for row in &cells {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S; 5], widths: &[usize; 5]) -> io::Result<()> {
    write!(out, "|")?;
    for (cell, w) in cells.iter().zip(widths) {
        write!(out, " {:width$} |", cell.as_ref(), width = *w)?;
    }
    writeln!(out)
}
