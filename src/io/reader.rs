use std::{io::Read, str::FromStr};

use crate::{
    common::{amount::Amount, error::AppError},
    domain::ledger::Ledger,
    io::HEADER,
};

#[derive(serde::Deserialize)]
/// One stored row. The amount stays text so parse failures can be reported
/// with the offending line.
struct CsvRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount")]
    amount: String,
}

/// A parsed row and the 1-based line it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
    pub line: u64,
    pub category: String,
    pub amount: Amount,
}

fn format_error(line: u64, reason: impl Into<String>) -> AppError {
    AppError::StorageFormat {
        line,
        reason: reason.into(),
    }
}

fn csv_format_error(err: csv::Error, fallback_line: u64) -> AppError {
    let line = err.position().map(|p| p.line()).unwrap_or(fallback_line);
    format_error(line, err.to_string())
}

/// Fails unless the first row is exactly `Category,Amount`.
pub fn check_header<R: Read>(rdr: &mut csv::Reader<R>) -> Result<(), AppError> {
    let headers = rdr.headers().map_err(|e| csv_format_error(e, 1))?;
    if headers.is_empty() {
        return Err(format_error(1, "missing header row"));
    }
    if headers.iter().ne(HEADER) {
        return Err(format_error(
            1,
            format!(
                "expected header `{}`, found `{}`",
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        ));
    }
    Ok(())
}

/// Reads the rows that follow the header.
///
/// Each row, and each error, carries the 1-based line it came from.
///
/// # Examples
///
/// ```
/// use expense_ledger::io::reader::read_expenses;
///
/// let data = "Category,Amount\nFood,50.0\n\"Rent, flat\",1000\n";
/// let mut rdr = csv::ReaderBuilder::new().from_reader(data.as_bytes());
/// let rows: Vec<_> = read_expenses(&mut rdr).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(rows[0].category, "Food");
/// assert_eq!(rows[1].category, "Rent, flat");
/// assert_eq!(rows[1].line, 3);
/// assert_eq!(rows[1].amount.to_string(), "1000.0");
/// ```
pub fn read_expenses<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<StoredRow, AppError>> + '_ {
    rdr.records().enumerate().map(|(idx, res)| {
        // header is line 1
        let fallback_line = idx as u64 + 2;
        let record = res.map_err(|e| csv_format_error(e, fallback_line))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);

        let row: CsvRow = record
            .deserialize(Some(&csv::StringRecord::from(HEADER.to_vec())))
            .map_err(|e| format_error(line, e.to_string()))?;
        let amount = Amount::from_str(&row.amount)
            .map_err(|e| format_error(line, format!("bad amount `{}`: {e}", row.amount)))?;

        Ok(StoredRow {
            line,
            category: row.category,
            amount,
        })
    })
}

/// Parses a whole ledger file, summing repeated categories.
pub fn load_ledger<R: Read>(input: R) -> Result<Ledger, AppError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    check_header(&mut rdr)?;

    let mut ledger = Ledger::new();
    for row in read_expenses(&mut rdr) {
        let row = row?;
        if ledger.accumulate(&row.category, row.amount).is_none() {
            return Err(format_error(
                row.line,
                format!("total for `{}` is out of range", row.category),
            ));
        }
    }
    Ok(ledger)
}
