use std::io::Write;

use crate::{domain::ledger::Ledger, io::HEADER};

#[derive(serde::Serialize)]
/// One output row: category text and the amount in natural decimal form.
struct OutputRow<'a> {
    category: &'a str,
    amount: String,
}

/// Writes the full ledger as CSV: the `Category,Amount` header, then one row
/// per category sorted by name.
///
/// The header is always written, so an empty ledger still produces a file
/// that loads back.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use expense_ledger::{common::amount::Amount, domain::ledger::Ledger, io::writer::write_ledger};
///
/// let mut ledger = Ledger::new();
/// ledger.set("Rent", Amount::from_units(10_000_000));
/// ledger.set("Food, takeaway", Amount::from_units(125_000));
///
/// let mut out = Vec::new();
/// write_ledger(&mut out, &ledger).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "Category,Amount\n\"Food, takeaway\",12.5\nRent,1000.0\n");
/// ```
pub fn write_ledger<W: Write>(writer: W, ledger: &Ledger) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for (category, amount) in ledger.entries() {
        wtr.serialize(OutputRow {
            category: &category,
            amount: amount.to_plain_string(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
