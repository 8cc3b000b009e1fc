use std::{io::Write, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::{
    chart::{self, ChartKind},
    common::{amount::Amount, error::AppError, event::LedgerIntent},
    config::{DATA_FILE_ENV, DEFAULT_DATA_FILE},
    domain::ledger::Ledger,
    io::store::LedgerStore,
};

#[derive(Debug, Parser)]
#[command(name = "expense-ledger")]
#[command(about = "Track running expense totals per category", long_about = None)]
pub struct Cli {
    /// Ledger CSV file; created with just a header if missing
    #[arg(long, short, global = true, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add an amount to a category's running total
    Add {
        category: String,
        #[arg(allow_negative_numbers = true)]
        amount: Amount,
    },
    /// Replace a category with a new name and amount
    Rename {
        old: String,
        new: String,
        #[arg(allow_negative_numbers = true)]
        amount: Amount,
    },
    /// Remove a category
    Delete { category: String },
    /// Print every category and its total
    List,
    /// Draw the totals as a pie or bar chart
    Chart {
        #[arg(long, value_enum, default_value_t = ChartKind::Pie)]
        kind: ChartKind,
        #[arg(long, default_value_t = chart::DEFAULT_WIDTH)]
        width: usize,
    },
}

/// Loads the ledger named by `cli`, executes its command and writes the
/// result to `out`. Mutating commands print the updated entries.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), AppError> {
    let store = LedgerStore::new(&cli.file);
    store.init()?;
    let mut ledger = store.load()?;

    let intent = match cli.command {
        Command::Add { category, amount } => LedgerIntent::AddExpense { category, amount },
        Command::Rename { old, new, amount } => LedgerIntent::RenameCategory { old, new, amount },
        Command::Delete { category } => LedgerIntent::DeleteCategory { name: category },
        Command::List => return write_entries(out, &ledger),
        Command::Chart { kind, width } => {
            out.write_all(chart::render(&ledger.entries(), kind, width).as_bytes())?;
            return Ok(());
        }
    };

    if let Err(e) = store.apply(&mut ledger, intent) {
        if e.is_user_error() {
            tracing::warn!(error = %e, "change rejected");
        }
        return Err(e);
    }
    write_entries(out, &ledger)
}

/// Two aligned columns, one category per line.
pub fn write_entries<W: Write>(out: &mut W, ledger: &Ledger) -> Result<(), AppError> {
    let entries = ledger.entries();
    if entries.is_empty() {
        writeln!(out, "No expenses recorded.")?;
        return Ok(());
    }

    let width = entries
        .iter()
        .map(|(category, _)| category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());
    writeln!(out, "{:<width$}  Amount", "Category")?;
    for (category, amount) in &entries {
        writeln!(out, "{category:<width$}  {amount}")?;
    }
    Ok(())
}
