//! Text rendering of the entries snapshot.
//!
//! Rendering is a pure function of its inputs; nothing here touches the
//! ledger or the file.

use std::fmt::Write;

use crate::common::amount::Amount;

pub const TITLE: &str = "Expenses by Category";
pub const DEFAULT_WIDTH: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ChartKind {
    /// Share of the total per category.
    #[default]
    Pie,
    /// One bar per category, scaled to the largest amount.
    Bar,
}

/// Horizontal bar of `width` cells, filled in proportion to `value / max`.
#[must_use]
pub fn ascii_bar(value: i128, max: i128, width: usize) -> String {
    if max <= 0 || value <= 0 {
        return "░".repeat(width);
    }

    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Sum of raw units, wide enough that no number of `Amount`s can overflow it.
pub fn total_units(entries: &[(String, Amount)]) -> i128 {
    entries.iter().map(|(_, a)| i128::from(a.units())).sum()
}

/// Percentage of `total` units taken by `value`, zero when the total is not
/// positive.
pub fn share_percent(value: Amount, total: i128) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    value.units() as f64 / total as f64 * 100.0
}

fn format_units(units: i128) -> String {
    match i64::try_from(units) {
        Ok(units) => Amount::from_units(units).to_plain_string(),
        Err(_) => {
            let whole = units / 10_000;
            let frac = format!("{:04}", (units % 10_000).unsigned_abs());
            let frac = frac.trim_end_matches('0');
            let frac = if frac.is_empty() { "0" } else { frac };
            format!("{whole}.{frac}")
        }
    }
}

pub fn render(entries: &[(String, Amount)], kind: ChartKind, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");

    if entries.is_empty() {
        out.push_str("No expenses recorded.\n");
        return out;
    }

    let label_width = entries
        .iter()
        .map(|(category, _)| category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());
    let amounts: Vec<String> = entries.iter().map(|(_, a)| a.to_plain_string()).collect();
    let amount_width = amounts.iter().map(String::len).max().unwrap_or(0);

    match kind {
        ChartKind::Pie => {
            let total = total_units(entries);
            for ((category, amount), text) in entries.iter().zip(&amounts) {
                let _ = writeln!(
                    out,
                    "{category:<label_width$}  {text:>amount_width$}  {:>5.1}%  {}",
                    share_percent(*amount, total),
                    ascii_bar(amount.units().into(), total, width),
                );
            }
            let _ = writeln!(out, "{:<label_width$}  {}", "Total", format_units(total));
        }
        ChartKind::Bar => {
            let max = entries
                .iter()
                .map(|(_, a)| i128::from(a.units()))
                .max()
                .unwrap_or(0);
            let _ = writeln!(out, "{:<label_width$} │ Amount", "Category");
            for ((category, amount), text) in entries.iter().zip(&amounts) {
                let _ = writeln!(
                    out,
                    "{category:<label_width$} │{} {text}",
                    ascii_bar(amount.units().into(), max, width),
                );
            }
        }
    }

    out
}
