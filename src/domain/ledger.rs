use std::collections::HashMap;

use crate::common::amount::Amount;

/// Running expense totals keyed by category.
///
/// Categories are compared byte for byte: `"Food"`, `"food"` and `" Food"`
/// are three distinct keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    pub expenses: HashMap<String, Amount>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            expenses: HashMap::new(),
        }
    }

    pub fn get(&self, category: &str) -> Option<Amount> {
        self.expenses.get(category).copied()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.expenses.contains_key(category)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Adds `amount` to the running total for `category`, creating it at zero
    /// first if needed. No validation; callers decide what is acceptable.
    ///
    /// Returns `None`, leaving the ledger as it was, if the new total does not
    /// fit in an `Amount`.
    pub fn accumulate(&mut self, category: &str, amount: Amount) -> Option<Amount> {
        let total = self
            .get(category)
            .unwrap_or_else(Amount::zero)
            .checked_add(amount)?;
        self.expenses.insert(category.to_owned(), total);
        Some(total)
    }

    /// Overwrites the total for `category`.
    pub fn set(&mut self, category: &str, amount: Amount) {
        self.expenses.insert(category.to_owned(), amount);
    }

    pub fn remove(&mut self, category: &str) -> Option<Amount> {
        self.expenses.remove(category)
    }

    /// Sorted snapshot of `(category, amount)` pairs.
    pub fn entries(&self) -> Vec<(String, Amount)> {
        let mut entries: Vec<(String, Amount)> = self
            .expenses
            .iter()
            .map(|(category, amount)| (category.clone(), *amount))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
