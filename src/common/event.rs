use crate::common::amount::Amount;

/// A user request against the ledger, produced by the presentation layer and
/// routed by the processor to the matching handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerIntent {
    AddExpense { category: String, amount: Amount },
    RenameCategory { old: String, new: String, amount: Amount },
    DeleteCategory { name: String },
}

impl LedgerIntent {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerIntent::AddExpense { .. } => "add",
            LedgerIntent::RenameCategory { .. } => "rename",
            LedgerIntent::DeleteCategory { .. } => "delete",
        }
    }
}
