use crate::{
    common::{error::AppError, event::LedgerIntent},
    domain::ledger::Ledger,
    worker::handlers::{add, delete, rename},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, ledger: &mut Ledger, intent: LedgerIntent) -> Result<(), AppError> {
        match intent {
            LedgerIntent::AddExpense { category, amount } => {
                add::handle(ledger, &category, amount)?;
            }
            LedgerIntent::RenameCategory { old, new, amount } => {
                rename::handle(ledger, &old, &new, amount)?;
            }
            LedgerIntent::DeleteCategory { name } => {
                delete::handle(ledger, &name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::amount::Amount;

    #[test]
    fn routes_each_intent_to_its_handler() {
        let mut ledger = Ledger::new();
        let mut processor = Processor::new();

        processor
            .process(
                &mut ledger,
                LedgerIntent::AddExpense {
                    category: "Rent".into(),
                    amount: Amount::from_units(10_000_000),
                },
            )
            .unwrap();
        processor
            .process(
                &mut ledger,
                LedgerIntent::AddExpense {
                    category: "Food".into(),
                    amount: Amount::from_units(2_000_000),
                },
            )
            .unwrap();
        processor
            .process(
                &mut ledger,
                LedgerIntent::RenameCategory {
                    old: "Food".into(),
                    new: "Groceries".into(),
                    amount: Amount::from_units(2_000_000),
                },
            )
            .unwrap();

        assert_eq!(ledger.get("Groceries"), Some(Amount::from_units(2_000_000)));
        assert!(!ledger.contains("Food"));

        let err = processor
            .process(
                &mut ledger,
                LedgerIntent::DeleteCategory {
                    name: "Food".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        processor
            .process(
                &mut ledger,
                LedgerIntent::DeleteCategory {
                    name: "Rent".into(),
                },
            )
            .unwrap();
        assert_eq!(ledger.len(), 1);
    }
}
