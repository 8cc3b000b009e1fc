use crate::{
    common::{amount::Amount, error::AppError},
    domain::ledger::Ledger,
    worker::handlers::validate_entry,
};

pub fn handle(ledger: &mut Ledger, category: &str, amount: Amount) -> Result<(), AppError> {
    validate_entry(category, amount)?;

    let total = ledger
        .accumulate(category, amount)
        .ok_or_else(|| AppError::Validation("amount out of range".into()))?;
    tracing::debug!(category, %amount, %total, "expense added");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::handle;
    use crate::{
        common::{amount::Amount, error::AppError},
        domain::ledger::Ledger,
    };

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn add_accumulates_under_same_category() {
        let mut ledger = Ledger::new();

        handle(&mut ledger, "Food", amount("50")).unwrap();
        handle(&mut ledger, "Food", amount("25")).unwrap();

        assert_eq!(ledger.entries(), vec![("Food".to_string(), amount("75"))]);
    }

    #[test]
    fn add_keeps_categories_case_sensitive() {
        let mut ledger = Ledger::new();

        handle(&mut ledger, "Food", amount("1")).unwrap();
        handle(&mut ledger, "FOOD", amount("2")).unwrap();

        assert_eq!(ledger.get("Food"), Some(amount("1")));
        assert_eq!(ledger.get("FOOD"), Some(amount("2")));
    }

    #[test]
    fn add_rejects_non_positive_amounts() {
        let mut ledger = Ledger::new();
        handle(&mut ledger, "Food", amount("10")).unwrap();
        let before = ledger.clone();

        for bad in ["0", "-5", "0.00001"] {
            let err = handle(&mut ledger, "Food", amount(bad)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{bad}: {err:?}");
        }

        assert_eq!(ledger, before);
    }

    #[test]
    fn add_rejects_blank_category() {
        let mut ledger = Ledger::new();

        for bad in ["", "   ", "\t\n"] {
            let err = handle(&mut ledger, bad, amount("10")).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        assert!(ledger.is_empty());
    }

    #[test]
    fn add_rejects_total_that_would_overflow() {
        let mut ledger = Ledger::new();
        handle(&mut ledger, "Food", amount("900000000000000")).unwrap();
        let before = ledger.clone();

        let err = handle(&mut ledger, "Food", amount("900000000000000")).unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == "amount out of range"));
        assert_eq!(ledger, before);
        assert!(ledger.get("Food").unwrap().is_positive());
    }
}
