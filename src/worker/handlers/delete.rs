use crate::{common::error::AppError, domain::ledger::Ledger};

pub fn handle(ledger: &mut Ledger, category: &str) -> Result<(), AppError> {
    match ledger.remove(category) {
        Some(amount) => {
            tracing::debug!(category, %amount, "category deleted");
            Ok(())
        }
        None => Err(AppError::NotFound(category.to_owned())),
    }
}
