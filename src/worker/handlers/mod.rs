pub mod add;
pub mod delete;
pub mod rename;

use crate::common::{amount::Amount, error::AppError};

/// Shared input checks for handlers that write a category total.
pub(crate) fn validate_entry(category: &str, amount: Amount) -> Result<(), AppError> {
    if category.trim().is_empty() {
        return Err(AppError::Validation("category must not be empty".into()));
    }
    if !amount.is_positive() {
        return Err(AppError::Validation(format!(
            "amount must be greater than zero, got {amount}"
        )));
    }
    Ok(())
}
