use crate::{
    common::{amount::Amount, error::AppError},
    domain::ledger::Ledger,
    worker::handlers::validate_entry,
};

/// Replaces `old` with `new -> amount`.
///
/// The amount is not merged into an existing total for `new`; whatever was
/// stored there is overwritten.
///
/// `new` and `amount` must pass the same checks as an added expense (non-blank
/// name, amount above zero) so no stored category ends up blank or
/// non-positive. This is checked before `old` is looked up.
pub fn handle(ledger: &mut Ledger, old: &str, new: &str, amount: Amount) -> Result<(), AppError> {
    validate_entry(new, amount)?;

    if ledger.remove(old).is_none() {
        return Err(AppError::NotFound(old.to_owned()));
    }

    if old != new && ledger.contains(new) {
        tracing::warn!(old, new, "rename overwrites existing category");
    }
    ledger.set(new, amount);
    Ok(())
}
