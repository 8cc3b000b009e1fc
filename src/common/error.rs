use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("category not found: {0}")]
    NotFound(String),
    #[error("malformed ledger file at line {line}: {reason}")]
    StorageFormat { line: u64, reason: String },
    #[error("ledger file does not exist: {}", .0.display())]
    StorageMissing(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// True for errors the user can fix by changing their input; the ledger
    /// is untouched when one of these is returned.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::NotFound(_))
    }
}
