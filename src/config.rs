use tracing_subscriber::EnvFilter;

/// Ledger file used when neither `--file` nor the environment names one.
pub const DEFAULT_DATA_FILE: &str = "finance_data.csv";
/// Overrides the ledger file path.
pub const DATA_FILE_ENV: &str = "EXPENSE_LEDGER_FILE";
/// Log filter in `EnvFilter` syntax, e.g. `expense_ledger=debug`.
pub const LOG_FILTER_ENV: &str = "EXPENSE_LEDGER_LOG";

const DEFAULT_LOG_FILTER: &str = "expense_ledger=warn";

pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
