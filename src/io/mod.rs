pub mod reader;
pub mod store;
pub mod writer;

/// Header row of the ledger file.
pub const HEADER: [&str; 2] = ["Category", "Amount"];
