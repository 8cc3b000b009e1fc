//! Per-category expense totals kept in a CSV file.
//!
//! The [`io::store::LedgerStore`] loads the file into a [`domain::ledger::Ledger`],
//! applies [`common::event::LedgerIntent`]s through the
//! [`worker::processor::Processor`] and rewrites the whole file after each one.

pub mod app;
pub mod chart;
pub mod common;
pub mod config;
pub mod domain;
pub mod io;
pub mod worker;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs the global stderr subscriber. Safe to call more than once.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(config::log_filter())
            .with_writer(std::io::stderr)
            .try_init();
    });
}
