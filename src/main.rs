use std::io::{BufWriter, Write, stdout};

use clap::Parser;
use expense_ledger::{
    app::{self, Cli},
    common::error::AppError,
};

fn main() {
    expense_ledger::init_tracing();
    let cli = Cli::parse();

    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = app::run(cli, &mut out).and_then(|()| out.flush().map_err(AppError::from));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
