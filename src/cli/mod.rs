use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::storage::ExpenseStore;

mod menu;
mod render;

pub use menu::*;
pub use render::*;

/// Expenses recorded at startup unless `--no-samples` is given.
pub const SAMPLE_EXPENSES: [(&str, f64, &str, &str); 4] = [
    ("2023-10-01", 12.50, "Food", "Lunch at cafe"),
    ("2023-10-02", 45.00, "Transport", "Gasoline"),
    ("2023-10-05", 150.00, "Shopping", "New shoes"),
    ("2023-10-10", 25.00, "Food", "Groceries"),
];

/// Outlay - in-memory expense tracker
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Record, filter and summarize expenses from an interactive menu")]
#[command(version)]
pub struct Cli {
    /// Currency symbol printed in front of amounts
    #[arg(short, long, default_value = "$")]
    pub currency: String,

    /// Start with an empty ledger instead of the demo expenses
    #[arg(long)]
    pub no_samples: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let mut store = ExpenseStore::new();
        if !self.no_samples {
            seed_samples(&mut store)?;
        }

        let mut session = Session::new(store, self.currency);
        let mut stdout = std::io::stdout().lock();
        session.run(&mut Terminal, &mut stdout)
    }
}

/// Logs go to stderr so they never interleave with tables on stdout.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("outlay=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Record the demo expenses.
pub fn seed_samples(store: &mut ExpenseStore) -> Result<()> {
    for (date, amount, category, description) in SAMPLE_EXPENSES {
        store
            .add_expense(date, amount, category, description)
            .with_context(|| format!("Invalid sample expense: {}", description))?;
    }
    Ok(())
}
