//! Portfolio Tracker - interactive stock purchase tally
//!
//! Prompts for symbols and quantities, prints the investment summary and
//! optionally saves it to a text file.

use anyhow::Result;

use portfolio_tracker::adapters::cli;

fn main() -> Result<()> {
    // Load .env file if it exists (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let app = cli::init();
    cli::execute(app)
}
