/*
 * Ask for the customer, the invoice date, the book and the hours spent on
 * each kind of work, then write a one sheet invoice:
 *
 *  - biller identity and the customer to bill in the header
 *  - one row per work type performed, with run time, rate and total
 *  - the grand total and payment instructions below the items
 *
 * Hours that don't parse are reported and that work type is left off the
 * invoice. Anything else going wrong stops the run before a file is written.
 */

mod billing;
mod cli;
mod config;
mod error;
mod input;
mod layout;
mod logging;
mod render;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate::billing::RateTable;
use crate::cli::Opts;
use crate::config::Config;
use crate::error::InvoiceError;
use crate::input::{Collection, InquirePrompt, LinePrompt};

fn run() -> Result<PathBuf, InvoiceError> {
    let config = Config::load()?;
    debug!(
        biller = config.biller.name.as_str(),
        prefix = config.settings.number_prefix.as_str(),
        output_dir = %config.settings.output_dir.display(),
        "configuration loaded"
    );

    let rates = RateTable::audiobook();
    let Collection { record, skipped } = if io::stdin().is_terminal() {
        input::collect(&mut InquirePrompt, &rates)?
    } else {
        let mut prompt = LinePrompt::new(io::stdin().lock(), io::stdout());
        input::collect(&mut prompt, &rates)?
    };
    debug!(items = record.items.len(), skipped = skipped.len(), "collected");
    for item in skipped.iter() {
        println!("Left off the invoice: {}", item);
    }

    render::render_today(&record, &config.biller, &config.settings)
}

fn main() -> ExitCode {
    let _opts = Opts::parse();
    logging::init();

    match run() {
        Ok(path) => {
            println!("Invoice created and saved as '{}'", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
