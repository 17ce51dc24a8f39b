// src/bin/cli.rs
use cdi_scrape::cli::{self, Args};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let summary = cli::run(Args::parse())?;
    if !summary.failed_ids.is_empty() {
        eprintln!("Skipped {} report(s): {:?}", summary.failed_ids.len(), summary.failed_ids);
    }
    Ok(())
}
