// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::options::{parse_ids_list, AppOptions, ExportFormat, IdSelector};
use crate::core::HttpSource;
use crate::error::{FetchError, Result};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

#[derive(Parser, Debug)]
#[command(
    name = "cdi_scrape",
    about = "Fetch CDI JSON reports, categorize their fields and pair values across reports",
    version
)]
pub struct Args {
    /// Report ids to fetch, e.g. `1-20` or `1,3,5-7`.
    #[arg(long, value_name = "LIST")]
    pub ids: Option<String>,

    /// Report URL template; `{id}` is replaced by each report id.
    #[arg(long, value_name = "TEMPLATE")]
    pub url: Option<String>,

    /// Pause between requests, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub pause_ms: Option<u64>,

    /// Per-request timeout in seconds (none by default).
    #[arg(long, value_name = "S")]
    pub timeout_secs: Option<u64>,

    /// Directory for both output tables.
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Output format: csv or tsv.
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Seed for the random pairing, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Debug-level logging (ignored when RUST_LOG is set).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> Result<AppOptions> {
        let mut opts = AppOptions::default();

        if let Some(list) = &self.ids {
            opts.fetch.ids = IdSelector::Ids(parse_ids_list(list)?);
        }
        if let Some(url) = &self.url {
            opts.fetch.set_url_template(url)?;
        }
        if let Some(ms) = self.pause_ms {
            opts.fetch.pause = Duration::from_millis(ms);
        }
        opts.fetch.timeout = self.timeout_secs.map(Duration::from_secs);

        if let Some(dir) = self.out_dir {
            opts.export.out_dir = dir;
        }
        opts.export.format = self.format;
        opts.seed = self.seed;
        Ok(opts)
    }
}

/// Plain console lines: progress on stdout, failures on stderr.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn fetching(&mut self, _id: u32, url: &str) {
        println!("Fetching: {url}");
    }

    fn item_failed(&mut self, _id: u32, err: &FetchError) {
        match err {
            FetchError::Status { url, status } => {
                eprintln!("Failed to retrieve data from {url}. Status Code: {status}");
            }
            other => eprintln!("Error fetching {}: {other}", other.url()),
        }
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run(args: Args) -> Result<RunSummary> {
    crate::log::init(args.verbose);

    let opts = args.into_options()?;
    let source = HttpSource::new(&opts.fetch)?;
    let mut console = ConsoleProgress;
    runner::run(&opts, &source, Some(&mut console))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("cdi_scrape").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_means_fixed_defaults() {
        let opts = parse(&[]).into_options().unwrap();
        assert_eq!(opts, AppOptions::default());
    }

    #[test]
    fn flags_override_options() {
        let opts = parse(&[
            "--ids", "3-5,9",
            "--url", "http://localhost:8080/r/{id}",
            "--pause-ms", "0",
            "--timeout-secs", "5",
            "-o", "out",
            "--format", "tsv",
            "--seed", "42",
        ])
        .into_options()
        .unwrap();

        assert_eq!(opts.fetch.ids.resolve(), vec![3, 4, 5, 9]);
        assert_eq!(opts.fetch.url_for(4), "http://localhost:8080/r/4");
        assert!(opts.fetch.pause.is_zero());
        assert_eq!(opts.fetch.timeout, Some(Duration::from_secs(5)));
        assert_eq!(opts.export.pairs_path(), PathBuf::from("out").join("random_value_pairs.tsv"));
        assert_eq!(opts.seed, Some(42));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(Args::try_parse_from(["cdi_scrape", "--format", "json"]).is_err());
        assert!(parse(&["--ids", "9-2"]).into_options().is_err());
        assert!(parse(&["--url", "http://localhost/"]).into_options().is_err());
    }
}
