// src/runner.rs
use std::path::PathBuf;
use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::{
    config::options::{AppOptions, FetchOptions},
    core::ReportSource,
    error::Result,
    extract::Harvest,
    file::{export_entries, export_pairs},
    pair::{pair_sources, paired_records, PairOutcome},
    progress::Progress,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub entries: usize,
    pub pairs: usize,
    /// Ids whose fetch failed and were skipped.
    pub failed_ids: Vec<u32>,
    /// Sources with values but no partner source to pair with.
    pub unpaired: Vec<String>,
    pub files_written: Vec<PathBuf>,
}

/// Fetch every selected id in order and fold the reports into one `Harvest`.
/// Failures are reported and skipped. Returns the harvest plus the failed ids.
pub fn collect(
    fetch: &FetchOptions,
    source: &dyn ReportSource,
    mut progress: Option<&mut dyn Progress>,
) -> (Harvest, Vec<u32>) {
    let ids = fetch.ids.resolve();
    let mut harvest = Harvest::new();
    let mut failed = Vec::new();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    for (i, id) in ids.iter().copied().enumerate() {
        if i > 0 && !fetch.pause.is_zero() {
            thread::sleep(fetch.pause); // be polite
        }

        let url = fetch.url_for(id);
        debug!(id, url = %url, "fetching report");
        if let Some(p) = progress.as_deref_mut() {
            p.fetching(id, &url);
        }

        match source.fetch(&url) {
            Ok(report) => {
                let added = harvest.absorb(&url, &report);
                debug!(id, entries = added, "report absorbed");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id, added);
                }
            }
            Err(e) => {
                warn!(id, error = %e, "report skipped");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id, &e);
                }
                failed.push(id);
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    (harvest, failed)
}

/// Top-level runner: fetch, pair, then write both tables.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    source: &dyn ReportSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let (harvest, failed_ids) = collect(
        &opts.fetch,
        source,
        progress.as_deref_mut().map(|p| p as &mut dyn Progress),
    );

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let outcomes = pair_sources(&harvest, &mut rng);

    let mut unpaired = Vec::new();
    for o in &outcomes {
        if let PairOutcome::NoPartner { source: lone } = o {
            warn!(source = %lone, "no partner source; pair skipped");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("No partner available for {lone}; skipped"));
            }
            unpaired.push(lone.clone());
        }
    }
    let pairs = paired_records(&outcomes);

    let entries_path = export_entries(&opts.export, harvest.entries())?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Extracted values saved to {}", entries_path.display()));
    }
    let pairs_path = export_pairs(&opts.export, &pairs)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Random value pairs saved to {}", pairs_path.display()));
    }

    info!(
        entries = harvest.entries().len(),
        pairs = pairs.len(),
        failed = failed_ids.len(),
        "run complete"
    );

    Ok(RunSummary {
        entries: harvest.entries().len(),
        pairs: pairs.len(),
        failed_ids,
        unpaired,
        files_written: vec![entries_path, pairs_path],
    })
}
