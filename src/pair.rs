// src/pair.rs
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::extract::{Harvest, SourceValues};

/// Two values drawn from two different sources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairRecord {
    pub value_a: String,
    pub value_b: String,
    pub source_a: String,
    pub source_b: String,
}

impl PairRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.value_a.clone(),
            self.value_b.clone(),
            self.source_a.clone(),
            self.source_b.clone(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    Paired(PairRecord),
    /// The source was the only one with values; nothing to pair it with.
    NoPartner { source: String },
}

/// One outcome per non-empty source, in source order.
pub fn pair_sources<R: Rng + ?Sized>(harvest: &Harvest, rng: &mut R) -> Vec<PairOutcome> {
    let filled: Vec<&SourceValues> = harvest
        .sources()
        .iter()
        .filter(|s| !s.values.is_empty())
        .collect();

    let mut out = Vec::with_capacity(filled.len());
    for (i, own) in filled.iter().enumerate() {
        let others: Vec<&SourceValues> = filled
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, s)| *s)
            .collect();

        out.push(match pick(own, &others, rng) {
            Some(record) => PairOutcome::Paired(record),
            None => PairOutcome::NoPartner { source: own.source.clone() },
        });
    }
    out
}

// Only `others` can come up empty; every list in play is non-empty.
fn pick<R: Rng + ?Sized>(
    own: &SourceValues,
    others: &[&SourceValues],
    rng: &mut R,
) -> Option<PairRecord> {
    let value_a = own.values.choose(rng)?;
    let partner = others.choose(rng)?;
    let value_b = partner.values.choose(rng)?;
    Some(PairRecord {
        value_a: value_a.clone(),
        value_b: value_b.clone(),
        source_a: own.source.clone(),
        source_b: partner.source.clone(),
    })
}

pub fn paired_records(outcomes: &[PairOutcome]) -> Vec<&PairRecord> {
    outcomes
        .iter()
        .filter_map(|o| match o {
            PairOutcome::Paired(r) => Some(r),
            PairOutcome::NoPartner { .. } => None,
        })
        .collect()
}
