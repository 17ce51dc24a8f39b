// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
    /// Seed for the pairing RNG; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdSelector {
    Range { first: u32, last: u32 },
    Ids(Vec<u32>),
}

impl IdSelector {
    pub fn resolve(&self) -> Vec<u32> {
        match self {
            IdSelector::Range { first, last } => (*first..=*last).collect(),
            IdSelector::Ids(v) => v.clone(),
        }
    }
}

impl Default for IdSelector {
    fn default() -> Self {
        IdSelector::Range { first: FIRST_ID, last: LAST_ID }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url_template: String,
    pub ids: IdSelector,
    pub pause: Duration,
    /// No timeout unless asked for; a stalled server stalls the run.
    pub timeout: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            url_template: BASE_URL.to_string(),
            ids: IdSelector::default(),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            timeout: None,
        }
    }
}

impl FetchOptions {
    pub fn set_url_template(&mut self, template: &str) -> Result<(), ConfigError> {
        if !template.contains(ID_PLACEHOLDER) {
            return Err(ConfigError::Template(template.to_string()));
        }
        self.url_template = template.to_string();
        Ok(())
    }

    pub fn url_for(&self, id: u32) -> String {
        self.url_template.replace(ID_PLACEHOLDER, &id.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(ConfigError::Format(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn extracted_path(&self) -> PathBuf {
        self.path_for(EXTRACTED_STEM)
    }

    pub fn pairs_path(&self) -> PathBuf {
        self.path_for(PAIRS_STEM)
    }

    fn path_for(&self, stem: &str) -> PathBuf {
        let name = format!("{stem}.{}", self.format.ext());
        if self.out_dir == Path::new(DEFAULT_OUT_DIR) {
            PathBuf::from(name)
        } else {
            self.out_dir.join(name)
        }
    }
}

/// Parse `1-20` / `1,3,5-7` into a sorted, deduplicated id list.
pub fn parse_ids_list(s: &str) -> Result<Vec<u32>, ConfigError> {
    let bad = || ConfigError::IdList(s.to_string());
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some((a, b)) = part.split_once('-') {
            let a: u32 = a.trim().parse().map_err(|_| bad())?;
            let b: u32 = b.trim().parse().map_err(|_| bad())?;
            if a > b { return Err(ConfigError::IdRange(part.to_string())); }
            if a == 0 { return Err(ConfigError::IdZero(a)); }
            if (b - a) as usize >= MAX_IDS - out.len() {
                return Err(ConfigError::TooManyIds { max: MAX_IDS });
            }
            out.extend(a..=b);
        } else {
            let v: u32 = part.parse().map_err(|_| bad())?;
            if v == 0 { return Err(ConfigError::IdZero(v)); }
            if out.len() >= MAX_IDS {
                return Err(ConfigError::TooManyIds { max: MAX_IDS });
            }
            out.push(v);
        }
    }
    if out.is_empty() { return Err(bad()); }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_is_one_to_twenty() {
        let ids = IdSelector::default().resolve();
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&20));
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn ids_list_mixes_ranges_and_singles() {
        assert_eq!(parse_ids_list("5-7, 1,3,6").unwrap(), vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn ids_list_rejects_garbage() {
        assert!(matches!(parse_ids_list("4-2"), Err(ConfigError::IdRange(_))));
        assert!(matches!(parse_ids_list("0"), Err(ConfigError::IdZero(0))));
        assert!(matches!(parse_ids_list("x"), Err(ConfigError::IdList(_))));
        assert!(matches!(parse_ids_list(" , "), Err(ConfigError::IdList(_))));
    }

    #[test]
    fn ids_list_caps_huge_ranges() {
        assert!(matches!(
            parse_ids_list("1-4000000000"),
            Err(ConfigError::TooManyIds { max: MAX_IDS })
        ));
        assert!(matches!(
            parse_ids_list("1-9999,20000-20001"),
            Err(ConfigError::TooManyIds { .. })
        ));
        assert_eq!(parse_ids_list(&format!("1-{MAX_IDS}")).unwrap().len(), MAX_IDS);
    }

    #[test]
    fn url_substitutes_id() {
        let opts = FetchOptions::default();
        assert_eq!(opts.url_for(7), "https://cdi.seadatanet.org/report/7/json");
    }

    #[test]
    fn template_requires_placeholder() {
        let mut opts = FetchOptions::default();
        assert!(opts.set_url_template("http://localhost/report").is_err());
        opts.set_url_template("http://localhost/r/{id}").unwrap();
        assert_eq!(opts.url_for(3), "http://localhost/r/3");
    }

    #[test]
    fn export_paths_follow_format_and_dir() {
        let mut export = ExportOptions::default();
        assert_eq!(export.extracted_path(), PathBuf::from("extracted_values.csv"));
        assert_eq!(export.pairs_path(), PathBuf::from("random_value_pairs.csv"));

        export.format = ExportFormat::Tsv;
        export.out_dir = PathBuf::from("out");
        assert_eq!(export.extracted_path(), PathBuf::from("out").join("extracted_values.tsv"));
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("TSV".parse::<ExportFormat>().unwrap(), ExportFormat::Tsv);
        assert!("json".parse::<ExportFormat>().is_err());
    }
}
