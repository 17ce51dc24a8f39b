// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://cdi.seadatanet.org/report/{id}/json";
pub const ID_PLACEHOLDER: &str = "{id}";
pub const FIRST_ID: u32 = 1;
pub const LAST_ID: u32 = 20;
pub const MAX_IDS: usize = 10_000; // upper bound for one --ids list
pub const USER_AGENT: &str = concat!("cdi_scrape/", env!("CARGO_PKG_VERSION"));

// Pacing
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const EXTRACTED_STEM: &str = "extracted_values";
pub const PAIRS_STEM: &str = "random_value_pairs";

pub const EXTRACTED_HEADERS: [&str; 4] = ["File", "Category", "Key", "Value"];
pub const PAIRS_HEADERS: [&str; 4] = [
    "Pair 1 (Value)",
    "Pair 2 (Value)",
    "Pair 1 File Name",
    "Pair 2 File Name",
];
