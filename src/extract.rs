// src/extract.rs
use serde_json::{Map, Value};
use tracing::debug;

use crate::categorize::{categorize_key, Category};

/// One fetched report: top-level sections keyed by name.
pub type Report = Map<String, Value>;

/// One categorized field pulled out of a report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub source: String,
    pub category: Category,
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.source.clone(),
            self.category.to_string(),
            self.key.clone(),
            self.value.clone(),
        ]
    }
}

/// Values collected from one source, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceValues {
    pub source: String,
    pub values: Vec<String>,
}

/// Run-wide accumulator. Sources keep the order they were first seen.
#[derive(Clone, Debug, Default)]
pub struct Harvest {
    entries: Vec<Entry>,
    sources: Vec<SourceValues>,
}

impl Harvest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the report's object sections and record every categorized field.
    /// Returns how many entries this report contributed.
    pub fn absorb(&mut self, source: &str, report: &Report) -> usize {
        let slot = self.slot(source);
        let mut added = 0usize;

        for (section, fields) in report {
            let Value::Object(fields) = fields else {
                debug!(source, section = %section, "skipping non-object section");
                continue;
            };
            for (key, value) in fields {
                let Some(category) = categorize_key(key) else { continue };
                let text = render_value(value);
                self.sources[slot].values.push(text.clone());
                self.entries.push(Entry {
                    source: source.to_string(),
                    category,
                    key: key.clone(),
                    value: text,
                });
                added += 1;
            }
        }
        added
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn sources(&self) -> &[SourceValues] {
        &self.sources
    }

    pub fn values_for(&self, source: &str) -> Option<&[String]> {
        self.sources
            .iter()
            .find(|s| s.source == source)
            .map(|s| s.values.as_slice())
    }

    fn slot(&mut self, source: &str) -> usize {
        match self.sources.iter().position(|s| s.source == source) {
            Some(i) => i,
            None => {
                self.sources.push(SourceValues { source: source.to_string(), values: Vec::new() });
                self.sources.len() - 1
            }
        }
    }
}

/// Strings are taken verbatim; anything else is written as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report(v: Value) -> Report {
        match v {
            Value::Object(m) => m,
            _ => panic!("test report must be an object"),
        }
    }

    #[test]
    fn general_section_yields_name_and_place() {
        let r = report(json!({
            "General": {"Station name": "Alpha", "Latitude": "10.5", "Unrelated": "xyz"}
        }));
        let mut h = Harvest::new();
        assert_eq!(h.absorb("src1", &r), 2);

        let got: Vec<_> = h.entries().iter()
            .map(|e| (e.category, e.key.as_str(), e.value.as_str()))
            .collect();
        assert_eq!(got, vec![
            (Category::Name, "Station name", "Alpha"),
            (Category::Place, "Latitude", "10.5"),
        ]);
        assert_eq!(h.values_for("src1").unwrap(), ["Alpha", "10.5"]);
    }

    #[test]
    fn non_object_sections_are_skipped() {
        let r = report(json!({
            "Title": "Station name",
            "List": [{"Station name": "x"}],
            "Where": {"Longitude": -3.25}
        }));
        let mut h = Harvest::new();
        h.absorb("s", &r);
        assert_eq!(h.entries().len(), 1);
        assert_eq!(h.entries()[0].value, "-3.25");
    }

    #[test]
    fn empty_report_still_registers_source() {
        let mut h = Harvest::new();
        h.absorb("s", &Report::new());
        assert_eq!(h.sources().len(), 1);
        assert!(h.values_for("s").unwrap().is_empty());
        assert!(h.entries().is_empty());
    }

    #[test]
    fn renders_non_strings_as_json() {
        assert_eq!(render_value(&json!("plain")), "plain");
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(null)), "null");
        assert_eq!(render_value(&json!({"a": [1, 2]})), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn keeps_document_order_across_sections() {
        let r = report(json!({
            "B": {"End date": "2001", "Abstract": "text"},
            "A": {"Data size": 12}
        }));
        let mut h = Harvest::new();
        h.absorb("s", &r);
        let keys: Vec<_> = h.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["End date", "Abstract", "Data size"]);
    }
}
