// src/categorize.rs
use std::fmt;

/// Semantic bucket assigned to a report field by keyword matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Name,
    Place,
    Time,
    Description,
    OtherNumeric,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Name => "name",
            Category::Place => "place",
            Category::Time => "time",
            Category::Description => "description",
            Category::OtherNumeric => "other_numeric",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category table. Order matters: the first category with a matching keyword wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Name, &[
        "Data set name",
        "Cruise name",
        "Alternative cruise name",
        "Station name",
        "Alternative station name",
    ]),
    (Category::Place, &[
        "Latitude",
        "Longitude",
        "Sea regions",
        "MSFD areas",
    ]),
    (Category::Time, &[
        "Start date",
        "Start time",
        "End date",
        "End time",
        "Cruise start date",
        "Station start date",
    ]),
    (Category::Description, &[
        "Abstract",
        "Discipline",
        "Parameter groups",
        "Discovery parameter",
        "GEMET-INSPIRE themes",
    ]),
    (Category::OtherNumeric, &[
        "Data size",
        "Water depth (m)",
        "Minimum instrument depth (m)",
        "Maximum instrument depth (m)",
    ]),
];

/// Case-insensitive substring match of `key` against the category table.
/// Not word-boundary aware: "Station name (alt)" is a `name` as much as "Station name".
pub fn categorize_key(key: &str) -> Option<Category> {
    let key_lower = key.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords.iter().any(|kw| key_lower.contains(&kw.to_lowercase()))
        })
        .map(|(category, _)| *category)
}
