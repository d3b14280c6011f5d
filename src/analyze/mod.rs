pub mod accuracy;
pub mod banner;
pub mod explain;
pub mod jitter;
pub mod score;

use crate::types::keywords::KeywordTables;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Lowercased `name + " " + description`, the text every heuristic matches against.
pub fn scan_text(name: &str, description: &str) -> String {
    format!("{name} {description}").to_lowercase()
}

/// Scorer and explainer bound to one immutable pair of keyword tables.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    tables: KeywordTables,
}

impl Scorer {
    pub fn new(tables: KeywordTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    pub fn score(&self, name: &str, description: &str) -> u8 {
        score::score(&self.tables, name, description)
    }

    pub fn explain(&self, name: &str, description: &str, score: u8) -> String {
        explain::explain(&self.tables, name, description, score)
    }
}
