use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::table::ClassTable;

pub const DEFAULT_MAX_SUGGESTIONS: usize = 4;

const BASE_CONFIDENCE: f64 = 0.5;
const CONFIDENCE_PER_MATCH: f64 = 0.1;
const CONFIDENCE_CEILING: f64 = 0.9;

/// Candidate class for a business description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSuggestion {
    pub class_number: u8,
    pub class_title: String,
    pub confidence: f64,
}

/// Keyword scorer over an immutable [`ClassTable`].
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    table: Arc<ClassTable>,
}

impl ClassificationEngine {
    pub fn new(table: Arc<ClassTable>) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(ClassTable::standard()))
    }

    pub fn table(&self) -> &ClassTable {
        &self.table
    }

    /// Ranks classes by the number of distinct keywords found in `description`.
    ///
    /// Matching is plain substring containment on the lower-cased text, so
    /// "cafeteria" counts as "cafe".
    pub fn suggest(&self, description: &str, max_results: usize) -> Vec<ClassificationSuggestion> {
        let text = description.to_lowercase();
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, u32)> = self
            .table
            .entries()
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let score = entry
                    .keywords
                    .iter()
                    .filter(|keyword| text.contains(*keyword))
                    .count() as u32;
                (score > 0).then_some((index, score))
            })
            .collect();

        // stable: equal scores keep table order
        scored.sort_by(|left, right| right.1.cmp(&left.1));
        scored.truncate(max_results);

        let entries = self.table.entries();
        let suggestions: Vec<ClassificationSuggestion> = scored
            .into_iter()
            .map(|(index, score)| ClassificationSuggestion {
                class_number: entries[index].number,
                class_title: entries[index].title.to_string(),
                confidence: confidence_for(score),
            })
            .collect();

        debug!(
            matched = suggestions.len(),
            max_results, "classified business description"
        );
        suggestions
    }
}

pub fn confidence_for(score: u32) -> f64 {
    (BASE_CONFIDENCE + CONFIDENCE_PER_MATCH * f64::from(score)).min(CONFIDENCE_CEILING)
}

/// Convenience entry point over the standard table.
pub fn suggest_classes(description: &str, max_results: usize) -> Vec<ClassificationSuggestion> {
    ClassificationEngine::standard().suggest(description, max_results)
}
