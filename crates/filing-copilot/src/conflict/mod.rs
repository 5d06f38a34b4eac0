//! Name-availability check against prior marks.
//!
//! Only the interface is real today: [`BasicConflictChecker`] never reports a
//! conflict. A registry-backed [`ConflictSearch`] can replace it without
//! touching the router or callers.

pub mod router;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intake::NiceClass;

pub use router::conflict_router;

pub const DISCLAIMER: &str = "This is a basic, automated name check for identical or highly similar marks. It is not a comprehensive availability search and does not guarantee registration. For legal advice, consult a qualified attorney.";

pub const STATUS_OK: &str = "ok";

/// Prior mark that may collide with the applicant's mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictItem {
    pub mark_text: String,
    pub class_number: u8,
    pub similarity: f64,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Result envelope returned to clients, always carrying the disclaimer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub status: String,
    pub disclaimer: String,
    #[serde(default)]
    pub items: Vec<ConflictItem>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConflictSearchError {
    #[error("conflict search backend unavailable: {0}")]
    Unavailable(String),
}

/// Backend seam for prior-mark lookups.
pub trait ConflictSearch: Send + Sync {
    fn search(
        &self,
        mark_text: &str,
        classes: &[NiceClass],
    ) -> Result<Vec<ConflictItem>, ConflictSearchError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BasicConflictChecker;

impl ConflictSearch for BasicConflictChecker {
    fn search(
        &self,
        _mark_text: &str,
        _classes: &[NiceClass],
    ) -> Result<Vec<ConflictItem>, ConflictSearchError> {
        Ok(Vec::new())
    }
}

/// Runs `search` and wraps the hits with the fixed disclaimer.
pub fn check_conflicts(
    search: &dyn ConflictSearch,
    mark_text: &str,
    classes: &[NiceClass],
) -> Result<ConflictReport, ConflictSearchError> {
    let items = search.search(mark_text, classes)?;
    debug!(classes = classes.len(), hits = items.len(), "conflict check completed");
    Ok(ConflictReport {
        status: STATUS_OK.to_string(),
        disclaimer: DISCLAIMER.to_string(),
        items,
    })
}

/// The stubbed check: always empty, always disclaimed.
pub fn basic_conflict_check(mark_text: &str, classes: &[NiceClass]) -> ConflictReport {
    let items = BasicConflictChecker
        .search(mark_text, classes)
        .unwrap_or_default();
    ConflictReport {
        status: STATUS_OK.to_string(),
        disclaimer: DISCLAIMER.to_string(),
        items,
    }
}
