//! Keyword-driven NICE class suggestions.

mod engine;
pub mod router;
mod table;

pub use engine::{
    confidence_for, suggest_classes, ClassificationEngine, ClassificationSuggestion,
    DEFAULT_MAX_SUGGESTIONS,
};
pub use router::classification_router;
pub use table::{ClassEntry, ClassTable};
