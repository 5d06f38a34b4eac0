use filing_copilot::classification::{ClassTable, ClassificationEngine};
use filing_copilot::config::AppConfig;
use filing_copilot::conflict::{BasicConflictChecker, ConflictSearch};
use filing_copilot::documents::DocumentAssembler;
use filing_copilot::triage::TriageService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) app_env: String,
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-wide services, built once at startup and never mutated.
#[derive(Clone)]
pub(crate) struct Services {
    pub(crate) classification: Arc<ClassificationEngine>,
    pub(crate) conflicts: Arc<dyn ConflictSearch>,
    pub(crate) triage: Arc<TriageService>,
    pub(crate) documents: Arc<DocumentAssembler>,
}

impl Services {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        let table = Arc::new(ClassTable::standard());
        Self {
            classification: Arc::new(ClassificationEngine::new(table.clone())),
            conflicts: Arc::new(BasicConflictChecker),
            triage: Arc::new(TriageService::from_config(&config.llm)),
            documents: Arc::new(DocumentAssembler::new(
                config.documents.generated_dir.clone(),
                table,
            )),
        }
    }
}

pub(crate) fn build_assembler(output_dir: PathBuf) -> DocumentAssembler {
    DocumentAssembler::new(output_dir, Arc::new(ClassTable::standard()))
}
