//! Filing package generation: three PDFs bundled into one timestamped ZIP.

mod bundle;
mod render;
pub mod router;
mod templates;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::classification::ClassTable;
use crate::intake::TrademarkIntake;

pub use bundle::zip_documents;
pub use render::{render_pdf, Line, TextDocument};
pub use router::documents_router;
pub use templates::{application_form, file_slug, filing_guide, power_of_attorney};

pub const ZIP_MEDIA_TYPE: &str = "application/zip";

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to write filing package: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render document: {0}")]
    Render(String),
    #[error("failed to archive documents: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Archive written to disk plus the bytes served to the client.
#[derive(Debug, Clone)]
pub struct GeneratedPackage {
    pub file_name: String,
    pub path: PathBuf,
    pub documents: Vec<String>,
    pub bytes: Vec<u8>,
}

pub fn package_file_name(at: NaiveDateTime) -> String {
    format!("Trademark_Package_{}.zip", at.format("%Y%m%d_%H%M%S"))
}

/// Renders the form, power of attorney and guide for an intake.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    output_dir: PathBuf,
    table: Arc<ClassTable>,
}

impl DocumentAssembler {
    pub fn new(output_dir: impl Into<PathBuf>, table: Arc<ClassTable>) -> Self {
        Self {
            output_dir: output_dir.into(),
            table,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn render(
        &self,
        intake: &TrademarkIntake,
    ) -> Result<Vec<(String, Vec<u8>)>, DocumentError> {
        [
            application_form(intake, &self.table),
            power_of_attorney(intake),
            filing_guide(intake, &self.table),
        ]
        .iter()
        .map(|document| render_pdf(document).map(|bytes| (document.file_name.clone(), bytes)))
        .collect()
    }

    pub fn assemble(&self, intake: &TrademarkIntake) -> Result<GeneratedPackage, DocumentError> {
        self.assemble_at(intake, Local::now().naive_local())
    }

    pub fn assemble_at(
        &self,
        intake: &TrademarkIntake,
        at: NaiveDateTime,
    ) -> Result<GeneratedPackage, DocumentError> {
        let files = self.render(intake)?;
        let bytes = zip_documents(&files)?;

        fs::create_dir_all(&self.output_dir)?;
        let file_name = package_file_name(at);
        let path = self.output_dir.join(&file_name);
        fs::write(&path, &bytes)?;

        info!(
            package = %file_name,
            documents = files.len(),
            size = bytes.len(),
            "filing package generated"
        );

        Ok(GeneratedPackage {
            file_name,
            path,
            documents: files.into_iter().map(|(name, _)| name).collect(),
            bytes,
        })
    }
}
