use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{DocumentAssembler, ZIP_MEDIA_TYPE};
use crate::error::AppError;
use crate::intake::TrademarkIntake;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentGenerateRequest {
    pub intake: TrademarkIntake,
}

pub fn documents_router(assembler: Arc<DocumentAssembler>) -> Router {
    Router::new()
        .route("/api/documents/generate", post(generate_handler))
        .with_state(assembler)
}

pub(crate) async fn generate_handler(
    State(assembler): State<Arc<DocumentAssembler>>,
    Json(request): Json<DocumentGenerateRequest>,
) -> Result<Response, AppError> {
    let package = tokio::task::spawn_blocking(move || assembler.assemble(&request.intake))
        .await
        .map_err(std::io::Error::other)??;

    let disposition = format!("attachment; filename=\"{}\"", package.file_name);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, ZIP_MEDIA_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        package.bytes,
    )
        .into_response())
}
