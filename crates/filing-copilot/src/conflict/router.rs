use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::{check_conflicts, ConflictSearch};
use crate::intake::NiceClass;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictCheckRequest {
    pub mark_text: String,
    pub nice_classes: Vec<NiceClass>,
}

pub fn conflict_router(search: Arc<dyn ConflictSearch>) -> Router {
    Router::new()
        .route("/api/conflict-check", post(conflict_check_handler))
        .with_state(search)
}

pub(crate) async fn conflict_check_handler(
    State(search): State<Arc<dyn ConflictSearch>>,
    Json(request): Json<ConflictCheckRequest>,
) -> Response {
    match check_conflicts(search.as_ref(), &request.mark_text, &request.nice_classes) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => {
            warn!(error = %err, "conflict search failed");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
