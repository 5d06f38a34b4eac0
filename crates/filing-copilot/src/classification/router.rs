use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::engine::{ClassificationEngine, ClassificationSuggestion, DEFAULT_MAX_SUGGESTIONS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub business_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub suggestions: Vec<ClassificationSuggestion>,
}

pub fn classification_router(engine: Arc<ClassificationEngine>) -> Router {
    Router::new()
        .route("/api/classify/suggest", post(suggest_handler))
        .with_state(engine)
}

pub(crate) async fn suggest_handler(
    State(engine): State<Arc<ClassificationEngine>>,
    Json(request): Json<ClassificationRequest>,
) -> Json<ClassificationResponse> {
    let suggestions = engine.suggest(&request.business_description, DEFAULT_MAX_SUGGESTIONS);
    Json(ClassificationResponse { suggestions })
}
