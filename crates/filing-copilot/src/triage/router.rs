use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::TriageService;
use crate::intake::ChatMessage;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

pub fn triage_router(service: Arc<TriageService>) -> Router {
    Router::new()
        .route("/api/triage/chat", post(chat_handler))
        .with_state(service)
}

pub(crate) async fn chat_handler(
    State(service): State<Arc<TriageService>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let reply = service.reply(&request.messages).await;
    Json(ChatResponse { reply })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::UNCONFIGURED_REPLY;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn route_answers_with_placeholder_when_unconfigured() {
        let router = triage_router(Arc::new(TriageService::unconfigured()));
        let response = router
            .oneshot(
                Request::post("/api/triage/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"messages":[{"role":"user","content":"hi"}]}"#))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), 4096)
            .await
            .expect("body readable");
        let body: ChatResponse = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body.reply, UNCONFIGURED_REPLY);
    }

    #[tokio::test]
    async fn messages_default_to_empty() {
        let Json(body) = chat_handler(
            State(Arc::new(TriageService::unconfigured())),
            Json(serde_json::from_str::<ChatRequest>("{}").expect("parses")),
        )
        .await;
        assert_eq!(body.reply, UNCONFIGURED_REPLY);
    }
}
