use crate::models::{
    ExampleInput, ModelInfo, ModelsResponse, PredictRequest, PredictResponse, UiResponse,
};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use spamcheck_core::Error;

// ============================================================================
// Health endpoints
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Model endpoints
// ============================================================================

pub async fn list_models(State(state): State<AppState>) -> impl IntoResponse {
    let registry = state.registry();
    let default = registry.default_model().to_string();

    let models = registry
        .entries()
        .iter()
        .map(|entry| ModelInfo {
            name: entry.name().to_string(),
            threshold: entry.threshold(),
            default: entry.name() == default,
        })
        .collect();

    Json(ModelsResponse { models, default })
}

pub async fn get_ui(State(state): State<AppState>) -> impl IntoResponse {
    let default = state.registry().default_model().to_string();

    let examples = state
        .ui
        .examples
        .iter()
        .map(|text| ExampleInput {
            text: text.clone(),
            model: default.clone(),
        })
        .collect();

    Json(UiResponse {
        title: state.ui.title.clone(),
        description: state.ui.description.clone(),
        examples,
    })
}

// ============================================================================
// Prediction endpoint
// ============================================================================

pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> impl IntoResponse {
    let model = req
        .model
        .unwrap_or_else(|| state.registry().default_model().to_string());

    match state.predictor.predict(&req.text, &model) {
        Ok(result) => (
            StatusCode::OK,
            Json(serde_json::to_value(PredictResponse::new(result, model)).unwrap_or_default()),
        ),
        Err(e @ Error::UnknownModel(_)) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
        Err(e) => {
            tracing::error!("Prediction failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}
