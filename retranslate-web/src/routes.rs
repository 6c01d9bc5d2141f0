use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use retranslate::TranslationRecord;
use retranslate_mt::{MachineTranslator, translate_partial};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::ApiError;

pub const DEFAULT_TARGET_LANG: &str = "JA";

#[derive(Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub target_lang: Option<String>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub source_lang: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PartialTranslateRequest {
    #[serde(default)]
    pub original_english: Option<String>,
    #[serde(default)]
    pub original_japanese: Option<String>,
    #[serde(default)]
    pub modified_japanese: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct PartialTranslateResponse {
    pub translated_text: String,
}

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn MachineTranslator>,
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/translate", post(translate))
        .route("/api/translate-partial", post(translate_partial_handler))
        .with_state(state)
}

/// Treat absent and empty strings alike
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(request) = payload?;
    let text = required(request.text).ok_or_else(|| ApiError::bad_request("No text was provided"))?;
    let api_key = required(request.api_key)
        .ok_or_else(|| ApiError::bad_request("No DeepL API key was provided"))?;
    let target_lang = required(request.target_lang).unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string());
    let source_lang = required(request.source_lang);

    info!(
        provider = state.translator.provider_name(),
        target_lang = %target_lang,
        chars = text.chars().count(),
        "full translation requested"
    );

    let translation = state
        .translator
        .translate(&text, source_lang.as_deref(), &target_lang, &api_key)
        .await
        .map_err(|e| {
            warn!(category = e.category(), status = e.status_code(), "translation failed: {}", e);
            ApiError::from_gateway(&e)
        })?;

    Ok(Json(TranslateResponse {
        translated_text: translation.text,
        source_lang: translation.detected_source_lang.or(source_lang),
    }))
}

async fn translate_partial_handler(
    State(state): State<AppState>,
    payload: Result<Json<PartialTranslateRequest>, JsonRejection>,
) -> Result<Json<PartialTranslateResponse>, ApiError> {
    let Json(request) = payload?;
    let (Some(original_english), Some(original_japanese), Some(modified_japanese), Some(api_key)) = (
        required(request.original_english),
        required(request.original_japanese),
        required(request.modified_japanese),
        required(request.api_key),
    ) else {
        return Err(ApiError::bad_request("Required parameters are missing"));
    };

    let record = TranslationRecord::new(original_japanese, original_english, modified_japanese);
    let result = translate_partial(state.translator.as_ref(), &record, &api_key)
        .await
        .map_err(|e| {
            warn!(category = e.category(), status = e.status_code(), "partial translation failed: {}", e);
            ApiError::internal(format!("Partial translation error: {}", e))
        })?;

    info!(
        outcome = result.outcome.as_str(),
        difference_count = result.difference_count,
        "partial translation done"
    );

    Ok(Json(PartialTranslateResponse {
        translated_text: result.text,
    }))
}
