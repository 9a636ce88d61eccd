use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    animation::stylesheet,
    emoji::{Category, EmojiMatch, match_emoji},
    error::AppError,
    state::State as AppState,
};

#[derive(Deserialize)]
pub struct EmojiQuery {
    #[serde(default)]
    text: String,
    category: Option<String>,
}

#[derive(Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    category: Category,
    labels: Vec<String>,
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn emoji_handler(Query(query): Query<EmojiQuery>) -> Result<Json<EmojiMatch>, AppError> {
    let category = match query.category.as_deref() {
        Some(raw) => raw.parse()?,
        None => Category::default(),
    };

    let matched = match_emoji(&query.text, category);
    debug!(text = %query.text, emoji = matched.emoji, "Matched label");

    Ok(Json(matched))
}

pub async fn batch_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Vec<EmojiMatch>>, AppError> {
    let request = get_batch(&state, &body)?;

    let matches: Vec<EmojiMatch> = request
        .labels
        .iter()
        .map(|label| match_emoji(label, request.category))
        .collect();
    debug!("Matched {} labels", matches.len());

    Ok(Json(matches))
}

pub async fn stylesheet_handler() -> impl IntoResponse {
    (StatusCode::OK, [(CONTENT_TYPE, "text/css; charset=utf-8")], stylesheet())
}

fn get_batch(state: &AppState, body: &[u8]) -> Result<BatchRequest, AppError> {
    let request: BatchRequest =
        serde_json::from_slice(body).map_err(|_| AppError::MalformedPayload)?;

    let max = state.config.max_batch;
    if request.labels.len() > max {
        return Err(AppError::BatchTooLarge {
            len: request.labels.len(),
            max,
        });
    }

    Ok(request)
}
