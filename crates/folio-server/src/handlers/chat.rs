use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use folio_core::{RelayRequest, RelayResponse};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::relay::ChatRelay;
use crate::state::AppState;

/// POST /api/chat
///
/// The body is parsed by hand so malformed JSON, a wrong content type and a
/// bad shape all produce the same `{error}` 400 body.
pub async fn chat(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<RelayResponse>> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Invalid request body".to_string()))?;
    let request = RelayRequest::from_value(&value)?;

    tracing::info!(
        messages = request.messages.len(),
        has_credential = request.credential().is_some(),
        "Relaying chat turn"
    );

    let config = state.config.snapshot().await;
    let message = ChatRelay::new(state.provider.as_ref(), &config.chat, &config.site.owner)
        .relay(request)
        .await;

    Ok(Json(RelayResponse { message }))
}
