use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use folio_content::ResumeStore;
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResumeQuery {
    download: Option<String>,
}

/// GET /resume/file[?download=1]
pub async fn resume_file(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ResumeQuery>,
) -> Result<Response> {
    let path = state.config.snapshot().await.content.resume_path;
    let download = query.download.as_deref() == Some("1");

    let resume = ResumeStore::new(path).load().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, resume.content_disposition(download)),
            (
                header::CACHE_CONTROL,
                "public, max-age=86400, immutable".to_string(),
            ),
        ],
        resume.bytes,
    )
        .into_response())
}
