use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use folio_content::{robots_txt, PostMetadata, PostResolver, Sitemap, POSTS};
use folio_core::BlogPost;

use crate::error::Result;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts() -> Json<&'static [PostMetadata]> {
    Json(POSTS)
}

/// GET /api/posts/:slug
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>> {
    let posts_dir = state.config.snapshot().await.content.posts_dir;
    let post = PostResolver::new(posts_dir).resolve(&slug).await?;
    Ok(Json(post))
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let site_url = state.config.snapshot().await.site.url;
    let xml = Sitemap::build(&site_url, POSTS).to_xml(chrono::Utc::now());
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}

/// GET /robots.txt
pub async fn robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let site_url = state.config.snapshot().await.site.url;
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&site_url),
    )
}
