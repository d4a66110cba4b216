use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use folio_config::{Config, ConfigManager};
use folio_core::{ChatMessage, ChatSession, Role};
use folio_llm::{Completion, CompletionRequest, LLMError, LLMProvider};
use folio_server::{create_router, AppState, MISSING_CREDENTIAL_REPLY, RELAY_FAILURE_REPLY};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

enum Behavior {
    Reply(&'static str),
    Fail,
    Panic,
}

struct CountingProvider {
    calls: AtomicUsize,
    behavior: Behavior,
}

impl CountingProvider {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            behavior,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMProvider for CountingProvider {
    fn provider_id(&self) -> &str {
        "counting"
    }

    async fn complete(
        &self,
        _request: CompletionRequest,
        _credential: &str,
    ) -> folio_llm::Result<Completion> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::Reply(text) => Ok(Completion {
                id: None,
                model: None,
                content: text.to_string(),
            }),
            Behavior::Fail => Err(LLMError::Api {
                status: 500,
                message: "upstream body with internals".to_string(),
            }),
            Behavior::Panic => panic!("provider blew up"),
        }
    }
}

fn app(dir: &Path, provider: Arc<CountingProvider>) -> Router {
    let mut config = Config::default();
    config.site.url = "https://example.com".to_string();
    config.content.posts_dir = dir.join("posts").to_string_lossy().to_string();
    config.content.resume_path = dir.join("Jane_resume.pdf").to_string_lossy().to_string();
    let manager = ConfigManager::new(config, dir.join("config.json"));
    create_router(AppState::new(manager, provider), true)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn post_chat(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::post("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_missing_key_replies_without_calling_upstream() {
    let dir = TempDir::new().unwrap();
    let provider = CountingProvider::new(Behavior::Reply("unused"));

    let (status, body) = post_chat(
        app(dir.path(), provider.clone()),
        json!({"messages": [{"role": "user", "content": "Hi"}], "apiKey": ""}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["role"], "assistant");
    assert_eq!(body["message"]["content"], MISSING_CREDENTIAL_REPLY);
    assert!(body["message"]["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["message"]["timestamp"].is_i64());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_successful_relay_makes_one_call() {
    let dir = TempDir::new().unwrap();
    let provider = CountingProvider::new(Behavior::Reply("Hello!"));

    let (status, body) = post_chat(
        app(dir.path(), provider.clone()),
        json!({"messages": [{"role": "user", "content": "Hi"}], "apiKey": "sk-test"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["content"], "Hello!");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_upstream_failure_is_soft() {
    let dir = TempDir::new().unwrap();
    let provider = CountingProvider::new(Behavior::Fail);

    let (status, body) = post_chat(
        app(dir.path(), provider.clone()),
        json!({"messages": [{"role": "user", "content": "Hi"}], "apiKey": "sk-test"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"]["content"], RELAY_FAILURE_REPLY);
    assert!(!body.to_string().contains("internals"));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_invalid_shapes_rejected_before_any_call() {
    let dir = TempDir::new().unwrap();
    let provider = CountingProvider::new(Behavior::Reply("unused"));

    let cases = [
        (json!({"apiKey": "sk-test"}).to_string(), "Invalid messages format"),
        (json!({"messages": "Hi", "apiKey": "sk-test"}).to_string(), "Invalid messages format"),
        (json!({"messages": [], "apiKey": "sk-test"}).to_string(), "Invalid messages format"),
        (
            json!({"messages": [{"role": "robot", "content": "Hi"}], "apiKey": "sk-test"}).to_string(),
            "Invalid messages format",
        ),
        ("not json".to_string(), "Invalid request body"),
    ];

    for (body, expected) in cases {
        let (status, response) = post_chat(app(dir.path(), provider.clone()), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            response["error"].as_str().unwrap().starts_with(expected),
            "unexpected error body: {response}"
        );
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_round_trip_appends_two_turns() {
    let dir = TempDir::new().unwrap();
    let provider = CountingProvider::new(Behavior::Reply("Sure."));

    let mut session = ChatSession::new();
    session.push(ChatMessage::assistant("Hi there! How can I help you today?"));
    session.push(ChatMessage::user("Tell me about Berk"));
    session.push(ChatMessage::assistant("Berk builds things."));
    let prior = session.len();

    session.push(ChatMessage::user("What stack?"));
    let payload = json!({"messages": session.messages(), "apiKey": "sk-test"});
    let (status, body) = post_chat(app(dir.path(), provider.clone()), payload.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let reply: ChatMessage = serde_json::from_value(body["message"].clone()).unwrap();
    assert_eq!(reply.role(), Role::Assistant);
    session.push(reply);

    assert_eq!(session.len(), prior + 2);
    let messages = session.messages();
    assert!(messages.windows(2).all(|w| w[0].timestamp() < w[1].timestamp()));
    let mut ids: Vec<_> = messages.iter().map(|m| m.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), messages.len());
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_panic_becomes_500() {
    let dir = TempDir::new().unwrap();
    let provider = CountingProvider::new(Behavior::Panic);

    let (status, body) = post_chat(
        app(dir.path(), provider),
        json!({"messages": [{"role": "user", "content": "Hi"}], "apiKey": "sk-test"}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to get response"}));
}

#[tokio::test]
async fn test_post_lookup() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("posts")).unwrap();
    std::fs::write(
        dir.path().join("posts").join("first-principles-thinking.md"),
        "# First",
    )
    .unwrap();
    let provider = CountingProvider::new(Behavior::Reply("unused"));

    let (status, _, body) = send(
        app(dir.path(), provider.clone()),
        get("/api/posts/first-principles-thinking"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let post: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(post["title"], "First Principles Thinking");
    assert_eq!(post["readingTime"], "Sometime to read");
    assert_eq!(post["content"], "# First");

    let (status, _, body) = send(
        app(dir.path(), provider.clone()),
        get("/api/posts/idea-to-product-48-hours"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let post: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(post["isMarkdown"], true);
    assert_eq!(post["date"], "September 2024");

    let (status, _, body) = send(app(dir.path(), provider), get("/api/posts/no-such-post")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error, json!({"error": "Post not found"}));
}

#[tokio::test]
async fn test_post_listing_in_table_order() {
    let dir = TempDir::new().unwrap();
    let (status, _, body) = send(
        app(dir.path(), CountingProvider::new(Behavior::Reply("unused"))),
        get("/api/posts"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let posts: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(posts.len(), folio_content::POSTS.len());
    assert_eq!(posts[0]["slug"], "building-for-coolest-grandma");
    assert!(posts[0]["description"].is_string());
}

#[tokio::test]
async fn test_resume_served_inline_and_as_download() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Jane_resume.pdf"), b"%PDF-1.4 test").unwrap();
    let provider = CountingProvider::new(Behavior::Reply("unused"));

    let (status, headers, body) = send(app(dir.path(), provider.clone()), get("/resume/file")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"%PDF-1.4 test");
    assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "inline; filename=\"Jane_resume.pdf\""
    );
    assert_eq!(
        headers[header::CACHE_CONTROL],
        "public, max-age=86400, immutable"
    );

    let (_, headers, _) = send(app(dir.path(), provider), get("/resume/file?download=1")).await;
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Jane_resume.pdf\""
    );
}

#[tokio::test]
async fn test_missing_resume_is_404() {
    let dir = TempDir::new().unwrap();
    let (status, _, body) = send(
        app(dir.path(), CountingProvider::new(Behavior::Reply("unused"))),
        get("/resume/file"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"Resume not found");
}

#[tokio::test]
async fn test_sitemap_and_robots() {
    let dir = TempDir::new().unwrap();
    let provider = CountingProvider::new(Behavior::Reply("unused"));

    let (status, headers, body) = send(app(dir.path(), provider.clone()), get("/sitemap.xml")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/xml");
    let xml = String::from_utf8(body).unwrap();
    assert!(xml.contains("<loc>https://example.com/resume</loc>"));
    assert!(xml.contains("<loc>https://example.com/blog/designing-llm-workflows</loc>"));

    let (status, _, body) = send(app(dir.path(), provider), get("/robots.txt")).await;
    assert_eq!(status, StatusCode::OK);
    let robots = String::from_utf8(body).unwrap();
    assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
}

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();
    let (status, _, body) = send(
        app(dir.path(), CountingProvider::new(Behavior::Reply("unused"))),
        get("/health"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
}
