use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use folio_cli::{ChatWidget, RelayClient, CLIENT_FAILURE_REPLY};
use folio_config::{Settings, SettingsStore};
use folio_core::{ChatMessage, Role};
use serde_json::{json, Value};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct FakeServer {
    fail: bool,
    bodies: Arc<Mutex<Vec<Value>>>,
}

async fn chat(State(server): State<FakeServer>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    server.bodies.lock().unwrap().push(body);
    if server.fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Failed to get response"})),
        );
    }
    let reply = ChatMessage::assistant("Hello from the server");
    (StatusCode::OK, Json(json!({ "message": reply })))
}

async fn spawn(server: FakeServer) -> String {
    let app = Router::new()
        .route("/api/chat", post(chat))
        .route("/health", get(|| async { Json(json!({"status": "ok"})) }))
        .with_state(server);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn store(dir: &TempDir) -> SettingsStore {
    SettingsStore::new(dir.path().join("settings.json"))
}

fn with_key(key: &str) -> Settings {
    let mut settings = Settings::default();
    settings.set_api_key(key);
    settings
}

#[tokio::test]
async fn test_greeting_on_open() {
    let dir = TempDir::new().unwrap();
    let widget = ChatWidget::new(
        RelayClient::new("http://127.0.0.1:9"),
        store(&dir),
        Settings::default(),
        "Ada",
    );

    let messages: Vec<_> = widget.visible_messages().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role(), Role::Assistant);
    assert_eq!(
        messages[0].content(),
        "Hi there! I'm Ada's AI assistant. How can I help you today?"
    );
}

#[tokio::test]
async fn test_send_posts_history_and_credential() {
    let dir = TempDir::new().unwrap();
    let server = FakeServer::default();
    let url = spawn(server.clone()).await;

    let mut widget = ChatWidget::new(RelayClient::new(&url), store(&dir), with_key("sk-test"), "Berk");
    let reply = widget.send("  Hi  ").await.unwrap();
    assert_eq!(reply.content(), "Hello from the server");
    assert_eq!(widget.session().len(), 3);

    let bodies = server.bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["apiKey"], "sk-test");
    let sent = bodies[0]["messages"].as_array().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1]["role"], "user");
    assert_eq!(sent[1]["content"], "Hi");
    assert!(sent[1]["id"].is_string());
    assert!(sent[1]["timestamp"].is_i64());
}

#[tokio::test]
async fn test_blank_input_is_ignored() {
    let dir = TempDir::new().unwrap();
    let server = FakeServer::default();
    let url = spawn(server.clone()).await;

    let mut widget = ChatWidget::new(RelayClient::new(&url), store(&dir), Settings::default(), "Berk");
    assert!(widget.send("   ").await.is_none());
    assert_eq!(widget.session().len(), 1);
    assert!(server.bodies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_server_error_appends_failure_notice() {
    let dir = TempDir::new().unwrap();
    let url = spawn(FakeServer {
        fail: true,
        ..Default::default()
    })
    .await;

    let mut widget = ChatWidget::new(RelayClient::new(&url), store(&dir), with_key("sk-test"), "Berk");
    let reply = widget.send("Hi").await.unwrap();
    assert_eq!(reply.role(), Role::Assistant);
    assert_eq!(reply.content(), CLIENT_FAILURE_REPLY);
}

#[tokio::test]
async fn test_unreachable_server_appends_failure_notice() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let dir = TempDir::new().unwrap();
    let mut widget = ChatWidget::new(
        RelayClient::new(&format!("http://{}", addr)),
        store(&dir),
        Settings::default(),
        "Berk",
    );
    let reply = widget.send("Hi").await.unwrap();
    assert_eq!(reply.content(), CLIENT_FAILURE_REPLY);
    assert_eq!(widget.session().len(), 3);
}

#[tokio::test]
async fn test_timestamps_strictly_increase() {
    let dir = TempDir::new().unwrap();
    let url = spawn(FakeServer::default()).await;

    let mut widget = ChatWidget::new(RelayClient::new(&url), store(&dir), with_key("sk-test"), "Berk");
    widget.send("one").await;
    widget.send("two").await;

    let messages = widget.session().messages();
    assert_eq!(messages.len(), 5);
    assert!(messages.windows(2).all(|w| w[0].timestamp() < w[1].timestamp()));
}

#[tokio::test]
async fn test_clear_resets_conversation() {
    let dir = TempDir::new().unwrap();
    let url = spawn(FakeServer::default()).await;

    let mut widget = ChatWidget::new(RelayClient::new(&url), store(&dir), with_key("sk-test"), "Berk");
    widget.send("Hi").await;
    widget.clear();

    let messages: Vec<_> = widget.visible_messages().collect();
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages[0].content(),
        "Chat history cleared. How can I help you today?"
    );
}

#[tokio::test]
async fn test_api_key_persisted() {
    let dir = TempDir::new().unwrap();
    let mut widget = ChatWidget::open(RelayClient::new("http://127.0.0.1:9"), store(&dir), "Berk")
        .await
        .unwrap();
    assert!(!widget.has_api_key());

    widget.save_api_key("sk-saved").await.unwrap();
    assert!(widget.has_api_key());

    let raw: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("settings.json")).unwrap())
            .unwrap();
    assert_eq!(raw["openai-api-key"], "sk-saved");

    let reopened = ChatWidget::open(RelayClient::new("http://127.0.0.1:9"), store(&dir), "Berk")
        .await
        .unwrap();
    assert!(reopened.has_api_key());

    widget.clear_api_key().await.unwrap();
    let settings = store(&dir).load().await.unwrap();
    assert!(settings.credential().is_none());
}

#[tokio::test]
async fn test_health_check() {
    let url = spawn(FakeServer::default()).await;
    assert!(RelayClient::new(&url).health_check().await);
    assert!(!RelayClient::new("http://127.0.0.1:9").health_check().await);
}
