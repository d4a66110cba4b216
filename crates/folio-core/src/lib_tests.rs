use super::*;

#[test]
fn test_session_round_trip_through_relay_shapes() {
    let mut session = ChatSession::new();
    session.push(ChatMessage::assistant("Hi there!"));
    session.push(ChatMessage::user("What do you build?"));

    let request = RelayRequest::new(session.messages().to_vec(), Some("sk-test".into()));
    let wire = serde_json::to_value(&request).unwrap();
    let parsed = RelayRequest::from_value(&wire).unwrap();

    assert_eq!(parsed.messages, session.messages());
    assert_eq!(parsed.credential(), Some("sk-test"));
}

#[test]
fn test_relay_response_parses_into_message() {
    let body = serde_json::json!({
        "message": {"id": "r1", "role": "assistant", "content": "Hello", "timestamp": 10}
    });
    let response: RelayResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.message.role(), Role::Assistant);
    assert_eq!(response.message.content(), "Hello");
}

#[test]
fn test_validation_error_messages() {
    assert_eq!(ValidationError::MessagesNotArray.to_string(), "Invalid messages format");
    assert_eq!(ValidationError::NotAnObject.to_string(), "Invalid request body");
}

#[test]
fn test_blog_post_default_reading_time() {
    assert_eq!(ReadingTime::default(), ReadingTime::Quick);
    assert_eq!(ReadingTime::default().to_string(), "Quick to Read");
}
