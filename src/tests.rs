//! End-to-end tests for the responder pipeline

use crate::*;

fn entry(role: Role, text: &str, ts: i64) -> HistoryEntry {
    HistoryEntry {
        role,
        text: text.to_string(),
        ts,
        session_id: "s1".to_string(),
    }
}

#[test]
fn test_example_in_python_on_empty_history() {
    let engine = ResponderEngine::with_default_templates();

    let pair = engine.process(&[], "s1", "example in python");

    assert_eq!(pair.user_msg.role, Role::User);
    assert_eq!(pair.ai_msg.role, Role::Ai);
    assert_eq!(pair.user_msg.session_id, "s1");
    assert_eq!(pair.ai_msg.session_id, "s1");
    assert_eq!(pair.user_msg.text, "example in python");
    assert!(pair.ai_msg.ts >= pair.user_msg.ts, "timestamps non-decreasing");

    let python = engine.store().lookup("python").unwrap().clone();
    assert!(pair.ai_msg.text.contains(&python.example));
    assert!(pair.ai_msg.text.contains(&python.explain));
}

#[test]
fn test_run_with_markup_wraps_verbatim() {
    let engine = ResponderEngine::with_default_templates();

    let pair = engine.process(&[], "s1", "run: <p>hi</p>");

    assert_eq!(pair.ai_msg.text, "```html\n<p>hi</p>\n```");
}

#[test]
fn test_run_replies_are_fenced_and_verbatim() {
    let engine = ResponderEngine::with_default_templates();

    for payload in ["alert(1)", "some plain text", "<script>x()</script>"] {
        let pair = engine.process(&[], "s1", &format!("run: {}", payload));
        assert!(pair.ai_msg.text.starts_with("```html\n"));
        assert!(pair.ai_msg.text.ends_with("\n```"));
        assert!(pair.ai_msg.text.contains(payload), "payload kept verbatim");
    }
}

#[test]
fn test_exception_message_lists_relevant_history() {
    let engine = ResponderEngine::with_default_templates();
    let history = vec![
        entry(Role::User, "my app threw an exception yesterday", 1_700_000_000_000),
        entry(Role::Ai, "which exception was it?", 1_700_000_001_000),
        entry(Role::User, "talking about lunch", 1_700_000_002_000),
        entry(Role::User, "the exception is a null pointer", 1_700_000_003_000),
        entry(Role::Ai, "post the stack trace", 1_700_000_004_000),
        entry(Role::User, "weather is nice", 1_700_000_005_000),
    ];

    let pair = engine.process(&history, "s1", "I got an exception");

    assert!(pair.ai_msg.text.starts_with("Debug analysis"));
    // Numbered listing capped at the relevant top-N
    for n in 1..=TOP_RELEVANT {
        assert!(pair.ai_msg.text.contains(&format!("{})", n)));
    }
    assert!(!pair.ai_msg.text.contains(&format!("{})", TOP_RELEVANT + 1)));
    // Roles and timestamps are rendered
    assert!(pair.ai_msg.text.contains("user:"));
    assert!(pair.ai_msg.text.contains("2023-"));
}

#[test]
fn test_debug_wins_over_example_end_to_end() {
    let engine = ResponderEngine::with_default_templates();
    let pair = engine.process(&[], "s1", "example of an error in python");
    assert!(pair.ai_msg.text.starts_with("Debug analysis"));
}

#[test]
fn test_unknown_language_never_fails() {
    let engine = ResponderEngine::with_default_templates();
    let pair = engine.process(&[], "s1", "explain it in brainfuck");
    assert!(pair.ai_msg.text.contains("Quick examples"));
    assert!(pair.ai_msg.text.contains("in <language>"));
}

#[test]
fn test_wire_shape_matches_contract() {
    let pair = ResponderEngine::with_default_templates().process(&[], "abc", "hello");

    let json = serde_json::to_value(&pair.user_msg).unwrap();
    assert_eq!(json["role"], "user");
    assert_eq!(json["sessionId"], "abc");
    assert!(json["ts"].is_i64());
    assert!(json["text"].is_string());

    let json = serde_json::to_value(&pair).unwrap();
    assert_eq!(json["aiMsg"]["role"], "ai");
    assert!(json["userMsg"].is_object());

    // Missing text coerces to empty on the way in
    let parsed: HistoryEntry =
        serde_json::from_str(r#"{"role":"ai","ts":0,"sessionId":"x"}"#).unwrap();
    assert_eq!(parsed.text, "");
}

#[tokio::test]
async fn test_conversation_round_trip_through_store() {
    let engine = ResponderEngine::with_default_templates();
    let store = InMemoryHistoryStore::new();

    for message in ["example in python", "now I got an error"] {
        let history = store.history("s1").await.unwrap();
        let pair = engine.process(&history, "s1", message);
        store
            .append("s1", vec![pair.user_msg, pair.ai_msg])
            .await
            .unwrap();
    }

    let history = store.history("s1").await.unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[1].role, Role::Ai);
    // The second turn sees the first as context
    assert!(history[3].text.starts_with("Debug analysis"));
    assert!(history.windows(2).all(|w| w[0].ts <= w[1].ts));
}
