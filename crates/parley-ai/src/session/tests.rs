//! Session store tests: transcript lifecycle, configure policy, send path.

use chrono::Local;

use super::testing::{exchanges, FakeConnector};
use super::*;
use crate::{ConfigError, ProviderError};

fn session() -> (Session, FakeConnector) {
    let connector = FakeConnector::default();
    (Session::new(connector.clone()), connector)
}

#[test]
fn new_session_is_empty_and_unconfigured() {
    let (session, _) = session();
    assert!(session.transcript().is_empty());
    assert!(!session.is_configured());
    assert!(!session.config().has_api_key());
    assert_eq!(session.config().model(), "gemini-2.0-flash");
    assert_eq!(session.config().temperature(), 0.7);
    assert_eq!(session.config().max_tokens(), 500);
}

#[test]
fn append_preserves_count_and_order() {
    let (mut session, _) = session();
    for e in exchanges(7) {
        session.append_exchange(e.user_text(), e.assistant_text(), e.timestamp());
    }
    assert_eq!(session.transcript().len(), 7);
    let users: Vec<_> = session.transcript().iter().map(|e| e.user_text()).collect();
    assert_eq!(users, ["q0", "q1", "q2", "q3", "q4", "q5", "q6"]);
}

#[test]
fn append_accepts_empty_reply() {
    let (mut session, _) = session();
    let now = Local::now();
    let exchange = session.append_exchange("hi", "", now);
    assert_eq!(exchange.assistant_text(), "");
    assert_eq!(exchange.timestamp(), now);
    assert_eq!(session.transcript().len(), 1);
}

#[tokio::test]
async fn clear_empties_transcript_and_keeps_client() {
    let (mut session, _) = session();
    let client = session.configure("good-key").await.unwrap();
    session.set_temperature(0.2).unwrap();
    for e in exchanges(3) {
        session.append_exchange(e.user_text(), e.assistant_text(), e.timestamp());
    }
    let config_before = session.config().clone();

    session.clear();

    assert!(session.transcript().is_empty());
    assert_eq!(session.config(), &config_before);
    assert!(session.is_configured());
    let again = session.configure("good-key").await.unwrap();
    assert!(again.same_as(&client));
}

#[test]
fn clear_on_empty_transcript_is_fine() {
    let (mut session, _) = session();
    session.clear();
    assert!(session.transcript().is_empty());
}

#[test]
fn export_matches_transcript() {
    let (mut session, _) = session();
    assert_eq!(session.export_text(), "");
    session.append_exchange("hi", "hello", Local::now());
    assert_eq!(session.export_text(), "User: hi\nAssistant: hello\n---");
}

#[tokio::test]
async fn configure_success_stores_client_and_key() {
    let (mut session, connector) = session();
    session.configure("  good-key  ").await.unwrap();
    assert!(session.is_configured());
    assert!(session.config().has_api_key());
    assert_eq!(connector.connects(), 1);
}

#[tokio::test]
async fn configure_same_key_is_a_no_op() {
    let (mut session, connector) = session();
    let first = session.configure("good-key").await.unwrap();
    let second = session.configure("good-key").await.unwrap();
    assert!(first.same_as(&second));
    assert_eq!(connector.connects(), 1);
}

#[tokio::test]
async fn configure_new_valid_key_replaces_client() {
    let (mut session, connector) = session();
    let first = session.configure("good-key").await.unwrap();
    let second = session.configure("good-other").await.unwrap();
    assert!(!first.same_as(&second));
    assert_eq!(connector.connects(), 2);
}

#[tokio::test]
async fn bad_key_after_good_key_keeps_previous_client() {
    let (mut session, _) = session();
    let good = session.configure("good-key").await.unwrap();

    let err = session.configure("bad-key").await.unwrap_err();

    assert!(matches!(err, ConfigError::Rejected(_)));
    assert!(session.is_configured());
    let exchange = session.send("still there?").await.unwrap();
    assert_eq!(exchange.assistant_text(), "ok");
    // The stored key is still the one behind the surviving client.
    let again = session.configure("good-key").await.unwrap();
    assert!(again.same_as(&good));
}

#[tokio::test]
async fn bad_key_on_fresh_session_stays_unconfigured() {
    let (mut session, _) = session();
    assert!(session.configure("bad-key").await.is_err());
    assert!(!session.is_configured());
    assert!(!session.config().has_api_key());
}

#[tokio::test]
async fn empty_key_is_rejected_without_connecting() {
    let (mut session, connector) = session();
    let err = session.configure("   ").await.unwrap_err();
    assert!(matches!(err, ConfigError::EmptyKey));
    assert_eq!(connector.connects(), 0);
}

#[tokio::test]
async fn send_requires_configuration() {
    let (mut session, connector) = session();
    let err = session.send("hello").await.unwrap_err();
    assert!(matches!(err, SessionError::NotConfigured));
    assert!(session.transcript().is_empty());
    assert!(connector.client.sent().is_empty());
}

#[tokio::test]
async fn send_ignores_blank_messages() {
    let (mut session, connector) = session();
    session.configure("good-key").await.unwrap();
    let err = session.send(" \n\t").await.unwrap_err();
    assert!(matches!(err, SessionError::EmptyMessage));
    assert!(connector.client.sent().is_empty());
}

#[tokio::test]
async fn send_appends_reply_and_records_usage() {
    let (mut session, connector) = session();
    session.configure("good-key").await.unwrap();
    connector.client.push_ok("Hello there");

    let exchange = session.send("hi").await.unwrap().clone();

    assert_eq!(exchange.user_text(), "hi");
    assert_eq!(exchange.assistant_text(), "Hello there");
    assert_eq!(session.transcript(), &[exchange]);
    assert_eq!(session.usage().call_count(), 1);
    assert_eq!(session.usage().total_tokens(), 6);
}

#[tokio::test]
async fn send_builds_prompt_from_history() {
    let (mut session, connector) = session();
    session.configure("good-key").await.unwrap();
    session.send("first").await.unwrap();
    session.send("second").await.unwrap();

    let sent = connector.client.sent();
    assert_eq!(sent[0][0].content, "first");
    assert_eq!(
        sent[1][0].content,
        "Previous conversation:\nUser: first\nAssistant: ok\n\nCurrent question: second"
    );
}

#[tokio::test]
async fn send_window_never_exceeds_five_exchanges() {
    let (mut session, connector) = session();
    session.configure("good-key").await.unwrap();
    for i in 0..8 {
        session.send(&format!("m{i}")).await.unwrap();
    }

    let sent = connector.client.sent();
    let last = &sent[7][0].content;
    assert_eq!(last.matches("User: ").count(), 5);
    assert!(last.contains("User: m2\n"));
    assert!(!last.contains("User: m1\n"));
    assert!(last.ends_with("Current question: m7"));
}

#[tokio::test]
async fn provider_failure_is_appended_as_reply() {
    let (mut session, connector) = session();
    session.configure("good-key").await.unwrap();
    connector.client.push_err(ProviderError::Timeout);

    let exchange = session.send("hi").await.unwrap();

    assert_eq!(exchange.assistant_text(), "Error generating response: timeout");
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(session.usage().failed_calls(), 1);
}

#[tokio::test]
async fn folded_error_reply_feeds_later_context() {
    let (mut session, connector) = session();
    session.configure("good-key").await.unwrap();
    connector.client.push_err(ProviderError::RateLimited);
    session.send("one").await.unwrap();
    session.send("two").await.unwrap();

    let sent = connector.client.sent();
    assert!(sent[1][0]
        .content
        .contains("Assistant: Error generating response: rate limited"));
}

#[tokio::test]
async fn generation_settings_flow_into_requests() {
    let (mut session, connector) = session();
    session.configure("good-key").await.unwrap();
    session.set_model("gemini-1.5-pro").unwrap();
    session.set_temperature(1.0).unwrap();
    session.set_max_tokens(2000).unwrap();

    session.send("hi").await.unwrap();

    let params = connector.client.params();
    assert_eq!(params[0].model, "gemini-1.5-pro");
    assert_eq!(params[0].temperature, 1.0);
    assert_eq!(params[0].max_tokens, 2000);
}

#[test]
fn out_of_range_settings_are_rejected_and_unchanged() {
    let (mut session, _) = session();
    assert!(matches!(
        session.set_temperature(1.01),
        Err(ConfigError::InvalidParameter(_))
    ));
    assert!(session.set_temperature(f64::NAN).is_err());
    assert!(session.set_max_tokens(99).is_err());
    assert!(session.set_max_tokens(2001).is_err());
    assert!(session.set_model("  ").is_err());

    assert_eq!(session.config().temperature(), 0.7);
    assert_eq!(session.config().max_tokens(), 500);
    assert_eq!(session.config().model(), "gemini-2.0-flash");
}

#[test]
fn with_config_keeps_key_out() {
    let (session, _) = session();
    let config = ProviderConfig::new("gemini-1.5-flash", 0.4, 900).unwrap();
    let session = session.with_config(config);
    assert_eq!(session.config().model(), "gemini-1.5-flash");
    assert_eq!(session.config().max_tokens(), 900);
    assert!(!session.config().has_api_key());
}

#[test]
fn provider_config_new_validates() {
    assert!(ProviderConfig::new("m", 0.0, 100).is_ok());
    assert!(ProviderConfig::new("m", -0.1, 100).is_err());
    assert!(ProviderConfig::new("", 0.5, 500).is_err());
}

#[tokio::test]
async fn provider_config_debug_redacts_key() {
    let (mut session, _) = session();
    assert!(format!("{:?}", session.config()).contains("<unset>"));
    session.configure("good-secret-key").await.unwrap();
    let debug = format!("{:?}", session.config());
    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains("good-secret-key"));
}
