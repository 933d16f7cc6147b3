use super::*;

// =============================================================================
// bytes_to_hex / generate_token
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_is_unique() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionStore
// =============================================================================

#[tokio::test]
async fn created_session_validates() {
    let store = SessionStore::new(Duration::from_secs(60));
    let token = store.create("admin").await;
    let session = store.validate(&token).await.expect("session should be live");
    assert_eq!(session.username, "admin");
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    let store = SessionStore::new(Duration::from_secs(60));
    assert!(store.validate("nope").await.is_none());
}

#[tokio::test]
async fn expired_session_is_rejected_and_evicted() {
    let store = SessionStore::new(Duration::ZERO);
    let token = store.create("admin").await;
    assert!(store.validate(&token).await.is_none());
    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn revoke_removes_session_once() {
    let store = SessionStore::new(Duration::from_secs(60));
    let token = store.create("admin").await;
    assert!(store.revoke(&token).await);
    assert!(!store.revoke(&token).await);
    assert!(store.validate(&token).await.is_none());
}

#[tokio::test]
async fn purge_expired_keeps_live_sessions() {
    let expired = SessionStore::new(Duration::ZERO);
    expired.create("a").await;
    expired.create("b").await;
    assert_eq!(expired.purge_expired().await, 2);
    assert_eq!(expired.count().await, 0);

    let live = SessionStore::new(Duration::from_secs(60));
    live.create("a").await;
    assert_eq!(live.purge_expired().await, 0);
    assert_eq!(live.count().await, 1);
}

#[tokio::test]
async fn oversized_ttl_is_clamped_instead_of_overflowing() {
    let store = SessionStore::new(Duration::from_secs(u64::MAX));
    let token = store.create("admin").await;
    let session = store.validate(&token).await.expect("session should be live");
    assert!(session.expires_at <= Instant::now() + MAX_SESSION_TTL);
}
