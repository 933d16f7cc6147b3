//! Session token issuance and validation.
//!
//! ARCHITECTURE
//! ============
//! Sessions live in memory, keyed by a random hex token with a fixed
//! lifetime. Expired entries are dropped lazily on lookup and in bulk by the
//! purge task started from `main`.
//!
//! TRADE-OFFS
//! ==========
//! A restart signs every browser out. The console has a single configured
//! account, so there is nothing else worth persisting.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

const PURGE_INTERVAL: Duration = Duration::from_secs(60);

/// Longest session lifetime the store will issue.
pub const MAX_SESSION_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// A live console session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Account the token was issued to.
    pub username: String,
    pub expires_at: Instant,
}

impl Session {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Shared in-memory session table.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    /// TTLs above [`MAX_SESSION_TTL`] are clamped to it.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), ttl: ttl.min(MAX_SESSION_TTL) }
    }

    /// Create a session for `username`, returning the token.
    pub async fn create(&self, username: &str) -> String {
        let token = generate_token();
        let now = Instant::now();
        let expires_at = now
            .checked_add(self.ttl)
            .or_else(|| now.checked_add(MAX_SESSION_TTL))
            .unwrap_or(now);
        let session = Session { username: username.to_owned(), expires_at };
        self.sessions.write().await.insert(token.clone(), session);
        token
    }

    /// Look up a token. Expired sessions are evicted and reported as absent.
    pub async fn validate(&self, token: &str) -> Option<Session> {
        let now = Instant::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                None => return None,
                Some(session) if !session.is_expired(now) => return Some(session.clone()),
                Some(_) => {}
            }
        }
        self.sessions.write().await.remove(token);
        None
    }

    /// Delete a session. Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        before - sessions.len()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Spawn the background task that drops expired sessions once a minute.
pub fn spawn_purge_task(sessions: SessionStore) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sessions.purge_expired().await;
            if removed > 0 {
                let remaining = sessions.count().await;
                tracing::debug!(removed, remaining, "purged expired sessions");
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
