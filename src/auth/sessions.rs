// src/auth/sessions.rs
use crate::auth::token::{generate_token_default, hash_secret};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub const SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 7); // 7 days

struct Session {
    api_key: String,
    expires_at: Instant,
}

/// In-memory credential sessions. The browser holds the raw token in a
/// cookie; only its hash is kept here, next to the API key it unlocks.
pub struct SessionStore {
    sessions: Mutex<HashMap<[u8; 32], Session>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<[u8; 32], Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `api_key` and returns the raw token to hand to the browser.
    pub fn create_session(&self, api_key: &str) -> String {
        let raw_token = generate_token_default();
        let now = Instant::now();

        let mut sessions = self.lock();
        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(
            hash_secret(&raw_token),
            Session {
                api_key: api_key.to_string(),
                expires_at: now + self.ttl,
            },
        );

        raw_token
    }

    /// API key bound to a live session token.
    pub fn credential(&self, raw_token: &str) -> Option<String> {
        let hash = hash_secret(raw_token);
        let mut sessions = self.lock();

        match sessions.get(&hash) {
            Some(s) if s.expires_at > Instant::now() => Some(s.api_key.clone()),
            Some(_) => {
                sessions.remove(&hash);
                None
            }
            None => None,
        }
    }

    pub fn end_session(&self, raw_token: &str) {
        self.lock().remove(&hash_secret(raw_token));
    }
}
