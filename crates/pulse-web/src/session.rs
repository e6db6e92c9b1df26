//! Per-visitor session state.
//!
//! The browser holds only a random token in a transient cookie; the answer
//! sequences live server-side in this store for the lifetime of the
//! process. A session entry is created lazily on first mutation, cleared
//! per survey on `reset`, and vanishes when the process exits or the
//! browser drops the cookie.

use pulse_core::Answer;
use rand::RngCore;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{Error, Result};

/// Name of the transient session cookie. No max-age: it expires with the
/// browser session.
pub const SESSION_COOKIE: &str = "pulse_session";

#[derive(Debug, Default)]
struct SessionData {
    /// Answer sequences keyed by survey name
    responses: HashMap<String, Vec<Answer>>,

    /// One-shot notice shown on the next rendered page
    flash: Option<String>,
}

/// In-memory session response store, shared by all request handlers.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<HashMap<String, SessionData>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh session token: 128 random bits, hex-encoded.
    pub fn mint_token() -> String {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Clear the answer sequence for `survey`, leaving other surveys and
    /// the flash untouched. Subsequent [`count`](Self::count) returns 0.
    pub async fn reset(&self, token: &str, survey: &str) {
        let mut sessions = self.inner.write().await;
        sessions
            .entry(token.to_string())
            .or_default()
            .responses
            .insert(survey.to_string(), Vec::new());
    }

    /// Number of recorded answers for `survey`, which is always the index
    /// of the next unanswered question.
    pub async fn count(&self, token: &str, survey: &str) -> usize {
        let sessions = self.inner.read().await;
        sessions
            .get(token)
            .and_then(|s| s.responses.get(survey))
            .map_or(0, Vec::len)
    }

    /// Append one answer at the end of the sequence for `survey`.
    ///
    /// Rejects the append once the sequence already holds `question_count`
    /// answers, so the sequence-length invariant cannot be broken even by
    /// a misbehaving caller.
    pub async fn append(
        &self,
        token: &str,
        survey: &str,
        answer: Answer,
        question_count: usize,
    ) -> Result<()> {
        let mut sessions = self.inner.write().await;
        let responses = sessions
            .entry(token.to_string())
            .or_default()
            .responses
            .entry(survey.to_string())
            .or_default();

        if responses.len() >= question_count {
            return Err(Error::ResponsesFull {
                survey: survey.to_string(),
            });
        }
        responses.push(answer);
        Ok(())
    }

    /// Snapshot of the recorded answers for `survey`, in submission order.
    pub async fn answers(&self, token: &str, survey: &str) -> Vec<Answer> {
        let sessions = self.inner.read().await;
        sessions
            .get(token)
            .and_then(|s| s.responses.get(survey))
            .cloned()
            .unwrap_or_default()
    }

    /// Set the one-shot notice for this session, replacing any pending one.
    pub async fn set_flash(&self, token: &str, text: impl Into<String>) {
        let mut sessions = self.inner.write().await;
        sessions.entry(token.to_string()).or_default().flash = Some(text.into());
    }

    /// Take the pending notice, clearing it.
    pub async fn take_flash(&self, token: &str) -> Option<String> {
        let mut sessions = self.inner.write().await;
        sessions.get_mut(token).and_then(|s| s.flash.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(choice: &str) -> Answer {
        Answer {
            choice: choice.to_string(),
            specify: None,
        }
    }

    #[test]
    fn tokens_are_unique_and_hex() {
        let a = SessionStore::mint_token();
        let b = SessionStore::mint_token();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn append_and_count() {
        let store = SessionStore::new();
        assert_eq!(store.count("t", "s").await, 0);

        store.append("t", "s", answer("Yes"), 3).await.unwrap();
        store.append("t", "s", answer("No"), 3).await.unwrap();
        assert_eq!(store.count("t", "s").await, 2);

        let answers = store.answers("t", "s").await;
        assert_eq!(answers[0].choice, "Yes");
        assert_eq!(answers[1].choice, "No");
    }

    #[tokio::test]
    async fn append_rejects_overflow() {
        let store = SessionStore::new();
        store.append("t", "s", answer("a"), 1).await.unwrap();
        let err = store.append("t", "s", answer("b"), 1).await.unwrap_err();
        assert!(matches!(err, Error::ResponsesFull { .. }));
        assert_eq!(store.count("t", "s").await, 1, "overflow must not append");
    }

    #[tokio::test]
    async fn reset_clears_only_that_survey() {
        let store = SessionStore::new();
        store.append("t", "a", answer("x"), 3).await.unwrap();
        store.append("t", "b", answer("y"), 3).await.unwrap();

        store.reset("t", "a").await;
        assert_eq!(store.count("t", "a").await, 0);
        assert_eq!(store.count("t", "b").await, 1);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new();
        store.append("alice", "s", answer("Yes"), 3).await.unwrap();
        assert_eq!(store.count("bob", "s").await, 0);
    }

    #[tokio::test]
    async fn flash_is_one_shot() {
        let store = SessionStore::new();
        store.set_flash("t", "in order, please").await;
        assert_eq!(store.take_flash("t").await.as_deref(), Some("in order, please"));
        assert_eq!(store.take_flash("t").await, None);
    }

    #[tokio::test]
    async fn flash_survives_reset() {
        let store = SessionStore::new();
        store.set_flash("t", "notice").await;
        store.reset("t", "s").await;
        assert_eq!(store.take_flash("t").await.as_deref(), Some("notice"));
    }
}
