#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::entities::{ChatMessage, RateResponse};

/// Session id used until the user starts a fresh one.
pub const DEFAULT_SESSION_ID: &str = "default-session";

#[derive(Clone, Debug)]
pub struct AppState {
    /// Backend conversation identity, persisted across launches.
    pub session_id: String,
    /// Chat thread for the assistant view. Kept here so the thread
    /// survives navigating between pages.
    pub messages: Vec<ChatMessage>,
    /// Set once the saved session's history has been replayed.
    pub history_loaded: bool,
    /// Last rate-search outcome, shared so results survive navigation.
    pub rate_results: Option<RateResponse>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session_id: DEFAULT_SESSION_ID.to_string(),
            messages: Vec::new(),
            history_loaded: false,
            rate_results: None,
        }
    }
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedSession) {
        if !persisted.session_id.is_empty() {
            self.session_id = persisted.session_id;
        }
    }

    pub fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            session_id: self.session_id.clone(),
        }
    }

    /// Starts a brand-new backend conversation and drops the local thread.
    pub fn rotate_session(&mut self) {
        let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        self.session_id = format!("new-session-{millis}");
        self.messages.clear();
        self.history_loaded = true;
    }

    /// Clears the visible thread without touching the backend session.
    pub fn clear_thread(&mut self) {
        self.messages.clear();
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default)]
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatRole, Rate};

    #[test]
    fn test_empty_persisted_session_keeps_default() {
        let mut state = AppState::default();
        state.apply_persisted(PersistedSession {
            session_id: String::new(),
        });
        assert_eq!(state.session_id, DEFAULT_SESSION_ID);

        state.apply_persisted(PersistedSession {
            session_id: "new-session-1720000000000".to_string(),
        });
        assert_eq!(state.session_id, "new-session-1720000000000");
    }

    #[test]
    fn test_rotate_session_drops_thread_but_not_results() {
        let mut state = AppState::default();
        state
            .messages
            .push(ChatMessage::now(ChatRole::User, "hello"));
        state.rate_results = Some(RateResponse {
            rates: vec![Rate::default()],
            ..Default::default()
        });

        state.rotate_session();

        assert!(state.session_id.starts_with("new-session-"));
        assert!(state.messages.is_empty());
        assert!(state.history_loaded);
        assert!(state.rate_results.is_some());
    }

    #[test]
    fn test_clear_thread_keeps_session_id() {
        let mut state = AppState::default();
        state
            .messages
            .push(ChatMessage::now(ChatRole::User, "hello"));
        state.clear_thread();

        assert!(state.messages.is_empty());
        assert_eq!(state.session_id, DEFAULT_SESSION_ID);
    }
}
