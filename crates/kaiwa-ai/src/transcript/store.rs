//! Transcript store: maps session ids to their turn history.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use kaiwa_common::SessionId;
use tokio::sync::RwLock;

use crate::Message;

struct Transcript {
    turns: Vec<Message>,
    last_active: Instant,
}

impl Transcript {
    fn new() -> Self {
        Self {
            turns: Vec::new(),
            last_active: Instant::now(),
        }
    }
}

/// Thread-safe transcript store.
///
/// Each call is atomic on its own, but a `get` followed by an `append` is
/// not: two concurrent requests on one session may interleave their turns.
#[derive(Clone, Default)]
pub struct TranscriptStore {
    sessions: Arc<RwLock<HashMap<SessionId, Transcript>>>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the session's transcript. Creates an empty one if the
    /// session is unknown.
    pub async fn get(&self, session_id: &SessionId) -> Vec<Message> {
        let mut map = self.sessions.write().await;
        let transcript = map
            .entry(session_id.clone())
            .or_insert_with(Transcript::new);
        transcript.last_active = Instant::now();
        transcript.turns.clone()
    }

    /// Append one exchange: the user turn, then the assistant turn.
    pub async fn append(
        &self,
        session_id: &SessionId,
        user_text: impl Into<String>,
        assistant_text: impl Into<String>,
    ) {
        let mut map = self.sessions.write().await;
        let transcript = map
            .entry(session_id.clone())
            .or_insert_with(Transcript::new);
        transcript.turns.push(Message::user(user_text));
        transcript.turns.push(Message::assistant(assistant_text));
        transcript.last_active = Instant::now();
    }

    /// Number of turns stored for a session (0 if unknown).
    pub async fn turn_count(&self, session_id: &SessionId) -> usize {
        self.sessions
            .read()
            .await
            .get(session_id)
            .map_or(0, |t| t.turns.len())
    }

    /// Check if a session exists.
    pub async fn exists(&self, session_id: &SessionId) -> bool {
        self.sessions.read().await.contains_key(session_id)
    }

    /// Number of live sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop sessions idle for at least `max_idle`. Returns how many were removed.
    pub async fn reap_idle(&self, max_idle: Duration) -> usize {
        let mut map = self.sessions.write().await;
        let now = Instant::now();
        let before = map.len();
        map.retain(|id, transcript| {
            let stale = now.duration_since(transcript.last_active) >= max_idle;
            if stale {
                tracing::info!(session_id = %id, turns = transcript.turns.len(), "Reaping idle session");
            }
            !stale
        });
        before - map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[tokio::test]
    async fn get_initializes_empty_transcript() {
        let store = TranscriptStore::new();
        let sid = SessionId::new();
        assert!(!store.exists(&sid).await);

        assert!(store.get(&sid).await.is_empty());
        assert!(store.exists(&sid).await);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn append_adds_user_then_assistant() {
        let store = TranscriptStore::new();
        let sid = SessionId::new();

        store.append(&sid, "u1", "a1").await;
        let turns = store.get(&sid).await;
        assert_eq!(turns, vec![Message::user("u1"), Message::assistant("a1")]);
    }

    #[tokio::test]
    async fn append_preserves_prior_entries() {
        let store = TranscriptStore::new();
        let sid = SessionId::new();
        store.append(&sid, "u1", "a1").await;
        store.append(&sid, "u2", "a2").await;
        let before = store.get(&sid).await;

        store.append(&sid, "u3", "<think>t</think>a3").await;
        let after = store.get(&sid).await;

        assert_eq!(after.len(), before.len() + 2);
        assert_eq!(&after[..before.len()], before.as_slice());
        assert_eq!(after[after.len() - 2], Message::user("u3"));
        assert_eq!(after[after.len() - 1], Message::assistant("<think>t</think>a3"));
    }

    #[tokio::test]
    async fn duplicates_are_kept() {
        let store = TranscriptStore::new();
        let sid = SessionId::new();
        store.append(&sid, "same", "same").await;
        store.append(&sid, "same", "same").await;
        assert_eq!(store.turn_count(&sid).await, 4);
    }

    #[tokio::test]
    async fn transcript_never_holds_system_turns() {
        let store = TranscriptStore::new();
        let sid = SessionId::new();
        store.append(&sid, "u", "a").await;
        let turns = store.get(&sid).await;
        assert!(turns.iter().all(|m| m.role != Role::System));
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = TranscriptStore::new();
        let alice = SessionId::new();
        let bob = SessionId::new();
        store.append(&alice, "hi", "hello").await;

        assert!(store.get(&bob).await.is_empty());
        assert_eq!(store.turn_count(&alice).await, 2);
    }

    #[tokio::test]
    async fn get_returns_snapshot() {
        let store = TranscriptStore::new();
        let sid = SessionId::new();
        let snapshot = store.get(&sid).await;
        store.append(&sid, "u", "a").await;
        assert!(snapshot.is_empty());
    }

    #[tokio::test]
    async fn reap_idle_removes_only_stale_sessions() {
        let store = TranscriptStore::new();
        let sid = SessionId::new();
        store.append(&sid, "u", "a").await;

        assert_eq!(store.reap_idle(Duration::from_secs(3600)).await, 0);
        assert!(store.exists(&sid).await);

        assert_eq!(store.reap_idle(Duration::ZERO).await, 1);
        assert!(!store.exists(&sid).await);
        assert_eq!(store.turn_count(&sid).await, 0);
    }
}
