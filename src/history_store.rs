//! History persistence seam
//!
//! The pipeline never stores anything itself; callers supply a history
//! snapshot and decide what to do with the resulting message pair. This
//! module is the collaborator that owns that responsibility for the
//! bundled server.

use crate::types::HistoryEntry;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Trait for pluggable session history backends.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    fn name(&self) -> &'static str;

    /// Full ordered history for a session. Unknown sessions read as empty.
    async fn history(&self, session_id: &str) -> Result<Vec<HistoryEntry>>;

    /// Append entries to a session's history, preserving order.
    async fn append(&self, session_id: &str, entries: Vec<HistoryEntry>) -> Result<()>;
}

/// Process-local history store keyed by session id.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    sessions: RwLock<HashMap<String, Vec<HistoryEntry>>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    fn name(&self) -> &'static str {
        "in_memory"
    }

    async fn history(&self, session_id: &str) -> Result<Vec<HistoryEntry>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).cloned().unwrap_or_default())
    }

    async fn append(&self, session_id: &str, entries: Vec<HistoryEntry>) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_default()
            .extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn entry(text: &str, ts: i64) -> HistoryEntry {
        HistoryEntry {
            role: Role::User,
            text: text.to_string(),
            ts,
            session_id: "s1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_round_trip_preserves_order() {
        let store = InMemoryHistoryStore::new();
        store
            .append("s1", vec![entry("first", 1), entry("second", 2)])
            .await
            .unwrap();
        store.append("s1", vec![entry("third", 3)]).await.unwrap();

        let history = store.history("s1").await.unwrap();
        let ts: Vec<i64> = history.iter().map(|e| e.ts).collect();
        assert_eq!(ts, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemoryHistoryStore::new();
        store.append("a", vec![entry("hi", 1)]).await.unwrap();

        assert!(store.history("b").await.unwrap().is_empty());
        assert_eq!(store.session_count().await, 1);
    }

    #[test]
    fn test_unknown_session_reads_empty_from_sync_context() {
        let store = InMemoryHistoryStore::new();
        let history = tokio_test::block_on(store.history("nope")).unwrap();
        assert!(history.is_empty());
    }
}
