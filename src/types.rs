//! Core type definitions for mentorbot message processing

use serde::{Deserialize, Serialize};

/// Author of a history entry.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Ai => "ai",
        }
    }
}

/// One message in a session's conversation history.
///
/// Immutable once created; the pipeline reads history as a snapshot and
/// never mutates or deletes entries. `text` defaults to empty on the wire
/// so a missing field never breaks ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub role: Role,
    #[serde(default)]
    pub text: String,
    /// Epoch milliseconds
    pub ts: i64,
    pub session_id: String,
}

/// Per-language example/explanation template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Lowercase canonical language key
    pub language: String,
    /// Fenced code block text
    pub example: String,
    pub explain: String,
}

/// Classified purpose of a user message.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Run,
    Debug,
    Example,
    Explain,
    Optimize,
    General,
}

/// Result of processing one incoming message: the user's original message
/// and the generated reply, both stamped and session-tagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePair {
    pub user_msg: HistoryEntry,
    pub ai_msg: HistoryEntry,
}
