//! Mentorbot - rule-based programming assistant core
//!
//! Implements the message-processing pipeline:
//! - Intent classification over an ordered keyword rule table
//! - Language detection ("in <token>" phrase + whole-word key scan)
//! - TF-IDF relevance ranking over session history
//! - Template-driven response generation
//!
//! Session storage and HTTP transport are collaborators around the core:
//! the engine itself is pure, synchronous and lock-free.

pub mod types;
pub mod templates;
pub mod intent;
pub mod language;
pub mod ranking;
pub mod generate;
pub mod engine;
pub mod history_store;
pub mod history_client; // Remote session API client
pub mod server;

pub use types::*;
pub use templates::TemplateStore;
pub use language::LanguageDetector;
pub use generate::ResponseGenerator;
pub use engine::{ResponderEngine, SharedResponderEngine, TOP_RELEVANT};
pub use history_store::{HistoryStore, InMemoryHistoryStore};
pub use history_client::HttpHistoryStore;

#[cfg(test)]
mod tests;
