//! Pipeline orchestrator: classify, detect, rank, generate

use crate::generate::ResponseGenerator;
use crate::intent;
use crate::language::LanguageDetector;
use crate::ranking;
use crate::templates::TemplateStore;
use crate::types::{HistoryEntry, MessagePair, Role};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// How many prior messages are handed to the generator as context.
pub const TOP_RELEVANT: usize = 4;

/// Main responder engine (thread-safe via Arc).
///
/// Holds the template store and the components derived from it. All state
/// is written once at construction and read-only afterwards, so concurrent
/// `process` calls need no locking.
pub struct ResponderEngine {
    store: Arc<TemplateStore>,
    detector: LanguageDetector,
    generator: ResponseGenerator,
}

pub type SharedResponderEngine = Arc<ResponderEngine>;

impl ResponderEngine {
    /// Create a new engine around a seeded template store.
    pub fn new(store: TemplateStore) -> SharedResponderEngine {
        let store = Arc::new(store);
        let detector = LanguageDetector::new(Arc::clone(&store));
        let generator = ResponseGenerator::new(Arc::clone(&store));

        Arc::new(Self {
            store,
            detector,
            generator,
        })
    }

    /// Engine over the default seed set.
    pub fn with_default_templates() -> SharedResponderEngine {
        Self::new(TemplateStore::seeded())
    }

    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Process one incoming message against a read-only history snapshot.
    ///
    /// Classification, detection and ranking are independent of each other;
    /// generation consumes all three. Returns the stamped user/ai message
    /// pair without appending it anywhere; history persistence belongs to
    /// the caller. Infallible: worst case is a generic reply.
    pub fn process(&self, history: &[HistoryEntry], session_id: &str, message: &str) -> MessagePair {
        let intent = intent::classify(message);
        let language = self.detector.detect(message);
        let relevant = ranking::rank(history, message, TOP_RELEVANT);

        debug!(
            "process: session={} intent={:?} language={:?} relevant={}/{}",
            session_id,
            intent,
            language,
            relevant.len(),
            history.len()
        );

        let reply = self
            .generator
            .generate(intent, language.as_deref(), message, &relevant);

        let user_msg = HistoryEntry {
            role: Role::User,
            text: message.to_string(),
            ts: now_millis(),
            session_id: session_id.to_string(),
        };
        let ai_msg = HistoryEntry {
            role: Role::Ai,
            text: reply,
            ts: now_millis(),
            session_id: session_id.to_string(),
        };

        MessagePair { user_msg, ai_msg }
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}
