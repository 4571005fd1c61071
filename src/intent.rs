//! Intent classification over an ordered keyword rule table

use crate::types::Intent;

/// Marker that requests HTML wrapping of the rest of the message.
pub const RUN_MARKER: &str = "run:";

/// One classification rule: if any keyword occurs in the lowercased
/// message, the rule's intent wins.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// Keyword rules in precedence order. Order is part of the contract: a
/// message matching several rules resolves to the earliest one. The `run:`
/// marker is checked before this table.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Debug,
        keywords: &["debug", "error", "exception", "stack trace", "crash"],
    },
    IntentRule {
        intent: Intent::Example,
        keywords: &["example", "contoh", "implement"],
    },
    IntentRule {
        intent: Intent::Explain,
        keywords: &["explain", "apa itu", "penjelasan"],
    },
    IntentRule {
        // "optimi" stem covers optimize/optimise/optimization
        intent: Intent::Optimize,
        keywords: &["optimi", "perf"],
    },
];

/// Classify a free-text message. Case-insensitive, first-match-wins,
/// `General` when nothing matches.
pub fn classify(message: &str) -> Intent {
    if strip_run_marker(message).is_some() {
        return Intent::Run;
    }
    let lowered = message.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|k| lowered.contains(k)) {
            return rule.intent;
        }
    }
    Intent::General
}

/// If the message begins with the `run:` marker (case-insensitive), return
/// the payload with the marker and any following whitespace removed.
pub fn strip_run_marker(message: &str) -> Option<&str> {
    let prefix = message.get(..RUN_MARKER.len())?;
    if prefix.eq_ignore_ascii_case(RUN_MARKER) {
        Some(message[RUN_MARKER.len()..].trim_start())
    } else {
        None
    }
}
