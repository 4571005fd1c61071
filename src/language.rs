//! Programming-language detection from free-text messages

use crate::templates::TemplateStore;
use regex::Regex;
use std::sync::Arc;

/// Characters that can appear inside a language token ("c#", "c++",
/// "objective-c"). Also the boundary alphabet for whole-word scanning:
/// regex `\b` cannot be used for keys ending in `#` or `+`.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '#' | '+' | '_' | '-')
}

/// Two-stage language detector.
///
/// Stage (a): an explicit "in <token>" phrase wins, even when the token is
/// not a known language; validation happens later at the template store.
/// Stage (b): first known template key appearing as a whole word, scanning
/// keys in store order.
pub struct LanguageDetector {
    store: Arc<TemplateStore>,
    in_pattern: Regex,
}

impl LanguageDetector {
    pub fn new(store: Arc<TemplateStore>) -> Self {
        // Leading \b keeps the trailing "in" of words like "explain" from
        // matching; the token class mirrors is_token_char.
        let in_pattern = Regex::new(r"(?i)\bin\s+([A-Za-z0-9#+_-]+)").unwrap();
        Self { store, in_pattern }
    }

    /// Extract a candidate language from the message, lowercased.
    pub fn detect(&self, message: &str) -> Option<String> {
        if let Some(caps) = self.in_pattern.captures(message) {
            return Some(caps[1].to_lowercase());
        }

        let lowered = message.to_lowercase();
        self.store
            .keys()
            .find(|key| contains_whole_word(&lowered, key))
            .map(|key| key.to_string())
    }
}

/// Whole-word containment: `key` occurs in `text` with no token character
/// directly adjacent on either side. Both inputs are expected lowercase.
fn contains_whole_word(text: &str, key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    text.match_indices(key).any(|(start, _)| {
        let before_ok = text[..start].chars().next_back().map_or(true, |c| !is_token_char(c));
        let after_ok = text[start + key.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_token_char(c));
        before_ok && after_ok
    })
}
