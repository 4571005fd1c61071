//! Template-driven response generation
//!
//! Pure string construction branched by intent. The "run" branch is a
//! formatting transform only; nothing is ever executed.

use crate::intent::strip_run_marker;
use crate::templates::{TemplateStore, SHOWCASE_LANGUAGES};
use crate::types::{HistoryEntry, Intent};
use chrono::{LocalResult, TimeZone, Utc};
use regex::Regex;
use std::sync::Arc;

pub struct ResponseGenerator {
    store: Arc<TemplateStore>,
    html_tag: Regex,
}

impl ResponseGenerator {
    pub fn new(store: Arc<TemplateStore>) -> Self {
        // Any opening or closing tag counts, which covers <script>, <style>
        // and fragments like <p>hi</p>
        let html_tag = Regex::new(r"(?i)</?[a-z][a-z0-9]*(\s[^<>]*)?/?>").unwrap();
        Self { store, html_tag }
    }

    /// Synthesize the reply text for one classified message.
    pub fn generate(
        &self,
        intent: Intent,
        language: Option<&str>,
        query: &str,
        relevant: &[HistoryEntry],
    ) -> String {
        match intent {
            Intent::Run => self.wrap_as_html(query),
            Intent::Debug => self.debug_listing(relevant),
            Intent::Example | Intent::Explain | Intent::General => {
                self.template_reply(language)
            }
            Intent::Optimize => usage_hint(),
        }
    }

    /// Strip the `run:` marker and return the payload as a fenced HTML
    /// block, adding a minimal document skeleton unless the payload already
    /// contains markup.
    fn wrap_as_html(&self, query: &str) -> String {
        let code = strip_run_marker(query).unwrap_or(query);
        if self.html_tag.is_match(code) {
            format!("```html\n{}\n```", code)
        } else {
            format!(
                "```html\n<!doctype html>\n<html><body>\n{}\n</body></html>\n```",
                code
            )
        }
    }

    /// Numbered listing of the relevant entries with a header and a prompt
    /// for more detail. The listing is simply absent when nothing ranked.
    fn debug_listing(&self, relevant: &[HistoryEntry]) -> String {
        let mut out = String::from("Debug analysis (relevant context):\n\n");
        for (i, entry) in relevant.iter().enumerate() {
            out.push_str(&format!(
                "{}) [{}] {}: {}\n",
                i + 1,
                format_timestamp(entry.ts),
                entry.role.as_str(),
                entry.text
            ));
        }
        out.push_str("\nSend a stack trace or the exact error message for a deeper analysis.");
        out
    }

    /// Template lookup for a known language, multi-language showcase
    /// otherwise. An unknown detected language falls through to the
    /// showcase rather than failing.
    fn template_reply(&self, language: Option<&str>) -> String {
        if let Some(entry) = language.and_then(|lang| self.store.lookup(lang)) {
            return format!(
                "Example ({}):\n{}\n\n{}",
                entry.language, entry.example, entry.explain
            );
        }

        let mut out = String::from("Quick examples in a few languages:\n");
        for lang in SHOWCASE_LANGUAGES {
            if let Some(entry) = self.store.lookup(lang) {
                out.push_str(&format!("\n--- {} ---\n{}\n", entry.language, entry.example));
            }
        }
        out.push_str("\nSay \"in <language>\" to get a specific one.");
        out
    }
}

fn usage_hint() -> String {
    "Use the trigger keywords: run:, debug, example, explain, optimize.".to_string()
}

/// Human-readable UTC rendering of an epoch-millis timestamp. Out-of-range
/// values fall back to the raw number rather than failing.
fn format_timestamp(ts: i64) -> String {
    match Utc.timestamp_millis_opt(ts) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        _ => format!("t={}", ts),
    }
}
