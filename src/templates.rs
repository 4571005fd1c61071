//! Static per-language template store
//!
//! Built once at startup and shared read-only behind `Arc`. Seeding is
//! idempotent fill: repeated calls only add missing keys and never
//! overwrite an explicit entry.

use crate::types::TemplateEntry;

/// Languages used for the multi-language fallback reply, in display order.
pub const SHOWCASE_LANGUAGES: &[&str] = &["javascript", "python", "cpp", "java", "go"];

/// Lower-fidelity tail: placeholder entries keep coverage for languages
/// without a hand-authored example.
const TAIL_LANGUAGES: &[&str] = &[
    "java", "c#", "go", "rust", "php", "ruby", "kotlin", "swift", "html", "css", "typescript",
    "bash", "sql",
];

/// In-memory language -> {example, explain} mapping.
///
/// Vec-backed so `keys()` iterates in seeding order; the language detector
/// depends on that order for its first-match whole-word scan.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    entries: Vec<TemplateEntry>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the full seed set already applied.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.seed();
        store
    }

    /// Populate the store. Idempotent: only fills gaps, so calling this on
    /// an already-seeded (or partially customized) store leaves existing
    /// entries untouched.
    pub fn seed(&mut self) {
        self.insert_if_absent(TemplateEntry {
            language: "javascript".to_string(),
            example: "```javascript\nconsole.log(\"Hello from JavaScript\");\n```".to_string(),
            explain: "JavaScript — dynamic language for web.".to_string(),
        });
        self.insert_if_absent(TemplateEntry {
            language: "python".to_string(),
            example: "```python\nprint(\"Hello, Python\")\n```".to_string(),
            explain: "Python — versatile, great for scripting & ML.".to_string(),
        });
        self.insert_if_absent(TemplateEntry {
            language: "cpp".to_string(),
            example:
                "```cpp\n#include <iostream>\nint main(){ std::cout<<\"Hello C++\\n\"; return 0; }\n```"
                    .to_string(),
            explain: "C++ — compiled, high-performance.".to_string(),
        });

        for lang in TAIL_LANGUAGES {
            self.insert_if_absent(TemplateEntry {
                language: (*lang).to_string(),
                example: format!("// example placeholder for {}", lang),
                explain: format!("{} quick info", lang),
            });
        }
    }

    fn insert_if_absent(&mut self, entry: TemplateEntry) {
        if self.lookup(&entry.language).is_none() {
            self.entries.push(entry);
        }
    }

    /// Look up a template by lowercase language key.
    pub fn lookup(&self, language: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.language == language)
    }

    /// Known language keys in seeding (insertion) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.language.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
