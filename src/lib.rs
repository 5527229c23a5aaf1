//! Htmlsense - Cursor-context intelligence for embedded HTML fragments
//!
//! This library answers editor questions (completion, matching-pair
//! highlight, hover) for HTML markup embedded as template literals in
//! TypeScript or JavaScript source, in the style of Angular components.
//!
//! # Architecture
//!
//! ```text
//! CLI/editor -> Engine -> fragment locator -> provider -> KnowledgeBase
//!                                  |
//!                                  +-> scanner / context resolver
//! ```
//!
//! # Features
//!
//! - **Completions**: Tags, close tags, attributes (with binding-bracket
//!   awareness), enumerated attribute values
//! - **Highlight**: Matching open/close pair under the cursor
//! - **Hover**: Tag documentation for open and end tag names
//! - **Fragment location**: `template: `...`` literals in host documents
//!
//! All positions are byte offsets; document-level entry points rebase
//! offsets into the containing fragment automatically.

pub mod completions;
pub mod context;
pub mod delimiter;
pub mod fragment;
pub mod highlight;
pub mod hover;
pub mod insert;
pub mod kb;
pub mod scanner;
pub mod types;

// Re-export main types
pub use context::resolve;
pub use fragment::{find_fragment, Fragment};
pub use kb::{AttributeDef, KnowledgeBase, TagDef};
pub use types::{
    CompletionItem, CompletionKind, CompletionResult, HighlightRange, HoverInfo, HoverResult,
    MatchedPair, Position, ResolvedContext,
};

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

/// Main intelligence engine over a shared knowledge base.
pub struct Engine {
    kb: Arc<KnowledgeBase>,
}

impl Engine {
    /// Create an engine with the standard HTML knowledge base.
    pub fn new() -> Self {
        Self {
            kb: Arc::new(KnowledgeBase::standard()),
        }
    }

    /// Create an engine with a custom knowledge base.
    pub fn with_knowledge_base(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// The knowledge base this engine answers from.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    // =========================================================================
    // Fragment-level queries (bare markup, fragment-relative offsets)
    // =========================================================================

    /// Completions for `cursor` within bare markup.
    pub fn complete(&self, text: &str, cursor: usize) -> CompletionResult {
        debug!(cursor, "complete");
        completions::get_completions(&self.kb, text, cursor)
    }

    /// Hover information for `cursor` within bare markup.
    pub fn hover(&self, text: &str, cursor: usize) -> HoverResult {
        debug!(cursor, "hover");
        hover::hover(&self.kb, text, cursor)
    }

    /// The matching open/close pair under `cursor` within bare markup.
    pub fn highlight(&self, text: &str, cursor: usize) -> Option<MatchedPair> {
        debug!(cursor, "highlight");
        highlight::locate(&self.kb, text, cursor)
    }

    /// The resolved cursor context within bare markup.
    pub fn context(&self, text: &str, cursor: usize) -> ResolvedContext {
        context::resolve(&self.kb, text, cursor)
    }

    // =========================================================================
    // Document-level queries (host source, document-absolute offsets)
    // =========================================================================

    /// Completions for `cursor` within a host document. Empty when the
    /// cursor is outside every template fragment.
    pub fn complete_document(&self, document: &str, cursor: usize) -> CompletionResult {
        match find_fragment(document, cursor) {
            Some(frag) => self.complete(frag.text, frag.cursor),
            None => CompletionResult::empty(),
        }
    }

    /// Hover information for `cursor` within a host document, with the
    /// reported range rebased to document offsets.
    pub fn hover_document(&self, document: &str, cursor: usize) -> HoverResult {
        let Some(frag) = find_fragment(document, cursor) else {
            return HoverResult::none();
        };
        let mut result = self.hover(frag.text, frag.cursor);
        if let Some(info) = &mut result.info {
            info.start += frag.start;
            info.end += frag.start;
        }
        result
    }

    /// Highlight ranges for `cursor` within a host document: two ranges
    /// (open name, close marker) in document offsets, or none.
    pub fn highlight_document(&self, document: &str, cursor: usize) -> Vec<HighlightRange> {
        let Some(frag) = find_fragment(document, cursor) else {
            return Vec::new();
        };
        match self.highlight(frag.text, frag.cursor) {
            Some(pair) => vec![
                HighlightRange {
                    start: pair.open_start + frag.start,
                    end: pair.open_end + frag.start,
                },
                HighlightRange {
                    start: pair.close_start + frag.start,
                    end: pair.close_end + frag.start,
                },
            ],
            None => Vec::new(),
        }
    }

    /// Knowledge-base counters for diagnostics.
    pub fn stats(&self) -> EngineStats {
        EngineStats {
            tags: self.kb.tags().len(),
            global_attributes: self.kb.global_attribute_count(),
            value_sets: self.kb.value_set_count(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Knowledge-base counters.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EngineStats {
    pub tags: usize,
    pub global_attributes: usize,
    pub value_sets: usize,
}
