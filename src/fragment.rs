//! Markup fragment location within a host document.
//!
//! Fragments are template literals assigned to a `template:` property, the
//! form Angular-style components use to embed markup in TypeScript or
//! JavaScript source. The fragment containing the cursor is extracted so the
//! intelligence providers can work on bare markup with a rebased offset.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// A markup fragment extracted from a host document.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    /// The bare markup text, without the surrounding literal syntax.
    pub text: &'a str,
    /// Byte offset of `text` within the host document.
    pub start: usize,
    /// Cursor offset rebased into `text`.
    pub cursor: usize,
}

fn template_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"(template\s*:\s*`)([^`]*)`").unwrap()
    })
}

/// Find the template literal strictly containing `cursor`.
///
/// Every template in the document is considered; the cursor must sit inside
/// the literal body (past its opening backtick, at or before its closing
/// backtick). Returns `None` when the cursor is outside every template.
pub fn find_fragment(document: &str, cursor: usize) -> Option<Fragment<'_>> {
    for caps in template_regex().captures_iter(document) {
        let whole = caps.get(0)?;
        let body = caps.get(2)?;
        if cursor > body.start() && cursor < whole.end() {
            debug!(start = body.start(), len = body.len(), "cursor inside template fragment");
            return Some(Fragment {
                text: body.as_str(),
                start: body.start(),
                cursor: cursor - body.start(),
            });
        }
    }
    None
}
