//! Hover information for the element name under the cursor.

use crate::kb::KnowledgeBase;
use crate::scanner::Scanner;
use crate::types::{HoverInfo, HoverResult, TokenKind};

/// Look up hover documentation for the tag name containing `cursor`.
///
/// Both open- and end-tag names are eligible. Unknown tags yield an empty
/// result rather than an error.
pub fn hover(kb: &KnowledgeBase, text: &str, cursor: usize) -> HoverResult {
    let mut scanner = Scanner::new(text);

    loop {
        let tok = scanner.scan();
        match tok.kind {
            TokenKind::ElementName | TokenKind::EndTagName => {
                if cursor >= tok.start && cursor <= tok.end() {
                    let name = tok.text(text);
                    let Some(def) = kb.tag(name) else {
                        return HoverResult::none();
                    };
                    let label = if tok.kind == TokenKind::ElementName {
                        format!("<{name}>")
                    } else {
                        format!("</{name}>")
                    };
                    return HoverResult::some(HoverInfo {
                        label,
                        documentation: escape_markdown(&def.documentation),
                        start: tok.start,
                        end: tok.end(),
                    });
                }
            }
            TokenKind::EndOfStream => return HoverResult::none(),
            _ => {
                if cursor <= tok.start {
                    return HoverResult::none();
                }
            }
        }
    }
}

/// Backslash-escape characters that carry meaning in Markdown, so plain-text
/// documentation renders literally.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '{' | '}' | '[' | ']' | '(' | ')' | '#' | '+' | '-' | '.'
                | '!'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::standard()
    }

    #[test]
    fn test_hover_on_open_tag_name() {
        let text = "<div>x</div>";
        let result = hover(&kb(), text, 2);
        let info = result.info.unwrap();
        assert_eq!(info.label, "<div>");
        assert_eq!((info.start, info.end), (1, 4));
        assert!(!info.documentation.is_empty());
    }

    #[test]
    fn test_hover_on_end_tag_name() {
        let text = "<div>x</div>";
        let result = hover(&kb(), text, 9);
        let info = result.info.unwrap();
        assert_eq!(info.label, "</div>");
        assert_eq!((info.start, info.end), (8, 11));
    }

    #[test]
    fn test_hover_in_body_is_empty() {
        let text = "<div>hello</div>";
        assert!(hover(&kb(), text, 7).info.is_none());
    }

    #[test]
    fn test_hover_on_attribute_is_empty() {
        let text = r#"<a href="x">"#;
        assert!(hover(&kb(), text, 5).info.is_none());
    }

    #[test]
    fn test_hover_on_unknown_tag_is_empty() {
        let text = "<zzz></zzz>";
        assert!(hover(&kb(), text, 2).info.is_none());
    }

    #[test]
    fn test_hover_documentation_is_escaped() {
        let result = hover(&kb(), "<a>x</a>", 1);
        let info = result.info.unwrap();
        // anchor documentation mentions hyperlinks with punctuation
        assert!(!info.documentation.contains("](") || info.documentation.contains("\\]"));
    }

    #[test]
    fn test_escape_markdown_characters() {
        assert_eq!(escape_markdown("a*b_c"), "a\\*b\\_c");
        assert_eq!(escape_markdown("[x](y)"), "\\[x\\]\\(y\\)");
        assert_eq!(escape_markdown("plain"), "plain");
    }
}
