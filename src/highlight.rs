//! Matching open/close pair location.
//!
//! Runs the scanner over the fragment with a small element stack, flags the
//! frame whose open-tag name contains the cursor, and reports the span of
//! that name together with the span of whatever closes it: a matching end
//! tag name, a `/>`, or the `>` of a void element's open tag.

use crate::kb::KnowledgeBase;
use crate::scanner::Scanner;
use crate::types::{MatchedPair, Token, TokenKind};

struct Frame {
    start: usize,
    end: usize,
    flagged: bool,
}

/// Find the open/close pair under `cursor`, if any.
///
/// End tags are matched leniently: whichever frame is on top of the stack is
/// popped regardless of the end tag's name, so slightly malformed markup
/// still highlights sensibly.
pub fn locate(kb: &KnowledgeBase, text: &str, cursor: usize) -> Option<MatchedPair> {
    let mut scanner = Scanner::new(text);
    let mut stack: Vec<Frame> = Vec::new();
    let mut found = false;

    loop {
        let tok = scanner.scan();
        match tok.kind {
            TokenKind::ElementName => {
                let flagged = cursor >= tok.start && cursor <= tok.end();
                found |= flagged;
                stack.push(Frame {
                    start: tok.start,
                    end: tok.end(),
                    flagged,
                });
            }
            TokenKind::SelfCloseBracket => {
                if let Some(frame) = stack.pop() {
                    if frame.flagged {
                        return Some(pair(&frame, &tok));
                    }
                }
                if bail(found, cursor, &tok) {
                    return None;
                }
            }
            TokenKind::TagCloseBracket => {
                let top_is_void = stack
                    .last()
                    .is_some_and(|f| kb.is_void_element(&text[f.start..f.end]));
                if top_is_void {
                    if let Some(frame) = stack.pop() {
                        if frame.flagged {
                            return Some(pair(&frame, &tok));
                        }
                    }
                }
                if bail(found, cursor, &tok) {
                    return None;
                }
            }
            TokenKind::EndTagName => {
                if let Some(frame) = stack.pop() {
                    let on_close = cursor >= tok.start && cursor <= tok.end();
                    if frame.flagged || on_close {
                        return Some(pair(&frame, &tok));
                    }
                }
                if bail(found, cursor, &tok) {
                    return None;
                }
            }
            TokenKind::EndOfStream => return None,
            _ => {
                if bail(found, cursor, &tok) {
                    return None;
                }
            }
        }
    }
}

fn pair(open: &Frame, close: &Token) -> MatchedPair {
    MatchedPair {
        open_start: open.start,
        open_end: open.end,
        close_start: close.start,
        close_end: close.end(),
    }
}

// Once the scan moves past the cursor with nothing flagged, no later token
// can contain it.
fn bail(found: bool, cursor: usize, tok: &Token) -> bool {
    !found && cursor <= tok.start
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::standard()
    }

    fn locate_in(text: &str, cursor: usize) -> Option<MatchedPair> {
        locate(&kb(), text, cursor)
    }

    // =========================================================================
    // Plain open/close pairs
    // =========================================================================

    #[test]
    fn test_cursor_on_open_name() {
        let text = "<div>x</div>";
        let pair = locate_in(text, 2).unwrap();
        assert_eq!((pair.open_start, pair.open_end), (1, 4));
        assert_eq!((pair.close_start, pair.close_end), (8, 11));
    }

    #[test]
    fn test_cursor_on_close_name() {
        let text = "<div>x</div>";
        let pair = locate_in(text, 9).unwrap();
        assert_eq!((pair.open_start, pair.open_end), (1, 4));
        assert_eq!((pair.close_start, pair.close_end), (8, 11));
    }

    #[test]
    fn test_nested_outer_pair() {
        let text = "<div><span></span></div>";
        let pair = locate_in(text, 2).unwrap();
        assert_eq!((pair.open_start, pair.open_end), (1, 4));
        assert_eq!((pair.close_start, pair.close_end), (20, 23));
    }

    #[test]
    fn test_nested_inner_pair() {
        let text = "<div><span></span></div>";
        let pair = locate_in(text, 7).unwrap();
        assert_eq!((pair.open_start, pair.open_end), (6, 10));
        assert_eq!((pair.close_start, pair.close_end), (13, 17));
    }

    #[test]
    fn test_cursor_in_body_matches_nothing() {
        let text = "<div>hello</div>";
        assert!(locate_in(text, 7).is_none());
    }

    #[test]
    fn test_cursor_at_name_boundaries() {
        let text = "<div></div>";
        assert!(locate_in(text, 1).is_some());
        assert!(locate_in(text, 4).is_some());
    }

    // =========================================================================
    // Self-closing and void elements
    // =========================================================================

    #[test]
    fn test_self_closing_element() {
        let text = "<input />";
        let pair = locate_in(text, 3).unwrap();
        assert_eq!((pair.open_start, pair.open_end), (1, 6));
        assert_eq!((pair.close_start, pair.close_end), (7, 9));
    }

    #[test]
    fn test_void_element_closed_by_bracket() {
        let text = "<div><br></div>";
        let pair = locate_in(text, 7).unwrap();
        assert_eq!((pair.open_start, pair.open_end), (6, 8));
        assert_eq!((pair.close_start, pair.close_end), (8, 9));
    }

    #[test]
    fn test_void_with_attributes() {
        let text = r#"<img src="x.png">"#;
        let pair = locate_in(text, 2).unwrap();
        assert_eq!((pair.open_start, pair.open_end), (1, 4));
        assert_eq!((pair.close_start, pair.close_end), (16, 17));
    }

    #[test]
    fn test_cursor_after_void_bracket() {
        let text = "<br> ";
        assert!(locate_in(text, 5).is_none());
    }

    // =========================================================================
    // Lenient and malformed input
    // =========================================================================

    #[test]
    fn test_mismatched_end_tag_still_pairs() {
        let text = "<div></span>";
        let pair = locate_in(text, 2).unwrap();
        assert_eq!((pair.open_start, pair.open_end), (1, 4));
        assert_eq!((pair.close_start, pair.close_end), (7, 11));
    }

    #[test]
    fn test_unclosed_element() {
        let text = "<div>hello";
        assert!(locate_in(text, 2).is_none());
    }

    #[test]
    fn test_stray_end_tag() {
        let text = "</div>";
        assert!(locate_in(text, 3).is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(locate_in("", 0).is_none());
    }
}
