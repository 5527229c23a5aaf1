//! Cursor-context resolution for markup fragments.
//!
//! Drives a scanner pass with an explicit element stack to classify where a
//! cursor sits relative to element and attribute structure. The resolver is
//! permissive: mismatched end tags still pop the top frame, and unterminated
//! tags are treated as closing at end of text.

use crate::kb::KnowledgeBase;
use crate::scanner::Scanner;
use crate::types::{ResolvedContext, TokenKind};

/// Recorded span of an attribute value inside an element frame
struct ValueSpan {
    attribute: Option<String>,
    start: usize,
    end: usize,
}

/// One element on the resolution stack, owned by a single pass
struct ElementFrame {
    name: String,
    /// Span of the element-name token
    start: usize,
    end: usize,
    /// Offset of the `>` or `/>` closing the open tag
    open_tag_end: Option<usize>,
    values: Vec<ValueSpan>,
}

/// Classify the cursor position within a markup fragment.
///
/// The scan stops at the first token starting at or past the cursor, except
/// that name and value tokens are fully recorded first so their spans are
/// known. The enclosing element is the top of the stack when the scan stops.
pub fn resolve(kb: &KnowledgeBase, text: &str, cursor: usize) -> ResolvedContext {
    let mut scanner = Scanner::new(text);
    let mut stack: Vec<ElementFrame> = Vec::new();
    let mut pending_attribute: Option<String> = None;
    let mut closing_end_tag = false;
    let mut done = false;

    while !done {
        let tok = scanner.scan();
        let mut pop = false;

        match tok.kind {
            TokenKind::EndOfStream => break,

            TokenKind::TagOpenBracket => {
                closing_end_tag = false;
                done = cursor <= tok.start;
            }

            TokenKind::ElementName => {
                stack.push(ElementFrame {
                    name: tok.text(text).to_string(),
                    start: tok.start,
                    end: tok.end(),
                    open_tag_end: None,
                    values: Vec::new(),
                });
            }

            TokenKind::AttributeName => {
                pending_attribute = Some(tok.text(text).to_string());
            }

            TokenKind::AttributeValue => {
                if let Some(frame) = stack.last_mut() {
                    frame.values.push(ValueSpan {
                        attribute: pending_attribute.clone(),
                        start: tok.start,
                        end: tok.end(),
                    });
                }
            }

            TokenKind::SelfCloseBracket => {
                if let Some(frame) = stack.last_mut() {
                    frame.open_tag_end = Some(tok.start);
                    done = cursor <= tok.start;
                    pop = !done;
                }
            }

            TokenKind::TagCloseBracket => {
                done = cursor <= tok.start;
                // the `>` of an end tag does not close anyone's open tag
                if !done && !closing_end_tag {
                    if let Some(frame) = stack.last_mut() {
                        frame.open_tag_end = Some(tok.start);
                        pop = kb.is_void_element(&frame.name);
                    }
                }
                closing_end_tag = false;
            }

            TokenKind::EndTagOpenBracket => {
                pop = true;
                closing_end_tag = true;
            }

            _ => {
                done = cursor <= tok.start;
            }
        }

        if pop {
            stack.pop();
        }
    }

    classify(stack.last(), text, cursor)
}

fn classify(frame: Option<&ElementFrame>, text: &str, cursor: usize) -> ResolvedContext {
    let Some(frame) = frame else {
        return ResolvedContext::default();
    };

    let open_tag_end = frame.open_tag_end.unwrap_or(text.len());
    let mut ctx = ResolvedContext {
        element: Some(frame.name.clone()),
        inside_element_name: cursor >= frame.start && cursor <= frame.end,
        inside_element_body: cursor <= open_tag_end,
        inside_attribute_value: false,
        attribute: None,
    };

    for span in &frame.values {
        if cursor >= span.start && cursor <= span.end {
            ctx.inside_attribute_value = true;
            ctx.attribute = span.attribute.clone();
        }
    }

    ctx
}

/// Nearest character before the cursor that cannot be part of a completion
/// name. `Some('<')` means the cursor is beginning a fresh tag.
///
/// A cursor inside a multi-byte character floors to the character's start.
pub fn preceding_non_name_char(text: &str, cursor: usize) -> Option<char> {
    let mut cursor = cursor.min(text.len());
    while cursor > 0 && !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    text[..cursor]
        .chars()
        .rev()
        .find(|&c| !is_completion_name_char(c))
}

/// Characters a partially typed tag or attribute name may contain, binding
/// punctuation included
fn is_completion_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '$' | '@' | '*' | '#' | '(' | ')' | '[' | ']')
}
