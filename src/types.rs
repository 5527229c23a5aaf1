//! Core types for htmlsense

use serde::{Deserialize, Serialize};

/// Kind of token produced by the markup scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// `<`
    TagOpenBracket,
    /// Start-tag element name
    ElementName,
    /// Attribute name inside a start tag
    AttributeName,
    /// Attribute value, quotes included when present
    AttributeValue,
    /// `/>`
    SelfCloseBracket,
    /// `>`
    TagCloseBracket,
    /// `</`
    EndTagOpenBracket,
    /// End-tag element name
    EndTagName,
    /// Plain text between tags
    Content,
    /// End of input; start equals the text length
    EndOfStream,
}

/// A token with its absolute byte span in the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub len: usize,
}

impl Token {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Slice of the source this token covers
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end()]
    }
}

/// Structured classification of a cursor position inside a markup fragment.
///
/// Produced once per resolution pass and immutable afterwards. When
/// `element` is `None` the cursor sits outside any recognizable element
/// structure and callers fall back to the raw-text heuristic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolvedContext {
    /// Name of the enclosing element, if any
    pub element: Option<String>,

    /// Cursor falls within the element-name token's span
    pub inside_element_name: bool,

    /// Cursor is at or before the end of the open tag
    pub inside_element_body: bool,

    /// Cursor falls within a recorded attribute-value span
    pub inside_attribute_value: bool,

    /// Attribute whose value contains the cursor
    pub attribute: Option<String>,
}

/// Open/close tag pair located around the cursor.
///
/// Offsets index the fragment text. `open_end <= close_start` holds except
/// for void elements, where the close span is the self-closing marker of the
/// same open tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchedPair {
    pub open_start: usize,
    pub open_end: usize,
    pub close_start: usize,
    pub close_end: usize,
}

/// A single highlight range in document-absolute offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
}

// ============================================================================
// Completion Types
// ============================================================================

/// Kind of completion item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Tag,
    CloseTag,
    Attribute,
    Value,
}

/// A completion item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Label shown in completion list
    pub label: String,

    /// Kind of completion
    pub kind: CompletionKind,

    /// Text to insert
    pub insert_text: String,

    /// Characters to move the cursor left after insertion. A negative value
    /// is the count of already-present closing delimiter characters the
    /// editor should skip over instead of duplicating.
    #[serde(default)]
    pub cursor_move: i32,

    /// Full documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        let label = label.into();
        Self {
            insert_text: label.clone(),
            label,
            kind,
            cursor_move: 0,
            documentation: None,
        }
    }

    pub fn with_insert_text(mut self, text: impl Into<String>) -> Self {
        self.insert_text = text.into();
        self
    }

    pub fn with_cursor_move(mut self, move_left: i32) -> Self {
        self.cursor_move = move_left;
        self
    }

    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }
}

/// Result of completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResult {
    pub items: Vec<CompletionItem>,
}

impl CompletionResult {
    pub fn new(items: Vec<CompletionItem>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }
}

// ============================================================================
// Hover Types
// ============================================================================

/// Hover information for the element under the cursor
#[derive(Debug, Clone, Serialize)]
pub struct HoverInfo {
    /// Tag rendering, e.g. `<div>` or `</div>`
    pub label: String,

    /// Markdown-escaped documentation text
    pub documentation: String,

    /// Span of the hovered tag in the fragment text
    pub start: usize,
    pub end: usize,
}

/// Result of hover request
#[derive(Debug, Clone, Serialize)]
pub struct HoverResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<HoverInfo>,
}

impl HoverResult {
    pub fn some(info: HoverInfo) -> Self {
        Self { info: Some(info) }
    }

    pub fn none() -> Self {
        Self { info: None }
    }
}

// ============================================================================
// Positions
// ============================================================================

/// Position in a document (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Convert a 1-based line/column position to a byte offset.
///
/// Columns past the end of a line clamp to the line end; lines past the end
/// of the text clamp to the text length.
pub fn offset_at(text: &str, pos: Position) -> usize {
    let mut line = 1u32;
    let mut line_start = 0usize;

    for (i, c) in text.char_indices() {
        if line == pos.line {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    if line < pos.line {
        return text.len();
    }

    let line_end = text[line_start..]
        .find('\n')
        .map(|p| line_start + p)
        .unwrap_or(text.len());

    let mut column = 1u32;
    for (i, _) in text[line_start..line_end].char_indices() {
        if column == pos.column {
            return line_start + i;
        }
        column += 1;
    }

    line_end
}

/// Convert a byte offset to a 1-based line/column position
pub fn position_at(text: &str, offset: usize) -> Position {
    let offset = offset.min(text.len());
    let mut line = 1u32;
    let mut column = 1u32;

    for (i, c) in text.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    Position::new(line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_span() {
        let tok = Token {
            kind: TokenKind::ElementName,
            start: 1,
            len: 3,
        };
        assert_eq!(tok.end(), 4);
        assert_eq!(tok.text("<div>"), "div");
    }

    #[test]
    fn test_completion_item_builder() {
        let item = CompletionItem::new("href", CompletionKind::Attribute)
            .with_insert_text("href=\"\"")
            .with_cursor_move(1)
            .with_documentation("hyperlink target");

        assert_eq!(item.label, "href");
        assert_eq!(item.insert_text, "href=\"\"");
        assert_eq!(item.cursor_move, 1);
    }

    #[test]
    fn test_offset_at() {
        let text = "abc\ndef\nghi";
        assert_eq!(offset_at(text, Position::new(1, 1)), 0);
        assert_eq!(offset_at(text, Position::new(2, 1)), 4);
        assert_eq!(offset_at(text, Position::new(2, 3)), 6);
        // column past line end clamps
        assert_eq!(offset_at(text, Position::new(1, 99)), 3);
        // line past text end clamps
        assert_eq!(offset_at(text, Position::new(9, 1)), text.len());
    }

    #[test]
    fn test_position_at() {
        let text = "abc\ndef";
        assert_eq!(position_at(text, 0), Position::new(1, 1));
        assert_eq!(position_at(text, 5), Position::new(2, 2));
        assert_eq!(position_at(text, 99), Position::new(2, 4));
    }

    #[test]
    fn test_offset_position_round_trip() {
        let text = "<div>\n  <span id=\"x\"></span>\n</div>";
        for offset in [0, 3, 6, 12, text.len() - 1] {
            let pos = position_at(text, offset);
            assert_eq!(offset_at(text, pos), offset);
        }
    }
}
