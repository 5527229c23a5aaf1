//! Single-pass token scanner for markup fragments.
//!
//! A hand-rolled finite-state machine that lexes an HTML fragment into typed
//! tokens carrying absolute byte offsets. The scanner performs no semantic
//! validation and never fails: reaching end of input in any state terminates
//! the stream with an [`TokenKind::EndOfStream`] token at the text length, so
//! unterminated quotes and tags cannot hang a scan.

use crate::types::{Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between tags, scanning content
    OutsideTag,
    /// Just consumed `<`, expecting an element name
    BeforeElementName,
    /// Inside a start tag, scanning attributes and closing brackets
    InStartTag,
    /// Just consumed an attribute name, `=` may follow
    AfterAttributeName,
    /// Just consumed `=`, a value may follow
    BeforeAttributeValue,
    /// Inside `</ ... >`
    InEndTag,
}

/// Markup token scanner.
///
/// One pass per instance; the stream is not restartable. A fresh scan starts
/// over from offset zero of a given text.
pub struct Scanner<'a> {
    bytes: &'a [u8],
    offset: usize,
    state: State,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            offset: 0,
            state: State::OutsideTag,
        }
    }

    /// Produce the next token. After `EndOfStream` every further call
    /// returns `EndOfStream` again.
    pub fn scan(&mut self) -> Token {
        loop {
            if self.offset >= self.bytes.len() {
                return Token {
                    kind: TokenKind::EndOfStream,
                    start: self.bytes.len(),
                    len: 0,
                };
            }

            match self.state {
                State::OutsideTag => {
                    if self.bytes[self.offset] == b'<' {
                        if self.peek(1) == Some(b'/') {
                            self.state = State::InEndTag;
                            return self.fixed_token(TokenKind::EndTagOpenBracket, 2);
                        }
                        self.state = State::BeforeElementName;
                        return self.fixed_token(TokenKind::TagOpenBracket, 1);
                    }
                    let start = self.offset;
                    while self.offset < self.bytes.len() && self.bytes[self.offset] != b'<' {
                        self.offset += 1;
                    }
                    return self.span_token(TokenKind::Content, start);
                }

                State::BeforeElementName => {
                    let start = self.offset;
                    self.consume_while(is_name_byte);
                    self.state = State::InStartTag;
                    if self.offset > start {
                        return self.span_token(TokenKind::ElementName, start);
                    }
                    // `<` with no name after it; lex the rest as tag innards
                }

                State::InStartTag => {
                    self.skip_whitespace();
                    if self.offset >= self.bytes.len() {
                        continue;
                    }
                    let b = self.bytes[self.offset];
                    if b == b'/' && self.peek(1) == Some(b'>') {
                        self.state = State::OutsideTag;
                        return self.fixed_token(TokenKind::SelfCloseBracket, 2);
                    }
                    if b == b'>' {
                        self.state = State::OutsideTag;
                        return self.fixed_token(TokenKind::TagCloseBracket, 1);
                    }
                    if b == b'<' {
                        // Unterminated tag; re-lex from outside
                        self.state = State::OutsideTag;
                        continue;
                    }
                    let start = self.offset;
                    self.consume_while(is_attribute_name_byte);
                    if self.offset > start {
                        self.state = State::AfterAttributeName;
                        return self.span_token(TokenKind::AttributeName, start);
                    }
                    // Stray byte (lone quote, `=` without a name); skip it
                    self.offset += 1;
                }

                State::AfterAttributeName => {
                    self.skip_whitespace();
                    if self.offset < self.bytes.len() && self.bytes[self.offset] == b'=' {
                        self.offset += 1;
                        self.state = State::BeforeAttributeValue;
                    } else {
                        self.state = State::InStartTag;
                    }
                }

                State::BeforeAttributeValue => {
                    self.skip_whitespace();
                    if self.offset >= self.bytes.len() {
                        continue;
                    }
                    let b = self.bytes[self.offset];
                    if b == b'"' || b == b'\'' {
                        let start = self.offset;
                        self.offset += 1;
                        while self.offset < self.bytes.len() && self.bytes[self.offset] != b {
                            self.offset += 1;
                        }
                        if self.offset < self.bytes.len() {
                            self.offset += 1; // closing quote
                        }
                        self.state = State::InStartTag;
                        return self.span_token(TokenKind::AttributeValue, start);
                    }
                    if b == b'>' || b == b'<' {
                        // The value never arrived
                        self.state = State::InStartTag;
                        continue;
                    }
                    let start = self.offset;
                    while self.offset < self.bytes.len() {
                        let b = self.bytes[self.offset];
                        if b.is_ascii_whitespace() || b == b'>' || b == b'<' {
                            break;
                        }
                        self.offset += 1;
                    }
                    self.state = State::InStartTag;
                    return self.span_token(TokenKind::AttributeValue, start);
                }

                State::InEndTag => {
                    self.skip_whitespace();
                    if self.offset >= self.bytes.len() {
                        continue;
                    }
                    let b = self.bytes[self.offset];
                    if b == b'>' {
                        self.state = State::OutsideTag;
                        return self.fixed_token(TokenKind::TagCloseBracket, 1);
                    }
                    if b == b'<' {
                        self.state = State::OutsideTag;
                        continue;
                    }
                    let start = self.offset;
                    self.consume_while(is_name_byte);
                    if self.offset > start {
                        return self.span_token(TokenKind::EndTagName, start);
                    }
                    self.offset += 1;
                }
            }
        }
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.offset + ahead).copied()
    }

    fn fixed_token(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.offset;
        self.offset += len;
        Token { kind, start, len }
    }

    fn span_token(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            start,
            len: self.offset - start,
        }
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(|b| b.is_ascii_whitespace());
    }

    fn consume_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.offset < self.bytes.len() && pred(self.bytes[self.offset]) {
            self.offset += 1;
        }
    }
}

/// Element name characters: tag names plus custom-element punctuation
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':' || b == b'.' || b >= 0x80
}

/// Attribute name characters. Broad on purpose so binding punctuation like
/// `[(model)]`, `(click)` or `*ngFor` lexes as a single name token.
fn is_attribute_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace()
        && b != b'"'
        && b != b'\''
        && b != b'>'
        && b != b'<'
        && b != b'/'
        && b != b'='
}
