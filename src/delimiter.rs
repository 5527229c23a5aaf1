//! Binding-delimiter scans around an attribute-name cursor.
//!
//! Two pure character scans over the raw fragment text, used only when
//! completion is offered at an attribute-name position. Together they encode
//! which wrapping syntax already surrounds the cursor: plain attribute,
//! property binding `[x]`, event binding `(x)`, or two-way binding `[(x)]`.
//! The results are passed uninterpreted to the insertion synthesizer.

/// Opening bracket characters found immediately right of the nearest
/// terminator (whitespace or quote) to the left of the cursor.
///
/// Returns one of `""`, `"["`, `"("`, `"[("`, `"(["`.
pub fn open_delimiters(text: &str, cursor: usize) -> String {
    let bytes = text.as_bytes();
    let mut i = cursor.min(bytes.len());

    while i > 0 {
        i -= 1;
        let b = bytes[i];
        if b.is_ascii_whitespace() || b == b'"' || b == b'\'' {
            let mut out = String::new();
            for j in [i + 1, i + 2] {
                if let Some(&c) = bytes.get(j) {
                    if c == b'[' || c == b'(' {
                        out.push(c as char);
                    }
                }
            }
            return out;
        }
    }

    String::new()
}

/// Closing bracket characters (and a trailing `=` if present) found right of
/// the identifier the cursor sits in.
///
/// The scan first skips the rest of the identifier, then collects closing
/// brackets; after the first whitespace no further brackets are collected,
/// and an `=` is appended and terminates the scan. The result is trimmed.
/// Bracket-type correspondence with the open side is deliberately not
/// checked.
pub fn close_delimiters(text: &str, cursor: usize) -> String {
    let bytes = text.as_bytes();
    let mut i = cursor.min(bytes.len());

    while i < bytes.len() && is_identifier_byte(bytes[i]) {
        i += 1;
    }
    if i >= bytes.len() {
        return String::new();
    }

    let mut out = String::new();
    let mut collecting_brackets = true;
    for &b in &bytes[i..] {
        if collecting_brackets && (b == b']' || b == b')') {
            out.push(b as char);
        } else if b.is_ascii_whitespace() {
            collecting_brackets = false;
            out.push(b as char);
        } else if b == b'=' {
            out.push('=');
            break;
        } else {
            break;
        }
    }

    out.trim().to_string()
}

/// Identifier characters for the forward scan (digits intentionally
/// excluded, matching observed completion behavior)
fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'_' | b'$' | b'@' | b'*' | b'#')
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Backward scan
    // =========================================================================

    #[test]
    fn test_open_plain_attribute() {
        let text = "<input ty";
        assert_eq!(open_delimiters(text, 9), "");
    }

    #[test]
    fn test_open_property_binding() {
        let text = "<input [val";
        assert_eq!(open_delimiters(text, 11), "[");
    }

    #[test]
    fn test_open_event_binding() {
        let text = "<button (cli";
        assert_eq!(open_delimiters(text, 12), "(");
    }

    #[test]
    fn test_open_two_way_binding() {
        let text = "<input [(ngMo";
        assert_eq!(open_delimiters(text, 13), "[(");
    }

    #[test]
    fn test_open_reversed_two_way() {
        let text = "<input ([x";
        assert_eq!(open_delimiters(text, 10), "([");
    }

    #[test]
    fn test_open_after_quote_terminator() {
        let text = r#"<input type="a" [mo"#;
        assert_eq!(open_delimiters(text, 19), "[");
    }

    #[test]
    fn test_open_no_terminator() {
        assert_eq!(open_delimiters("abc", 3), "");
    }

    // =========================================================================
    // Forward scan
    // =========================================================================

    #[test]
    fn test_close_nothing_follows() {
        let text = "<input ty";
        assert_eq!(close_delimiters(text, 8), "");
    }

    #[test]
    fn test_close_single_bracket() {
        let text = "<input [val]";
        // cursor inside "val"
        assert_eq!(close_delimiters(text, 9), "]");
    }

    #[test]
    fn test_close_two_way() {
        let text = r#"<input [(name)]="x">"#;
        // cursor inside "name"
        assert_eq!(close_delimiters(text, 10), ")]=");
    }

    #[test]
    fn test_close_with_assignment() {
        let text = r#"<input [val]="x">"#;
        assert_eq!(close_delimiters(text, 9), "]=");
    }

    #[test]
    fn test_close_with_spaces_before_assignment() {
        let text = "<input [val]  =";
        assert_eq!(close_delimiters(text, 9), "]  =");
    }

    #[test]
    fn test_close_skips_rest_of_identifier() {
        let text = r#"<input [(ngModel)]="#;
        // cursor in the middle of ngModel
        assert_eq!(close_delimiters(text, 11), ")]=");
    }

    #[test]
    fn test_close_stops_collecting_brackets_after_whitespace() {
        let text = "<input [val) ]";
        // the `]` after the space is not collected
        assert_eq!(close_delimiters(text, 9), ")");
    }

    #[test]
    fn test_close_mismatched_bracket_type_is_accepted() {
        // known leniency: open `[` but close `)` is still reported
        let text = "<input [val)";
        assert_eq!(close_delimiters(text, 9), ")");
    }

    #[test]
    fn test_close_at_end_of_text() {
        assert_eq!(close_delimiters("<input ty", 9), "");
    }
}
