//! Insertion synthesis for attribute completions.
//!
//! Given the delimiter scan results, decide what trailing text to append
//! after an inserted attribute name and where the cursor should land
//! afterwards, so that accepting a completion never duplicates brackets or
//! the `="..."` scaffold that already exists in the document.

/// Text appended after the attribute name, plus the cursor adjustment
/// applied after insertion. A negative `cursor_move` steps left into an
/// existing `="..."`; a positive one steps left over a just-inserted `"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub name_close: String,
    pub cursor_move: i32,
}

/// Build the insertion suffix from the open- and close-delimiter scans.
pub fn synthesize(open: &str, close: &str) -> Insertion {
    // an existing `=` means the value scaffold is already there
    if close.ends_with('=') {
        return Insertion {
            name_close: String::new(),
            cursor_move: 0,
        };
    }

    let bind_open: String = open.chars().take(2).filter(|&c| c == '[' || c == '(').collect();
    let bind_close: String = close.chars().take(2).filter(|&c| c == ']' || c == ')').collect();

    if bind_close.is_empty() {
        let name_close = match bind_open.as_str() {
            "[" => "]=\"\"",
            "(" => ")=\"\"",
            "[(" => ")]=\"\"",
            "([" => "])=\"\"",
            _ => "=\"\"",
        };
        Insertion {
            name_close: name_close.to_string(),
            cursor_move: 1,
        }
    } else {
        // closing brackets already present; just hop over them
        Insertion {
            name_close: String::new(),
            cursor_move: -(bind_close.len() as i32),
        }
    }
}
