//! Completion dispatch.
//!
//! Resolves the cursor context and routes to the tag, attribute or value
//! provider. The rules, in order: no enclosing element or cursor in an
//! element name offers tags (only when the character left of the name is
//! `<`); past the open tag offers a close tag plus new tags after `<`;
//! inside an attribute value offers values; anywhere else in an open tag
//! offers attributes.

mod attributes;
mod tags;
mod values;

use tracing::debug;

use crate::context::{preceding_non_name_char, resolve};
use crate::delimiter::{close_delimiters, open_delimiters};
use crate::kb::KnowledgeBase;
use crate::types::CompletionResult;

pub fn get_completions(kb: &KnowledgeBase, text: &str, cursor: usize) -> CompletionResult {
    let ctx = resolve(kb, text, cursor);
    debug!(?ctx, cursor, "resolved completion context");

    if ctx.element.is_none() || ctx.inside_element_name {
        if preceding_non_name_char(text, cursor) == Some('<') {
            return CompletionResult::new(tags::all_tags(kb));
        }
        return CompletionResult::empty();
    }

    // ctx.element is known here
    let Some(element) = &ctx.element else {
        return CompletionResult::empty();
    };

    if !ctx.inside_element_body {
        if preceding_non_name_char(text, cursor) == Some('<') {
            let mut items = vec![tags::close_tag(element)];
            items.extend(tags::all_tags(kb));
            return CompletionResult::new(items);
        }
        return CompletionResult::empty();
    }

    if ctx.inside_attribute_value {
        let Some(attribute) = &ctx.attribute else {
            return CompletionResult::empty();
        };
        return CompletionResult::new(values::attribute_values(kb, element, attribute));
    }

    let open = open_delimiters(text, cursor);
    let close = close_delimiters(text, cursor);
    CompletionResult::new(attributes::attribute_completions(kb, element, &open, &close))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompletionKind;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::standard()
    }

    fn complete(text: &str, cursor: usize) -> CompletionResult {
        get_completions(&kb(), text, cursor)
    }

    fn labels(result: &CompletionResult) -> Vec<&str> {
        result.items.iter().map(|i| i.label.as_str()).collect()
    }

    // =========================================================================
    // Tag completions
    // =========================================================================

    #[test]
    fn test_tags_after_open_bracket() {
        let result = complete("<", 1);
        let labels = labels(&result);
        assert!(labels.contains(&"div"));
        assert!(labels.contains(&"span"));
        assert!(result.items.iter().all(|i| i.kind == CompletionKind::Tag));
    }

    #[test]
    fn test_tags_after_partial_name() {
        let result = complete("<di", 3);
        assert!(labels(&result).contains(&"div"));
    }

    #[test]
    fn test_cursor_inside_multibyte_character() {
        // byte 5 is not a char boundary; the query still answers
        let result = complete("<p>héllo", 5);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_no_tags_in_plain_text() {
        let result = complete("hello", 3);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_close_tag_offered_inside_open_element() {
        let result = complete("<div><", 6);
        let labels = labels(&result);
        assert_eq!(labels[0], "/div");
        assert!(labels.contains(&"span"));
        let close = &result.items[0];
        assert_eq!(close.kind, CompletionKind::CloseTag);
        assert_eq!(close.insert_text, "/div>");
    }

    #[test]
    fn test_no_completions_in_element_body_without_bracket() {
        let result = complete("<div>x", 6);
        assert!(result.items.is_empty());
    }

    // =========================================================================
    // Attribute completions
    // =========================================================================

    #[test]
    fn test_attributes_inside_open_tag() {
        let result = complete("<a ", 3);
        let labels = labels(&result);
        assert!(labels.contains(&"href"));
        assert!(labels.contains(&"class"));
    }

    #[test]
    fn test_attribute_insert_text_has_value_scaffold() {
        let result = complete("<a h", 4);
        let href = result.items.iter().find(|i| i.label == "href").unwrap();
        assert_eq!(href.insert_text, "href=\"\"");
        assert_eq!(href.cursor_move, 1);
    }

    #[test]
    fn test_attribute_completion_inside_binding() {
        let result = complete("<input [(ngMo", 13);
        let value = result.items.iter().find(|i| i.label == "value").unwrap();
        assert_eq!(value.insert_text, "value)]=\"\"");
        assert_eq!(value.cursor_move, 1);
    }

    #[test]
    fn test_attribute_completion_before_existing_assignment() {
        let result = complete(r#"<input ty="text">"#, 9);
        let ty = result.items.iter().find(|i| i.label == "type").unwrap();
        assert_eq!(ty.insert_text, "type");
        assert_eq!(ty.cursor_move, 0);
    }

    // =========================================================================
    // Value completions
    // =========================================================================

    #[test]
    fn test_values_inside_attribute_value() {
        let text = r#"<input type="">"#;
        let result = complete(text, 13);
        let labels = labels(&result);
        assert!(labels.contains(&"checkbox"));
        assert!(labels.contains(&"password"));
        assert!(result.items.iter().all(|i| i.kind == CompletionKind::Value));
    }

    #[test]
    fn test_no_values_for_free_form_attribute() {
        let text = r#"<a href="">"#;
        let result = complete(text, 9);
        assert!(result.items.is_empty());
    }
}
