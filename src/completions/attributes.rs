//! Attribute name completions.

use crate::insert::synthesize;
use crate::kb::KnowledgeBase;
use crate::types::{CompletionItem, CompletionKind};

/// Attribute items for `element`, with insert text shaped by the delimiter
/// scans. The insertion suffix is the same for every item, so it is
/// synthesized once.
pub(super) fn attribute_completions(
    kb: &KnowledgeBase,
    element: &str,
    open: &str,
    close: &str,
) -> Vec<CompletionItem> {
    let insertion = synthesize(open, close);

    kb.attributes(element)
        .into_iter()
        .map(|a| {
            CompletionItem::new(a.name.clone(), CompletionKind::Attribute)
                .with_insert_text(format!("{}{}", a.name, insertion.name_close))
                .with_cursor_move(insertion.cursor_move)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_attribute_item() {
        let kb = KnowledgeBase::standard();
        let items = attribute_completions(&kb, "a", "", "");
        let href = items.iter().find(|i| i.label == "href").unwrap();
        assert_eq!(href.insert_text, "href=\"\"");
        assert_eq!(href.cursor_move, 1);
        assert_eq!(href.kind, CompletionKind::Attribute);
    }

    #[test]
    fn test_binding_suffix_applied_to_every_item() {
        let kb = KnowledgeBase::standard();
        let items = attribute_completions(&kb, "input", "[(", "");
        assert!(items
            .iter()
            .all(|i| i.insert_text.ends_with(")]=\"\"") && i.cursor_move == 1));
    }

    #[test]
    fn test_existing_brackets_suppress_suffix() {
        let kb = KnowledgeBase::standard();
        let items = attribute_completions(&kb, "input", "[(", ")]");
        let value = items.iter().find(|i| i.label == "value").unwrap();
        assert_eq!(value.insert_text, "value");
        assert_eq!(value.cursor_move, -2);
    }

    #[test]
    fn test_unknown_element_still_gets_globals() {
        let kb = KnowledgeBase::standard();
        let items = attribute_completions(&kb, "nosuchtag", "", "");
        assert!(items.iter().any(|i| i.label == "class"));
    }
}
