//! Attribute value completions.

use crate::kb::KnowledgeBase;
use crate::types::{CompletionItem, CompletionKind};

/// Enumerated values for `attribute` on `element`; empty for free-form
/// attributes.
pub(super) fn attribute_values(
    kb: &KnowledgeBase,
    element: &str,
    attribute: &str,
) -> Vec<CompletionItem> {
    kb.attribute_values(element, attribute)
        .iter()
        .map(|v| CompletionItem::new(v.clone(), CompletionKind::Value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerated_values() {
        let kb = KnowledgeBase::standard();
        let items = attribute_values(&kb, "form", "method");
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["GET", "POST", "dialog"]);
        assert!(items.iter().all(|i| i.kind == CompletionKind::Value));
    }

    #[test]
    fn test_free_form_attribute_has_no_values() {
        let kb = KnowledgeBase::standard();
        assert!(attribute_values(&kb, "a", "href").is_empty());
    }
}
