//! Tag name completions.

use crate::kb::KnowledgeBase;
use crate::types::{CompletionItem, CompletionKind};

/// Every known tag, with its documentation attached.
pub(super) fn all_tags(kb: &KnowledgeBase) -> Vec<CompletionItem> {
    kb.tags()
        .iter()
        .map(|t| {
            CompletionItem::new(t.name.clone(), CompletionKind::Tag)
                .with_documentation(t.documentation.clone())
        })
        .collect()
}

/// A closing-tag item for the still-open `name`, inserted as `/name>`.
pub(super) fn close_tag(name: &str) -> CompletionItem {
    CompletionItem::new(format!("/{name}"), CompletionKind::CloseTag)
        .with_insert_text(format!("/{name}>"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tags_carry_documentation() {
        let kb = KnowledgeBase::standard();
        let items = all_tags(&kb);
        assert!(items.len() > 100);
        assert!(items.iter().all(|i| i.documentation.is_some()));
    }

    #[test]
    fn test_close_tag_shape() {
        let item = close_tag("div");
        assert_eq!(item.label, "/div");
        assert_eq!(item.insert_text, "/div>");
        assert_eq!(item.kind, CompletionKind::CloseTag);
    }
}
