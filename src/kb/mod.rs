//! Static HTML knowledge base.
//!
//! Tag definitions, per-tag and global attributes, enumerated value sets and
//! the void-element list. All lookups are case-insensitive and infallible;
//! unknown names fall back to empty or global results so callers never have
//! to special-case them.

mod data;

use std::collections::HashMap;

/// An attribute definition. `value_set` names a key in the value-set table
/// when the attribute's values are drawn from a fixed list.
#[derive(Debug, Clone)]
pub struct AttributeDef {
    pub name: String,
    pub value_set: Option<String>,
}

/// A tag definition with its prose documentation and tag-specific attributes.
#[derive(Debug, Clone)]
pub struct TagDef {
    pub name: String,
    pub documentation: String,
    pub attributes: Vec<AttributeDef>,
}

/// The full static table of HTML tags, attributes and value sets.
pub struct KnowledgeBase {
    tags: Vec<TagDef>,
    index: HashMap<String, usize>,
    global_attributes: Vec<AttributeDef>,
    value_sets: HashMap<String, Vec<String>>,
}

impl KnowledgeBase {
    /// Build the standard HTML table.
    pub fn standard() -> Self {
        let tags = data::standard_tags();
        let index = tags
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.to_ascii_lowercase(), i))
            .collect();
        Self {
            tags,
            index,
            global_attributes: data::global_attributes(),
            value_sets: data::value_sets(),
        }
    }

    /// All known tags, in definition order.
    pub fn tags(&self) -> &[TagDef] {
        &self.tags
    }

    /// Look up a tag by name, case-insensitively.
    pub fn tag(&self, name: &str) -> Option<&TagDef> {
        let key = name.to_ascii_lowercase();
        self.index.get(&key).map(|&i| &self.tags[i])
    }

    /// Whether `name` is a void element (no end tag, closed by its own `>`).
    pub fn is_void_element(&self, name: &str) -> bool {
        data::VOID_ELEMENTS
            .iter()
            .any(|v| v.eq_ignore_ascii_case(name))
    }

    /// Attributes offered for `tag_name`: the tag-specific list followed by
    /// the global attributes. Unknown tags get the global list alone.
    pub fn attributes(&self, tag_name: &str) -> Vec<&AttributeDef> {
        let mut out: Vec<&AttributeDef> = match self.tag(tag_name) {
            Some(tag) => tag.attributes.iter().collect(),
            None => Vec::new(),
        };
        out.extend(self.global_attributes.iter());
        out
    }

    /// Look up a single attribute on `tag_name`, case-insensitively.
    pub fn attribute(&self, tag_name: &str, attribute_name: &str) -> Option<&AttributeDef> {
        self.attributes(tag_name)
            .into_iter()
            .find(|a| a.name.eq_ignore_ascii_case(attribute_name))
    }

    /// Enumerated values for the given attribute, or an empty slice when the
    /// attribute is unknown or takes free-form values.
    pub fn attribute_values(&self, tag_name: &str, attribute_name: &str) -> &[String] {
        let Some(attr) = self.attribute(tag_name, attribute_name) else {
            return &[];
        };
        let Some(key) = &attr.value_set else {
            return &[];
        };
        self.value_sets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct value sets, for diagnostics.
    pub fn value_set_count(&self) -> usize {
        self.value_sets.len()
    }

    /// Number of global attributes, for diagnostics.
    pub fn global_attribute_count(&self) -> usize {
        self.global_attributes.len()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::standard()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let kb = kb();
        assert!(kb.tag("div").is_some());
        assert!(kb.tag("DIV").is_some());
        assert!(kb.tag("Div").is_some());
        assert!(kb.tag("nosuchtag").is_none());
    }

    #[test]
    fn test_tag_documentation_present() {
        let kb = kb();
        let div = kb.tag("div").unwrap();
        assert!(div.documentation.contains("div element"));
    }

    #[test]
    fn test_void_elements() {
        let kb = kb();
        for name in ["br", "img", "input", "meta", "hr", "wbr"] {
            assert!(kb.is_void_element(name), "{name} should be void");
        }
        assert!(kb.is_void_element("BR"));
        assert!(!kb.is_void_element("div"));
        assert!(!kb.is_void_element("span"));
    }

    #[test]
    fn test_attributes_include_tag_specific_then_global() {
        let kb = kb();
        let attrs = kb.attributes("a");
        let names: Vec<&str> = attrs.iter().map(|a| a.name.as_str()).collect();
        let href = names.iter().position(|&n| n == "href").unwrap();
        let class = names.iter().position(|&n| n == "class").unwrap();
        assert!(href < class);
        assert!(names.contains(&"id"));
        assert!(names.contains(&"onclick"));
    }

    #[test]
    fn test_unknown_tag_gets_global_attributes_only() {
        let kb = kb();
        let attrs = kb.attributes("nosuchtag");
        let names: Vec<&str> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert!(names.contains(&"class"));
        assert!(!names.contains(&"href"));
    }

    #[test]
    fn test_attribute_values_for_enumerated_attribute() {
        let kb = kb();
        let values = kb.attribute_values("input", "type");
        assert!(values.iter().any(|v| v == "checkbox"));
        assert!(values.iter().any(|v| v == "password"));
    }

    #[test]
    fn test_attribute_values_for_global_attribute() {
        let kb = kb();
        let values = kb.attribute_values("div", "dir");
        assert_eq!(values, ["ltr", "rtl", "auto"]);
    }

    #[test]
    fn test_attribute_values_empty_for_free_form() {
        let kb = kb();
        assert!(kb.attribute_values("a", "href").is_empty());
        assert!(kb.attribute_values("div", "nosuchattr").is_empty());
        assert!(kb.attribute_values("nosuchtag", "nosuchattr").is_empty());
    }

    #[test]
    fn test_headings_and_form_controls_present() {
        let kb = kb();
        for name in ["h1", "h6", "form", "input", "select", "textarea", "table", "canvas"] {
            assert!(kb.tag(name).is_some(), "missing tag {name}");
        }
    }
}
