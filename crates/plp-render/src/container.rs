//! Render targets: the products container and the filter label sink.

use std::collections::{BTreeSet, HashMap};

use plp_core::{RenderError, RenderResult};
use serde::Serialize;

/// Class that hides the container when the list view is not selected.
pub const HIDDEN_CLASS: &str = "hidden";

/// Element the list rows are written into.
pub trait ListContainer {
    /// Add a class to the container element.
    fn add_class(&mut self, class: &str);

    /// Remove all content.
    fn empty(&mut self);

    /// Append markup after the current content.
    fn append(&mut self, html: &str);
}

/// In-memory products wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductsSection {
    classes: BTreeSet<String>,
    html: String,
}

impl ProductsSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current inner markup.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_hidden(&self) -> bool {
        self.has_class(HIDDEN_CLASS)
    }

    /// Render the wrapper element with its content.
    pub fn outer_html(&self, id: &str) -> String {
        let classes: Vec<&str> = self.classes.iter().map(String::as_str).collect();
        format!(
            r#"<div id="{}" class="{}">{}</div>"#,
            crate::escape_attr(id),
            crate::escape_attr(&classes.join(" ")),
            self.html
        )
    }
}

impl ListContainer for ProductsSection {
    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn empty(&mut self) {
        self.html.clear();
    }

    fn append(&mut self, html: &str) {
        self.html.push_str(html);
    }
}

/// New text for one filter label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelUpdate {
    /// Facet value the label is bound to (its `for` attribute).
    pub key: String,
    pub count: u32,
    /// `"<key> (<count>)"`.
    pub text: String,
}

impl LabelUpdate {
    pub fn new(key: impl Into<String>, count: u32) -> Self {
        let key = key.into();
        let text = format!("{} ({})", key, count);
        Self { key, count, text }
    }
}

/// Filter sidebar labels addressed by facet value.
pub trait FilterLabels {
    /// Replace the count text of the label bound to `key`.
    ///
    /// Fails with [`RenderError::LabelNotFound`] when the page has no such label.
    fn set_label_text(&mut self, key: &str, text: &str) -> RenderResult<()>;
}

/// In-memory filter labels.
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    labels: HashMap<String, String>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a label; its text starts as the key itself.
    pub fn with_label(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.labels.insert(key.clone(), key);
        self
    }

    /// Labels for every key of the given names.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        keys.into_iter()
            .fold(Self::new(), |set, key| set.with_label(key))
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FilterLabels for LabelSet {
    fn set_label_text(&mut self, key: &str, text: &str) -> RenderResult<()> {
        match self.labels.get_mut(key) {
            Some(label) => {
                *label = text.to_string();
                Ok(())
            }
            None => Err(RenderError::LabelNotFound(key.to_string())),
        }
    }
}

/// Apply label updates in order, stopping at the first missing label.
pub fn apply_labels(updates: &[LabelUpdate], labels: &mut impl FilterLabels) -> RenderResult<()> {
    for update in updates {
        if let Err(e) = labels.set_label_text(&update.key, &update.text) {
            tracing::warn!(key = %update.key, "filter label missing");
            return Err(e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_append_and_empty() {
        let mut section = ProductsSection::new();
        section.append("<p>a</p>");
        section.append("<p>b</p>");
        assert_eq!(section.html(), "<p>a</p><p>b</p>");

        section.empty();
        assert_eq!(section.html(), "");
    }

    #[test]
    fn test_section_hidden_class() {
        let mut section = ProductsSection::new();
        assert!(!section.is_hidden());
        section.add_class(HIDDEN_CLASS);
        assert!(section.is_hidden());
        assert_eq!(section.outer_html("products"), r#"<div id="products" class="hidden"></div>"#);
    }

    #[test]
    fn test_label_update_text() {
        let update = LabelUpdate::new("Electronics", 3);
        assert_eq!(update.text, "Electronics (3)");
    }

    #[test]
    fn test_apply_labels() {
        let mut labels = LabelSet::from_keys(["Electronics", "Acme"]);
        let updates = vec![LabelUpdate::new("Electronics", 3), LabelUpdate::new("Acme", 1)];

        apply_labels(&updates, &mut labels).unwrap();

        assert_eq!(labels.text("Electronics"), Some("Electronics (3)"));
        assert_eq!(labels.text("Acme"), Some("Acme (1)"));
    }

    #[test]
    fn test_apply_labels_missing() {
        let mut labels = LabelSet::new().with_label("Electronics");
        let updates = vec![LabelUpdate::new("Garden", 2), LabelUpdate::new("Electronics", 3)];

        let err = apply_labels(&updates, &mut labels).unwrap_err();

        assert!(matches!(err, RenderError::LabelNotFound(ref k) if k == "Garden"));
        assert_eq!(labels.text("Electronics"), Some("Electronics"));
    }
}
