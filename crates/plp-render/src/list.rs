//! The product list renderer.

use plp_catalog::{FacetCounts, ListItem, ListPayload};
use plp_core::{
    NoopObserver, PhaseObserver, RenderConfig, RenderPhase, RenderResult, StoreSettings,
    TimingContext, ViewPreference,
};
use serde::Serialize;

use crate::container::{apply_labels, FilterLabels, LabelUpdate, ListContainer, HIDDEN_CLASS};
use crate::markup::{Element, Node};
use crate::sections::{render_details, render_image, render_title};
use crate::translate::{Identity, Translate};

/// Spacer emitted ahead of the first row.
const LEADING_SPACER: &str = "<br><br>";

/// Everything one list render needs.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub items: Vec<ListItem>,
    pub settings: StoreSettings,
    pub counts: FacetCounts,
    pub preference: ViewPreference,
}

impl ListOptions {
    pub fn new(items: Vec<ListItem>, settings: StoreSettings) -> Self {
        Self {
            items,
            settings,
            ..Default::default()
        }
    }

    pub fn with_counts(mut self, counts: FacetCounts) -> Self {
        self.counts = counts;
        self
    }

    pub fn with_preference(mut self, preference: ViewPreference) -> Self {
        self.preference = preference;
        self
    }

    /// Build options from a catalog payload, merging cart quantities and
    /// tallying counts when the payload carries none.
    pub fn from_payload(payload: &ListPayload) -> Self {
        Self {
            items: payload.items_with_cart(),
            settings: payload.settings.unwrap_or_default(),
            counts: payload.facet_counts(),
            preference: payload.preference.clone().unwrap_or_default(),
        }
    }
}

/// Outcome of a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedList {
    /// Rows appended to the container.
    pub rows: usize,
    /// Whether the container was hidden for a non-list preference.
    pub hidden: bool,
    /// Filter label texts for the caller to apply.
    pub labels: Vec<LabelUpdate>,
}

impl RenderedList {
    /// Apply the label updates to the page's filter labels.
    pub fn apply_labels(&self, labels: &mut impl FilterLabels) -> RenderResult<()> {
        apply_labels(&self.labels, labels)
    }
}

/// Renders catalog items as list rows.
#[derive(Debug, Clone, Default)]
pub struct ProductList<T = Identity> {
    translator: T,
    config: RenderConfig,
}

impl ProductList<Identity> {
    /// Renderer with untranslated labels and default limits.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Translate> ProductList<T> {
    /// Renderer using the given translator.
    pub fn with_translator(translator: T) -> Self {
        Self {
            translator,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Clear the container and fill it with one row per item.
    ///
    /// The container is hidden, but still filled, when the preference is not
    /// the list view, so switching views later needs no re-render.
    pub fn render(&self, options: &ListOptions, container: &mut impl ListContainer) -> RenderedList {
        self.render_observed(options, container, &mut NoopObserver)
    }

    /// Like [`render`](Self::render), reporting each phase to `observer`.
    pub fn render_observed(
        &self,
        options: &ListOptions,
        container: &mut impl ListContainer,
        observer: &mut impl PhaseObserver,
    ) -> RenderedList {
        let mut timing = TimingContext::new();
        observer.on_phase(RenderPhase::Start, timing.elapsed());

        let hidden = !options.preference.is_list_view();
        if hidden {
            container.add_class(HIDDEN_CLASS);
        }
        container.empty();
        timing.mark("cleared");
        observer.on_phase(RenderPhase::Cleared, timing.elapsed());

        let html = self.render_rows(&options.items, &options.settings);
        container.append(&html);
        timing.mark("rows_appended");
        observer.on_phase(RenderPhase::RowsAppended(options.items.len()), timing.elapsed());

        let labels = label_updates(&options.counts);
        observer.on_phase(RenderPhase::LabelsCollected(labels.len()), timing.elapsed());

        tracing::debug!(
            rows = options.items.len(),
            labels = labels.len(),
            hidden,
            preference = %options.preference,
            bytes = html.len(),
            rows_us = timing.between("cleared", "rows_appended").map(|d| d.as_micros() as u64),
            "rendered product list"
        );
        observer.on_phase(RenderPhase::Completion, timing.elapsed());

        RenderedList {
            rows: options.items.len(),
            hidden,
            labels,
        }
    }

    /// Markup for all rows, including the leading spacer.
    pub fn render_rows(&self, items: &[ListItem], settings: &StoreSettings) -> String {
        let mut html = String::from(LEADING_SPACER);
        for item in items {
            self.render_row(item, settings).write_to(&mut html);
        }
        html
    }

    /// One row: image column, then the body with title and details.
    pub fn render_row(&self, item: &ListItem, settings: &StoreSettings) -> Element {
        let title = item.title_with_limit(self.config.title_limit);
        let t: &dyn Translate = &self.translator;

        let body = Element::new("div")
            .class("col-10 text-left")
            .child(render_title(item, &title, settings, t))
            .children(render_details(item, settings, t));

        Element::new("div")
            .class("row list-row w-100 mb-4")
            .child(render_image(item, &title, settings, self.config.abbr_length))
            .child(Node::from(body))
    }
}

/// Label texts for every item group, then every brand.
pub fn label_updates(counts: &FacetCounts) -> Vec<LabelUpdate> {
    counts
        .entries()
        .map(|(key, count)| LabelUpdate::new(key, count))
        .collect()
}

/// Render with default settings into `container`.
pub fn render_list(options: &ListOptions, container: &mut impl ListContainer) -> RenderedList {
    ProductList::new().render(options, container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ProductsSection;

    fn options() -> ListOptions {
        ListOptions::new(
            vec![ListItem::new("MUG"), ListItem::new("LAMP")],
            StoreSettings::with_cart(),
        )
    }

    #[test]
    fn test_rows_in_input_order() {
        let mut section = ProductsSection::new();
        let rendered = render_list(&options(), &mut section);

        assert_eq!(rendered.rows, 2);
        assert!(section.html().starts_with("<br><br>"));
        assert_eq!(section.html().matches("row list-row w-100 mb-4").count(), 2);
        let mug = section.html().find("Item Code : MUG").unwrap();
        let lamp = section.html().find("Item Code : LAMP").unwrap();
        assert!(mug < lamp);
    }

    #[test]
    fn test_hidden_for_grid_view() {
        let mut section = ProductsSection::new();
        let opts = options().with_preference(ViewPreference::GridView);
        let rendered = render_list(&opts, &mut section);

        assert!(rendered.hidden);
        assert!(section.is_hidden());
        assert_eq!(section.html().matches("list-row").count(), 2);
    }

    #[test]
    fn test_phases_reported_in_order() {
        let mut section = ProductsSection::new();
        let mut phases: Vec<RenderPhase> = Vec::new();
        ProductList::new().render_observed(&options(), &mut section, &mut phases);

        assert_eq!(
            phases,
            vec![
                RenderPhase::Start,
                RenderPhase::Cleared,
                RenderPhase::RowsAppended(2),
                RenderPhase::LabelsCollected(0),
                RenderPhase::Completion,
            ]
        );
    }

    #[test]
    fn test_custom_title_limit() {
        let item = ListItem {
            item_name: Some("Ceramic Mug".into()),
            ..ListItem::new("MUG")
        };
        let renderer = ProductList::new().with_config(RenderConfig {
            title_limit: 7,
            ..Default::default()
        });
        let html = renderer.render_row(&item, &StoreSettings::default()).render();
        assert!(html.contains(r#"<div class="product-title">Ceramic...</div>"#));
    }

    #[test]
    fn test_label_updates_order() {
        let mut counts = FacetCounts::default();
        counts.brand_count.insert("Acme".into(), 1);
        counts.item_group_count.insert("Tools".into(), 4);

        let updates = label_updates(&counts);
        assert_eq!(updates[0], LabelUpdate::new("Tools", 4));
        assert_eq!(updates[1], LabelUpdate::new("Acme", 1));
    }
}
