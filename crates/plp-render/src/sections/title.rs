//! Title line with the cart action area.

use plp_catalog::ListItem;
use plp_core::StoreSettings;

use crate::markup::Element;
use crate::sections::render_primary_button;
use crate::translate::Translate;

/// Render the title line. The cart action area only exists when the shop
/// has the cart enabled.
pub fn render_title(
    item: &ListItem,
    title: &str,
    settings: &StoreSettings,
    t: &dyn Translate,
) -> Element {
    let heading = Element::new("div")
        .class("col-8")
        .style("margin-right: -15px;")
        .child(
            Element::new("a")
                .attr("href", item.href())
                .child(Element::new("div").class("product-title").text(title)),
        );

    let actions = settings.enabled.then(|| {
        Element::new("div")
            .class("col-4 cart-action-container")
            .class_if(item.in_cart, "d-flex")
            .child_opt(render_primary_button(item, settings, t))
    });

    Element::new("div")
        .style("display: flex; margin-left: -15px;")
        .child(heading)
        .child_opt(actions)
}
