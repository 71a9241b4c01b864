//! Cart and wishlist controls.
//!
//! Only markup is produced here. Click handling is bound elsewhere through
//! the `data-item-code` attributes.

use plp_catalog::ListItem;
use plp_core::StoreSettings;

use crate::markup::{Element, Node};
use crate::translate::Translate;

/// CTA label for an item with nothing in the cart yet.
pub const ADD_TO_CART: &str = "Add to Cart";
/// CTA label once the item has a cart quantity.
pub const UPDATE_CART: &str = "Update Cart";
/// Link label for variant templates.
pub const EXPLORE: &str = "Explore";

/// Heart toggle reflecting the wished state.
pub fn wishlist_icon(item: &ListItem) -> Element {
    let icon_class = if item.wished { "wished" } else { "not-wished" };

    Element::new("div")
        .class("like-action-list")
        .class_if(item.wished, "like-action-wished")
        .attr("data-item-code", item.item_code())
        .child(
            Element::new("svg").class("icon sm").child(
                Element::new("use")
                    .class(icon_class)
                    .class("wish-icon")
                    .attr("href", "#icon-heart"),
            ),
        )
}

/// The purchase affordance beside the title.
///
/// Variant templates link to their page for selection. Simple items get a
/// quantity stepper when the cart accepts them. Otherwise nothing is shown.
pub fn render_primary_button(
    item: &ListItem,
    settings: &StoreSettings,
    t: &dyn Translate,
) -> Option<Node> {
    if item.has_variants {
        return Some(explore_link(item, t).into());
    }

    if settings.can_purchase(item.in_stock) {
        return Some(quantity_stepper(item, t).into());
    }

    None
}

fn explore_link(item: &ListItem, t: &dyn Translate) -> Element {
    Element::new("a").attr("href", item.href()).child(
        Element::new("div")
            .class("btn btn-sm btn-explore-variants btn mb-0 mt-0")
            .text(t.translate(EXPLORE)),
    )
}

/// CTA label for the current cart quantity.
pub fn cart_button_label(item: &ListItem) -> &'static str {
    if item.quantity() > 0.0 {
        UPDATE_CART
    } else {
        ADD_TO_CART
    }
}

fn stepper_button(side: &str, dir: &str, sign: &str) -> Element {
    Element::new("span")
        .class(side)
        .class("d-sm-inline-block")
        .child(
            Element::new("button")
                .class("btn cart-btn")
                .attr("data-dir", dir)
                .text(sign),
        )
}

fn quantity_stepper(item: &ListItem, t: &dyn Translate) -> Element {
    let code = item.item_code();

    let input = Element::void("input")
        .class("form-control text-center cart-qty")
        .attr("value", item.quantity_text())
        .attr("data-item-code", code)
        .style("max-width: 70px;");

    let cta = Element::new("span")
        .class("btn btn-primary input-group-append d-sm-inline-block btn-add-to-cart-list go-to-cart")
        .attr_opt("id", item.name.as_deref().filter(|n| !n.is_empty()))
        .attr("data-item-code", code)
        .style("padding-top: 5px; margin-top: 10px; margin-left: 20px;")
        .text(t.translate(cart_button_label(item)));

    Element::new("div").child(
        Element::new("div")
            .class("input-group number-spinner mt-1 mb-4")
            .child(stepper_button("input-group-prepend", "dwn", "-"))
            .child(input)
            .child(stepper_button("input-group-append", "up", "+"))
            .child(cta),
    )
}
