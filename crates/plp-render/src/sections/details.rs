//! Detail block - code line, short description, price and availability.

use plp_catalog::{ListItem, StockStatus};
use plp_core::StoreSettings;

use crate::markup::{Element, Node};
use crate::translate::Translate;

/// Render the detail nodes under the title.
pub fn render_details(item: &ListItem, settings: &StoreSettings, t: &dyn Translate) -> Vec<Node> {
    let code_line = Element::new("p").class("product-code").text(format!(
        "{} | Item Code : {}",
        item.item_group(),
        item.item_code()
    ));

    let description = Element::new("div")
        .class("mt-2")
        .style("color: var(--gray-600) !important; font-size: 13px;")
        .text(item.short_description.clone().unwrap_or_default());

    let price = Element::new("div")
        .class("product-price")
        .text(item.formatted_price.clone().unwrap_or_default())
        .children(render_discount(item, t))
        .children(render_stock(item, settings, t));

    vec![code_line.into(), description.into(), price.into()]
}

/// Struck-through list price and discount label, when the item has a list price.
pub fn render_discount(item: &ListItem, t: &dyn Translate) -> Vec<Node> {
    let Some(mrp) = item.compact_mrp() else {
        return Vec::new();
    };

    let mut nodes: Vec<Node> = vec![Element::new("small")
        .class("striked-price")
        .child(Element::new("s").text(mrp))
        .into()];

    if let Some(discount) = item.discount.as_deref().filter(|d| !d.is_empty()) {
        nodes.push(
            Element::new("small")
                .class("ml-1 product-info-green")
                .text(format!("{} {}", discount, t.translate("OFF")))
                .into(),
        );
    }

    nodes
}

/// Availability line per the shop's stock display policy.
pub fn render_stock(item: &ListItem, settings: &StoreSettings, t: &dyn Translate) -> Vec<Node> {
    let Some(status) = StockStatus::for_item(item, settings) else {
        return Vec::new();
    };

    let label = Element::new("span")
        .class("out-of-stock mt-2")
        .attr_opt("style", status.style())
        .text(t.translate(status.label()));

    vec![Element::void("br").into(), label.into()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::render_nodes;
    use crate::translate::{Catalog, Identity};

    fn details(item: &ListItem, settings: &StoreSettings) -> String {
        render_nodes(&render_details(item, settings, &Identity))
    }

    fn showing_stock() -> StoreSettings {
        StoreSettings {
            show_stock_availability: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_code_line_and_price() {
        let item = ListItem {
            item_group: Some("Kitchen".into()),
            formatted_price: Some("$12.00".into()),
            short_description: Some("Ceramic".into()),
            ..ListItem::new("MUG")
        };
        let html = details(&item, &StoreSettings::default());

        assert!(html.contains(r#"<p class="product-code">Kitchen | Item Code : MUG</p>"#));
        assert!(html.contains(">Ceramic</div>"));
        assert!(html.contains(r#"<div class="product-price">$12.00</div>"#));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let html = details(&ListItem::default(), &StoreSettings::default());
        assert!(html.contains(r#"<p class="product-code"> | Item Code : </p>"#));
        assert!(html.contains(r#"<div class="product-price"></div>"#));
    }

    #[test]
    fn test_discount() {
        let item = ListItem {
            formatted_price: Some("$9.00".into()),
            formatted_mrp: Some("$ 12.00".into()),
            discount: Some("25%".into()),
            ..ListItem::new("MUG")
        };
        let html = details(&item, &StoreSettings::default());
        assert!(html.contains(r#"<small class="striked-price"><s>$12.00</s></small>"#));
        assert!(html.contains(r#"<small class="ml-1 product-info-green">25% OFF</small>"#));
    }

    #[test]
    fn test_mrp_without_discount_label() {
        let item = ListItem {
            formatted_mrp: Some("$12.00".into()),
            ..ListItem::new("MUG")
        };
        let html = render_nodes(&render_discount(&item, &Identity));
        assert!(html.contains("striked-price"));
        assert!(!html.contains("OFF"));
    }

    #[test]
    fn test_stock_lines() {
        let backorder = ListItem {
            on_backorder: true,
            ..ListItem::new("A")
        };
        let html = render_nodes(&render_stock(&backorder, &showing_stock(), &Identity));
        assert_eq!(
            html,
            r#"<br><span class="out-of-stock mt-2" style="color: var(--primary-color)">Available on Order</span>"#
        );

        let soon = ListItem::new("B");
        let html = render_nodes(&render_stock(&soon, &showing_stock(), &Identity));
        assert_eq!(html, r#"<br><span class="out-of-stock mt-2">Available Soon</span>"#);

        let stocked = ListItem {
            in_stock: true,
            ..ListItem::new("C")
        };
        let html = render_nodes(&render_stock(&stocked, &showing_stock(), &Identity));
        assert_eq!(html, r#"<br><span class="out-of-stock mt-2">Available</span>"#);
    }

    #[test]
    fn test_stock_hidden() {
        let item = ListItem {
            in_stock: true,
            ..ListItem::new("C")
        };
        assert!(render_stock(&item, &StoreSettings::default(), &Identity).is_empty());

        let variant = ListItem {
            has_variants: true,
            ..item
        };
        assert!(render_stock(&variant, &showing_stock(), &Identity).is_empty());
    }

    #[test]
    fn test_stock_translated() {
        let catalog = Catalog::new().with("Available Soon", "Bientôt");
        let html = render_nodes(&render_stock(&ListItem::new("B"), &showing_stock(), &catalog));
        assert!(html.contains(">Bientôt</span>"));
    }
}
