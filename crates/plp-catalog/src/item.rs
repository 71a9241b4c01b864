//! Item record as returned by the catalog query.

use plp_core::{coerce, DEFAULT_TITLE_LIMIT};
use serde::{Deserialize, Serialize};

/// A sellable catalog entry with its display and commerce fields.
///
/// Every field is optional on the wire; missing text renders as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Document name, used as the cart button element id.
    #[serde(default, deserialize_with = "coerce::text")]
    pub name: Option<String>,
    /// Page route, relative to the site root.
    #[serde(default, deserialize_with = "coerce::text")]
    pub route: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub web_item_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub item_name: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub item_code: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub item_group: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub website_image: Option<String>,
    /// Selling price, already formatted with currency.
    #[serde(default, deserialize_with = "coerce::text")]
    pub formatted_price: Option<String>,
    /// List price before discount, already formatted.
    #[serde(default, deserialize_with = "coerce::text")]
    pub formatted_mrp: Option<String>,
    /// Discount label, e.g. `10%`.
    #[serde(default, deserialize_with = "coerce::text")]
    pub discount: Option<String>,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub in_stock: bool,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub on_backorder: bool,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub has_variants: bool,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub wished: bool,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub in_cart: bool,
    /// Quantity already in the shopper's cart.
    #[serde(default, deserialize_with = "coerce::quantity")]
    pub qty: Option<f64>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl ListItem {
    /// Create an item with just a code, handy for building fixtures.
    pub fn new(item_code: impl Into<String>) -> Self {
        Self {
            item_code: Some(item_code.into()),
            ..Default::default()
        }
    }

    /// First non-empty of web item name, item name and item code.
    pub fn raw_title(&self) -> &str {
        non_empty(&self.web_item_name)
            .or_else(|| non_empty(&self.item_name))
            .or_else(|| non_empty(&self.item_code))
            .unwrap_or("")
    }

    /// Display title truncated to the default limit.
    pub fn title(&self) -> String {
        self.title_with_limit(DEFAULT_TITLE_LIMIT)
    }

    /// Display title, cut to `limit` characters plus `...` when longer.
    pub fn title_with_limit(&self, limit: usize) -> String {
        let title = self.raw_title();
        match title.char_indices().nth(limit) {
            Some((cut, _)) => format!("{}...", &title[..cut]),
            None => title.to_string(),
        }
    }

    /// Link target for the item page; `/#` when the item has no route.
    pub fn href(&self) -> String {
        format!("/{}", non_empty(&self.route).unwrap_or("#"))
    }

    /// Cart quantity, zero when the record carries none.
    pub fn quantity(&self) -> f64 {
        self.qty.unwrap_or(0.0)
    }

    /// Quantity as shown in the stepper input (`2`, not `2.0`).
    pub fn quantity_text(&self) -> String {
        let qty = self.quantity();
        if qty.fract() == 0.0 {
            format!("{:.0}", qty)
        } else {
            qty.to_string()
        }
    }

    pub fn item_code(&self) -> &str {
        self.item_code.as_deref().unwrap_or("")
    }

    pub fn item_group(&self) -> &str {
        self.item_group.as_deref().unwrap_or("")
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.website_image)
    }

    /// List price with the currency formatter's spacing removed.
    pub fn compact_mrp(&self) -> Option<String> {
        non_empty(&self.formatted_mrp).map(|mrp| mrp.replace(' ', ""))
    }

    /// Whether the wishlist toggle applies to this item.
    pub fn wishlist_eligible(&self, wishlist_enabled: bool) -> bool {
        !self.has_variants && wishlist_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_fallback_order() {
        let mut item = ListItem::new("CODE-1");
        assert_eq!(item.title(), "CODE-1");

        item.item_name = Some("Item Name".into());
        assert_eq!(item.title(), "Item Name");

        item.web_item_name = Some(String::new());
        assert_eq!(item.title(), "Item Name");

        item.web_item_name = Some("Web Name".into());
        assert_eq!(item.title(), "Web Name");

        assert_eq!(ListItem::default().title(), "");
    }

    #[test]
    fn test_title_truncation_boundary() {
        let exact = "a".repeat(200);
        let item = ListItem {
            item_name: Some(exact.clone()),
            ..Default::default()
        };
        assert_eq!(item.title(), exact);

        let long = "b".repeat(201);
        let item = ListItem {
            item_name: Some(long),
            ..Default::default()
        };
        let title = item.title();
        assert_eq!(title, format!("{}...", "b".repeat(200)));
    }

    #[test]
    fn test_title_truncation_counts_characters() {
        let item = ListItem {
            item_name: Some("é".repeat(5)),
            ..Default::default()
        };
        assert_eq!(item.title_with_limit(3), "ééé...");
    }

    #[test]
    fn test_href() {
        let mut item = ListItem::new("X");
        assert_eq!(item.href(), "/#");
        item.route = Some("shop/red-mug".into());
        assert_eq!(item.href(), "/shop/red-mug");
    }

    #[test]
    fn test_quantity_defaults_to_zero_without_mutation() {
        let item = ListItem::new("X");
        assert_eq!(item.quantity(), 0.0);
        assert_eq!(item.quantity_text(), "0");
        assert!(item.qty.is_none());

        let item = ListItem {
            qty: Some(1.5),
            ..Default::default()
        };
        assert_eq!(item.quantity_text(), "1.5");
    }

    #[test]
    fn test_compact_mrp() {
        let item = ListItem {
            formatted_mrp: Some("₹ 1,200.00".into()),
            ..Default::default()
        };
        assert_eq!(item.compact_mrp().as_deref(), Some("₹1,200.00"));
        assert_eq!(ListItem::default().compact_mrp(), None);
    }

    #[test]
    fn test_deserialize_backend_record() {
        let item: ListItem = serde_json::from_value(json!({
            "name": "WEB-ITM-0001",
            "item_code": "MUG-RED",
            "item_name": "Red Mug",
            "in_stock": 1,
            "on_backorder": 0,
            "has_variants": 0,
            "wished": null,
            "qty": 2,
            "discount": 10,
        }))
        .unwrap();

        assert!(item.in_stock);
        assert!(!item.wished);
        assert_eq!(item.quantity(), 2.0);
        assert_eq!(item.discount.as_deref(), Some("10"));
    }
}
