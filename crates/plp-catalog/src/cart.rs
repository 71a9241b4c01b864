//! Merging the shopper's cart quantities into item records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::item::ListItem;

/// One line of a cart quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_code: String,
    pub qty: f64,
}

impl CartLine {
    pub fn new(item_code: impl Into<String>, qty: f64) -> Self {
        Self {
            item_code: item_code.into(),
            qty,
        }
    }
}

/// Cart quantity per item code.
#[derive(Debug, Clone, Default)]
pub struct CartQuantities {
    by_code: HashMap<String, f64>,
}

impl CartQuantities {
    /// Index cart lines by item code. When a code appears on several lines
    /// the first line wins.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a CartLine>) -> Self {
        let mut by_code = HashMap::new();
        for line in lines {
            by_code.entry(line.item_code.clone()).or_insert(line.qty);
        }
        Self { by_code }
    }

    pub fn get(&self, item_code: &str) -> Option<f64> {
        self.by_code.get(item_code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Copies of `items` with `qty` taken from the cart where the item is in it.
    /// Items not in the cart keep whatever quantity they carried.
    pub fn apply(&self, items: &[ListItem]) -> Vec<ListItem> {
        items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if let Some(qty) = self.get(item.item_code()) {
                    item.qty = Some(qty);
                }
                item
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_wins() {
        let lines = vec![CartLine::new("MUG", 2.0), CartLine::new("MUG", 5.0)];
        let cart = CartQuantities::from_lines(&lines);
        assert_eq!(cart.get("MUG"), Some(2.0));
        assert_eq!(cart.get("PLATE"), None);
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let items = vec![ListItem::new("MUG"), ListItem::new("PLATE")];
        let cart = CartQuantities::from_lines(&[CartLine::new("MUG", 3.0)]);

        let merged = cart.apply(&items);

        assert_eq!(merged[0].qty, Some(3.0));
        assert_eq!(merged[1].qty, None);
        assert_eq!(items[0].qty, None);
    }
}
