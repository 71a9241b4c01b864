//! The product filter response handed to the list renderer.

use plp_core::{RenderResult, StoreSettings, ViewPreference};
use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartQuantities};
use crate::facets::FacetCounts;
use crate::item::ListItem;

/// Items, settings and facet counts for one listing page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPayload {
    #[serde(default)]
    pub items: Vec<ListItem>,
    /// Shop settings; absent when the caller supplies its own defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<StoreSettings>,
    #[serde(flatten)]
    pub counts: FacetCounts,
    /// Total matches for the query, which may exceed `items.len()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<ViewPreference>,
    /// Guest cart lines to merge into item quantities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cart: Vec<CartLine>,
}

impl ListPayload {
    /// Parse a payload from JSON text.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Facet counts as sent, or tallied from the items when none were sent.
    pub fn facet_counts(&self) -> FacetCounts {
        if self.counts.is_empty() {
            FacetCounts::from_items(&self.items)
        } else {
            self.counts.clone()
        }
    }

    /// Items with cart quantities merged in.
    pub fn items_with_cart(&self) -> Vec<ListItem> {
        if self.cart.is_empty() {
            return self.items.clone();
        }
        CartQuantities::from_lines(&self.cart).apply(&self.items)
    }
}
