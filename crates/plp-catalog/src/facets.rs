//! Item group and brand counts for the filter sidebar.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::ListItem;

/// Count of listed items per item group and per brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    #[serde(default)]
    pub item_group_count: BTreeMap<String, u32>,
    #[serde(default)]
    pub brand_count: BTreeMap<String, u32>,
}

impl FacetCounts {
    /// Tally the listed items. Items without a group or brand are skipped
    /// for that facet.
    pub fn from_items(items: &[ListItem]) -> Self {
        let mut counts = Self::default();

        for item in items {
            if let Some(brand) = item.brand.as_deref().filter(|b| !b.is_empty()) {
                *counts.brand_count.entry(brand.to_string()).or_insert(0) += 1;
            }
            if let Some(group) = item.item_group.as_deref().filter(|g| !g.is_empty()) {
                *counts.item_group_count.entry(group.to_string()).or_insert(0) += 1;
            }
        }

        tracing::debug!(
            groups = counts.item_group_count.len(),
            brands = counts.brand_count.len(),
            "tallied facet counts"
        );

        counts
    }

    pub fn is_empty(&self) -> bool {
        self.item_group_count.is_empty() && self.brand_count.is_empty()
    }

    /// Every (name, count) pair, item groups first, then brands.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.item_group_count
            .iter()
            .chain(self.brand_count.iter())
            .map(|(k, v)| (k.as_str(), *v))
    }
}
