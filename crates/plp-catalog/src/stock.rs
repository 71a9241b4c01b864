//! Stock availability policy for list cards.

use plp_core::StoreSettings;

use crate::item::ListItem;

/// Availability text shown under the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    /// Purchasable but fulfilled later.
    OnOrder,
    /// Out of stock.
    Soon,
    /// In stock.
    Available,
}

impl StockStatus {
    /// Decide the availability line for an item.
    ///
    /// Nothing is shown unless the shop enables availability display, and
    /// never for variant templates. Backorder wins over the stock flag.
    pub fn for_item(item: &ListItem, settings: &StoreSettings) -> Option<Self> {
        if !settings.show_stock_availability || item.has_variants {
            return None;
        }

        if item.on_backorder {
            Some(Self::OnOrder)
        } else if !item.in_stock {
            Some(Self::Soon)
        } else {
            Some(Self::Available)
        }
    }

    /// Untranslated label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnOrder => "Available on Order",
            Self::Soon => "Available Soon",
            Self::Available => "Available",
        }
    }

    /// Inline style for the label; backorders use the primary colour.
    pub fn style(&self) -> Option<&'static str> {
        match self {
            Self::OnOrder => Some("color: var(--primary-color)"),
            _ => None,
        }
    }
}
