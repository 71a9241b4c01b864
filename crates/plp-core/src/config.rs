//! Storefront settings and render configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coerce;

/// Storefront feature switches, as published by the shop settings document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Shopping cart feature on/off.
    #[serde(default, deserialize_with = "coerce::flag")]
    pub enabled: bool,
    /// Show the wishlist toggle on cards.
    #[serde(default, deserialize_with = "coerce::flag")]
    pub enable_wishlist: bool,
    /// Print availability text under the price.
    #[serde(default, deserialize_with = "coerce::flag")]
    pub show_stock_availability: bool,
    /// Offer the cart stepper for items that are out of stock.
    #[serde(default, deserialize_with = "coerce::flag")]
    pub allow_items_not_in_stock: bool,
}

impl StoreSettings {
    /// Settings with the cart feature switched on.
    pub fn with_cart() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Whether a simple (non-variant) item may show the cart stepper.
    pub fn can_purchase(&self, in_stock: bool) -> bool {
        self.enabled && (self.allow_items_not_in_stock || in_stock)
    }
}

/// The view the shopper picked for the product listing.
///
/// Only the list view shows the rendered rows; any other preference keeps the
/// rows in the page but hidden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewPreference {
    #[default]
    ListView,
    GridView,
    Other(String),
}

impl ViewPreference {
    pub fn as_str(&self) -> &str {
        match self {
            Self::ListView => "List View",
            Self::GridView => "Grid View",
            Self::Other(s) => s,
        }
    }

    /// Whether rows rendered for this preference should be visible.
    pub fn is_list_view(&self) -> bool {
        matches!(self, Self::ListView)
    }
}

impl FromStr for ViewPreference {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "List View" => Self::ListView,
            "Grid View" => Self::GridView,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for ViewPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ViewPreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ViewPreference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}

/// Render tuning knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Maximum title length in characters before truncation.
    #[serde(default = "default_title_limit")]
    pub title_limit: usize,
    /// Number of characters in the no-image placeholder.
    #[serde(default = "default_abbr_length")]
    pub abbr_length: usize,
}

/// Titles longer than this are cut and suffixed with `...`.
pub const DEFAULT_TITLE_LIMIT: usize = 200;

/// Placeholder abbreviations use this many initials.
pub const DEFAULT_ABBR_LENGTH: usize = 2;

fn default_title_limit() -> usize {
    DEFAULT_TITLE_LIMIT
}

fn default_abbr_length() -> usize {
    DEFAULT_ABBR_LENGTH
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title_limit: DEFAULT_TITLE_LIMIT,
            abbr_length: DEFAULT_ABBR_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_from_backend_ints() {
        let settings: StoreSettings = serde_json::from_value(json!({
            "enabled": 1,
            "enable_wishlist": 0,
            "show_stock_availability": 1,
        }))
        .unwrap();

        assert!(settings.enabled);
        assert!(!settings.enable_wishlist);
        assert!(settings.show_stock_availability);
        assert!(!settings.allow_items_not_in_stock);
    }

    #[test]
    fn test_settings_from_toml() {
        let settings: StoreSettings =
            toml::from_str("enabled = true\nallow_items_not_in_stock = true\n").unwrap();
        assert!(settings.enabled);
        assert!(settings.allow_items_not_in_stock);
    }

    #[test]
    fn test_can_purchase() {
        let mut settings = StoreSettings::with_cart();
        assert!(settings.can_purchase(true));
        assert!(!settings.can_purchase(false));

        settings.allow_items_not_in_stock = true;
        assert!(settings.can_purchase(false));

        settings.enabled = false;
        assert!(!settings.can_purchase(true));
    }

    #[test]
    fn test_view_preference_parse() {
        assert_eq!("List View".parse::<ViewPreference>().unwrap(), ViewPreference::ListView);
        assert_eq!("Grid View".parse::<ViewPreference>().unwrap(), ViewPreference::GridView);
        let other: ViewPreference = "Gallery".parse().unwrap();
        assert_eq!(other.as_str(), "Gallery");
        assert!(!other.is_list_view());
    }

    #[test]
    fn test_view_preference_serde() {
        let pref: ViewPreference = serde_json::from_value(json!("Grid View")).unwrap();
        assert_eq!(pref, ViewPreference::GridView);
        assert_eq!(serde_json::to_value(&ViewPreference::ListView).unwrap(), json!("List View"));
    }

    #[test]
    fn test_render_config_defaults() {
        let config: RenderConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config.title_limit, 200);
        assert_eq!(config.abbr_length, 2);
    }
}
