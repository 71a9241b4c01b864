//! Catalog view models for the product list view.
//!
//! - **Item**: the per-card record the catalog query returns
//! - **Stock**: availability policy shown under the price
//! - **Facets**: item group / brand counts for the filter sidebar
//! - **Cart**: merging cart quantities into item records
//! - **Payload**: the whole response handed to the list renderer

pub mod cart;
pub mod facets;
pub mod item;
pub mod payload;
pub mod stock;

pub use cart::{CartLine, CartQuantities};
pub use facets::FacetCounts;
pub use item::ListItem;
pub use payload::ListPayload;
pub use stock::StockStatus;
