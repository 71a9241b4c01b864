//! HTML rendering for the product list view.
//!
//! This crate turns catalog items into list rows:
//! - `Element` / `Node` - Escaping markup builder
//! - `Translate` - Translation lookup for user-facing strings
//! - `ProductsSection` - Container the rows are written into
//! - `FilterLabels` - Sink for filter sidebar count labels
//! - `ProductList` - The renderer itself

mod abbr;
mod container;
mod list;
mod markup;
mod translate;

pub mod sections;

pub use abbr::*;
pub use container::*;
pub use list::*;
pub use markup::*;
pub use translate::*;
