//! Row sections for the product list view.
//!
//! A row is composed in a fixed order: image, then title with the cart
//! action, then the detail block (price, discount, stock).

mod actions;
mod details;
mod image;
mod title;

pub use actions::*;
pub use details::*;
pub use image::*;
pub use title::*;
