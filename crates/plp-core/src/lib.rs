//! Core types for the product list view renderer.
//!
//! This crate provides the types shared by the catalog, render and CLI crates:
//! - `StoreSettings` - Storefront feature switches
//! - `ViewPreference` - List or grid view selection
//! - `RenderConfig` - Render tuning (title limit, abbreviation length)
//! - `RenderError` - Error type for render operations
//! - `TimingContext` - Render pass timing

mod config;
mod context;
mod error;
mod lifecycle;

pub mod coerce;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
