//! Structured logging and render metrics for the product list view.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging tagged with a render ID
//! - `RenderMetrics` - Per-render summary for reports

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

// Re-export RenderId from plp-core for convenience
pub use plp_core::RenderId;
