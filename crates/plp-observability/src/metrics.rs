//! Per-render summary metrics.

use std::time::Duration;

use plp_core::RenderId;
use serde::{Deserialize, Serialize};

/// Summary of one render pass, as written to CLI reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderMetrics {
    pub render_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub rows: usize,
    pub labels: usize,
    /// Size of the rendered markup in bytes.
    pub bytes: usize,
    pub hidden: bool,
    pub duration_us: u64,
}

impl RenderMetrics {
    pub fn new(render_id: &RenderId) -> Self {
        Self {
            render_id: render_id.to_string(),
            source: None,
            rows: 0,
            labels: 0,
            bytes: 0,
            hidden: false,
            duration_us: 0,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn record_duration(&mut self, duration: Duration) {
        self.duration_us = duration.as_micros() as u64;
    }

    /// Emit the summary as a tracing event.
    pub fn trace(&self) {
        tracing::info!(
            render_id = %self.render_id,
            source = self.source.as_deref().unwrap_or("-"),
            rows = self.rows,
            labels = self.labels,
            bytes = self.bytes,
            hidden = self.hidden,
            duration_us = self.duration_us,
            "render complete"
        );
    }
}

/// Totals across several renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub renders: usize,
    pub rows: usize,
    pub bytes: usize,
    pub duration_us: u64,
}

impl MetricsSummary {
    pub fn from_metrics<'a>(metrics: impl IntoIterator<Item = &'a RenderMetrics>) -> Self {
        metrics.into_iter().fold(Self::default(), |mut acc, m| {
            acc.renders += 1;
            acc.rows += m.rows;
            acc.bytes += m.bytes;
            acc.duration_us += m.duration_us;
            acc
        })
    }
}
