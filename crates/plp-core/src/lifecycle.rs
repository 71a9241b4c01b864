//! Render pass lifecycle tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Phases of a single render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPhase {
    /// Options received, container not yet touched.
    Start,
    /// Container cleared (and hidden, when not in list view).
    Cleared,
    /// All rows appended to the container.
    RowsAppended(usize),
    /// Filter label updates collected.
    LabelsCollected(usize),
    /// Pass finished.
    Completion,
}

/// Timing context for a render pass.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: HashMap<String, Instant>,
}

impl TimingContext {
    /// Create a new timing context.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: HashMap::new(),
        }
    }

    /// Record a timing mark.
    pub fn mark(&mut self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// Get elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time between two marks, if both were recorded in order.
    pub fn between(&self, from: &str, to: &str) -> Option<Duration> {
        let from = self.marks.get(from)?;
        let to = self.marks.get(to)?;
        to.checked_duration_since(*from)
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer for render phases.
pub trait PhaseObserver {
    /// Called when a render phase is reached.
    fn on_phase(&mut self, phase: RenderPhase, elapsed: Duration);
}

/// Observer that ignores every phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PhaseObserver for NoopObserver {
    fn on_phase(&mut self, _phase: RenderPhase, _elapsed: Duration) {}
}

impl PhaseObserver for Vec<RenderPhase> {
    fn on_phase(&mut self, phase: RenderPhase, _elapsed: Duration) {
        self.push(phase);
    }
}
