//! Analytics sink that writes every event to the log.

use crate::ports::{AnalyticsTracker, TrackedEvent};

/// Emits each tracked event as a structured `info` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsTracker for TracingAnalytics {
    fn track(&self, event: TrackedEvent) {
        tracing::info!(
            target: "analytics",
            visit_id = %event.visit_id,
            event = event.event.name(),
            occurred_at = %event.occurred_at.as_datetime(),
            "Tracked user action"
        );
    }
}
