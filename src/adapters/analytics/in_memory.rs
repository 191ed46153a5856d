//! In-memory analytics capture for testing.
//!
//! Uses `.expect()` on the internal lock; this adapter is for tests and
//! local runs only.

use std::sync::Mutex;

use crate::ports::{AnalyticsEvent, AnalyticsTracker, TrackedEvent};

/// Records every tracked event for later assertions.
#[derive(Debug, Default)]
pub struct InMemoryAnalytics {
    events: Mutex<Vec<TrackedEvent>>,
}

impl InMemoryAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tracked events, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn tracked(&self) -> Vec<TrackedEvent> {
        self.events
            .lock()
            .expect("InMemoryAnalytics: events lock poisoned")
            .clone()
    }

    /// Just the event kinds, oldest first.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.tracked().into_iter().map(|t| t.event).collect()
    }
}

impl AnalyticsTracker for InMemoryAnalytics {
    fn track(&self, event: TrackedEvent) {
        self.events
            .lock()
            .expect("InMemoryAnalytics: events lock poisoned")
            .push(event);
    }
}
