//! Analytics Adapters
//!
//! - **TracingAnalytics** - Logs every event through `tracing`
//! - **InMemoryAnalytics** - Captures events for assertions

mod in_memory;
mod tracing_analytics;

pub use in_memory::InMemoryAnalytics;
pub use tracing_analytics::TracingAnalytics;
