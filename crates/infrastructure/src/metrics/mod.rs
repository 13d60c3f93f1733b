//! Lookup metrics registry
//!
//! - `LookupMetrics`: lock-free counters and a latency summary, shared by the
//!   API middleware and the lookup pipeline
//! - `prometheus`: text exposition (format 0.0.4) of a metrics snapshot

pub mod lookup_metrics;
pub mod prometheus;

pub use lookup_metrics::{LookupMetrics, MetricsSnapshot};
