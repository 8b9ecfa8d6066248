//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are separate traits so the heap only
//! depends on the recorders and monitoring code only depends on snapshots.
//!
//! ## Architecture
//!
//! ```text
//!   Recording (called by IndexedMinHeap)
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ HeapMetricsRecorder (&mut)   │    │ HeapMetricsReadRecorder (&)  │
//!   │ push/pop/remove/remove_at    │    │ peek/contains                │
//!   │ swap/sift steps/heapify      │    │                              │
//!   └──────────────┬───────────────┘    └──────────────┬───────────────┘
//!                  └─────────────┬──────────────────────┘
//!                                ▼
//!                         HeapMetrics (counters)
//!                                │
//!   Consumption                  ▼
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │───▶│ MetricsExporter<S>           │
//!   │ MetricsReset                 │    │ (Prometheus text, ...)       │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters for heap operations that take `&mut self`.
pub trait HeapMetricsRecorder {
    fn record_push(&mut self);
    fn record_pop_call(&mut self);
    fn record_pop_found(&mut self);
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_remove_at_call(&mut self);
    fn record_swap(&mut self);
    fn record_swim_step(&mut self);
    fn record_sink_step(&mut self);
    fn record_heapify(&mut self);
    fn record_clear(&mut self);
}

/// Counters for heap operations that only take `&self` (uses interior
/// mutability).
pub trait HeapMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
    fn record_contains_call(&self);
    fn record_contains_found(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
