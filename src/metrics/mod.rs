//! Opt-in operation counters for [`IndexedMinHeap`](crate::ds::IndexedMinHeap).
//!
//! Enabled with the `metrics` cargo feature. Counters are plain integers
//! bumped inline by the heap; nothing is recorded when the feature is off.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
