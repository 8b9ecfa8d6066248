//! heapdex: an indexed binary min-heap.
//!
//! [`IndexedMinHeap`](ds::IndexedMinHeap) is a priority queue (smallest
//! element first) that also knows where every value lives. That makes
//! `contains` O(1) and removal of an arbitrary value O(log n), with full
//! support for duplicate values.
//!
//! ## Modules
//!
//! - [`ds`]: the heap and its [`PositionIndex`](ds::PositionIndex).
//! - [`error`]: [`ConfigError`](error::ConfigError) and
//!   [`InvariantError`](error::InvariantError).
//! - `metrics` (feature `metrics`): operation counters, snapshots and a
//!   Prometheus text exporter.
//!
//! ## Example
//!
//! ```
//! use heapdex::prelude::*;
//!
//! let mut pending = IndexedMinHeap::from_vec(vec![30, 10, 20]);
//! pending.push(5);
//!
//! // cancel a job that is not at the head
//! assert!(pending.remove(&20));
//!
//! assert_eq!(pending.pop(), Some(5));
//! assert_eq!(pending.pop(), Some(10));
//! assert_eq!(pending.pop(), Some(30));
//! assert!(pending.is_empty());
//! ```

pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
