//! Error types for heapdex.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned by fallible constructors and inserts when an
//!   argument is rejected (capacity hint too large to allocate, missing
//!   element).
//! - [`InvariantError`]: Returned by
//!   [`IndexedMinHeap::check_invariants`](crate::ds::IndexedMinHeap::check_invariants)
//!   when heap storage and the position index disagree.
//!
//! Empty-queue reads are not errors: [`peek`](crate::ds::IndexedMinHeap::peek)
//! and [`pop`](crate::ds::IndexedMinHeap::pop) return `None`.
//!
//! ## Example Usage
//!
//! ```
//! use heapdex::ds::IndexedMinHeap;
//! use heapdex::error::ConfigError;
//!
//! let heap: Result<IndexedMinHeap<u32>, ConfigError> = IndexedMinHeap::try_with_capacity(64);
//! assert!(heap.is_ok());
//!
//! // A hint no allocator could satisfy is rejected without panicking
//! let bad = IndexedMinHeap::<u64>::try_with_capacity(usize::MAX);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when a constructor or insert argument is invalid.
///
/// The queue is left untouched when this is returned.
///
/// # Example
///
/// ```
/// use heapdex::ds::IndexedMinHeap;
///
/// let mut heap: IndexedMinHeap<i32> = IndexedMinHeap::new();
/// let err = heap.push_opt(None).unwrap_err();
/// assert!(err.to_string().contains("element"));
/// assert!(heap.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error describing a broken heap or index invariant.
///
/// Carries the first violation found, e.g. a parent ordered after its child
/// or a position set that points at a slot holding a different value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_displays_message() {
        let err = ConfigError::new("capacity hint 9 exceeds allocatable size");
        assert_eq!(err.to_string(), "capacity hint 9 exceeds allocatable size");
        assert_eq!(err.message(), "capacity hint 9 exceeds allocatable size");
    }

    #[test]
    fn invariant_error_displays_message() {
        let err = InvariantError::new("slot 3 missing from index");
        assert_eq!(err.to_string(), "slot 3 missing from index");
        assert!(format!("{:?}", err).contains("slot 3"));
    }

    #[test]
    fn errors_compare_by_message() {
        assert_eq!(ConfigError::new("x"), ConfigError::new("x").clone());
        assert_ne!(InvariantError::new("a"), InvariantError::new("b"));
    }

    #[test]
    fn errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ConfigError>();
        assert_error::<InvariantError>();
    }
}
