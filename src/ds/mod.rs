pub mod indexed_heap;
pub mod position_index;

#[cfg(any(test, debug_assertions))]
pub use indexed_heap::IndexedHeapSnapshot;
pub use indexed_heap::IndexedMinHeap;
pub use position_index::PositionIndex;
