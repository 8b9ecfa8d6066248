#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeapMetricsSnapshot {
    pub push_calls: u64,

    pub pop_calls: u64,
    pub pop_found: u64,
    pub peek_calls: u64,
    pub peek_found: u64,

    pub remove_calls: u64,
    pub remove_found: u64,
    pub remove_at_calls: u64, // includes the ones issued by pop and remove

    pub contains_calls: u64,
    pub contains_found: u64,

    pub swaps: u64,
    pub swim_steps: u64,
    pub sink_steps: u64,
    pub heapify_builds: u64,
    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub heap_len: usize,
    pub distinct_values: usize,
    pub capacity: usize,
}
