use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{HeapMetricsReadRecorder, HeapMetricsRecorder};

#[derive(Debug, Default, Clone)]
pub struct HeapMetrics {
    pub push_calls: u64,
    pub pop_calls: u64,
    pub pop_found: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub remove_at_calls: u64,
    pub swaps: u64,
    pub swim_steps: u64,
    pub sink_steps: u64,
    pub heapify_builds: u64,
    pub clear_calls: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
    pub contains_calls: MetricsCell,
    pub contains_found: MetricsCell,
}

impl HeapMetrics {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl HeapMetricsRecorder for HeapMetrics {
    fn record_push(&mut self) {
        self.push_calls += 1;
    }

    fn record_pop_call(&mut self) {
        self.pop_calls += 1;
    }

    fn record_pop_found(&mut self) {
        self.pop_found += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }

    fn record_remove_at_call(&mut self) {
        self.remove_at_calls += 1;
    }

    fn record_swap(&mut self) {
        self.swaps += 1;
    }

    fn record_swim_step(&mut self) {
        self.swim_steps += 1;
    }

    fn record_sink_step(&mut self) {
        self.sink_steps += 1;
    }

    fn record_heapify(&mut self) {
        self.heapify_builds += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl HeapMetricsReadRecorder for &HeapMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }

    fn record_contains_call(&self) {
        self.contains_calls.incr();
    }

    fn record_contains_found(&self) {
        self.contains_found.incr();
    }
}
