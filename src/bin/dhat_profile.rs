//! DHAT heap profiler for heapdex.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use heapdex::ds::IndexedMinHeap;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Mixed push/pop/remove churn over `universe` distinct priorities.
fn churn_workload(heap: &mut IndexedMinHeap<u64>, operations: usize, universe: u64, seed: u64) {
    let mut rng = XorShift64::new(seed);

    for _ in 0..operations {
        let roll = rng.next_u64() % 10;
        let value = rng.next_u64() % universe;
        match roll {
            0..=4 => heap.push(value),
            5..=7 => {
                let _ = heap.pop();
            },
            _ => {
                let _ = heap.remove(&value);
            },
        }
    }
}

fn profile_unique_values() {
    println!("=== Profiling unique values ===");
    let size = 16_384u64;
    let operations = 100_000;

    let mut heap = IndexedMinHeap::from_vec((0..size).rev().collect());
    churn_workload(&mut heap, operations, size * 4, 42);

    println!("  Final size: {} ({} distinct)", heap.len(), heap.distinct_len());
}

fn profile_heavy_duplicates() {
    println!("=== Profiling heavy duplicates ===");
    let size = 16_384u64;
    let operations = 100_000;

    // 64 distinct values: position sets spill out of their inline storage
    let mut heap: IndexedMinHeap<u64> = (0..size).map(|i| i % 64).collect();
    churn_workload(&mut heap, operations, 64, 7);

    println!("  Final size: {} ({} distinct)", heap.len(), heap.distinct_len());
}

fn profile_clear_reuse() {
    println!("=== Profiling clear/reuse ===");
    let mut heap = IndexedMinHeap::with_capacity(4096);

    for round in 0..16u64 {
        for i in 0..4096u64 {
            heap.push(i ^ round);
        }
        heap.clear();
    }

    println!("  Final capacity: {}", heap.capacity());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("heapdex DHAT Heap Profiling");
    println!("===========================\n");

    profile_unique_values();
    profile_heavy_duplicates();
    profile_clear_reuse();

    println!("\n===========================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
