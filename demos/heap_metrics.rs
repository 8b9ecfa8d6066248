use heapdex::ds::IndexedMinHeap;
use heapdex::metrics::exporter::PrometheusTextExporter;
use heapdex::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};

fn main() {
    let mut heap = IndexedMinHeap::from_vec((0..64u32).rev().collect());
    heap.remove(&40);
    heap.pop();
    heap.contains(&7);

    let snapshot = heap.snapshot();
    println!("swaps: {}, sink steps: {}", snapshot.swaps, snapshot.sink_steps);

    let exporter = PrometheusTextExporter::new("heapdex", std::io::stdout());
    exporter.export(&snapshot);
}

// Run with: cargo run --example heap_metrics --features metrics
