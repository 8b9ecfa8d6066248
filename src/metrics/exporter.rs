use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::HeapMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for heap metrics snapshots.
///
/// Writes the Prometheus text exposition format so output can be scraped
/// or forwarded to a collector.
///
/// # Example
///
/// ```
/// use heapdex::metrics::exporter::PrometheusTextExporter;
/// use heapdex::metrics::snapshot::HeapMetricsSnapshot;
/// use heapdex::metrics::traits::MetricsExporter;
///
/// let exporter = PrometheusTextExporter::new("jobs", Vec::new());
/// exporter.export(&HeapMetricsSnapshot { push_calls: 3, ..Default::default() });
///
/// let text = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(text.contains("jobs_push_calls_total 3"));
/// ```
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: usize) {
        self.write_metric("gauge", suffix, value as u64);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<HeapMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &HeapMetricsSnapshot) {
        self.write_counter("push_calls_total", snapshot.push_calls);
        self.write_counter("pop_calls_total", snapshot.pop_calls);
        self.write_counter("pop_found_total", snapshot.pop_found);
        self.write_counter("peek_calls_total", snapshot.peek_calls);
        self.write_counter("peek_found_total", snapshot.peek_found);
        self.write_counter("remove_calls_total", snapshot.remove_calls);
        self.write_counter("remove_found_total", snapshot.remove_found);
        self.write_counter("remove_at_calls_total", snapshot.remove_at_calls);
        self.write_counter("contains_calls_total", snapshot.contains_calls);
        self.write_counter("contains_found_total", snapshot.contains_found);
        self.write_counter("swaps_total", snapshot.swaps);
        self.write_counter("swim_steps_total", snapshot.swim_steps);
        self.write_counter("sink_steps_total", snapshot.sink_steps);
        self.write_counter("heapify_builds_total", snapshot.heapify_builds);
        self.write_counter("clear_calls_total", snapshot.clear_calls);
        self.write_gauge("heap_len", snapshot.heap_len);
        self.write_gauge("distinct_values", snapshot.distinct_values);
        self.write_gauge("capacity", snapshot.capacity);
    }
}
