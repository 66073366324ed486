//! Latency measurement utilities.

use std::time::{Duration, Instant};

use hdrhistogram::Histogram;

/// Latency statistics.
#[derive(Debug, Clone)]
pub struct LatencyStats {
    /// Minimum latency.
    pub min: Duration,
    /// Maximum latency.
    pub max: Duration,
    /// Mean latency.
    pub mean: Duration,
    /// Median latency (p50).
    pub median: Duration,
    /// 99th percentile latency.
    pub p99: Duration,
    /// 99.9th percentile latency.
    pub p999: Duration,
    /// Sample count.
    pub count: u64,
}

/// Collects latency samples in nanoseconds into an HDR histogram.
pub struct LatencyCollector {
    histogram: Histogram<u64>,
}

impl LatencyCollector {
    /// Creates a collector with 3 significant digits of precision.
    #[must_use]
    pub fn new() -> Self {
        Self {
            histogram: Histogram::new(3).expect("3 significant digits is a valid precision"),
        }
    }

    /// Records a latency sample.
    ///
    /// The histogram grows to fit the sample; values beyond its largest
    /// trackable range are clamped.
    pub fn record(&mut self, latency: Duration) {
        let nanos = u64::try_from(latency.as_nanos()).unwrap_or(u64::MAX);
        if self.histogram.record(nanos).is_err() {
            self.histogram.saturating_record(nanos);
        }
    }

    /// Measures the latency of a function.
    pub fn measure<F, T>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        self.record(start.elapsed());
        result
    }

    /// Computes statistics from collected samples.
    #[must_use]
    pub fn stats(&self) -> Option<LatencyStats> {
        if self.histogram.is_empty() {
            return None;
        }
        let h = &self.histogram;
        Some(LatencyStats {
            min: Duration::from_nanos(h.min()),
            max: Duration::from_nanos(h.max()),
            mean: Duration::from_nanos(h.mean() as u64),
            median: Duration::from_nanos(h.value_at_quantile(0.5)),
            p99: Duration::from_nanos(h.value_at_quantile(0.99)),
            p999: Duration::from_nanos(h.value_at_quantile(0.999)),
            count: h.len(),
        })
    }

    /// Clears all samples.
    pub fn clear(&mut self) {
        self.histogram.reset();
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.histogram.len()
    }

    /// Returns true if no samples have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }
}

impl Default for LatencyCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_stats() {
        let mut collector = LatencyCollector::new();

        for i in 1..=100 {
            collector.record(Duration::from_nanos(i * 100));
        }

        let stats = collector.stats().unwrap();
        assert_eq!(stats.count, 100);
        assert_eq!(stats.min, Duration::from_nanos(100));
        assert!(stats.max >= Duration::from_nanos(10_000));
        assert!(stats.max <= Duration::from_nanos(10_010));
        assert!(stats.median <= stats.p99);
    }

    #[test]
    fn test_microsecond_and_millisecond_samples_keep_their_scale() {
        let mut collector = LatencyCollector::new();
        collector.record(Duration::from_micros(5));
        collector.record(Duration::from_millis(1));

        let stats = collector.stats().unwrap();
        assert_eq!(stats.count, 2);
        assert!(stats.min >= Duration::from_nanos(4_995));
        assert!(stats.min <= Duration::from_nanos(5_005));
        assert!(stats.max >= Duration::from_micros(999));
        assert!(stats.max <= Duration::from_micros(1_001));
        assert!(stats.p99 >= Duration::from_micros(999));
    }

    #[test]
    fn test_measure() {
        let mut collector = LatencyCollector::new();

        let result = collector.measure(|| 42);
        assert_eq!(result, 42);
        assert_eq!(collector.len(), 1);
        collector.clear();
        assert!(collector.is_empty());
        assert!(collector.stats().is_none());
    }
}
