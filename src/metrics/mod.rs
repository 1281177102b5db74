//! Basic metrics instrumentation for validation traffic.
//!
//! Provides counters for validations performed and their outcomes. Only
//! outcomes are counted; candidate values are never retained.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for validation requests.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of candidates validated
    validations_total: Arc<AtomicU64>,

    /// Candidates that passed validation
    valid_total: Arc<AtomicU64>,

    /// Candidates that failed validation
    invalid_total: Arc<AtomicU64>,

    /// Candidates rejected because they were not strings
    non_string_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            validations_total: Arc::new(AtomicU64::new(0)),
            valid_total: Arc::new(AtomicU64::new(0)),
            invalid_total: Arc::new(AtomicU64::new(0)),
            non_string_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record the outcome of one validation.
    ///
    /// `is_string` is false when the candidate was rejected before any
    /// pattern matching because of its type.
    pub fn record_validation(&self, valid: bool, is_string: bool) {
        self.validations_total.fetch_add(1, Ordering::Relaxed);

        if valid {
            self.valid_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.invalid_total.fetch_add(1, Ordering::Relaxed);
        }

        if !is_string {
            self.non_string_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get total validations.
    pub fn validations_total(&self) -> u64 {
        self.validations_total.load(Ordering::Relaxed)
    }

    /// Get total valid outcomes.
    pub fn valid_total(&self) -> u64 {
        self.valid_total.load(Ordering::Relaxed)
    }

    /// Get total invalid outcomes.
    pub fn invalid_total(&self) -> u64 {
        self.invalid_total.load(Ordering::Relaxed)
    }

    /// Get total non-string candidates.
    pub fn non_string_total(&self) -> u64 {
        self.non_string_total.load(Ordering::Relaxed)
    }

    /// Fraction of validations that passed (0.0 to 1.0).
    pub fn valid_rate(&self) -> f64 {
        let total = self.validations_total();
        if total == 0 {
            0.0
        } else {
            self.valid_total() as f64 / total as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.validations_total.store(0, Ordering::Relaxed);
        self.valid_total.store(0, Ordering::Relaxed);
        self.invalid_total.store(0, Ordering::Relaxed);
        self.non_string_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            validations_total: self.validations_total(),
            valid_total: self.valid_total(),
            invalid_total: self.invalid_total(),
            non_string_total: self.non_string_total(),
            valid_rate: self.valid_rate(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub validations_total: u64,
    pub valid_total: u64,
    pub invalid_total: u64,
    pub non_string_total: u64,
    pub valid_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.validations_total(), 0);
        assert_eq!(metrics.valid_total(), 0);
        assert_eq!(metrics.invalid_total(), 0);
        assert_eq!(metrics.valid_rate(), 0.0);
    }

    #[test]
    fn test_record_validation() {
        let metrics = Metrics::new();
        metrics.record_validation(true, true);
        metrics.record_validation(false, true);
        metrics.record_validation(false, false);

        assert_eq!(metrics.validations_total(), 3);
        assert_eq!(metrics.valid_total(), 1);
        assert_eq!(metrics.invalid_total(), 2);
        assert_eq!(metrics.non_string_total(), 1);
    }

    #[test]
    fn test_valid_rate() {
        let metrics = Metrics::new();
        metrics.record_validation(true, true);
        metrics.record_validation(true, true);
        metrics.record_validation(true, true);
        metrics.record_validation(false, true);
        assert_eq!(metrics.valid_rate(), 0.75);
    }

    #[test]
    fn test_reset() {
        let metrics = Metrics::new();
        metrics.record_validation(true, true);
        metrics.record_validation(false, false);

        metrics.reset();

        assert_eq!(metrics.validations_total(), 0);
        assert_eq!(metrics.valid_total(), 0);
        assert_eq!(metrics.invalid_total(), 0);
        assert_eq!(metrics.non_string_total(), 0);
    }

    #[test]
    fn test_summary() {
        let metrics = Metrics::new();
        metrics.record_validation(true, true);
        metrics.record_validation(false, false);

        let summary = metrics.summary();
        assert_eq!(summary.validations_total, 2);
        assert_eq!(summary.valid_total, 1);
        assert_eq!(summary.invalid_total, 1);
        assert_eq!(summary.non_string_total, 1);
        assert_eq!(summary.valid_rate, 0.5);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["validations_total"], 2);
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = Metrics::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                metrics1.record_validation(true, true);
            }
        });

        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                metrics2.record_validation(false, true);
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.validations_total(), 200);
        assert_eq!(metrics.valid_total(), 100);
        assert_eq!(metrics.invalid_total(), 100);
    }
}
