//! Translation pass metrics.
//!
//! Each `Localizer` owns one `PassMetrics`. Counters accumulate over the
//! lifetime of the localizer and can be summarized with [`PassMetrics::report`].

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters updated by every translation pass.
#[derive(Debug, Default)]
pub struct PassMetrics {
    /// Passes that ran over the document
    passes_completed: AtomicUsize,

    /// Passes that returned early on an unmet precondition
    passes_skipped: AtomicUsize,

    /// Elements that received a translation
    elements_applied: AtomicUsize,

    /// Elements whose key had no entry for the resolved language
    missing_keys: AtomicUsize,

    /// Elements whose entry was an incomplete attribute assignment
    malformed_entries: AtomicUsize,
}

/// Point-in-time summary of [`PassMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub passes_completed: usize,
    pub passes_skipped: usize,
    pub elements_applied: usize,
    pub missing_keys: usize,
    pub malformed_entries: usize,
    /// Percentage of visited elements that received a translation.
    pub coverage_rate: f64,
}

impl PassMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_completed(&self) {
        self.passes_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_skipped(&self) {
        self.passes_skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_applied(&self) {
        self.elements_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_malformed(&self) {
        self.malformed_entries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn passes_completed(&self) -> usize {
        self.passes_completed.load(Ordering::Relaxed)
    }

    pub fn passes_skipped(&self) -> usize {
        self.passes_skipped.load(Ordering::Relaxed)
    }

    pub fn elements_applied(&self) -> usize {
        self.elements_applied.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    pub fn malformed_entries(&self) -> usize {
        self.malformed_entries.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let applied = self.elements_applied();
        let missing = self.missing_keys();
        let malformed = self.malformed_entries();
        let visited = applied + missing + malformed;
        let coverage_rate = if visited > 0 {
            (applied as f64 / visited as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            passes_completed: self.passes_completed(),
            passes_skipped: self.passes_skipped(),
            elements_applied: applied,
            missing_keys: missing,
            malformed_entries: malformed,
            coverage_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.passes_completed.store(0, Ordering::Relaxed);
        self.passes_skipped.store(0, Ordering::Relaxed);
        self.elements_applied.store(0, Ordering::Relaxed);
        self.missing_keys.store(0, Ordering::Relaxed);
        self.malformed_entries.store(0, Ordering::Relaxed);
    }
}
