//! Sinks that receive diagnostics from concurrently analyzed files.

use std::sync::Mutex;

use super::collection::Diagnostics;

/// Receives the diagnostics of one file at a time, possibly from several
/// worker threads at once.
pub trait DiagnosticReporter: Send + Sync {
    fn report(&self, diagnostics: Diagnostics);
}

impl DiagnosticReporter for Mutex<Diagnostics> {
    fn report(&self, diagnostics: Diagnostics) {
        // A panicking reporter thread leaves the collected data intact.
        let mut guard = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.extend(diagnostics);
    }
}

/// Reporter that keeps everything in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    inner: Mutex<Diagnostics>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far, sorted.
    pub fn snapshot(&self) -> Diagnostics {
        let mut diagnostics = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        diagnostics.sort();
        diagnostics
    }

    /// All collected diagnostics, sorted. Files finish in any order, so the
    /// arrival order is not meaningful.
    pub fn into_diagnostics(self) -> Diagnostics {
        let mut diagnostics = self
            .inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        diagnostics.sort();
        diagnostics
    }
}

impl DiagnosticReporter for CollectingReporter {
    fn report(&self, diagnostics: Diagnostics) {
        self.inner.report(diagnostics);
    }
}
