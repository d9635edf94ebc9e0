//! Runs every enabled checker over every analysis unit of a program.
//!
//! Files are independent: each one gets its own tree view (built on the worker
//! that analyzes it) and its own diagnostics batch, which is sorted and handed
//! to the reporter once the file is done. Units within a file run in
//! declaration pre-order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::analyze::{analysis_units, CheckError, CheckerContext, CheckerSet, DeclarationChecker};
use crate::config::AnalysisConfig;
use crate::diagnostics::{DiagnosticKind, DiagnosticReporter, Diagnostics};
use crate::ir::{Program, ResolvedFile};
use crate::source::SourcePosition;
use crate::syntax::SourceTree;
use crate::{Error, Result};

/// Cooperative cancellation, checked before each analysis unit.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A checker that failed on one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    pub checker: &'static str,
    pub unit: SourcePosition,
    pub error: CheckError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub files: usize,
    pub units: usize,
    pub failures: Vec<UnitFailure>,
}

impl AnalysisSummary {
    fn merge(mut self, other: AnalysisSummary) -> Self {
        self.files += other.files;
        self.units += other.units;
        self.failures.extend(other.failures);
        self
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug)]
pub struct Analyzer {
    config: AnalysisConfig,
    checkers: CheckerSet,
    cancellation: CancellationToken,
}

impl Analyzer {
    /// Analyzer running the built-in checkers.
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            checkers: CheckerSet::builtin(),
            cancellation: CancellationToken::new(),
        }
    }

    /// Replaces the checker set, e.g. with [`CheckerSet::new`] plus custom checkers.
    pub fn with_checkers(mut self, checkers: CheckerSet) -> Self {
        self.checkers = checkers;
        self
    }

    pub fn with_checker(mut self, checker: impl DeclarationChecker + 'static) -> Self {
        self.checkers.add(checker);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn checkers(&self) -> &CheckerSet {
        &self.checkers
    }

    /// Analyzes every file of `program`.
    ///
    /// Returns [`Error::Cancelled`] if the token fired. Files completed before
    /// that have already been reported.
    pub fn analyze(
        &self,
        program: &Program,
        reporter: &dyn DiagnosticReporter,
    ) -> Result<AnalysisSummary> {
        debug!(
            files = program.files.len(),
            backend = ?self.config.backend,
            parallel = self.config.parallel,
            "analysis started"
        );

        let summary = if self.config.parallel {
            program
                .files
                .par_iter()
                .map(|file| self.analyze_file(program, file, reporter))
                .try_reduce(AnalysisSummary::default, |a, b| Ok(a.merge(b)))?
        } else {
            program
                .files
                .iter()
                .map(|file| self.analyze_file(program, file, reporter))
                .try_fold(AnalysisSummary::default(), |acc, file| {
                    file.map(|summary| acc.merge(summary))
                })?
        };

        debug!(
            units = summary.units,
            failures = summary.failures.len(),
            "analysis finished"
        );
        Ok(summary)
    }

    fn analyze_file(
        &self,
        program: &Program,
        file: &ResolvedFile,
        reporter: &dyn DiagnosticReporter,
    ) -> Result<AnalysisSummary> {
        let ctx = CheckerContext {
            symbols: &program.symbols,
        };
        let tree = SourceTree::new(file.source, file.green.clone(), self.config.backend);
        let units = analysis_units(&file.declarations, &program.symbols);
        debug!(source = file.source.as_u32(), units = units.len(), "analyzing file");

        let mut summary = AnalysisSummary {
            files: 1,
            units: units.len(),
            failures: Vec::new(),
        };
        let mut diagnostics = Diagnostics::new();

        for unit in units {
            if self.cancellation.is_cancelled() {
                return Err(Error::Cancelled);
            }
            // Units are roots, and roots always have a position.
            let Some(position) = unit.source() else {
                continue;
            };

            for checker in self.checkers.enabled(&self.config) {
                let Err(error) = checker.check(unit, &tree, &ctx, &mut diagnostics) else {
                    continue;
                };
                warn!(checker = checker.name(), %position, %error, "checker failed");
                diagnostics
                    .report(DiagnosticKind::CheckerFailure, position)
                    .message(format!("{}: {error}", checker.name()))
                    .emit();
                summary.failures.push(UnitFailure {
                    checker: checker.name(),
                    unit: position,
                    error,
                });
            }
        }

        diagnostics.sort();
        if self.config.warnings_as_errors {
            diagnostics.escalate_warnings();
        }
        reporter.report(diagnostics);
        Ok(summary)
    }
}
