//! firn: label analysis over a resolved front-end IR.
//!
//! The crate consumes an already-parsed syntax tree (a rowan green tree) and
//! an already-resolved declaration IR, then runs declaration checkers over
//! every analysis unit. The bundled checker reports labels that no
//! `return@`, `break@`, `continue@` or `this@` construct ever uses.
//!
//! # Example
//!
//! ```ignore
//! use firn_lib::{AnalysisConfig, Analyzer, CollectingReporter};
//!
//! let analyzer = Analyzer::new(AnalysisConfig::default());
//! let reporter = CollectingReporter::new();
//! let summary = analyzer.analyze(&program, &reporter)?;
//! eprintln!("{}", reporter.into_diagnostics().printer().sources(&program.sources).render());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod ir;
pub mod source;
pub mod syntax;


pub use analyze::{
    CheckError, CheckerContext, CheckerSet, DeclarationChecker, RedundantLabelChecker,
};
pub use config::AnalysisConfig;
pub use diagnostics::{
    CollectingReporter, DiagnosticKind, DiagnosticReporter, Diagnostics, DiagnosticsPrinter,
    Severity,
};
pub use driver::{AnalysisSummary, Analyzer, CancellationToken, UnitFailure};
pub use ir::{Program, ResolvedFile, SymbolTable};
pub use source::{FakeKind, PositionKind, SourcePosition};
pub use syntax::TreeBackend;

/// Errors that abort a whole analysis request.
///
/// Failures inside a single analysis unit are not errors at this level: the
/// driver turns them into diagnostics and keeps going (see [`CheckError`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The cancellation token fired between two analysis units.
    #[error("analysis cancelled")]
    Cancelled,

    /// The requested operation has no implementation yet.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Configuration could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A symbol pointer was requested for a symbol without a real source position.
    #[error("symbol has no stable source position")]
    UnstablePointer,
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
