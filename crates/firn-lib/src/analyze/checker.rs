//! The declaration-checker seam and the registry the driver runs.

use std::fmt;

use crate::config::AnalysisConfig;
use crate::diagnostics::Diagnostics;
use crate::ir::{DeclRef, SymbolTable};
use crate::source::SourcePosition;
use crate::syntax::SourceTree;

/// Why a checker could not finish one analysis unit.
///
/// Contained by the driver: the unit gets a `CHECKER_FAILURE` diagnostic and
/// the remaining units still run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// The unit's position does not line up with any node of the tree.
    #[error("no syntax node at {0}")]
    MissingSyntax(SourcePosition),

    /// The unit was declared in a different file than the tree being checked.
    #[error("declaration at {0} belongs to another file")]
    ForeignSource(SourcePosition),

    /// The IR refers to a symbol id the table never issued.
    #[error("no {kind} #{index} in the symbol table")]
    DanglingSymbol { kind: &'static str, index: usize },
}

/// Read-only state shared by every checker run of one file.
#[derive(Debug, Clone, Copy)]
pub struct CheckerContext<'a> {
    pub symbols: &'a SymbolTable,
}

pub trait DeclarationChecker: Send + Sync {
    /// Kebab-case name, as listed in `disabled-checkers`.
    fn name(&self) -> &'static str;

    /// Checks one analysis unit, pushing findings to `diagnostics`.
    fn check(
        &self,
        unit: DeclRef<'_>,
        tree: &SourceTree,
        ctx: &CheckerContext<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), CheckError>;
}

#[derive(Default)]
pub struct CheckerSet {
    checkers: Vec<Box<dyn DeclarationChecker>>,
}

impl CheckerSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The checkers this crate ships.
    pub fn builtin() -> Self {
        Self::new().with(super::RedundantLabelChecker)
    }

    pub fn with(mut self, checker: impl DeclarationChecker + 'static) -> Self {
        self.add(checker);
        self
    }

    pub fn add(&mut self, checker: impl DeclarationChecker + 'static) {
        self.checkers.push(Box::new(checker));
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checkers.iter().map(|c| c.name())
    }

    /// Checkers not disabled by `config`, in registration order.
    pub fn enabled<'a>(
        &'a self,
        config: &'a AnalysisConfig,
    ) -> impl Iterator<Item = &'a dyn DeclarationChecker> + 'a {
        self.checkers
            .iter()
            .map(|c| c.as_ref())
            .filter(|c| config.is_enabled(c.name()))
    }
}

impl fmt::Debug for CheckerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
