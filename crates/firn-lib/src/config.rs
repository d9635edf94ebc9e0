//! Analysis settings.
//!
//! Every field has a default, so an empty JSON object (or no configuration at
//! all) yields a working setup.

use serde::{Deserialize, Serialize};

use crate::syntax::TreeBackend;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Tree representation the checkers traverse.
    pub backend: TreeBackend,
    /// Analyze files on the rayon pool instead of the calling thread.
    pub parallel: bool,
    pub warnings_as_errors: bool,
    /// Checker names (see [`DeclarationChecker::name`](crate::DeclarationChecker::name)) to skip.
    pub disabled_checkers: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            backend: TreeBackend::default(),
            parallel: true,
            warnings_as_errors: false,
            disabled_checkers: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn with_backend(mut self, backend: TreeBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_warnings_as_errors(mut self, value: bool) -> Self {
        self.warnings_as_errors = value;
        self
    }

    pub fn with_disabled_checker(mut self, name: impl Into<String>) -> Self {
        self.disabled_checkers.push(name.into());
        self
    }

    pub fn is_enabled(&self, checker: &str) -> bool {
        !self.disabled_checkers.iter().any(|name| name == checker)
    }
}
