use serde::Serialize;

use crate::source::SourcePosition;

/// Diagnostic kinds emitted by the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// A label nothing jumps to or refers to.
    RedundantLabel,
    /// A checker could not finish one analysis unit.
    CheckerFailure,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::RedundantLabel => Severity::Warning,
            Self::CheckerFailure => Severity::Error,
        }
    }

    /// Stable identifier used in machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RedundantLabel => "REDUNDANT_LABEL_WARNING",
            Self::CheckerFailure => "CHECKER_FAILURE",
        }
    }

    /// Message used when no detail is supplied.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::RedundantLabel => "redundant label",
            Self::CheckerFailure => "declaration checker failed",
        }
    }

    fn custom_message(&self, detail: &str) -> String {
        match self {
            Self::RedundantLabel => format!("redundant label `{detail}`"),
            Self::CheckerFailure => format!("declaration checker failed: {detail}"),
        }
    }

    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            Some(detail) => self.custom_message(detail),
            None => self.fallback_message().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Span shown to the user.
    pub(crate) position: SourcePosition,
    pub(crate) severity: Severity,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(
        kind: DiagnosticKind,
        position: SourcePosition,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            position,
            severity: kind.default_severity(),
            message: message.into(),
            hints: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, position: SourcePosition) -> Self {
        Self::new(kind, position, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    pub(crate) fn record(&self) -> DiagnosticRecord<'_> {
        DiagnosticRecord {
            code: self.kind.code(),
            severity: self.severity,
            source: self.position.source().as_u32(),
            start: self.position.range().start().into(),
            end: self.position.range().end().into(),
            synthetic: self.position.is_fake(),
            message: &self.message,
            hints: &self.hints,
        }
    }
}

/// Flat, serializable form of a [`DiagnosticMessage`].
#[derive(Debug, Serialize)]
pub(crate) struct DiagnosticRecord<'a> {
    code: &'static str,
    severity: Severity,
    source: u32,
    start: u32,
    end: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    synthetic: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "no_hints")]
    hints: &'a [String],
}

fn no_hints(hints: &&[String]) -> bool {
    hints.is_empty()
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} at {}: {}",
            self.severity,
            self.kind.code(),
            self.position,
            self.message
        )?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
