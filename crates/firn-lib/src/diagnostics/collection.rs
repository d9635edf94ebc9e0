//! Diagnostics collection for accumulating analysis messages.

use super::message::{DiagnosticKind, DiagnosticMessage, Severity};
use crate::source::SourcePosition;

/// Collection of diagnostic messages from one or more analysis units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<DiagnosticMessage>);

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a diagnostic with the given kind and position.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind, position: SourcePosition) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, position),
        }
    }

    pub fn push(&mut self, msg: DiagnosticMessage) {
        self.0.push(msg);
    }

    pub fn extend(&mut self, iter: impl IntoIterator<Item = DiagnosticMessage>) {
        self.0.extend(iter);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[DiagnosticMessage] {
        &self.0
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.0.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.0.iter().filter(|d| d.is_warning()).count()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.0.iter().filter(|d| d.kind == kind).count()
    }

    /// Orders by file, then span, then kind. Stable for equal keys.
    pub fn sort(&mut self) {
        self.0.sort_by_key(|d| (d.position.sort_key(), d.kind));
    }

    /// Promotes every warning to an error.
    pub fn escalate_warnings(&mut self) {
        for diag in &mut self.0 {
            if diag.severity == Severity::Warning {
                diag.severity = Severity::Error;
            }
        }
    }

    /// Pretty-printed JSON array, one object per diagnostic.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let records: Vec<_> = self.0.iter().map(DiagnosticMessage::record).collect();
        serde_json::to_string_pretty(&records)
    }
}

impl DiagnosticBuilder<'_> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.message.severity = severity;
        self
    }

    pub fn emit(self) {
        self.diagnostics.0.push(self.message);
    }
}

impl IntoIterator for Diagnostics {
    type Item = DiagnosticMessage;
    type IntoIter = std::vec::IntoIter<DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<DiagnosticMessage> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = DiagnosticMessage>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
