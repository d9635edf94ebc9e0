//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use firn_core::SourceMap;
use rowan::TextRange;

use super::collection::Diagnostics;
use super::message::Severity;

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    sources: Option<&'s SourceMap>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            sources: None,
            colored: false,
        }
    }

    /// Render source excerpts. Without sources, each diagnostic is one plain line.
    pub fn sources(mut self, sources: &'s SourceMap) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(sources) = self.sources else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            let position = diag.position();
            if !sources.contains(position.source()) {
                if i > 0 {
                    w.write_char('\n')?;
                }
                write!(w, "{}", diag)?;
                continue;
            }

            let content = sources.content(position.source());
            let range = adjust_range(position.range(), content.len());

            let mut snippet = Snippet::source(content).line_start(1).annotation(
                AnnotationKind::Primary
                    .span(range)
                    .label(diag.message()),
            );
            if let Some(path) = sources.path(position.source()) {
                snippet = snippet.path(path);
            }

            let mut group = severity_to_level(diag.severity())
                .primary_title(diag.message())
                .element(snippet);
            for hint in diag.hints() {
                group = group.element(Level::HELP.message(hint.as_str()));
            }

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&[group]))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
