//! Reports labels that nothing refers to.
//!
//! A unit's labels are collected from the syntax tree (the only place that
//! still knows where `name@` was written), then every `return@`, `break@`,
//! `continue@` and `this@` of the unit's IR removes the label it resolved to.
//! What is left is redundant.

use std::collections::HashSet;

use tracing::debug;

use super::checker::{CheckError, CheckerContext, DeclarationChecker};
use super::labels::{collect_declared, referenced_labels, UnusedLabels};
use super::roots::is_analysis_root;
use super::scope::nested_roots;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::ir::DeclRef;
use crate::source::SourcePosition;
use crate::syntax::{SourceTree, SyntaxTreeView};

#[derive(Debug, Clone, Copy, Default)]
pub struct RedundantLabelChecker;

impl RedundantLabelChecker {
    /// Labels of `unit` that no construct in it uses.
    pub fn unused_labels(
        &self,
        unit: DeclRef<'_>,
        tree: &SourceTree,
        ctx: &CheckerContext<'_>,
    ) -> Result<UnusedLabels, CheckError> {
        let Some(position) = unit.source() else {
            return Ok(UnusedLabels::new());
        };
        if !is_analysis_root(unit, ctx.symbols) {
            return Ok(UnusedLabels::new());
        }
        if position.source() != tree.source_id() {
            return Err(CheckError::ForeignSource(position));
        }

        let nested = nested_roots(unit, ctx.symbols);
        let mut unused = match tree {
            SourceTree::Light(tree) => declared_in(tree, position, &nested)?,
            SourceTree::Materialized(tree) => declared_in(tree, position, &nested)?,
        };

        for used in referenced_labels(unit, ctx.symbols)? {
            unused.shift_remove(&used);
        }
        Ok(unused)
    }
}

fn declared_in<T: SyntaxTreeView>(
    tree: &T,
    unit: SourcePosition,
    nested: &HashSet<SourcePosition>,
) -> Result<UnusedLabels, CheckError> {
    let root = tree
        .node_at(&unit)
        .ok_or(CheckError::MissingSyntax(unit))?;
    Ok(collect_declared(tree, &root, nested))
}

impl DeclarationChecker for RedundantLabelChecker {
    fn name(&self) -> &'static str {
        "redundant-label"
    }

    fn check(
        &self,
        unit: DeclRef<'_>,
        tree: &SourceTree,
        ctx: &CheckerContext<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), CheckError> {
        let unused = self.unused_labels(unit, tree, ctx)?;
        if !unused.is_empty() {
            debug!(unit = unit.kind_name(), count = unused.len(), "redundant labels");
        }
        for (position, name) in unused {
            diagnostics
                .report(DiagnosticKind::RedundantLabel, position)
                .message(name)
                .emit();
        }
        Ok(())
    }
}
