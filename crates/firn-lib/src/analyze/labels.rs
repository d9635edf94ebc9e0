//! Declared and referenced labels of one analysis unit.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::trace;

use super::checker::CheckError;
use crate::ir::{
    walk, BoundSymbol, DeclRef, Element, Expr, FunctionId, FunctionSymbol, JumpError,
    LoopJumpTarget, ReturnTarget, SymbolTable, Walk,
};
use crate::source::SourcePosition;
use crate::syntax::{SyntaxKind, SyntaxTreeView};

/// Labels not (yet) known to be used, keyed by the position of `name@`.
///
/// Only shrinks once collection is done.
pub type UnusedLabels = IndexMap<SourcePosition, String>;

/// Every label written inside `unit_root`, in source order.
///
/// Positions are derived top-down from the root's, one child at a time.
/// Descent stops at declaration nodes whose position is in `stop_at`. A
/// labeled expression without a label node contributes nothing.
pub fn collect_declared<T: SyntaxTreeView>(
    tree: &T,
    unit_root: &T::Node,
    stop_at: &HashSet<SourcePosition>,
) -> UnusedLabels {
    let mut labels = UnusedLabels::new();
    let mut stack = vec![(unit_root.clone(), tree.position(unit_root))];
    let mut is_root = true;

    while let Some((node, position)) = stack.pop() {
        let kind = tree.kind(&node);
        if !is_root && kind.is_declaration() && stop_at.contains(&position) {
            continue;
        }
        is_root = false;

        if kind == SyntaxKind::LabeledExpression
            && let Some((label, name)) = declared_label(tree, &node, &position)
        {
            trace!(position = %label, name = %name, "label declared");
            labels.insert(label, name);
        }

        let children = tree.children(&node);
        stack.extend(children.into_iter().rev().map(|child| {
            let child_position = tree.child_position(&position, &child);
            (child, child_position)
        }));
    }

    labels
}

fn declared_label<T: SyntaxTreeView>(
    tree: &T,
    labeled: &T::Node,
    labeled_position: &SourcePosition,
) -> Option<(SourcePosition, String)> {
    let qualifier = tree.find_child_by_kind(labeled, SyntaxKind::LabelQualifier)?;
    let label = tree.find_child_by_kind(&qualifier, SyntaxKind::Label)?;
    let name = tree.token_text(&label, SyntaxKind::Ident)?;
    let position = tree.child_position(&tree.child_position(labeled_position, &qualifier), &label);
    position.is_real().then_some((position, name))
}

/// Positions of labels some construct in `unit` resolves to.
///
/// Jumps the resolver rejected still name a label; those count as uses so
/// the user is not told to delete a label they are trying to reach.
pub fn referenced_labels(
    unit: DeclRef<'_>,
    symbols: &SymbolTable,
) -> Result<Vec<SourcePosition>, CheckError> {
    let mut used = Vec::new();
    let mut dangling = None;
    walk(Element::Decl(unit), |element| {
        if let Element::Expr(expr) = element {
            match label_used_by(expr, symbols) {
                Ok(label) => used.extend(label),
                Err(error) => {
                    dangling.get_or_insert(error);
                }
            }
        }
        Walk::Continue
    });
    dangling.map_or(Ok(used), Err)
}

fn function(symbols: &SymbolTable, id: FunctionId) -> Result<&FunctionSymbol, CheckError> {
    symbols.get_function(id).ok_or(CheckError::DanglingSymbol {
        kind: "function",
        index: id.index(),
    })
}

fn label_used_by(expr: &Expr, symbols: &SymbolTable) -> Result<Option<SourcePosition>, CheckError> {
    let label = match expr {
        Expr::Return(ret) if ret.is_labeled => match ret.target {
            ReturnTarget::Function(id) => function(symbols, id)?.label().copied(),
            ReturnTarget::Error(JumpError::NotAFunctionLabel { label }) => Some(label),
            ReturnTarget::Error(_) => None,
        },
        Expr::LoopJump(jump) if jump.is_labeled => match jump.target {
            LoopJumpTarget::Loop(id) => {
                symbols
                    .get_loop(id)
                    .ok_or(CheckError::DanglingSymbol {
                        kind: "loop",
                        index: id.index(),
                    })?
                    .label
            }
            LoopJumpTarget::Error(
                JumpError::JumpOutsideLoop { label } | JumpError::NotALoopLabel { label },
            ) => label,
            LoopJumpTarget::Error(_) => None,
        },
        Expr::This(this) => match (this.label_name, this.bound) {
            (Some(name), Some(BoundSymbol::AnonymousFunction(id))) => function(symbols, id)?
                .label()
                .filter(|label| label.name == name)
                .copied(),
            _ => None,
        },
        _ => None,
    };

    let Some(label) = label else {
        return Ok(None);
    };
    if let Some(position) = label.source {
        trace!(%position, name = ?symbols.name(label.name), "label used");
    }
    Ok(label.source)
}
