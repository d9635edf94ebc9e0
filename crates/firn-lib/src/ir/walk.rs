//! Pre-order traversal of the resolved IR.

use super::decl::{DeclRef, Declaration};
use super::expr::{Block, Expr};
use crate::source::SourcePosition;

/// A node of the IR: a declaration, a block, or any other expression.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
    Decl(DeclRef<'a>),
    Block(&'a Block),
    Expr(&'a Expr),
}

/// Returned by the visitor to control descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    SkipChildren,
}

impl<'a> Element<'a> {
    /// Normalizes declaration-like expressions to [`Element::Decl`].
    pub fn from_expr(expr: &'a Expr) -> Self {
        match expr {
            Expr::Block(b) => Element::Block(b),
            Expr::AnonymousFunction(f) => Element::Decl(DeclRef::AnonymousFunction(f)),
            Expr::AnonymousObject(o) => Element::Decl(DeclRef::AnonymousObject(o)),
            Expr::Declaration(d) => Element::Decl(d.as_decl_ref()),
            _ => Element::Expr(expr),
        }
    }

    pub fn source(self) -> Option<SourcePosition> {
        match self {
            Element::Decl(d) => d.source(),
            Element::Block(b) => b.source,
            Element::Expr(e) => e.source(),
        }
    }

    pub fn as_decl(self) -> Option<DeclRef<'a>> {
        match self {
            Element::Decl(d) => Some(d),
            _ => None,
        }
    }

    /// Direct children in source order.
    pub fn children(self) -> Vec<Element<'a>> {
        let mut out = Vec::new();
        match self {
            Element::Decl(decl) => push_decl_children(decl, &mut out),
            Element::Block(block) => {
                out.extend(block.statements.iter().map(Element::from_expr));
            }
            Element::Expr(expr) => match expr {
                Expr::Loop(l) => {
                    if let Some(cond) = &l.condition {
                        out.push(Element::from_expr(cond));
                    }
                    out.push(Element::Block(&l.body));
                }
                Expr::Return(r) => {
                    if let Some(value) = &r.value {
                        out.push(Element::from_expr(value));
                    }
                }
                Expr::Call(c) => {
                    out.push(Element::from_expr(&c.callee));
                    out.extend(c.arguments.iter().map(Element::from_expr));
                }
                Expr::Error(e) => out.extend(e.children.iter().map(Element::from_expr)),
                Expr::LoopJump(_) | Expr::This(_) | Expr::Literal(_) | Expr::Name(_) => {}
                // Normalized away by `from_expr`, but a caller may build these directly.
                Expr::Block(b) => return Element::Block(b).children(),
                Expr::AnonymousFunction(_) | Expr::AnonymousObject(_) | Expr::Declaration(_) => {
                    return Element::from_expr(expr).children();
                }
            },
        }
        out
    }
}

fn push_decl_children<'a>(decl: DeclRef<'a>, out: &mut Vec<Element<'a>>) {
    match decl {
        DeclRef::Function(f) => out.extend(f.body.as_ref().map(Element::Block)),
        DeclRef::Property(p) => {
            out.extend(p.initializer.as_ref().map(Element::from_expr));
            out.extend(p.getter.as_ref().map(|a| Element::Decl(DeclRef::Accessor(a))));
            out.extend(p.setter.as_ref().map(|a| Element::Decl(DeclRef::Accessor(a))));
        }
        DeclRef::Accessor(a) => out.extend(a.body.as_ref().map(Element::Block)),
        DeclRef::Constructor(c) => out.extend(c.body.as_ref().map(Element::Block)),
        DeclRef::Initializer(i) => out.push(Element::Block(&i.body)),
        DeclRef::Class(c) => push_members(&c.declarations, out),
        DeclRef::AnonymousObject(o) => push_members(&o.declarations, out),
        DeclRef::AnonymousFunction(f) => out.push(Element::Block(&f.body)),
        DeclRef::TypeAlias(_) => {}
    }
}

fn push_members<'a>(members: &'a [Declaration], out: &mut Vec<Element<'a>>) {
    out.extend(members.iter().map(|d| Element::Decl(d.as_decl_ref())));
}

/// Visits `root` and its descendants in pre-order.
///
/// Returning [`Walk::SkipChildren`] prunes the subtree below the element just
/// visited; siblings are still visited.
pub fn walk<'a>(root: Element<'a>, mut visit: impl FnMut(Element<'a>) -> Walk) {
    let mut stack = vec![root];
    while let Some(element) = stack.pop() {
        if visit(element) == Walk::SkipChildren {
            continue;
        }
        let children = element.children();
        stack.extend(children.into_iter().rev());
    }
}
