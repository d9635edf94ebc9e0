//! Expressions of the resolved IR.
//!
//! Jumps and `this` references carry the resolver's verdict: either the
//! target symbol or a [`JumpError`] recording which label was attempted.

use firn_core::Symbol;

use super::decl::Declaration;
use super::symbols::{BoundSymbol, ClassId, FunctionId, Label, LoopId};
use crate::source::SourcePosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Block(Block),
    AnonymousFunction(AnonymousFunction),
    AnonymousObject(AnonymousObject),
    Loop(Loop),
    Return(Return),
    LoopJump(LoopJump),
    This(ThisReference),
    Call(Call),
    /// Local declaration in statement position.
    Declaration(Box<Declaration>),
    Literal(Literal),
    Name(NameReference),
    Error(ErrorExpression),
}

impl Expr {
    pub fn source(&self) -> Option<SourcePosition> {
        match self {
            Expr::Block(e) => e.source,
            Expr::AnonymousFunction(e) => e.source,
            Expr::AnonymousObject(e) => e.source,
            Expr::Loop(e) => e.source,
            Expr::Return(e) => e.source,
            Expr::LoopJump(e) => e.source,
            Expr::This(e) => e.source,
            Expr::Call(e) => e.source,
            Expr::Declaration(d) => d.source(),
            Expr::Literal(e) => e.source,
            Expr::Name(e) => e.source,
            Expr::Error(e) => e.source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub source: Option<SourcePosition>,
    pub statements: Vec<Expr>,
}

/// Lambda literal or `fun () { ... }` expression. The label, if any, is on
/// the function's symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymousFunction {
    pub id: FunctionId,
    pub source: Option<SourcePosition>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymousObject {
    pub id: ClassId,
    pub source: Option<SourcePosition>,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    pub id: LoopId,
    pub source: Option<SourcePosition>,
    /// Condition of `while`/`do-while`, iterable of `for`.
    pub condition: Option<Box<Expr>>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return {
    pub source: Option<SourcePosition>,
    /// Written as `return@name`.
    pub is_labeled: bool,
    pub target: ReturnTarget,
    pub value: Option<Box<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnTarget {
    Function(FunctionId),
    Error(JumpError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpKind {
    Break,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopJump {
    pub source: Option<SourcePosition>,
    pub kind: JumpKind,
    /// Written as `break@name` / `continue@name`.
    pub is_labeled: bool,
    pub target: LoopJumpTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopJumpTarget {
    Loop(LoopId),
    Error(JumpError),
}

/// Why a jump failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpError {
    /// `return@l` where `l` labels something other than a function.
    NotAFunctionLabel { label: Label },
    /// `break@l`/`continue@l` where `l` labels something other than a loop.
    NotALoopLabel { label: Option<Label> },
    /// `break`/`continue` outside of any loop.
    JumpOutsideLoop { label: Option<Label> },
    /// No label of that name is in scope.
    UnresolvedLabel { name: Symbol },
}

/// `this` or `this@name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThisReference {
    pub source: Option<SourcePosition>,
    pub label_name: Option<Symbol>,
    /// `None` when resolution failed.
    pub bound: Option<BoundSymbol>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub source: Option<SourcePosition>,
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub source: Option<SourcePosition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameReference {
    pub source: Option<SourcePosition>,
    pub name: Symbol,
}

/// Expression the resolver gave up on. Children are still walked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorExpression {
    pub source: Option<SourcePosition>,
    pub children: Vec<Expr>,
}
