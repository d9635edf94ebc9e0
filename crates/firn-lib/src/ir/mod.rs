//! Resolved front-end IR consumed by the checkers.
//!
//! The IR is produced elsewhere (name resolution, desugaring). Everything here
//! is plain data: declarations and expressions own their children, symbols
//! live in a [`SymbolTable`] and are referenced by id.

mod decl;
mod expr;
mod pointer;
mod symbols;
mod walk;


use firn_core::{SourceId, SourceMap};
use rowan::GreenNode;

pub use decl::{
    AnonymousInitializer, Class, Constructor, DeclRef, Declaration, Function, Property,
    PropertyAccessor, TypeAlias,
};
pub use expr::{
    AnonymousFunction, AnonymousObject, Block, Call, ErrorExpression, Expr, JumpError, JumpKind,
    Literal, Loop, LoopJump, LoopJumpTarget, NameReference, Return, ReturnTarget, ThisReference,
};
pub use pointer::SymbolPointer;
pub use symbols::{
    BoundSymbol, ClassId, ClassKind, ClassSymbol, EffectiveVisibility, FunctionId, FunctionKind,
    FunctionSymbol, Label, LoopId, LoopKind, LoopSymbol, SymbolTable,
};
pub use walk::{walk, Element, Walk};

/// One source file: its syntax tree and its resolved top-level declarations.
#[derive(Debug, Clone)]
pub struct ResolvedFile {
    pub source: SourceId,
    pub green: GreenNode,
    pub declarations: Vec<Declaration>,
}

/// Everything an analysis request needs.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub sources: SourceMap,
    pub files: Vec<ResolvedFile>,
    pub symbols: SymbolTable,
}

impl Program {
    pub fn file(&self, source: SourceId) -> Option<&ResolvedFile> {
        self.files.iter().find(|f| f.source == source)
    }
}
