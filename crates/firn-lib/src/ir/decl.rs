//! Declarations of the resolved IR.

use firn_core::Symbol;

use super::expr::{AnonymousFunction, AnonymousObject, Block, Expr};
use super::symbols::{ClassId, EffectiveVisibility, FunctionId, SymbolTable};
use crate::source::SourcePosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function(Function),
    Property(Property),
    Constructor(Constructor),
    Initializer(AnonymousInitializer),
    Class(Class),
    TypeAlias(TypeAlias),
}

impl Declaration {
    pub fn as_decl_ref(&self) -> DeclRef<'_> {
        match self {
            Declaration::Function(d) => DeclRef::Function(d),
            Declaration::Property(d) => DeclRef::Property(d),
            Declaration::Constructor(d) => DeclRef::Constructor(d),
            Declaration::Initializer(d) => DeclRef::Initializer(d),
            Declaration::Class(d) => DeclRef::Class(d),
            Declaration::TypeAlias(d) => DeclRef::TypeAlias(d),
        }
    }

    pub fn source(&self) -> Option<SourcePosition> {
        self.as_decl_ref().source()
    }
}

/// Named function (member, top-level, or local).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub id: FunctionId,
    pub source: Option<SourcePosition>,
    pub visibility: Option<EffectiveVisibility>,
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: Symbol,
    pub source: Option<SourcePosition>,
    pub visibility: Option<EffectiveVisibility>,
    pub initializer: Option<Expr>,
    pub getter: Option<PropertyAccessor>,
    pub setter: Option<PropertyAccessor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyAccessor {
    pub id: FunctionId,
    pub source: Option<SourcePosition>,
    pub is_getter: bool,
    pub visibility: Option<EffectiveVisibility>,
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub id: FunctionId,
    pub source: Option<SourcePosition>,
    pub class: ClassId,
    pub is_primary: bool,
    pub visibility: Option<EffectiveVisibility>,
    pub body: Option<Block>,
}

/// `init { ... }` block of a class or object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymousInitializer {
    pub source: Option<SourcePosition>,
    pub containing_class: ClassId,
    pub body: Block,
}

/// Named class or object declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub id: ClassId,
    pub source: Option<SourcePosition>,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: Symbol,
    pub source: Option<SourcePosition>,
}

/// Borrowed view of anything that can be handed to a declaration checker.
///
/// Anonymous functions and anonymous objects live in expression position in
/// the IR but are declarations all the same.
#[derive(Debug, Clone, Copy)]
pub enum DeclRef<'a> {
    Function(&'a Function),
    Property(&'a Property),
    Accessor(&'a PropertyAccessor),
    Constructor(&'a Constructor),
    Initializer(&'a AnonymousInitializer),
    Class(&'a Class),
    TypeAlias(&'a TypeAlias),
    AnonymousFunction(&'a AnonymousFunction),
    AnonymousObject(&'a AnonymousObject),
}

impl<'a> DeclRef<'a> {
    pub fn source(self) -> Option<SourcePosition> {
        match self {
            DeclRef::Function(d) => d.source,
            DeclRef::Property(d) => d.source,
            DeclRef::Accessor(d) => d.source,
            DeclRef::Constructor(d) => d.source,
            DeclRef::Initializer(d) => d.source,
            DeclRef::Class(d) => d.source,
            DeclRef::TypeAlias(d) => d.source,
            DeclRef::AnonymousFunction(d) => d.source,
            DeclRef::AnonymousObject(d) => d.source,
        }
    }

    /// Functions, properties, accessors, constructors, and anonymous functions.
    pub fn is_callable(self) -> bool {
        matches!(
            self,
            DeclRef::Function(_)
                | DeclRef::Property(_)
                | DeclRef::Accessor(_)
                | DeclRef::Constructor(_)
                | DeclRef::AnonymousFunction(_)
        )
    }

    /// Effective visibility for callables. `None` for other kinds and for
    /// callables whose visibility was not resolved.
    pub fn visibility(self, symbols: &SymbolTable) -> Option<EffectiveVisibility> {
        match self {
            DeclRef::Function(d) => d.visibility,
            DeclRef::Property(d) => d.visibility,
            DeclRef::Accessor(d) => d.visibility,
            DeclRef::Constructor(d) => d.visibility,
            DeclRef::AnonymousFunction(d) => {
                debug_assert!(symbols.get_function(d.id).is_none_or(|f| f.is_anonymous()));
                Some(EffectiveVisibility::Local)
            }
            DeclRef::Initializer(_)
            | DeclRef::Class(_)
            | DeclRef::TypeAlias(_)
            | DeclRef::AnonymousObject(_) => None,
        }
    }

    pub fn kind_name(self) -> &'static str {
        match self {
            DeclRef::Function(_) => "function",
            DeclRef::Property(_) => "property",
            DeclRef::Accessor(_) => "accessor",
            DeclRef::Constructor(_) => "constructor",
            DeclRef::Initializer(_) => "initializer",
            DeclRef::Class(_) => "class",
            DeclRef::TypeAlias(_) => "typealias",
            DeclRef::AnonymousFunction(_) => "anonymous function",
            DeclRef::AnonymousObject(_) => "anonymous object",
        }
    }
}
