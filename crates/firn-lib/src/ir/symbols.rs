//! Resolved symbols: the side tables the IR refers to by id.
//!
//! Loops and anonymous functions keep their label here rather than on the IR
//! node, so a jump resolved to `LoopId(3)` and the loop itself agree on one
//! label without copying it around.

use firn_core::{Interner, Symbol};

use crate::source::SourcePosition;

macro_rules! symbol_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

symbol_id!(ClassId);
symbol_id!(FunctionId);
symbol_id!(LoopId);

/// A label attached to a loop or anonymous function by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label {
    pub name: Symbol,
    /// Span of `name@`. Fake for labels synthesized from a callee name.
    pub source: Option<SourcePosition>,
}

/// Visibility of a declaration after taking its containers into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectiveVisibility {
    Public,
    Protected,
    Internal,
    PrivateInClass,
    PrivateInFile,
    /// Declared inside a function body, initializer, or anonymous object.
    Local,
}

impl EffectiveVisibility {
    fn rank(self) -> u8 {
        match self {
            Self::Local => 0,
            Self::PrivateInClass => 1,
            Self::PrivateInFile => 2,
            Self::Protected | Self::Internal => 3,
            Self::Public => 4,
        }
    }

    /// The more restrictive of a declaration's own visibility and its container's.
    pub fn restrict(self, container: EffectiveVisibility) -> EffectiveVisibility {
        if container.rank() < self.rank() {
            container
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    /// `object Name { ... }`
    Object,
    /// `object { ... }` used as an expression.
    AnonymousObject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSymbol {
    pub name: Option<Symbol>,
    pub kind: ClassKind,
    /// `None` when resolution could not compute it.
    pub visibility: Option<EffectiveVisibility>,
    pub source: Option<SourcePosition>,
}

impl ClassSymbol {
    /// Named class or object declaration, as opposed to an anonymous object.
    pub fn is_regular(&self) -> bool {
        self.kind != ClassKind::AnonymousObject && self.name.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Named { name: Symbol },
    Anonymous { label: Option<Label>, is_lambda: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSymbol {
    pub kind: FunctionKind,
    pub source: Option<SourcePosition>,
    pub has_extension_receiver: bool,
}

impl FunctionSymbol {
    pub fn is_anonymous(&self) -> bool {
        matches!(self.kind, FunctionKind::Anonymous { .. })
    }

    pub fn label(&self) -> Option<&Label> {
        match &self.kind {
            FunctionKind::Anonymous { label, .. } => label.as_ref(),
            FunctionKind::Named { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    While,
    DoWhile,
    For,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopSymbol {
    pub kind: LoopKind,
    pub label: Option<Label>,
    pub source: Option<SourcePosition>,
}

/// What a `this` expression was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSymbol {
    Class(ClassId),
    /// Receiver of a lambda with receiver, addressed through its label.
    AnonymousFunction(FunctionId),
    /// Extension receiver of a named function.
    ExtensionReceiver(FunctionId),
}

/// All symbols of one analysis session.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    interner: Interner,
    classes: Vec<ClassSymbol>,
    functions: Vec<FunctionSymbol>,
    loops: Vec<LoopSymbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        self.interner.intern(name)
    }

    /// Text of `symbol`; `None` if it was interned elsewhere.
    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.interner.resolve(symbol)
    }

    pub fn add_class(&mut self, class: ClassSymbol) -> ClassId {
        self.classes.push(class);
        ClassId(self.classes.len() as u32 - 1)
    }

    pub fn add_function(&mut self, function: FunctionSymbol) -> FunctionId {
        self.functions.push(function);
        FunctionId(self.functions.len() as u32 - 1)
    }

    pub fn add_loop(&mut self, symbol: LoopSymbol) -> LoopId {
        self.loops.push(symbol);
        LoopId(self.loops.len() as u32 - 1)
    }

    /// # Panics
    /// Panics if `id` was not issued by this table.
    pub fn class(&self, id: ClassId) -> &ClassSymbol {
        &self.classes[id.index()]
    }

    pub fn class_mut(&mut self, id: ClassId) -> &mut ClassSymbol {
        &mut self.classes[id.index()]
    }

    pub fn function(&self, id: FunctionId) -> &FunctionSymbol {
        &self.functions[id.index()]
    }

    pub fn function_mut(&mut self, id: FunctionId) -> &mut FunctionSymbol {
        &mut self.functions[id.index()]
    }

    pub fn loop_symbol(&self, id: LoopId) -> &LoopSymbol {
        &self.loops[id.index()]
    }

    pub fn loop_symbol_mut(&mut self, id: LoopId) -> &mut LoopSymbol {
        &mut self.loops[id.index()]
    }

    // Ids inside the IR come from upstream; checkers look them up with these
    // so a dangling id fails one unit instead of the whole run.

    pub fn get_class(&self, id: ClassId) -> Option<&ClassSymbol> {
        self.classes.get(id.index())
    }

    pub fn get_function(&self, id: FunctionId) -> Option<&FunctionSymbol> {
        self.functions.get(id.index())
    }

    pub fn get_loop(&self, id: LoopId) -> Option<&LoopSymbol> {
        self.loops.get(id.index())
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassSymbol)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, c)| (ClassId(i as u32), c))
    }

    pub fn functions(&self) -> impl Iterator<Item = (FunctionId, &FunctionSymbol)> {
        self.functions
            .iter()
            .enumerate()
            .map(|(i, f)| (FunctionId(i as u32), f))
    }
}
