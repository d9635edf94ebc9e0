//! Identifier interning.
//!
//! The resolver interns every label and declaration name once. Checkers then
//! compare [`Symbol`]s (a `this@name` against the label of the function it
//! resolved to) and only turn them back into text when reporting.

use indexmap::IndexSet;

/// Handle to a name in one [`Interner`]. Ordered by first interning.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Insertion-ordered set of names; a name's slot is its [`Symbol`].
#[derive(Debug, Clone, Default)]
pub struct Interner {
    names: IndexSet<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        let index = match self.names.get_index_of(name) {
            Some(index) => index,
            None => self.names.insert_full(name.into()).0,
        };
        Symbol(index as u32)
    }

    /// Text of `symbol`, or `None` if another interner issued it.
    pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
        self.names.get_index(symbol.index()).map(|name| &**name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
