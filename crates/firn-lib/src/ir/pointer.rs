//! Position-based handles that survive re-resolution of the same source.
//!
//! Ids are only meaningful within one [`SymbolTable`]. A pointer records the
//! symbol's source position instead and is restored by searching the table
//! produced by a later resolution.

use super::symbols::{BoundSymbol, SymbolTable};
use crate::source::SourcePosition;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolPointer {
    Class(SourcePosition),
    AnonymousFunction(SourcePosition),
}

fn stable(source: Option<SourcePosition>) -> Result<SourcePosition> {
    source
        .filter(SourcePosition::is_real)
        .ok_or(Error::UnstablePointer)
}

impl SymbolTable {
    pub fn create_pointer(&self, symbol: BoundSymbol) -> Result<SymbolPointer> {
        match symbol {
            BoundSymbol::Class(id) => stable(self.class(id).source).map(SymbolPointer::Class),
            BoundSymbol::AnonymousFunction(id) => {
                stable(self.function(id).source).map(SymbolPointer::AnonymousFunction)
            }
            BoundSymbol::ExtensionReceiver(_) => Err(Error::NotImplemented(
                "symbol pointers to extension receivers",
            )),
        }
    }

    pub fn restore_pointer(&self, pointer: &SymbolPointer) -> Option<BoundSymbol> {
        match pointer {
            SymbolPointer::Class(position) => self
                .classes()
                .find(|(_, class)| class.source.as_ref() == Some(position))
                .map(|(id, _)| BoundSymbol::Class(id)),
            SymbolPointer::AnonymousFunction(position) => self
                .functions()
                .find(|(_, f)| f.is_anonymous() && f.source.as_ref() == Some(position))
                .map(|(id, _)| BoundSymbol::AnonymousFunction(id)),
        }
    }
}
