//! Finding analysis units in a resolved file.

use std::collections::HashSet;

use super::roots::is_analysis_root;
use crate::ir::{walk, DeclRef, Declaration, Element, SymbolTable, Walk};
use crate::source::SourcePosition;

/// Every analysis unit in `declarations`, in pre-order.
///
/// Units nest (a property and its explicit accessors are all units), so the
/// walk continues below a unit after recording it.
pub fn analysis_units<'a>(
    declarations: &'a [Declaration],
    symbols: &SymbolTable,
) -> Vec<DeclRef<'a>> {
    let mut units = Vec::new();
    for declaration in declarations {
        walk(Element::Decl(declaration.as_decl_ref()), |element| {
            if let Some(decl) = element.as_decl()
                && is_analysis_root(decl, symbols)
            {
                units.push(decl);
            }
            Walk::Continue
        });
    }
    units
}

/// Positions of the outermost units nested strictly inside `unit`.
///
/// Label collection for `unit` stops at these; their labels belong to the
/// nested unit's own pass.
pub fn nested_roots(unit: DeclRef<'_>, symbols: &SymbolTable) -> HashSet<SourcePosition> {
    let mut roots = HashSet::new();
    for child in Element::Decl(unit).children() {
        walk(child, |element| match element.as_decl() {
            Some(decl) if is_analysis_root(decl, symbols) => {
                roots.extend(decl.source());
                Walk::SkipChildren
            }
            _ => Walk::Continue,
        });
    }
    roots
}
