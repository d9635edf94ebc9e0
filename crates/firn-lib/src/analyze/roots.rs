//! Which declarations own an analysis pass.

use crate::ir::{DeclRef, EffectiveVisibility, SymbolTable};

/// Whether `decl` is analyzed as a unit of its own.
///
/// Local declarations and anonymous functions are analyzed as part of the
/// unit that contains them, never separately. Generated declarations (default
/// accessors, default constructors) have nothing the user wrote and are
/// skipped too. An initializer whose class is missing from `symbols` is not
/// a unit.
pub fn is_analysis_root(decl: DeclRef<'_>, symbols: &SymbolTable) -> bool {
    let Some(source) = decl.source() else {
        return false;
    };
    if source.is_fake() {
        return false;
    }
    if decl.is_callable() && decl.visibility(symbols) == Some(EffectiveVisibility::Local) {
        return false;
    }

    match decl {
        DeclRef::AnonymousFunction(_) => false,
        DeclRef::Function(_)
        | DeclRef::Property(_)
        | DeclRef::Accessor(_)
        | DeclRef::Constructor(_) => true,
        DeclRef::Initializer(init) => {
            symbols.get_class(init.containing_class).is_some_and(|class| {
                class.is_regular()
                    && class
                        .visibility
                        .is_some_and(|v| v != EffectiveVisibility::Local)
            })
        }
        DeclRef::Class(_) | DeclRef::TypeAlias(_) | DeclRef::AnonymousObject(_) => false,
    }
}
