//! Syntax kinds and the two tree backends checkers run on.

mod kind;
mod light;
mod materialized;
mod view;


pub use kind::{FirnLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use light::{LightNode, LightTree};
pub use materialized::MaterializedTree;
pub use view::{SourceTree, SyntaxTreeView, TreeBackend};
