//! One contract over two tree representations.
//!
//! [`LightTree`] walks the immutable green tree and computes children (and
//! their absolute offsets) on demand. [`MaterializedTree`] walks rowan's red
//! tree, whose nodes already know their parent and offset. Checkers are written
//! once against [`SyntaxTreeView`] and dispatch on [`SourceTree`] a single time
//! at their entry point, so a traversal never mixes the two.

use firn_core::SourceId;
use rowan::{GreenNode, TextRange};

use super::kind::SyntaxKind;
use super::light::LightTree;
use super::materialized::MaterializedTree;
use crate::source::SourcePosition;

/// Which tree representation a checker runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreeBackend {
    /// Flyweight nodes computed from the green tree during traversal.
    #[default]
    Light,
    /// Red-tree nodes with parent pointers.
    Materialized,
}

pub trait SyntaxTreeView {
    type Node: Clone;

    /// File every position built from this tree belongs to.
    fn source_id(&self) -> SourceId;

    fn root(&self) -> Self::Node;

    fn kind(&self, node: &Self::Node) -> SyntaxKind;

    /// Absolute span of `node`, trivia attached to the node included.
    fn text_range(&self, node: &Self::Node) -> TextRange;

    /// Child nodes (not tokens) in source order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Text of the first direct child token of `kind`.
    fn token_text(&self, node: &Self::Node, kind: SyntaxKind) -> Option<String>;

    fn find_child_by_kind(&self, node: &Self::Node, kind: SyntaxKind) -> Option<Self::Node> {
        self.children(node)
            .into_iter()
            .find(|child| self.kind(child) == kind)
    }

    fn position(&self, node: &Self::Node) -> SourcePosition {
        SourcePosition::real(self.source_id(), self.text_range(node))
    }

    fn child_position(&self, parent: &SourcePosition, child: &Self::Node) -> SourcePosition {
        parent.child(self.text_range(child))
    }

    /// Node spanning exactly `position`'s range.
    ///
    /// Several nested nodes can share one span (a file holding a single
    /// function, a lambda wrapped in nothing else). The outermost declaration
    /// node wins, otherwise the outermost node. Returns `None` for positions
    /// from another file or spans that do not line up with a node boundary.
    fn node_at(&self, position: &SourcePosition) -> Option<Self::Node> {
        if position.source() != self.source_id() {
            return None;
        }
        let target = position.range();
        let mut node = self.root();
        let mut outermost = None;
        loop {
            if self.text_range(&node) == target {
                if self.kind(&node).is_declaration() {
                    return Some(node);
                }
                outermost.get_or_insert_with(|| node.clone());
            }
            match self
                .children(&node)
                .into_iter()
                .find(|child| self.text_range(child).contains_range(target))
            {
                Some(child) => node = child,
                None => return outermost,
            }
        }
    }
}

/// A syntax tree bound to the backend chosen for one pass.
#[derive(Debug)]
pub enum SourceTree {
    Light(LightTree),
    Materialized(MaterializedTree),
}

impl SourceTree {
    pub fn new(source: SourceId, green: GreenNode, backend: TreeBackend) -> Self {
        match backend {
            TreeBackend::Light => Self::Light(LightTree::new(source, green)),
            TreeBackend::Materialized => {
                Self::Materialized(MaterializedTree::new(source, green))
            }
        }
    }

    pub fn backend(&self) -> TreeBackend {
        match self {
            SourceTree::Light(_) => TreeBackend::Light,
            SourceTree::Materialized(_) => TreeBackend::Materialized,
        }
    }

    pub fn source_id(&self) -> SourceId {
        match self {
            SourceTree::Light(tree) => tree.source_id(),
            SourceTree::Materialized(tree) => tree.source_id(),
        }
    }
}
