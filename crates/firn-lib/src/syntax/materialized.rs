//! View over rowan's red tree.

use firn_core::SourceId;
use rowan::{GreenNode, TextRange};

use super::kind::{SyntaxKind, SyntaxNode};
use super::view::SyntaxTreeView;
use crate::source::SourcePosition;

/// A red tree rooted at one file.
///
/// Red nodes are reference counted and not `Send`; a materialized tree is
/// built by the worker that analyzes the file and shared by every checker
/// that worker runs on it.
#[derive(Debug, Clone)]
pub struct MaterializedTree {
    source: SourceId,
    root: SyntaxNode,
}

impl MaterializedTree {
    pub fn new(source: SourceId, green: GreenNode) -> Self {
        Self {
            source,
            root: SyntaxNode::new_root(green),
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.root
    }
}

impl SyntaxTreeView for MaterializedTree {
    type Node = SyntaxNode;

    fn source_id(&self) -> SourceId {
        self.source
    }

    fn root(&self) -> SyntaxNode {
        self.root.clone()
    }

    fn kind(&self, node: &SyntaxNode) -> SyntaxKind {
        node.kind()
    }

    fn text_range(&self, node: &SyntaxNode) -> TextRange {
        node.text_range()
    }

    fn children(&self, node: &SyntaxNode) -> Vec<SyntaxNode> {
        node.children().collect()
    }

    fn token_text(&self, node: &SyntaxNode, kind: SyntaxKind) -> Option<String> {
        node.children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|token| token.kind() == kind)
            .map(|token| token.text().to_owned())
    }

    /// Parent links let this start from the covering element and climb,
    /// instead of descending from the root.
    fn node_at(&self, position: &SourcePosition) -> Option<SyntaxNode> {
        let target = position.range();
        if position.source() != self.source || !self.root.text_range().contains_range(target) {
            return None;
        }
        let start = match self.root.covering_element(target) {
            rowan::NodeOrToken::Node(node) => node,
            rowan::NodeOrToken::Token(token) => token.parent()?,
        };
        let exact: Vec<SyntaxNode> = start
            .ancestors()
            .skip_while(|node| node.text_range() != target)
            .take_while(|node| node.text_range() == target)
            .collect();
        exact
            .iter()
            .rev()
            .find(|node| node.kind().is_declaration())
            .or(exact.last())
            .cloned()
    }
}
