//! Flyweight view over the green tree.
//!
//! Green nodes are shared, position-independent and carry no parent link.
//! A [`LightNode`] pairs one with the absolute offset it was reached at;
//! offsets of children are accumulated from sibling lengths while the
//! children are enumerated, so nothing is computed for subtrees that a
//! traversal never enters.

use firn_core::SourceId;
use rowan::{GreenNode, GreenNodeData, Language, NodeOrToken, TextRange, TextSize};

use super::kind::{FirnLang, SyntaxKind};
use super::view::SyntaxTreeView;

/// The shared structure light nodes are computed from.
#[derive(Debug, Clone)]
pub struct LightTree {
    source: SourceId,
    root: GreenNode,
}

impl LightTree {
    pub fn new(source: SourceId, root: GreenNode) -> Self {
        Self { source, root }
    }

    pub fn green(&self) -> &GreenNode {
        &self.root
    }
}

/// A transient handle to one green node at a known offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LightNode {
    green: GreenNode,
    offset: TextSize,
}

impl LightNode {
    pub fn kind(&self) -> SyntaxKind {
        FirnLang::kind_from_raw(self.green.kind())
    }

    pub fn text_range(&self) -> TextRange {
        TextRange::at(self.offset, self.green.text_len())
    }

    pub fn green(&self) -> &GreenNodeData {
        &self.green
    }
}

impl SyntaxTreeView for LightTree {
    type Node = LightNode;

    fn source_id(&self) -> SourceId {
        self.source
    }

    fn root(&self) -> LightNode {
        LightNode {
            green: self.root.clone(),
            offset: TextSize::from(0),
        }
    }

    fn kind(&self, node: &LightNode) -> SyntaxKind {
        node.kind()
    }

    fn text_range(&self, node: &LightNode) -> TextRange {
        node.text_range()
    }

    fn children(&self, node: &LightNode) -> Vec<LightNode> {
        let mut offset = node.offset;
        let mut children = Vec::new();
        for child in node.green.children() {
            match child {
                NodeOrToken::Node(green) => {
                    let owned: GreenNode = green.to_owned();
                    children.push(LightNode {
                        green: owned,
                        offset,
                    });
                    offset += green.text_len();
                }
                NodeOrToken::Token(token) => offset += token.text_len(),
            }
        }
        children
    }

    fn token_text(&self, node: &LightNode, kind: SyntaxKind) -> Option<String> {
        node.green
            .children()
            .filter_map(NodeOrToken::into_token)
            .find(|token| FirnLang::kind_from_raw(token.kind()) == kind)
            .map(|token| token.text().to_owned())
    }
}
