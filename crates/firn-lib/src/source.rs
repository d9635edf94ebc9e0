//! Source positions shared by both tree backends and the resolved IR.
//!
//! A label is seen twice during analysis: once while walking the syntax tree
//! and once through the IR that resolved a jump to it. Both sides build their
//! own `SourcePosition`, so equality and hashing are purely structural
//! (file, range, kind) and never depend on which tree produced the value.

use std::fmt;

use firn_core::SourceId;
use rowan::TextRange;

/// Why a position does not correspond to text the user wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeKind {
    /// Label synthesized for a lambda argument (`run { return@run }`).
    ImplicitLabel,
    /// Accessor generated for a property without an explicit getter/setter.
    DefaultAccessor,
    /// Primary constructor generated for a class without one.
    DefaultConstructor,
    /// Any other construct produced by desugaring.
    Desugared,
}

/// Discriminates user-written spans from compiler-generated ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionKind {
    Real,
    Fake(FakeKind),
}

/// A span in one source file plus its [`PositionKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    source: SourceId,
    range: TextRange,
    kind: PositionKind,
}

impl SourcePosition {
    pub fn new(source: SourceId, range: TextRange, kind: PositionKind) -> Self {
        Self {
            source,
            range,
            kind,
        }
    }

    pub fn real(source: SourceId, range: TextRange) -> Self {
        Self::new(source, range, PositionKind::Real)
    }

    pub fn fake(source: SourceId, range: TextRange, why: FakeKind) -> Self {
        Self::new(source, range, PositionKind::Fake(why))
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn kind(&self) -> PositionKind {
        self.kind
    }

    pub fn is_real(&self) -> bool {
        self.kind == PositionKind::Real
    }

    pub fn is_fake(&self) -> bool {
        !self.is_real()
    }

    /// Same span, re-tagged as generated.
    pub fn to_fake(self, why: FakeKind) -> Self {
        Self::fake(self.source, self.range, why)
    }

    /// Position of a node nested in this one. Child spans are absolute, so only
    /// the file carries over; the child is always real text.
    pub fn child(&self, range: TextRange) -> Self {
        debug_assert!(
            self.range.contains_range(range),
            "child range {range:?} escapes parent {:?}",
            self.range
        );
        Self::real(self.source, range)
    }

    /// Stable ordering key: (file, start, end). Kind is not part of the key.
    pub fn sort_key(&self) -> (u32, u32, u32) {
        (
            self.source.as_u32(),
            self.range.start().into(),
            self.range.end().into(),
        )
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{}@{}..{}",
            self.source.as_u32(),
            u32::from(self.range.start()),
            u32::from(self.range.end())
        )?;
        if let PositionKind::Fake(why) = self.kind {
            write!(f, " (fake: {why:?})")?;
        }
        Ok(())
    }
}
