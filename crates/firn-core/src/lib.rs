#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the firn analysis crates.
//!
//! - [`Interner`] turns identifier text (label names, declaration names) into
//!   cheap [`Symbol`] handles.
//! - [`SourceMap`] registers every file taking part in one analysis session
//!   and hands out [`SourceId`]s that positions refer to.

mod interner;
mod source_map;


pub use interner::{Interner, Symbol};
pub use source_map::{Source, SourceId, SourceKind, SourceMap};
