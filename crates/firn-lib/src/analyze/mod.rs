//! Declaration checkers and the analyses they share.
//!
//! - `roots`: which declarations are analysis units
//! - `scope`: finding units in a file, and the units nested in a unit
//! - `labels`: declared vs. referenced labels of one unit
//! - `checker`: the [`DeclarationChecker`] seam and [`CheckerSet`]
//! - `redundant_label`: the bundled checker

mod checker;
mod labels;
mod redundant_label;
mod roots;
mod scope;


pub use checker::{CheckError, CheckerContext, CheckerSet, DeclarationChecker};
pub use labels::{collect_declared, referenced_labels, UnusedLabels};
pub use redundant_label::RedundantLabelChecker;
pub use roots::is_analysis_root;
pub use scope::{analysis_units, nested_roots};
