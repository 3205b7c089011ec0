//! Field-scoped validation reporting primitives.
//!
//! Purpose: give validators a shared vocabulary for pointing at the exact
//! control that failed — a dotted/indexed [`FieldPath`] such as
//! `technologies.0.name` — and for collecting at most one failure per path
//! in a [`FieldReport`]. The report is generic over the error kind so this
//! crate stays free of any particular form's rule set.
//!
//! Public surface:
//! - [`FieldPath`] — location of a field or list element within a form.
//! - [`PathSegment`] — one step of a path (named key or list index).
//! - [`ParseFieldPathError`] — failures raised when parsing the dotted form.
//! - [`FieldReport`] — first-wins map from path to error, ordered by path.

mod path;
mod report;

pub use path::{FieldPath, ParseFieldPathError, PathSegment};
pub use report::FieldReport;
