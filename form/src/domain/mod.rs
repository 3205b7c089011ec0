//! Domain primitives and services for the signup form.
//!
//! Purpose: define the raw and validated signup types, the field rule
//! schema that separates them, and the controller owning per-submission
//! state. Types are immutable once validated; invariants live in each
//! type's Rustdoc.
//!
//! Public surface:
//! - [`SignupDraft`] / [`Signup`] — raw submission and its accepted,
//!   normalized counterpart.
//! - [`TechnologyDraft`] / [`TechnologyEntry`] — one row of the dynamic
//!   technology list, raw and validated.
//! - [`ValidationError`] — per-field failure kinds.
//! - [`FieldErrors`] — path-keyed report of one submission's failures.
//! - [`SignupForm`] — submit-driven form controller.

pub mod form;
pub mod signup;

pub use self::form::SignupForm;
pub use self::signup::{
    FieldErrors, Signup, SignupDraft, TechnologyDraft, TechnologyEntry, ValidationError,
};
pub use field_report::{FieldPath, FieldReport, PathSegment};
