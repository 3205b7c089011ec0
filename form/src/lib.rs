//! Signup form library modules.
//!
//! Schema-driven validation and normalization for a signup form, plus the
//! submit-driven controller that owns the UI-facing state. Rendering is
//! left to the embedding application.

pub mod domain;

/// Re-exported controller type used by rendering collaborators.
pub use domain::SignupForm;
