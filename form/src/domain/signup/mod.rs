//! Signup submission types and their validation schema.
//!
//! A [`SignupDraft`] is the raw snapshot taken from form controls at
//! submit time. [`Signup`] is the accepted result: every field rule and
//! the password cross-check passed, and the accepted values have been
//! normalized (name word-capitalized, email lower-cased). The conversion
//! between the two lives in the `validation` module; the per-field rule
//! tables live in `rules` and the canonicalisation helpers in `normalize`.

use serde::Serialize;
use thiserror::Error;

use field_report::FieldReport;

mod normalize;
mod rules;
mod validation;

/// Per-field validation failures raised by the signup schema.
///
/// Every variant is recoverable by the user editing the offending control;
/// none aborts the form session or propagates beyond the submit attempt
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field was submitted empty.
    #[error("value must not be empty")]
    RequiredFieldMissing,
    /// The value holds fewer characters than the field's minimum.
    #[error("must contain at least {min} characters")]
    TooShort {
        /// Minimum number of characters accepted.
        min: usize,
    },
    /// The value is not a syntactically valid email address.
    #[error("must be a valid email address")]
    InvalidFormat,
    /// The email address lies outside the accepted domain.
    #[error("email must end with @gmail.com")]
    DomainNotAllowed,
    /// The number lies outside the field's inclusive bounds.
    #[error("must be between {min} and {max}")]
    OutOfRange {
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
    },
    /// The password confirmation does not match the password.
    #[error("passwords must match")]
    PasswordMismatch,
}

/// Report mapping each failing field path to its first failure.
///
/// Built fresh by every validation pass; a later pass's report supersedes
/// the previous one wholesale.
pub type FieldErrors = FieldReport<ValidationError>;

/// Raw signup submission captured from form controls at submit time.
///
/// Values are whatever the user typed; nothing here has been validated or
/// normalized. `technologies` stays empty for the basic form variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    /// Display name as typed.
    pub name: String,
    /// Email address as typed.
    pub email: String,
    /// Password as typed.
    pub password: String,
    /// Password confirmation as typed.
    pub confirmed_password: String,
    /// Technology rows in insertion order.
    pub technologies: Vec<TechnologyDraft>,
}

/// One raw row of the dynamic technology list.
///
/// `Default` yields the blank row appended by the controller's add action:
/// empty name, knowledge `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechnologyDraft {
    /// Technology name as typed.
    pub name: String,
    /// Self-assessed knowledge level as entered.
    pub knowledge: i32,
}

/// An accepted, normalized signup.
///
/// ## Invariants
/// - `name` is trimmed, single-spaced, and each word starts with an
///   upper-case character.
/// - `email` is lower-cased and ends with the accepted domain suffix.
/// - `password` and `confirmed_password` are equal and at least six
///   characters long.
/// - `technologies` preserves submission order.
///
/// Serializes with camelCase keys, e.g. `confirmedPassword`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signup {
    pub(super) name: String,
    pub(super) email: String,
    pub(super) password: String,
    pub(super) confirmed_password: String,
    pub(super) technologies: Vec<TechnologyEntry>,
}

impl Signup {
    /// Validates a draft and normalizes its accepted values.
    ///
    /// # Examples
    ///
    /// ```
    /// use form::domain::{Signup, SignupDraft};
    ///
    /// let draft = SignupDraft {
    ///     name: "jane doe".to_owned(),
    ///     email: "JANE@GMAIL.COM".to_owned(),
    ///     password: "secret1".to_owned(),
    ///     confirmed_password: "secret1".to_owned(),
    ///     technologies: Vec::new(),
    /// };
    /// let signup = Signup::new(draft)?;
    /// assert_eq!(signup.name(), "Jane Doe");
    /// assert_eq!(signup.email(), "jane@gmail.com");
    /// # Ok::<(), form::domain::FieldErrors>(())
    /// ```
    pub fn new(draft: SignupDraft) -> Result<Self, FieldErrors> {
        Self::try_from(draft)
    }

    /// Word-capitalized display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Lower-cased email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password exactly as submitted.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Password confirmation, equal to [`Signup::password`].
    #[must_use]
    pub fn confirmed_password(&self) -> &str {
        self.confirmed_password.as_str()
    }

    /// Technology entries in submission order.
    #[must_use]
    pub fn technologies(&self) -> &[TechnologyEntry] {
        self.technologies.as_slice()
    }
}

/// A validated row of the technology list.
///
/// ## Invariants
/// - `name` is non-empty.
/// - `knowledge` lies within `1..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyEntry {
    pub(super) name: String,
    pub(super) knowledge: i32,
}

impl TechnologyEntry {
    /// Validates a single list row outside the context of a whole form.
    ///
    /// Failures are reported against the row-relative paths `name` and
    /// `knowledge`.
    pub fn new(draft: TechnologyDraft) -> Result<Self, FieldErrors> {
        Self::try_from(draft)
    }

    /// Technology name as submitted.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Self-assessed knowledge level within `1..=100`.
    #[must_use]
    pub fn knowledge(&self) -> i32 {
        self.knowledge
    }
}
