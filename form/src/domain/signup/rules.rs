//! Ordered rule tables for each signup field.
//!
//! Each field carries an explicit, ordered list of named predicates. The
//! first failing rule decides the field's error; fields are evaluated
//! independently of each other so one pass can report every failing field.

use std::sync::OnceLock;

use regex::Regex;

use super::ValidationError;

/// Minimum character count for the display name, after trimming.
pub(super) const NAME_MIN: usize = 3;
/// Minimum character count for passwords.
pub(super) const PASSWORD_MIN: usize = 6;
/// Inclusive lower bound of a technology knowledge level.
pub(super) const KNOWLEDGE_MIN: i32 = 1;
/// Inclusive upper bound of a technology knowledge level.
pub(super) const KNOWLEDGE_MAX: i32 = 100;
/// Literal suffix accepted by the email domain rule.
pub(super) const REQUIRED_EMAIL_SUFFIX: &str = "@gmail.com";

/// Rule name used in trace events for the knowledge bounds check.
pub(super) const KNOWLEDGE_RULE: &str = "knowledge-range";

/// A named predicate evaluated against one text field.
pub(super) struct TextRule {
    /// Stable identifier used in trace events.
    pub name: &'static str,
    /// Returns the failure raised by this rule, if any.
    pub check: fn(&str) -> Option<ValidationError>,
}

/// Rules for the display name field.
pub(super) const NAME_RULES: &[TextRule] = &[
    TextRule {
        name: "required",
        check: required,
    },
    TextRule {
        name: "name-length",
        check: name_long_enough,
    },
];

/// Rules for the email field.
pub(super) const EMAIL_RULES: &[TextRule] = &[
    TextRule {
        name: "required",
        check: required,
    },
    TextRule {
        name: "email-syntax",
        check: email_well_formed,
    },
    TextRule {
        name: "email-domain",
        check: email_domain_accepted,
    },
];

/// Rules for the password and password confirmation fields.
pub(super) const PASSWORD_RULES: &[TextRule] = &[
    TextRule {
        name: "required",
        check: required,
    },
    TextRule {
        name: "password-length",
        check: password_long_enough,
    },
];

/// Rules for a technology row's name field.
pub(super) const TECHNOLOGY_NAME_RULES: &[TextRule] = &[TextRule {
    name: "required",
    check: required,
}];

/// Runs `rules` in order and returns the first failure with its rule name.
pub(super) fn first_failure(
    value: &str,
    rules: &[TextRule],
) -> Option<(&'static str, ValidationError)> {
    rules
        .iter()
        .find_map(|rule| (rule.check)(value).map(|error| (rule.name, error)))
}

/// Bounds check for a technology knowledge level.
pub(super) fn knowledge_in_bounds(value: i32) -> Option<ValidationError> {
    if (KNOWLEDGE_MIN..=KNOWLEDGE_MAX).contains(&value) {
        None
    } else {
        Some(ValidationError::OutOfRange {
            min: KNOWLEDGE_MIN,
            max: KNOWLEDGE_MAX,
        })
    }
}

fn required(value: &str) -> Option<ValidationError> {
    value
        .is_empty()
        .then_some(ValidationError::RequiredFieldMissing)
}

fn name_long_enough(value: &str) -> Option<ValidationError> {
    (value.trim().chars().count() < NAME_MIN)
        .then_some(ValidationError::TooShort { min: NAME_MIN })
}

fn password_long_enough(value: &str) -> Option<ValidationError> {
    (value.chars().count() < PASSWORD_MIN)
        .then_some(ValidationError::TooShort { min: PASSWORD_MIN })
}

fn email_well_formed(value: &str) -> Option<ValidationError> {
    (!email_regex().is_match(value)).then_some(ValidationError::InvalidFormat)
}

/// Plain suffix test after lower-casing; deliberately not a domain parser.
fn email_domain_accepted(value: &str) -> Option<ValidationError> {
    (!value.to_lowercase().ends_with(REQUIRED_EMAIL_SUFFIX))
        .then_some(ValidationError::DomainNotAllowed)
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Syntax only; the domain policy is a separate rule.
        let pattern = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}
