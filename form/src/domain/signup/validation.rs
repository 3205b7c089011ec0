//! Whole-form validation and draft conversion.
//!
//! Field rule tables run independently against serialized path names, so
//! one pass reports every failing field; the password cross-check runs
//! after the per-field pass and never masks a field-level failure.

use field_report::FieldPath;
use tracing::trace;

use super::rules::{self, TextRule};
use super::{
    FieldErrors, Signup, SignupDraft, TechnologyDraft, TechnologyEntry, ValidationError,
    normalize,
};

const NAME: &str = "name";
const EMAIL: &str = "email";
const PASSWORD: &str = "password";
const CONFIRMED_PASSWORD: &str = "confirmedPassword";
const TECHNOLOGIES: &str = "technologies";
const KNOWLEDGE: &str = "knowledge";

impl TryFrom<SignupDraft> for Signup {
    type Error = FieldErrors;

    fn try_from(draft: SignupDraft) -> Result<Self, Self::Error> {
        let mut report = FieldErrors::new();

        check_text(&mut report, FieldPath::field(NAME), &draft.name, rules::NAME_RULES);
        check_text(
            &mut report,
            FieldPath::field(EMAIL),
            &draft.email,
            rules::EMAIL_RULES,
        );
        check_text(
            &mut report,
            FieldPath::field(PASSWORD),
            &draft.password,
            rules::PASSWORD_RULES,
        );
        check_text(
            &mut report,
            FieldPath::field(CONFIRMED_PASSWORD),
            &draft.confirmed_password,
            rules::PASSWORD_RULES,
        );

        for (position, technology) in draft.technologies.iter().enumerate() {
            let row = FieldPath::field(TECHNOLOGIES).index(position);
            check_technology(
                &mut report,
                row.clone().key(NAME),
                row.key(KNOWLEDGE),
                technology,
            );
        }

        // Cross-field check; first-wins recording keeps any per-field
        // failure already present at the confirmation path.
        if draft.password != draft.confirmed_password {
            report.record(
                FieldPath::field(CONFIRMED_PASSWORD),
                ValidationError::PasswordMismatch,
            );
        }

        if !report.is_empty() {
            return Err(report);
        }

        Ok(Self {
            name: normalize::canonical_name(&draft.name),
            email: normalize::canonical_email(&draft.email),
            password: draft.password,
            confirmed_password: draft.confirmed_password,
            technologies: draft
                .technologies
                .into_iter()
                .map(|technology| TechnologyEntry {
                    name: technology.name,
                    knowledge: technology.knowledge,
                })
                .collect(),
        })
    }
}

impl TryFrom<TechnologyDraft> for TechnologyEntry {
    type Error = FieldErrors;

    fn try_from(draft: TechnologyDraft) -> Result<Self, Self::Error> {
        let mut report = FieldErrors::new();
        check_technology(
            &mut report,
            FieldPath::field(NAME),
            FieldPath::field(KNOWLEDGE),
            &draft,
        );

        if !report.is_empty() {
            return Err(report);
        }

        Ok(Self {
            name: draft.name,
            knowledge: draft.knowledge,
        })
    }
}

fn check_text(report: &mut FieldErrors, path: FieldPath, value: &str, rules: &[TextRule]) {
    if let Some((rule, error)) = rules::first_failure(value, rules) {
        trace!(field = %path, rule, "rule rejected value");
        report.record(path, error);
    }
}

fn check_technology(
    report: &mut FieldErrors,
    name_path: FieldPath,
    knowledge_path: FieldPath,
    technology: &TechnologyDraft,
) {
    check_text(
        report,
        name_path,
        &technology.name,
        rules::TECHNOLOGY_NAME_RULES,
    );
    if let Some(error) = rules::knowledge_in_bounds(technology.knowledge) {
        trace!(field = %knowledge_path, rule = rules::KNOWLEDGE_RULE, "rule rejected value");
        report.record(knowledge_path, error);
    }
}
