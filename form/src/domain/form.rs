//! Submit-driven controller for the signup flow.
//!
//! The controller owns the raw draft mirrored from form controls and the
//! two derived state values: the current error report and the current
//! output payload. Validation runs exactly once per submit; field setters
//! only update the draft, so interim keystrokes never trigger the schema.

use tracing::debug;

use field_report::FieldPath;

use super::signup::{FieldErrors, Signup, SignupDraft, TechnologyDraft, ValidationError};

/// Stateful controller for one signup form instance.
///
/// Both derived state values are replaced atomically per submit: an
/// accepted submit sets the output and clears the error report, while a
/// rejected one installs the fresh report and clears any prior output.
/// Reports from different attempts are never merged.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    draft: SignupDraft,
    errors: FieldErrors,
    output: Option<String>,
}

impl SignupForm {
    /// Creates an empty form with no technology rows and no submit outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw control values.
    #[must_use]
    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    /// Error report installed by the most recent rejected submit.
    ///
    /// Empty while no submit has happened or the latest one was accepted.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Failure recorded for one field by the most recent submit.
    #[must_use]
    pub fn error_at(&self, path: &FieldPath) -> Option<&ValidationError> {
        self.errors.get(path)
    }

    /// Serialized payload of the most recent accepted submit.
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Mirrors the name control into the draft.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    /// Mirrors the email control into the draft.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
    }

    /// Mirrors the password control into the draft.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.draft.password = value.into();
    }

    /// Mirrors the password confirmation control into the draft.
    pub fn set_confirmed_password(&mut self, value: impl Into<String>) {
        self.draft.confirmed_password = value.into();
    }

    /// Mirrors a technology row's name control into the draft.
    ///
    /// Returns whether a row exists at `position`.
    pub fn set_technology_name(&mut self, position: usize, value: impl Into<String>) -> bool {
        self.draft
            .technologies
            .get_mut(position)
            .map_or(false, |technology| {
                technology.name = value.into();
                true
            })
    }

    /// Mirrors a technology row's knowledge control into the draft.
    ///
    /// Returns whether a row exists at `position`.
    pub fn set_technology_knowledge(&mut self, position: usize, value: i32) -> bool {
        self.draft
            .technologies
            .get_mut(position)
            .map_or(false, |technology| {
                technology.knowledge = value;
                true
            })
    }

    /// Appends a blank technology row and returns the new row count.
    pub fn add_technology(&mut self) -> usize {
        self.draft.technologies.push(TechnologyDraft::default());
        self.draft.technologies.len()
    }

    /// Removes and returns the row at `position`, keeping the relative
    /// order of the remaining rows.
    ///
    /// Returns `None` when no row exists at `position`.
    pub fn remove_technology(&mut self, position: usize) -> Option<TechnologyDraft> {
        (position < self.draft.technologies.len())
            .then(|| self.draft.technologies.remove(position))
    }

    /// Validates the current draft and replaces the submit outcome.
    ///
    /// Returns whether the draft was accepted. On accept the output holds
    /// the pretty-printed payload of the normalized signup; on reject the
    /// fresh error report supersedes the previous one wholesale.
    ///
    /// # Panics
    ///
    /// Panics if the accepted payload fails to serialize, which would be a
    /// programming error in the payload types rather than a user fault.
    pub fn submit(&mut self) -> bool {
        match Signup::new(self.draft.clone()) {
            Ok(signup) => {
                let payload = serde_json::to_string_pretty(&signup)
                    .unwrap_or_else(|error| panic!("signup payload must serialise: {error}"));
                debug!("signup accepted");
                self.errors = FieldErrors::new();
                self.output = Some(payload);
                true
            }
            Err(report) => {
                debug!(fields = report.len(), "signup rejected");
                self.errors = report;
                self.output = None;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use rstest_bdd_macros::{given, then, when};
    use serde_json::json;

    use super::*;

    fn fill_valid_fields(signup_form: &mut SignupForm) {
        signup_form.set_name("jane doe");
        signup_form.set_email("JANE@GMAIL.COM");
        signup_form.set_password("secret1");
        signup_form.set_confirmed_password("secret1");
    }

    #[fixture]
    fn valid_form() -> SignupForm {
        let mut signup_form = SignupForm::new();
        fill_valid_fields(&mut signup_form);
        signup_form
    }

    #[rstest]
    fn accepted_submit_sets_output_and_clears_errors(mut valid_form: SignupForm) {
        assert!(valid_form.submit());

        assert!(valid_form.errors().is_empty());
        let payload = valid_form.output().expect("accepted submit stores output");
        let value: serde_json::Value =
            serde_json::from_str(payload).expect("output is valid JSON");
        assert_eq!(
            value,
            json!({
                "name": "Jane Doe",
                "email": "jane@gmail.com",
                "password": "secret1",
                "confirmedPassword": "secret1",
                "technologies": [],
            })
        );
    }

    #[rstest]
    fn rejected_submit_records_errors_and_clears_output(mut valid_form: SignupForm) {
        assert!(valid_form.submit());
        valid_form.set_email("jane@yahoo.com");

        assert!(!valid_form.submit());

        assert!(valid_form.output().is_none());
        assert_eq!(
            valid_form.error_at(&FieldPath::field("email")),
            Some(&ValidationError::DomainNotAllowed)
        );
    }

    #[rstest]
    fn each_submit_supersedes_the_previous_report(mut valid_form: SignupForm) {
        valid_form.set_name("jo");
        assert!(!valid_form.submit());
        assert_eq!(valid_form.errors().len(), 1);

        valid_form.set_name("");
        valid_form.set_email("nope");
        assert!(!valid_form.submit());

        assert_eq!(valid_form.errors().len(), 2);
        assert_eq!(
            valid_form.error_at(&FieldPath::field("name")),
            Some(&ValidationError::RequiredFieldMissing)
        );
        assert_eq!(
            valid_form.error_at(&FieldPath::field("email")),
            Some(&ValidationError::InvalidFormat)
        );
    }

    #[rstest]
    fn setters_never_trigger_validation() {
        let mut signup_form = SignupForm::new();
        signup_form.set_name("jo");
        signup_form.set_email("not-an-email");

        assert!(signup_form.errors().is_empty());
        assert!(signup_form.output().is_none());
    }

    #[rstest]
    fn added_rows_start_blank() {
        let mut signup_form = SignupForm::new();
        assert_eq!(signup_form.add_technology(), 1);

        let row = signup_form.draft().technologies.first().expect("added row");
        assert_eq!(row, &TechnologyDraft::default());
        assert_eq!(row.knowledge, 0);
    }

    #[rstest]
    fn add_then_remove_restores_length_and_order(mut valid_form: SignupForm) {
        valid_form.add_technology();
        valid_form.add_technology();
        valid_form.add_technology();
        assert!(valid_form.set_technology_name(0, "Rust"));
        assert!(valid_form.set_technology_name(1, "Go"));
        assert!(valid_form.set_technology_name(2, "C"));

        let removed = valid_form.remove_technology(1).expect("row exists");
        assert_eq!(removed.name, "Go");

        let names: Vec<&str> = valid_form
            .draft()
            .technologies
            .iter()
            .map(|technology| technology.name.as_str())
            .collect();
        assert_eq!(names, ["Rust", "C"]);
    }

    #[rstest]
    fn remove_out_of_bounds_is_rejected(mut valid_form: SignupForm) {
        valid_form.add_technology();
        assert!(valid_form.remove_technology(1).is_none());
        assert_eq!(valid_form.draft().technologies.len(), 1);
    }

    #[rstest]
    fn row_setters_report_missing_positions() {
        let mut signup_form = SignupForm::new();
        assert!(!signup_form.set_technology_name(0, "Rust"));
        assert!(!signup_form.set_technology_knowledge(0, 50));
    }

    #[rstest]
    fn accepted_submit_serializes_technology_rows(mut valid_form: SignupForm) {
        valid_form.add_technology();
        assert!(valid_form.set_technology_name(0, "Rust"));
        assert!(valid_form.set_technology_knowledge(0, 80));

        assert!(valid_form.submit());

        let payload = valid_form.output().expect("accepted submit stores output");
        let value: serde_json::Value =
            serde_json::from_str(payload).expect("output is valid JSON");
        assert_eq!(
            value.get("technologies"),
            Some(&json!([{ "name": "Rust", "knowledge": 80 }]))
        );
    }

    #[given("a form whose passwords disagree")]
    fn a_form_whose_passwords_disagree() -> SignupForm {
        let mut signup_form = SignupForm::new();
        fill_valid_fields(&mut signup_form);
        signup_form.set_confirmed_password("654321");
        signup_form
    }

    #[when("the form is submitted")]
    fn the_form_is_submitted(signup_form: SignupForm) -> SignupForm {
        let mut submitted = signup_form;
        submitted.submit();
        submitted
    }

    #[then("the mismatch is reported against the confirmation field")]
    fn the_mismatch_is_reported(signup_form: SignupForm) {
        assert!(signup_form.output().is_none());
        assert_eq!(
            signup_form.error_at(&FieldPath::field("confirmedPassword")),
            Some(&ValidationError::PasswordMismatch)
        );
    }

    #[rstest]
    fn submitting_disagreeing_passwords_rejects_the_form() {
        let submitted = the_form_is_submitted(a_form_whose_passwords_disagree());
        the_mismatch_is_reported(submitted);
    }
}
