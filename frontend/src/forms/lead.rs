use std::collections::BTreeMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use yew::Reducible;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const GENERIC_SUBMIT_ERROR: &str = "Something went wrong. Please try again.";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    Email,
    Organization,
    Interest,
}

impl Field {
    /// Matches the `name`/`id` attributes of the rendered inputs.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::Email => "email",
            Field::Organization => "organization",
            Field::Interest => "interest",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub email: String,
    pub organization: String,
    pub interest: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::Email => &self.email,
            Field::Organization => &self.organization,
            Field::Interest => &self.interest,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::Email => self.email = value,
            Field::Organization => self.organization = value,
            Field::Interest => self.interest = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FormFields::default()
    }
}

pub type FormErrors = BTreeMap<Field, String>;

/// Checks the required fields. Organization and interest are free-form.
pub fn validate(fields: &FormFields) -> FormErrors {
    let mut errors = FormErrors::new();

    if fields.first_name.trim().is_empty() {
        errors.insert(Field::FirstName, "First name is required".to_string());
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, "Please enter a valid email address".to_string());
    }

    errors
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    Edit(Field, String),
    /// Validate and, if clean, move to `Submitting`.
    Submit,
    Succeeded,
    Failed(String),
    /// The embedded widget reported completion.
    WidgetSubmitted,
}

/// State of the get-involved form for one page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub fields: FormFields,
    pub errors: FormErrors,
    pub submit_error: Option<String>,
    pub status: SubmissionStatus,
}

impl LeadForm {
    pub fn edit(&mut self, field: Field, value: String) {
        if self.status != SubmissionStatus::Idle {
            return;
        }
        self.fields.set(field, value);
        self.errors.remove(&field);
        self.submit_error = None;
    }

    /// Runs validation. On success the form is `Submitting` and the values
    /// to send are returned; otherwise the form stays `Idle` with per-field
    /// errors. Ignored unless idle.
    pub fn submit(&mut self) -> Option<FormFields> {
        if self.status != SubmissionStatus::Idle {
            return None;
        }

        self.submit_error = None;
        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            return None;
        }

        self.status = SubmissionStatus::Submitting;
        Some(self.fields.clone())
    }

    pub fn succeed(&mut self) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        self.fields = FormFields::default();
        self.errors.clear();
        self.status = SubmissionStatus::Succeeded;
    }

    /// Back to idle with the values kept so the user can retry.
    pub fn fail(&mut self, reason: String) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        self.submit_error = Some(reason);
        self.status = SubmissionStatus::Idle;
    }

    pub fn widget_submitted(&mut self) {
        self.status = SubmissionStatus::Succeeded;
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.edit(field, value),
            FormAction::Submit => {
                self.submit();
            }
            FormAction::Succeeded => self.succeed(),
            FormAction::Failed(reason) => self.fail(reason),
            FormAction::WidgetSubmitted => self.widget_submitted(),
        }
    }
}

impl Reducible for LeadForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(first_name: &str, email: &str) -> LeadForm {
        let mut form = LeadForm::default();
        form.edit(Field::FirstName, first_name.to_string());
        form.edit(Field::Email, email.to_string());
        form
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ada@example.org"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada @example.org"));
        assert!(!is_valid_email("@example.org"));
    }

    #[test]
    fn invalid_submit_reports_both_fields_and_stays_idle() {
        let mut form = filled("", "not-an-email");
        assert_eq!(form.submit(), None);
        assert_eq!(form.errors.len(), 2);
        assert_eq!(form.error(Field::FirstName), Some("First name is required"));
        assert_eq!(form.error(Field::Email), Some("Please enter a valid email address"));
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn whitespace_only_values_are_missing() {
        let mut form = filled("   ", "  ");
        form.submit();
        assert_eq!(form.error(Field::FirstName), Some("First name is required"));
        assert_eq!(form.error(Field::Email), Some("Email is required"));
    }

    #[test]
    fn valid_submit_goes_through_submitting_to_succeeded() {
        let mut form = filled("Ada", "ada@example.org");
        form.edit(Field::Interest, "volunteer".to_string());

        let sent = form.submit().unwrap();
        assert_eq!(sent.first_name, "Ada");
        assert_eq!(sent.interest, "volunteer");
        assert_eq!(form.status, SubmissionStatus::Submitting);
        assert!(form.errors.is_empty());

        form.succeed();
        assert_eq!(form.status, SubmissionStatus::Succeeded);
        assert!(form.fields.is_empty());
        assert_eq!(form.fields.get(Field::Email), "");
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = filled("", "nope");
        form.submit();
        assert_eq!(form.errors.len(), 2);

        form.edit(Field::Email, "ada@".to_string());
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::FirstName), Some("First name is required"));
    }

    #[test]
    fn failure_keeps_values_and_allows_retry() {
        let mut form = filled("Ada", "ada@example.org");
        form.submit().unwrap();
        form.fail(GENERIC_SUBMIT_ERROR.to_string());

        assert_eq!(form.status, SubmissionStatus::Idle);
        assert_eq!(form.submit_error.as_deref(), Some(GENERIC_SUBMIT_ERROR));
        assert_eq!(form.fields.first_name, "Ada");

        assert!(form.submit().is_some());
        assert_eq!(form.submit_error, None);
    }

    #[test]
    fn submit_is_inert_while_in_flight_or_done() {
        let mut form = filled("Ada", "ada@example.org");
        form.submit().unwrap();
        assert_eq!(form.submit(), None);

        form.edit(Field::FirstName, "Grace".to_string());
        assert_eq!(form.fields.first_name, "Ada");

        form.succeed();
        assert_eq!(form.submit(), None);
        assert!(form.is_success());
    }

    #[test]
    fn late_results_are_ignored_when_not_submitting() {
        let mut form = LeadForm::default();
        form.succeed();
        form.fail("boom".to_string());
        assert_eq!(form, LeadForm::default());
    }

    #[test]
    fn widget_completion_marks_success() {
        let mut form = LeadForm::default();
        form.apply(FormAction::WidgetSubmitted);
        assert!(form.is_success());
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let form = Rc::new(LeadForm::default());
        let same = form.clone().reduce(FormAction::Succeeded);
        assert!(Rc::ptr_eq(&form, &same));

        let edited = form.reduce(FormAction::Edit(Field::FirstName, "Ada".to_string()));
        assert_eq!(edited.fields.first_name, "Ada");
    }

    #[test]
    fn payload_keys_match_input_names() {
        let fields = FormFields {
            first_name: "Ada".to_string(),
            email: "ada@example.org".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&fields).unwrap();
        for field in [Field::FirstName, Field::Email, Field::Organization, Field::Interest] {
            assert!(json.get(field.name()).is_some(), "missing {}", field.name());
        }
        assert_eq!(json["firstName"], "Ada");
    }
}
