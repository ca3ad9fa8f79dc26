mod transport;

pub use transport::{Transport, TransportError, WebhookTransport};

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Serialize, Serializer};
use strum::{EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent. I'll get back to you soon!";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or contact me directly.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // \s in browsers also covers U+FEFF, Rust's doesn't
    Regex::new(r"^[^\s\u{FEFF}@]+@[^\s\u{FEFF}@]+\.[^\s\u{FEFF}@]+$")
        .expect("email pattern should compile")
});

/// Form fields, named as they appear in the submitted payload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumString, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    CompanyName,
    MobileNumber,
    Email,
    Purpose,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::MobileNumber, Field::Email];

    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::CompanyName => "Company name",
            Field::MobileNumber => "Mobile number",
            Field::Email => "Email",
            Field::Purpose => "Purpose",
            Field::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    fn format_hint(self) -> &'static str {
        match self {
            Field::MobileNumber => "10-digit mobile number",
            Field::Email => "email address",
            _ => "value",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
pub enum Purpose {
    #[strum(to_string = "Project Inquiry")]
    ProjectInquiry,
    #[strum(to_string = "Job Opportunity")]
    JobOpportunity,
    #[strum(to_string = "Collaboration")]
    Collaboration,
    #[strum(to_string = "General Inquiry")]
    GeneralInquiry,
}

impl Purpose {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

fn purpose_label<S: Serializer>(purpose: &Option<Purpose>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(purpose.map_or("", Purpose::label))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: String,
    pub company_name: String,
    pub mobile_number: String,
    pub email: String,
    #[serde(serialize_with = "purpose_label")]
    pub purpose: Option<Purpose>,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::CompanyName => &self.company_name,
            Field::MobileNumber => &self.mobile_number,
            Field::Email => &self.email,
            Field::Purpose => self.purpose.map_or("", Purpose::label),
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::CompanyName => self.company_name = value,
            Field::MobileNumber => self.mobile_number = value,
            Field::Email => self.email = value,
            Field::Purpose => {
                self.purpose = if value.is_empty() {
                    None
                } else {
                    let parsed = Purpose::from_str(&value).ok();
                    if parsed.is_none() {
                        log::warn!("ignoring unknown contact purpose: {value}");
                    }
                    parsed
                }
            }
            Field::Message => self.message = value,
        }
    }

    /// Checks the required fields. Only ever called when the visitor submits.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FieldError::Missing(Field::Name));
        }

        if self.mobile_number.trim().is_empty() {
            errors.insert(FieldError::Missing(Field::MobileNumber));
        } else if !is_valid_mobile(&self.mobile_number) {
            errors.insert(FieldError::InvalidFormat(Field::MobileNumber));
        }

        if self.email.trim().is_empty() {
            errors.insert(FieldError::Missing(Field::Email));
        } else if !is_valid_email(&self.email) {
            errors.insert(FieldError::InvalidFormat(Field::Email));
        }

        errors
    }
}

/// Digits only, so "98-76-543-210" and "(987) 654 3210" both count.
pub fn normalize_mobile(mobile: &str) -> String {
    mobile.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    normalize_mobile(mobile).len() == 10
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Missing(Field),
    #[error("Please enter a valid {}", .0.format_hint())]
    InvalidFormat(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Missing(f) | FieldError::InvalidFormat(f) => *f,
        }
    }
}

/// Per-field errors from the last submit attempt. Only required fields ever appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    fn insert(&mut self, err: FieldError) {
        debug_assert!(err.field().is_required());
        self.0.insert(err.field(), err);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns whether an error was actually removed.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &FieldError)> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmissionState::Succeeded => Some(SUCCESS_MESSAGE),
            SubmissionState::Failed => Some(FAILURE_MESSAGE),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmissionState::Submitting
    }
}

fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// What gets posted to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    #[serde(flatten)]
    pub data: ContactFormData,
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationErrors),
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: ContactFormData,
    errors: ValidationErrors,
    status: SubmissionState,
    open: bool,
    // bumped on every delivered submission, ties an auto-close timer to its success
    successes: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionState {
        self.status
    }

    pub fn message(&self) -> Option<&'static str> {
        self.status.message()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn value(&self, field: Field) -> &str {
        self.data.get(field)
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(ToString::to_string)
    }

    /// Writes a field and drops any error recorded for it. Validation waits for submit.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.errors.clear(field);
    }

    /// Same as [`update_field`](Self::update_field), addressed by payload key (`"mobileNumber"`).
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), strum::ParseError> {
        let field = Field::from_str(name)?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn validate(&self) -> ValidationErrors {
        self.data.validate()
    }

    /// Validates and, if clean, moves to `Submitting` and returns the payload to send.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<Submission, SubmitRejected> {
        if self.status.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        let errors = self.validate();
        self.errors = errors.clone();
        if !errors.is_empty() {
            log::debug!("contact form blocked by {} invalid field(s)", errors.len());
            return Err(SubmitRejected::Invalid(errors));
        }
        self.status = SubmissionState::Submitting;
        Ok(Submission {
            data: self.data.clone(),
            timestamp: now,
        })
    }

    /// Applies the transport outcome. The webhook's real response is never seen,
    /// so anything short of a transport error counts as delivered.
    ///
    /// On delivery, returns the ticket to hand to [`auto_close`](Self::auto_close)
    /// once the delay has passed.
    pub fn finish_submit(&mut self, outcome: Result<(), TransportError>) -> Option<u64> {
        match outcome {
            Ok(()) => {
                log::info!("contact form submitted");
                self.data = ContactFormData::default();
                self.status = SubmissionState::Succeeded;
                self.successes += 1;
                Some(self.successes)
            }
            Err(err) => {
                log::warn!("contact form submission failed: {err}");
                self.status = SubmissionState::Failed;
                None
            }
        }
    }

    /// Runs a whole submission against `transport`. The reactive component drives
    /// `begin_submit`/`finish_submit` itself since it can't hold the form across an await.
    pub async fn submit<T: Transport>(
        &mut self,
        transport: &T,
        now: DateTime<Utc>,
    ) -> Result<SubmissionState, SubmitRejected> {
        let submission = self.begin_submit(now)?;
        let outcome = transport.send(&submission).await;
        self.finish_submit(outcome);
        Ok(self.status)
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the form and clears feedback. Entered values stay put.
    pub fn close(&mut self) {
        self.open = false;
        self.errors = ValidationErrors::default();
        if !self.status.is_submitting() {
            self.status = SubmissionState::Idle;
        }
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// The ticket for the success currently on screen, if any.
    pub fn auto_close_ticket(&self) -> Option<u64> {
        (self.status == SubmissionState::Succeeded).then_some(self.successes)
    }

    /// Fired by the timer scheduled after a successful submit. A timer left over
    /// from an earlier success does nothing.
    pub fn auto_close(&mut self, ticket: u64) {
        if self.status == SubmissionState::Succeeded && self.successes == ticket {
            self.open = false;
            self.status = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::TimeZone;

    use super::*;

    struct MockTransport {
        fail: bool,
        sent: RefCell<Vec<Submission>>,
    }

    impl MockTransport {
        fn ok() -> Self {
            Self {
                fail: false,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, submission: &Submission) -> Result<(), TransportError> {
            self.sent.borrow_mut().push(submission.clone());
            if self.fail {
                Err(TransportError::NotConfigured)
            } else {
                Ok(())
            }
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    fn filled(name: &str, mobile: &str, email: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.open();
        form.update_field(Field::Name, name);
        form.update_field(Field::MobileNumber, mobile);
        form.update_field(Field::Email, email);
        form
    }

    #[test]
    fn test_blank_name_is_required() {
        for name in ["", "   ", "\t\n"] {
            let form = filled(name, "9876543210", "jane@x.com");
            let errors = form.validate();
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(Field::Name).map(ToString::to_string).as_deref(),
                Some("Name is required")
            );
        }
    }

    #[test]
    fn test_mobile_normalization() {
        assert!(!is_valid_mobile("12345"));
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("98-76-543-210"));
        assert!(!is_valid_mobile("+91 98765 43210"));
        assert!(!is_valid_mobile("98765432101"));
        assert_eq!(normalize_mobile("(987) 654-3210"), "9876543210");

        let form = filled("Jane", "12345", "jane@x.com");
        assert_eq!(
            form.error_after_validate(Field::MobileNumber).as_deref(),
            Some("Please enter a valid 10-digit mobile number")
        );
        let form = filled("Jane", "  ", "jane@x.com");
        assert_eq!(
            form.error_after_validate(Field::MobileNumber).as_deref(),
            Some("Mobile number is required")
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a\u{FEFF}@b.com"));
        assert!(!is_valid_email("a@b\u{FEFF}.com"));

        let form = filled("Jane", "9876543210", "");
        assert_eq!(
            form.error_after_validate(Field::Email).as_deref(),
            Some("Email is required")
        );
        let form = filled("Jane", "9876543210", "a@b");
        assert_eq!(
            form.error_after_validate(Field::Email).as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_errors_only_for_required_fields() {
        let mut form = ContactForm::new();
        form.update_field(Field::CompanyName, "");
        form.update_field(Field::Message, "");
        let errors = form.validate();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|(field, _)| field.is_required()));
    }

    #[test]
    fn test_update_clears_only_that_field() {
        let mut form = filled("", "123", "bad");
        assert!(form.begin_submit(now()).is_err());
        assert_eq!(form.errors().len(), 3);

        form.update_field(Field::Email, "bad");
        assert!(!form.errors().contains(Field::Email));
        assert!(form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::MobileNumber));

        // re-supplying the same value is a no-op and doesn't bring the error back
        let before = form.data().clone();
        form.update_field(Field::Email, "bad");
        assert_eq!(form.data(), &before);
        assert!(!form.errors().contains(Field::Email));
    }

    #[test]
    fn test_update_named_uses_payload_keys() {
        let mut form = ContactForm::new();
        form.update_named("mobileNumber", "9876543210").unwrap();
        form.update_named("companyName", "Acme").unwrap();
        form.update_named("purpose", "Job Opportunity").unwrap();
        assert_eq!(form.value(Field::MobileNumber), "9876543210");
        assert_eq!(form.value(Field::CompanyName), "Acme");
        assert_eq!(form.data().purpose, Some(Purpose::JobOpportunity));
        assert!(form.update_named("phone", "1").is_err());

        form.update_named("purpose", "Pizza").unwrap();
        assert_eq!(form.data().purpose, None);
        assert_eq!(form.value(Field::Purpose), "");
    }

    #[tokio::test]
    async fn test_invalid_submit_sends_nothing() {
        let transport = MockTransport::ok();
        let mut form = filled("", "123", "bad");
        let res = form.submit(&transport, now()).await;

        let Err(SubmitRejected::Invalid(errors)) = res else {
            panic!("invalid form should be rejected");
        };
        assert_eq!(transport.calls(), 0);
        assert_eq!(form.status(), SubmissionState::Idle);
        assert_eq!(errors.get(Field::Name), Some(&FieldError::Missing(Field::Name)));
        assert_eq!(
            errors.get(Field::MobileNumber),
            Some(&FieldError::InvalidFormat(Field::MobileNumber))
        );
        assert_eq!(
            errors.get(Field::Email),
            Some(&FieldError::InvalidFormat(Field::Email))
        );
        assert_eq!(form.errors(), &errors);
    }

    #[tokio::test]
    async fn test_successful_submit_resets_and_auto_closes() {
        let transport = MockTransport::ok();
        let mut form = filled("Jane", "9876543210", "jane@x.com");
        form.update_field(Field::Purpose, "Collaboration");

        let state = form.submit(&transport, now()).await.unwrap();
        assert_eq!(state, SubmissionState::Succeeded);
        assert_eq!(form.message(), Some(SUCCESS_MESSAGE));
        assert_eq!(form.data(), &ContactFormData::default());
        assert!(form.is_open());

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].data.name, "Jane");
        assert_eq!(sent[0].data.purpose, Some(Purpose::Collaboration));
        assert_eq!(sent[0].timestamp, now());

        let ticket = form.auto_close_ticket().unwrap();
        form.auto_close(ticket);
        assert!(!form.is_open());
        assert_eq!(form.status(), SubmissionState::Idle);
        assert_eq!(form.message(), None);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_data() {
        let transport = MockTransport::failing();
        let mut form = filled("Jane", "9876543210", "jane@x.com");

        let state = form.submit(&transport, now()).await.unwrap();
        assert_eq!(state, SubmissionState::Failed);
        assert_eq!(form.message(), Some(FAILURE_MESSAGE));
        assert_eq!(form.value(Field::Name), "Jane");
        assert_eq!(form.value(Field::MobileNumber), "9876543210");
        assert_eq!(form.value(Field::Email), "jane@x.com");

        // failure doesn't schedule a close
        assert_eq!(form.auto_close_ticket(), None);
        assert!(form.is_open());

        // and the visitor can retry
        let retry = MockTransport::ok();
        let state = form.submit(&retry, now()).await.unwrap();
        assert_eq!(state, SubmissionState::Succeeded);
        assert_eq!(retry.calls(), 1);
    }

    #[test]
    fn test_submit_while_in_flight_is_rejected() {
        let mut form = filled("Jane", "9876543210", "jane@x.com");
        let first = form.begin_submit(now());
        assert!(first.is_ok());
        assert_eq!(form.status(), SubmissionState::Submitting);
        assert_eq!(form.message(), None);

        assert_eq!(form.begin_submit(now()), Err(SubmitRejected::InFlight));
        assert_eq!(form.status(), SubmissionState::Submitting);

        assert_eq!(form.finish_submit(Ok(())), Some(1));
        assert_eq!(form.status(), SubmissionState::Succeeded);
    }

    #[test]
    fn test_close_keeps_values() {
        let mut form = filled("Jane", "123", "jane@x.com");
        assert!(form.begin_submit(now()).is_err());
        assert!(form.errors().contains(Field::MobileNumber));

        form.close();
        assert!(!form.is_open());
        assert!(form.errors().is_empty());
        assert_eq!(form.message(), None);
        assert_eq!(form.value(Field::Name), "Jane");
        assert_eq!(form.value(Field::MobileNumber), "123");

        form.toggle();
        assert!(form.is_open());
        form.toggle();
        assert!(!form.is_open());
    }

    #[test]
    fn test_close_clears_failure_message() {
        let mut form = filled("Jane", "9876543210", "jane@x.com");
        form.begin_submit(now()).unwrap();
        form.finish_submit(Err(TransportError::NotConfigured));
        assert_eq!(form.message(), Some(FAILURE_MESSAGE));
        form.close();
        assert_eq!(form.status(), SubmissionState::Idle);
        assert_eq!(form.value(Field::Email), "jane@x.com");
    }

    #[test]
    fn test_auto_close_after_reopen_is_noop() {
        let mut form = filled("Jane", "9876543210", "jane@x.com");
        form.begin_submit(now()).unwrap();
        let ticket = form.finish_submit(Ok(())).unwrap();

        // visitor closes and starts typing again before the timer fires
        form.close();
        form.open();
        form.update_field(Field::Name, "Jo");
        form.auto_close(ticket);
        assert!(form.is_open());
        assert_eq!(form.value(Field::Name), "Jo");
    }

    #[test]
    fn test_stale_auto_close_spares_newer_success() {
        let mut form = filled("Jane", "9876543210", "jane@x.com");
        form.open();
        form.begin_submit(now()).unwrap();
        let first = form.finish_submit(Ok(())).unwrap();

        form.close();
        form.open();
        form.update_field(Field::Name, "Jo");
        form.update_field(Field::MobileNumber, "9876543210");
        form.update_field(Field::Email, "jo@x.com");
        form.begin_submit(now()).unwrap();
        let second = form.finish_submit(Ok(())).unwrap();
        assert_ne!(first, second);

        form.auto_close(first);
        assert!(form.is_open());
        assert_eq!(form.message(), Some(SUCCESS_MESSAGE));

        form.auto_close(second);
        assert!(!form.is_open());
        assert_eq!(form.message(), None);
    }

    #[test]
    fn test_close_while_submitting_keeps_submitting() {
        let mut form = filled("Jane", "9876543210", "jane@x.com");
        form.open();
        form.begin_submit(now()).unwrap();

        form.close();
        assert!(!form.is_open());
        assert_eq!(form.status(), SubmissionState::Submitting);
        assert_eq!(form.begin_submit(now()), Err(SubmitRejected::InFlight));

        assert!(form.finish_submit(Ok(())).is_some());
        assert_eq!(form.status(), SubmissionState::Succeeded);
    }

    #[test]
    fn test_resubmit_from_failed_clears_failure_message() {
        let mut form = filled("Jane", "9876543210", "jane@x.com");
        form.begin_submit(now()).unwrap();
        form.finish_submit(Err(TransportError::NotConfigured));
        assert_eq!(form.message(), Some(FAILURE_MESSAGE));

        form.begin_submit(now()).unwrap();
        assert_eq!(form.status(), SubmissionState::Submitting);
        assert_eq!(form.message(), None);
    }

    #[test]
    fn test_payload_shape() {
        let mut form = filled("Jane", "98-76-543-210", "jane@x.com");
        form.update_field(Field::CompanyName, "Acme");
        form.update_field(Field::Message, "hello");
        let submission = form.begin_submit(now()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane",
                "companyName": "Acme",
                "mobileNumber": "98-76-543-210",
                "email": "jane@x.com",
                "purpose": "",
                "message": "hello",
                "timestamp": "2026-03-14T09:26:53.000Z",
            })
        );
    }

    #[test]
    fn test_field_keys() {
        use strum::IntoEnumIterator;

        let keys = Field::iter().map(Field::key).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec!["name", "companyName", "mobileNumber", "email", "purpose", "message"]
        );
        let labels = Purpose::iter().map(Purpose::label).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["Project Inquiry", "Job Opportunity", "Collaboration", "General Inquiry"]
        );
    }

    impl ContactForm {
        fn error_after_validate(&self, field: Field) -> Option<String> {
            self.validate().get(field).map(ToString::to_string)
        }
    }
}
