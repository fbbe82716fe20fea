//! Contact form state and the submission lifecycle
//! `Idle -> Submitting -> Submitted | Errored`.

use std::time::Duration;

use thiserror::Error;

use crate::relay::{MailRelay, RelayConfig, RelayError, RelayMessage};

/// How long the success panel stays up before the form comes back.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name / id.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "How can I help you?",
            Self::Message => "Your message here...",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// First empty field in form order, whitespace counting as empty.
    pub fn validate(&self) -> Result<(), ContactError> {
        match Field::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
        {
            Some(field) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Errored(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.key())]
    MissingField(Field),
    #[error("mail relay is not configured")]
    NotConfigured,
    #[error("a message is already being sent")]
    InFlight,
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl ContactError {
    pub fn user_message(&self, fallback_email: &str) -> String {
        match self {
            Self::MissingField(field) => format!("Please fill in {}.", field.label()),
            Self::NotConfigured => format!(
                "Contact form is not configured yet. Please contact me directly at {fallback_email}"
            ),
            Self::InFlight => "Your message is still being sent.".to_string(),
            Self::Relay(_) => {
                "Failed to send message. Please try again or contact me directly via email."
                    .to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFlow {
    state: SubmissionState,
    fallback_email: String,
}

impl ContactFlow {
    pub fn new(fallback_email: impl Into<String>) -> Self {
        Self {
            state: SubmissionState::Idle,
            fallback_email: fallback_email.into(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Errored(msg) => Some(msg),
            _ => None,
        }
    }

    /// Validates and moves to `Submitting`, yielding the message to relay.
    ///
    /// An overlapping submission leaves the state untouched. Blank fields and
    /// unconfigured credentials fail here, before anything is sent, and show
    /// their message in the form.
    pub fn begin(
        &mut self,
        form: &ContactForm,
        config: &RelayConfig,
    ) -> Result<RelayMessage, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::InFlight);
        }
        if let Err(err) = form.validate() {
            return Err(self.fail(err));
        }
        if !config.is_configured() {
            log::warn!("contact form submitted without relay credentials");
            return Err(self.fail(ContactError::NotConfigured));
        }
        self.state = SubmissionState::Submitting;
        Ok(RelayMessage::new(config, form))
    }

    /// Applies the relay outcome. Clears `form` on success.
    pub fn complete(
        &mut self,
        result: Result<(), RelayError>,
        form: &mut ContactForm,
    ) -> Result<(), ContactError> {
        if !self.is_submitting() {
            log::warn!("relay result arrived with no submission in flight");
            return Ok(());
        }
        match result {
            Ok(()) => {
                self.state = SubmissionState::Submitted;
                form.clear();
                Ok(())
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Returns the success panel to the idle form.
    pub fn dismiss(&mut self) {
        if self.is_submitted() {
            self.state = SubmissionState::Idle;
        }
    }

    pub async fn submit<R>(
        &mut self,
        form: &mut ContactForm,
        config: &RelayConfig,
        relay: &R,
    ) -> Result<(), ContactError>
    where
        R: MailRelay + ?Sized,
    {
        let message = self.begin(form, config)?;
        let result = relay.send(&message).await;
        self.complete(result, form)
    }

    fn fail(&mut self, err: ContactError) -> ContactError {
        self.state = SubmissionState::Errored(err.user_message(&self.fallback_email));
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use http::StatusCode;
    use std::cell::RefCell;

    const OWNER: &str = "owner@example.com";

    // Records every message and answers with a canned result
    struct FakeRelay {
        sent: RefCell<Vec<RelayMessage>>,
        fail_with: Option<RelayError>,
    }

    impl FakeRelay {
        fn ok() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(err: RelayError) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                fail_with: Some(err),
            }
        }
    }

    #[async_trait(?Send)]
    impl MailRelay for FakeRelay {
        async fn send(&self, message: &RelayMessage) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(message.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn config() -> RelayConfig {
        RelayConfig {
            service_id: "service_xyz".to_string(),
            template_id: "template_abc".to_string(),
            public_key: "key_123".to_string(),
            to_name: "Owner".to_string(),
            to_email: OWNER.to_string(),
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Let's talk".to_string(),
        }
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = filled();
        assert!(form.validate().is_ok());

        form.set(Field::Message, "   ".to_string());
        assert_eq!(
            form.validate(),
            Err(ContactError::MissingField(Field::Message))
        );

        form.set(Field::Email, String::new());
        assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Email)));
    }

    #[test]
    fn test_successful_submission_lifecycle() {
        let relay = FakeRelay::ok();
        let mut flow = ContactFlow::new(OWNER);
        let mut form = filled();
        assert_eq!(flow.state(), &SubmissionState::Idle);

        let message = flow.begin(&form, &config()).unwrap();
        assert_eq!(flow.state(), &SubmissionState::Submitting);
        assert_eq!(message.template_params.to_email, OWNER);

        let result = block_on(relay.send(&message));
        flow.complete(result, &mut form).unwrap();
        assert_eq!(flow.state(), &SubmissionState::Submitted);
        assert_eq!(form, ContactForm::default());

        flow.dismiss();
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert_eq!(relay.sent.borrow().len(), 1);
    }

    #[test]
    fn test_submit_composes_lifecycle() {
        let relay = FakeRelay::ok();
        let mut flow = ContactFlow::new(OWNER);
        let mut form = filled();

        block_on(flow.submit(&mut form, &config(), &relay)).unwrap();
        assert!(flow.is_submitted());
        assert!(form.name.is_empty() && form.message.is_empty());
        assert_eq!(relay.sent.borrow()[0].template_params.from_name, "Ada");
    }

    #[test]
    fn test_unconfigured_relay_never_called() {
        let relay = FakeRelay::ok();
        let mut flow = ContactFlow::new(OWNER);
        let mut form = filled();
        let mut cfg = config();
        cfg.service_id = "your_service_id".to_string();

        let err = block_on(flow.submit(&mut form, &cfg, &relay)).unwrap_err();
        assert_eq!(err, ContactError::NotConfigured);
        assert!(relay.sent.borrow().is_empty());
        let msg = flow.error_message().unwrap();
        assert!(msg.contains("not configured"));
        assert!(msg.contains(OWNER));
        // fields survive so the user can copy them elsewhere
        assert_eq!(form, filled());
    }

    #[test]
    fn test_relay_failure_shows_retry_message() {
        let relay = FakeRelay::failing(RelayError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        });
        let mut flow = ContactFlow::new(OWNER);
        let mut form = filled();

        let err = block_on(flow.submit(&mut form, &config(), &relay)).unwrap_err();
        assert!(matches!(err, ContactError::Relay(_)));
        assert_eq!(
            flow.error_message(),
            Some("Failed to send message. Please try again or contact me directly via email.")
        );
        assert_eq!(form, filled());

        // user resubmits after the relay recovers
        let relay = FakeRelay::ok();
        block_on(flow.submit(&mut form, &config(), &relay)).unwrap();
        assert!(flow.is_submitted());
    }

    #[test]
    fn test_empty_message_blocked_before_submitting() {
        let relay = FakeRelay::ok();
        let mut flow = ContactFlow::new(OWNER);
        let mut form = filled();
        form.message.clear();

        let err = block_on(flow.submit(&mut form, &config(), &relay)).unwrap_err();
        assert_eq!(err, ContactError::MissingField(Field::Message));
        assert!(!flow.is_submitting());
        assert_eq!(flow.error_message(), Some("Please fill in Message."));
        assert!(relay.sent.borrow().is_empty());
    }

    #[test]
    fn test_whitespace_field_shows_message() {
        let relay = FakeRelay::ok();
        let mut flow = ContactFlow::new(OWNER);
        let mut form = filled();
        form.set(Field::Name, "   ".to_string());

        assert_eq!(
            flow.begin(&form, &config()).unwrap_err(),
            ContactError::MissingField(Field::Name)
        );
        assert_eq!(flow.error_message(), Some("Please fill in Your Name."));
        assert!(relay.sent.borrow().is_empty());

        // fixing the field and resubmitting goes through
        form.set(Field::Name, "Ada".to_string());
        block_on(flow.submit(&mut form, &config(), &relay)).unwrap();
        assert!(flow.is_submitted());
        assert_eq!(relay.sent.borrow().len(), 1);
    }

    #[test]
    fn test_success_display_duration() {
        assert_eq!(SUCCESS_DISPLAY, Duration::from_secs(5));
    }

    #[test]
    fn test_second_begin_while_in_flight() {
        let mut flow = ContactFlow::new(OWNER);
        let form = filled();
        flow.begin(&form, &config()).unwrap();
        assert_eq!(
            flow.begin(&form, &config()).unwrap_err(),
            ContactError::InFlight
        );
        assert!(flow.is_submitting());
        assert_eq!(flow.error_message(), None);
    }

    #[test]
    fn test_dismiss_only_leaves_submitted() {
        let mut flow = ContactFlow::new(OWNER);
        let mut form = filled();
        flow.begin(&form, &config()).unwrap();
        flow.complete(Err(RelayError::Transport("offline".to_string())), &mut form)
            .unwrap_err();
        flow.dismiss();
        assert!(flow.error_message().is_some());
    }

    #[test]
    fn test_late_result_ignored() {
        let mut flow = ContactFlow::new(OWNER);
        let mut form = filled();
        flow.complete(Ok(()), &mut form).unwrap();
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert_eq!(form, filled());
    }
}
