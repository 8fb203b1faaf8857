//! Submission lifecycle of the contact form.
//!
//! ```text
//! Idle --submit(valid)--> Submitting --2xx--> Success
//!                                    \--else--> Error
//! Idle --submit(invalid)--> Idle (field errors set, nothing sent)
//! ```
//!
//! A new submit from `Success` or `Error` starts over from `Idle`.

use tracing::{error, warn};

use super::form::{ContactInput, FieldErrors};
use super::webhook::WebhookClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

/// Form values, field errors and the current [`FormState`].
///
/// The [`ContactError::AlreadySubmitting`] guard applies to one instance.
/// HTTP handlers build a fresh form per request, so it only fires when a
/// caller keeps a form around and submits it again before the first
/// submission settles.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    state: FormState,
    values: ContactInput,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn values(&self) -> &ContactInput {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The submit control is disabled while this is true.
    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Validate `input` and, when valid, deliver it through `webhook`.
    ///
    /// Invalid input leaves the form `Idle` with its field errors set and
    /// never touches the network. A successful delivery clears the values.
    pub async fn submit(
        &mut self,
        input: ContactInput,
        webhook: &WebhookClient,
    ) -> Result<FormState, ContactError> {
        if self.is_submitting() {
            warn!("Ignoring contact submit while another is in flight");
            return Err(ContactError::AlreadySubmitting);
        }

        self.state = FormState::Idle;
        self.errors = FieldErrors::default();
        self.values = input;

        let submission = match self.values.check() {
            Ok(submission) => submission,
            Err(errors) => {
                self.errors = errors;
                return Ok(self.state);
            }
        };

        self.state = FormState::Submitting;

        self.state = match webhook.send(&submission).await {
            Ok(()) => {
                self.values = ContactInput::default();
                FormState::Success
            }
            Err(e) => {
                error!(error = %e, "Error submitting form");
                FormState::Error
            }
        };

        Ok(self.state)
    }
}

#[cfg(test)]
impl ContactForm {
    pub(crate) fn in_state(state: FormState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::ContactField;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn valid_input() -> ContactInput {
        ContactInput {
            nombre: "Maria Lopez".to_string(),
            email: "maria@example.com".to_string(),
            telefono: "9145550123".to_string(),
            servicio: "Gutters".to_string(),
            mensaje: Some("Need new gutters on a two-story colonial".to_string()),
        }
    }

    #[test]
    fn test_new_form_is_idle() {
        let form = ContactForm::new();
        assert_eq!(form.state(), FormState::Idle);
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let webhook = WebhookClient::new(server.uri());
        let mut form = ContactForm::new();
        let input = ContactInput {
            email: "not-an-email".to_string(),
            ..valid_input()
        };

        let state = form.submit(input, &webhook).await.unwrap();

        assert_eq!(state, FormState::Idle);
        assert!(form.errors().contains(ContactField::Email));
        assert_eq!(form.values().email, "not-an-email");
    }

    #[tokio::test]
    async fn test_valid_submit_posts_once_and_clears_values() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/lead"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let webhook = WebhookClient::new(format!("{}/lead", server.uri()));
        let mut form = ContactForm::new();

        let state = form.submit(valid_input(), &webhook).await.unwrap();

        assert_eq!(state, FormState::Success);
        assert_eq!(form.values(), &ContactInput::default());
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_webhook_failure_keeps_values() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let webhook = WebhookClient::new(server.uri());
        let mut form = ContactForm::new();

        let state = form.submit(valid_input(), &webhook).await.unwrap();

        assert_eq!(state, FormState::Error);
        assert_eq!(form.values(), &valid_input());
    }

    #[tokio::test]
    async fn test_resubmit_after_error_starts_over() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let webhook = WebhookClient::new(server.uri());
        let mut form = ContactForm::new();

        assert_eq!(
            form.submit(valid_input(), &webhook).await.unwrap(),
            FormState::Error
        );
        assert_eq!(
            form.submit(valid_input(), &webhook).await.unwrap(),
            FormState::Success
        );
    }

    #[tokio::test]
    async fn test_submit_rejected_while_submitting() {
        let webhook = WebhookClient::new("http://127.0.0.1:9");
        let mut form = ContactForm::in_state(FormState::Submitting);

        let result = form.submit(valid_input(), &webhook).await;
        assert_eq!(result, Err(ContactError::AlreadySubmitting));
        assert_eq!(form.state(), FormState::Submitting);
    }
}
