//! Contact form: validation, webhook delivery and submission state.

mod form;
mod state;
mod webhook;

pub use form::{ContactField, ContactInput, ContactSubmission, FieldErrors, Service, WebhookPayload};
pub use state::{ContactError, ContactForm, FormState};
pub use webhook::{WebhookClient, WebhookError};
