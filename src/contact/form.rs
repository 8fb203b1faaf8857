//! Contact form schema and validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::i18n::Messages;

/// Services offered in the contact form's select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Service {
    Roofing,
    Siding,
    Gutters,
    #[serde(rename = "Insurance Claim")]
    InsuranceClaim,
    Other,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Roofing,
        Service::Siding,
        Service::Gutters,
        Service::InsuranceClaim,
        Service::Other,
    ];

    /// Form value, also what the webhook receives.
    pub fn value(&self) -> &'static str {
        match self {
            Service::Roofing => "Roofing",
            Service::Siding => "Siding",
            Service::Gutters => "Gutters",
            Service::InsuranceClaim => "Insurance Claim",
            Service::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Service> {
        Service::ALL.into_iter().find(|s| s.value() == value)
    }

    pub fn label(&self, t: &Messages) -> &'static str {
        match self {
            Service::Roofing => t.contact.service_roofing,
            Service::Siding => t.contact.service_siding,
            Service::Gutters => t.contact.service_gutters,
            Service::InsuranceClaim => t.contact.service_insurance,
            Service::Other => t.contact.service_other,
        }
    }
}

/// Form fields, named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Service,
        ContactField::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "nombre",
            ContactField::Email => "email",
            ContactField::Phone => "telefono",
            ContactField::Service => "servicio",
            ContactField::Message => "mensaje",
        }
    }

    /// Localized validation message for this field.
    pub fn error_message(&self, t: &Messages) -> &'static str {
        match self {
            ContactField::Name => t.contact.error_name,
            ContactField::Email => t.contact.error_email,
            ContactField::Phone => t.contact.error_phone,
            ContactField::Service => t.contact.error_service,
            ContactField::Message => t.contact.error_message_length,
        }
    }
}

/// Fields that failed validation, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<ContactField>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains(&field)
    }

    pub fn fields(&self) -> &[ContactField] {
        &self.0
    }

    fn push(&mut self, field: ContactField) {
        if !self.0.contains(&field) {
            self.0.push(field);
            self.0.sort();
        }
    }
}

/// Raw form input as submitted by the browser or API client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ContactInput {
    #[serde(default)]
    #[validate(length(min = 2))]
    pub nombre: String,

    #[serde(default)]
    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 10))]
    pub telefono: String,

    #[serde(default)]
    pub servicio: String,

    #[serde(default)]
    #[validate(length(min = 10))]
    pub mensaje: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub nombre: String,
    pub email: String,
    pub telefono: String,
    pub servicio: Service,
    pub mensaje: Option<String>,
}

/// JSON body sent to the contact webhook.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    pub nombre: &'a str,
    pub email: &'a str,
    pub telefono: &'a str,
    pub servicio: Service,
    pub mensaje: &'a str,
}

impl ContactSubmission {
    pub fn payload(&self) -> WebhookPayload<'_> {
        WebhookPayload {
            nombre: &self.nombre,
            email: &self.email,
            telefono: &self.telefono,
            servicio: self.servicio,
            mensaje: self.mensaje.as_deref().unwrap_or(""),
        }
    }
}

impl ContactInput {
    /// Validate against the form schema.
    ///
    /// An empty message counts as no message.
    pub fn check(&self) -> Result<ContactSubmission, FieldErrors> {
        let mut normalized = self.clone();
        normalized.mensaje = normalized.mensaje.filter(|m| !m.is_empty());

        let mut errors = FieldErrors::default();

        if let Err(validation) = normalized.validate() {
            let failed = validation.field_errors();
            for field in ContactField::ALL {
                if failed.contains_key(field.name()) {
                    errors.push(field);
                }
            }
        }

        let servicio = Service::from_value(&normalized.servicio);
        if servicio.is_none() {
            errors.push(ContactField::Service);
        }

        match servicio {
            Some(servicio) if errors.is_empty() => Ok(ContactSubmission {
                nombre: normalized.nombre,
                email: normalized.email,
                telefono: normalized.telefono,
                servicio,
                mensaje: normalized.mensaje,
            }),
            _ => Err(errors),
        }
    }
}
