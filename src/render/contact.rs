use maud::{html, Markup};

use super::{layout, PageContext};
use crate::contact::{ContactField, ContactForm, FormState, Service};

/// Contact page rendered in whatever state `form` is in.
pub fn contact_page(ctx: &PageContext, form: &ContactForm) -> Markup {
    let t = ctx.t;

    let content = html! {
        section.page-header {
            h1 { (t.contact.title) }
            p.subtitle { (t.contact.subtitle) }
        }

        div.contact-layout {
            div.contact-form {
                @match form.state() {
                    FormState::Success => {
                        div.alert.success role="status" {
                            h2 { (t.contact.success_title) }
                            p { (t.contact.success_message) }
                        }
                    }
                    FormState::Error => {
                        div.alert.error role="alert" {
                            h2 { (t.contact.error_title) }
                            p {
                                (t.contact.error_message) " "
                                a href=(ctx.tel_href()) { (ctx.phone) }
                            }
                        }
                    }
                    FormState::Idle | FormState::Submitting => {}
                }
                (form_fields(ctx, form))
            }

            aside.contact-info {
                h2 { (t.contact.call_us) }
                p { a.phone href=(ctx.tel_href()) { (ctx.phone) } }
                p.hours { (t.contact.hours) }
                p { (t.footer.service_area) }
            }
        }
    };

    layout::page(ctx, Some(t.contact.title), Some(t.contact.subtitle), content)
}

fn form_fields(ctx: &PageContext, form: &ContactForm) -> Markup {
    let t = ctx.t;
    let values = form.values();
    let submitting = form.is_submitting();

    html! {
        form method="post" action=(ctx.href("/contact")) novalidate {
            div.field {
                label for="nombre" { (t.contact.form_name) " " (t.contact.required) }
                input #nombre type="text" name="nombre" required autocomplete="name"
                    placeholder=(t.contact.form_name_placeholder) value=(values.nombre);
                (field_error(ctx, form, ContactField::Name))
            }
            div.field {
                label for="email" { (t.contact.form_email) " " (t.contact.required) }
                input #email type="email" name="email" required autocomplete="email"
                    placeholder=(t.contact.form_email_placeholder) value=(values.email);
                (field_error(ctx, form, ContactField::Email))
            }
            div.field {
                label for="telefono" { (t.contact.form_phone) " " (t.contact.required) }
                input #telefono type="tel" name="telefono" required autocomplete="tel"
                    placeholder=(t.contact.form_phone_placeholder) value=(values.telefono);
                (field_error(ctx, form, ContactField::Phone))
            }
            div.field {
                label for="servicio" { (t.contact.form_service) " " (t.contact.required) }
                select #servicio name="servicio" required {
                    option value="" selected[values.servicio.is_empty()] { (t.contact.form_select_service) }
                    @for service in Service::ALL {
                        option value=(service.value()) selected[values.servicio == service.value()] {
                            (service.label(t))
                        }
                    }
                }
                (field_error(ctx, form, ContactField::Service))
            }
            div.field {
                label for="mensaje" { (t.contact.form_message) }
                textarea #mensaje name="mensaje" rows="5" placeholder=(t.contact.form_message_placeholder) {
                    (values.mensaje.as_deref().unwrap_or(""))
                }
                (field_error(ctx, form, ContactField::Message))
            }
            button.button type="submit" disabled[submitting] {
                @if submitting { (t.contact.submitting) } @else { (t.contact.submit) }
            }
        }
    }
}

fn field_error(ctx: &PageContext, form: &ContactForm, field: ContactField) -> Markup {
    html! {
        @if form.errors().contains(field) {
            p.field-error id=(format!("{}-error", field.name())) role="alert" {
                (field.error_message(ctx.t))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactInput, WebhookClient};
    use crate::i18n::{Locale, ENGLISH_MESSAGES, SPANISH_MESSAGES};
    use crate::render::test_support::config;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    fn render(locale: Locale, form: &ContactForm) -> String {
        let config = config();
        let ctx = PageContext::new(&config, None, locale, "/contact");
        contact_page(&ctx, form).into_string()
    }

    fn valid_input() -> ContactInput {
        ContactInput {
            nombre: "Maria Lopez".to_string(),
            email: "maria@example.com".to_string(),
            telefono: "9145550123".to_string(),
            servicio: "Insurance Claim".to_string(),
            mensaje: None,
        }
    }

    #[test]
    fn test_idle_form() {
        let html = render(Locale::ENGLISH, &ContactForm::new());
        assert!(html.contains(r#"action="/en/contact""#));
        assert!(html.contains(ENGLISH_MESSAGES.contact.submit));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("field-error"));
    }

    #[test]
    fn test_submitting_disables_button() {
        let html = render(Locale::ENGLISH, &ContactForm::in_state(FormState::Submitting));
        assert!(html.contains("disabled"));
        assert!(html.contains(ENGLISH_MESSAGES.contact.submitting));
    }

    #[test]
    fn test_service_options_are_localized() {
        let html = render(Locale::SPANISH, &ContactForm::new());
        assert!(html.contains(r#"value="Insurance Claim""#));
        assert!(html.contains(SPANISH_MESSAGES.contact.service_insurance));
    }

    #[tokio::test]
    async fn test_validation_errors_keep_values() {
        let webhook = WebhookClient::new("http://127.0.0.1:9");
        let mut form = ContactForm::new();
        let input = ContactInput {
            email: "not-an-email".to_string(),
            ..valid_input()
        };
        form.submit(input, &webhook).await.unwrap();

        let html = render(Locale::SPANISH, &form);
        assert!(html.contains(SPANISH_MESSAGES.contact.error_email));
        assert!(html.contains(r#"value="not-an-email""#));
        assert!(html.contains("selected"));
    }

    #[tokio::test]
    async fn test_success_banner_and_cleared_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let webhook = WebhookClient::new(server.uri());
        let mut form = ContactForm::new();
        form.submit(valid_input(), &webhook).await.unwrap();

        let html = render(Locale::ENGLISH, &form);
        assert!(html.contains(ENGLISH_MESSAGES.contact.success_title));
        assert!(!html.contains("Maria Lopez"));
    }

    #[tokio::test]
    async fn test_error_banner_offers_phone() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let webhook = WebhookClient::new(server.uri());
        let mut form = ContactForm::new();
        form.submit(valid_input(), &webhook).await.unwrap();

        let html = render(Locale::ENGLISH, &form);
        assert!(html.contains(ENGLISH_MESSAGES.contact.error_title));
        assert!(html.contains(r#"href="tel:+19145550123""#));
        assert!(html.contains("Maria Lopez"));
    }
}
