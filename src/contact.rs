use async_trait::async_trait;
use dioxus::prelude::*;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

use crate::config::RuntimeConfig;
use crate::globe::GlobeCanvas;
use crate::hooks::delay;

pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("request failed: {0}")]
    Network(String),
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("submission rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub access_key: String,
    pub subject: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FormResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Identifies one shown notification so a late hide timer cannot close a
/// newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormController {
    name: String,
    email: String,
    message: String,
    submitting: bool,
    notification_visible: bool,
    notification_serial: u64,
}

impl ContactFormController {
    pub fn new(initial_message: impl Into<String>) -> Self {
        Self {
            message: initial_message.into(),
            ..Self::default()
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification_visible(&self) -> bool {
        self.notification_visible
    }

    /// Validates the fields and enters the submitting state, returning the
    /// payload to post.
    pub fn begin_submit(&mut self, access_key: &str) -> Result<ContactPayload, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        for (field, label) in [
            (ContactField::Name, "name"),
            (ContactField::Email, "email"),
            (ContactField::Message, "message"),
        ] {
            if self.field(field).trim().is_empty() {
                return Err(SubmitError::MissingField(label));
            }
        }
        self.submitting = true;
        Ok(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            access_key: access_key.to_string(),
            subject: format!("New message from {}", self.name),
        })
    }

    /// Leaves the submitting state. On success the fields are cleared and a
    /// notification is shown; the returned ticket hides it later.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Option<NotificationTicket> {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.notification_visible = true;
                self.notification_serial += 1;
                Some(NotificationTicket(self.notification_serial))
            }
            Err(err) => {
                tracing::error!(error = %err, "contact: submission failed");
                None
            }
        }
    }

    pub fn dismiss_notification(&mut self, ticket: NotificationTicket) {
        if ticket.0 == self.notification_serial {
            self.notification_visible = false;
        }
    }
}

#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, SubmitError>;
}

pub struct HttpTransport;

#[async_trait(?Send)]
impl FormTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, SubmitError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|err| SubmitError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| SubmitError::Decode(err.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}

/// Posts the payload and interprets the endpoint's `success` flag.
pub async fn post_contact<T: FormTransport + ?Sized>(
    transport: &T,
    endpoint: &str,
    payload: &ContactPayload,
) -> Result<(), SubmitError> {
    let body = serde_json::to_string(payload).map_err(|err| SubmitError::Decode(err.to_string()))?;
    let response = transport.post_json(endpoint, body).await?;
    let decoded: FormResponse =
        serde_json::from_str(&response.body).map_err(|err| SubmitError::Decode(err.to_string()))?;
    if decoded.success {
        return Ok(());
    }
    Err(SubmitError::Rejected {
        status: response.status,
        message: decoded
            .message
            .unwrap_or_else(|| "no message".to_string()),
    })
}

/// Somewhere the form controller lives while a submission is in flight.
pub trait FormCell {
    fn update<R>(&mut self, change: impl FnOnce(&mut ContactFormController) -> R) -> R;
}

impl FormCell for Signal<ContactFormController> {
    fn update<R>(&mut self, change: impl FnOnce(&mut ContactFormController) -> R) -> R {
        change(&mut *self.write())
    }
}

/// Posts `payload`, settles the form and, on success, hides the notification
/// once `sleep(NOTIFICATION_DURATION)` resolves. Returns whether the message
/// was delivered.
pub async fn deliver_submission<C, T, S, F>(
    mut form: C,
    transport: &T,
    endpoint: &str,
    payload: ContactPayload,
    sleep: S,
) -> bool
where
    C: FormCell,
    T: FormTransport + ?Sized,
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    let outcome = post_contact(transport, endpoint, &payload).await;
    let Some(ticket) = form.update(|form| form.finish_submit(outcome)) else {
        return false;
    };
    sleep(NOTIFICATION_DURATION).await;
    form.update(|form| form.dismiss_notification(ticket));
    true
}

#[component]
pub fn ContactPage(initial_message: String) -> Element {
    let config = use_context::<RuntimeConfig>();
    let mut form = use_signal(move || ContactFormController::new(initial_message));

    let submitting = form.read().is_submitting();
    let notification_visible = form.read().notification_visible();
    let name = form.read().field(ContactField::Name).to_string();
    let email = form.read().field(ContactField::Email).to_string();
    let message = form.read().field(ContactField::Message).to_string();

    rsx! {
        document::Title { "Contact | SID" }
        main { class: "contact-page",
            div { class: "container contact-grid",
                div {
                    p { class: "eyebrow", "GET IN TOUCH" }
                    h1 { class: "page-title contact-title", "Contact." }
                    form {
                        onsubmit: move |event| {
                            event.prevent_default();
                            let payload = match form.write().begin_submit(&config.form_access_key) {
                                Ok(payload) => payload,
                                Err(err) => {
                                    tracing::debug!(error = %err, "contact: submit refused");
                                    return;
                                }
                            };
                            let endpoint = config.form_endpoint.clone();
                            spawn(async move {
                                deliver_submission(form, &HttpTransport, &endpoint, payload, delay).await;
                            });
                        },
                        div { class: "form-row",
                            div {
                                label { r#for: "name", class: "form-label", "Name" }
                                input {
                                    id: "name",
                                    r#type: "text",
                                    placeholder: "Your name",
                                    required: true,
                                    value: "{name}",
                                    class: "form-field",
                                    oninput: move |event| form.write().set_field(ContactField::Name, event.value()),
                                }
                            }
                            div {
                                label { r#for: "email", class: "form-label", "Email" }
                                input {
                                    id: "email",
                                    r#type: "email",
                                    placeholder: "Your email",
                                    required: true,
                                    value: "{email}",
                                    class: "form-field",
                                    oninput: move |event| form.write().set_field(ContactField::Email, event.value()),
                                }
                            }
                        }
                        div { class: "form-block",
                            label { r#for: "message", class: "form-label", "Message" }
                            textarea {
                                id: "message",
                                rows: "5",
                                required: true,
                                value: "{message}",
                                class: "form-field",
                                oninput: move |event| form.write().set_field(ContactField::Message, event.value()),
                            }
                        }
                        div {
                            button {
                                r#type: "submit",
                                class: "submit-button",
                                disabled: submitting,
                                if submitting { "Sending..." } else { "Send Message" }
                            }
                            if notification_visible {
                                div { class: "notification", "Message Sent Successfully!" }
                            }
                        }
                    }
                }
                div { class: "globe-column",
                    GlobeCanvas {}
                }
            }
        }
    }
}
