use async_trait::async_trait;
use portfolio_app::contact::{
    deliver_submission, post_contact, ContactField, ContactFormController, FormCell, FormTransport,
    SubmitError, TransportResponse, NOTIFICATION_DURATION,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const ENDPOINT: &str = "https://forms.test/submit";

struct MockTransport {
    reply: Result<TransportResponse, String>,
    seen: RefCell<Vec<(String, serde_json::Value)>>,
}

impl MockTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(TransportResponse {
                status,
                body: body.to_string(),
            }),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn offline() -> Self {
        Self {
            reply: Err("connection refused".to_string()),
            seen: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl FormTransport for MockTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, SubmitError> {
        let parsed = serde_json::from_str(&body).unwrap();
        self.seen.borrow_mut().push((url.to_string(), parsed));
        self.reply.clone().map_err(SubmitError::Network)
    }
}

#[derive(Clone)]
struct SharedForm(Rc<RefCell<ContactFormController>>);

impl FormCell for SharedForm {
    fn update<R>(&mut self, change: impl FnOnce(&mut ContactFormController) -> R) -> R {
        change(&mut *self.0.borrow_mut())
    }
}

/// What the form looked like each time the hide timer was started.
#[derive(Default)]
struct SleepLog {
    calls: RefCell<Vec<(Duration, bool)>>,
}

fn filled_form() -> ContactFormController {
    let mut form = ContactFormController::new("Hello");
    form.set_field(ContactField::Name, "Ada".to_string());
    form.set_field(ContactField::Email, "ada@example.com".to_string());
    form
}

fn submit(form: &mut ContactFormController, transport: &MockTransport) -> bool {
    let payload = form.begin_submit("test-key").unwrap();
    let outcome = pollster::block_on(post_contact(transport, ENDPOINT, &payload));
    form.finish_submit(outcome).is_some()
}

#[test]
fn successful_submission_clears_form_and_notifies() {
    let transport = MockTransport::replying(200, r#"{"success":true,"message":"Email sent"}"#);
    let mut form = filled_form();

    assert!(submit(&mut form, &transport));

    assert!(!form.is_submitting());
    assert!(form.notification_visible());
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        assert_eq!(form.field(field), "");
    }

    let seen = transport.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, ENDPOINT);
    assert_eq!(seen[0].1["subject"], "New message from Ada");
    assert_eq!(seen[0].1["access_key"], "test-key");
    assert_eq!(seen[0].1["message"], "Hello");
}

#[test]
fn rejected_submission_keeps_input() {
    let transport = MockTransport::replying(400, r#"{"success":false,"message":"Invalid key"}"#);
    let mut form = filled_form();

    assert!(!submit(&mut form, &transport));

    assert!(!form.is_submitting());
    assert!(!form.notification_visible());
    assert_eq!(form.field(ContactField::Name), "Ada");
    assert_eq!(form.field(ContactField::Message), "Hello");
}

#[test]
fn network_failure_keeps_input() {
    let transport = MockTransport::offline();
    let mut form = filled_form();

    assert!(!submit(&mut form, &transport));

    assert!(!form.notification_visible());
    assert_eq!(form.field(ContactField::Email), "ada@example.com");
}

#[test]
fn undecodable_response_is_a_failure() {
    let transport = MockTransport::replying(200, "<html>ok</html>");
    let form = filled_form();
    let payload = {
        let mut form = form.clone();
        form.begin_submit("test-key").unwrap()
    };

    let outcome = pollster::block_on(post_contact(&transport, ENDPOINT, &payload));

    assert!(matches!(outcome, Err(SubmitError::Decode(_))));
}

#[test]
fn blank_submission_never_reaches_transport() {
    let transport = MockTransport::replying(200, r#"{"success":true}"#);
    let mut form = ContactFormController::new("   ");
    form.set_field(ContactField::Name, "Ada".to_string());
    form.set_field(ContactField::Email, "ada@example.com".to_string());

    assert!(matches!(
        form.begin_submit("test-key"),
        Err(SubmitError::MissingField("message"))
    ));
    assert!(transport.seen.borrow().is_empty());
}

#[test]
fn notification_hides_only_for_its_own_ticket() {
    let transport = MockTransport::replying(200, r#"{"success":true}"#);
    let mut form = filled_form();

    let payload = form.begin_submit("test-key").unwrap();
    let outcome = pollster::block_on(post_contact(&transport, ENDPOINT, &payload));
    let first = form.finish_submit(outcome).unwrap();

    form.set_field(ContactField::Name, "Grace".to_string());
    form.set_field(ContactField::Email, "grace@example.com".to_string());
    form.set_field(ContactField::Message, "Second".to_string());
    let payload = form.begin_submit("test-key").unwrap();
    let outcome = pollster::block_on(post_contact(&transport, ENDPOINT, &payload));
    let second = form.finish_submit(outcome).unwrap();

    form.dismiss_notification(first);
    assert!(form.notification_visible());
    form.dismiss_notification(second);
    assert!(!form.notification_visible());
}

#[test]
fn notification_hides_after_four_seconds() {
    assert_eq!(NOTIFICATION_DURATION, Duration::from_secs(4));

    let transport = MockTransport::replying(200, r#"{"success":true}"#);
    let form = SharedForm(Rc::new(RefCell::new(filled_form())));
    let payload = form.0.borrow_mut().begin_submit("test-key").unwrap();
    let log = SleepLog::default();

    let delivered = pollster::block_on(deliver_submission(
        form.clone(),
        &transport,
        ENDPOINT,
        payload,
        |duration| {
            let visible = form.0.borrow().notification_visible();
            log.calls.borrow_mut().push((duration, visible));
            std::future::ready(())
        },
    ));

    assert!(delivered);
    assert_eq!(*log.calls.borrow(), vec![(Duration::from_secs(4), true)]);
    assert!(!form.0.borrow().notification_visible());
    assert!(!form.0.borrow().is_submitting());
}

#[test]
fn failed_delivery_never_starts_the_hide_timer() {
    let transport = MockTransport::offline();
    let form = SharedForm(Rc::new(RefCell::new(filled_form())));
    let payload = form.0.borrow_mut().begin_submit("test-key").unwrap();
    let log = SleepLog::default();

    let delivered = pollster::block_on(deliver_submission(
        form.clone(),
        &transport,
        ENDPOINT,
        payload,
        |duration| {
            log.calls.borrow_mut().push((duration, true));
            std::future::ready(())
        },
    ));

    assert!(!delivered);
    assert!(log.calls.borrow().is_empty());
    assert!(!form.0.borrow().is_submitting());
    assert_eq!(form.0.borrow().field(ContactField::Name), "Ada");
}
