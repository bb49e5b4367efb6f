//! Contact inquiry submission: the transport seam, the one-shot `submit`
//! operation and the form reducer that owns [`SubmissionState`].

use std::rc::Rc;

use log::{error, info, warn};
use tokio_util::sync::CancellationToken;
use yew::Reducible;

use crate::api::ApiError;
use crate::models::{Ack, ContactInquiry};
use crate::validation::{Field, InquiryFields, ValidationError};

/// How long the success confirmation stays up before the form comes back.
pub const SUCCESS_RESET_MS: u32 = 5_000;

pub const GENERIC_FAILURE_MESSAGE: &str =
    "There was an error sending your message. Please try again or contact us directly.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait InquiryTransport {
    async fn send_inquiry(&self, inquiry: &ContactInquiry) -> Result<Ack, ApiError>;
}

/// Sends `inquiry` exactly once and reports the resulting state.
///
/// The cause of a failure is logged here; callers only ever see
/// [`GENERIC_FAILURE_MESSAGE`].
pub async fn submit<T: InquiryTransport>(transport: &T, inquiry: &ContactInquiry) -> SubmissionState {
    match transport.send_inquiry(inquiry).await {
        Ok(ack) if ack.is_accepted() => {
            info!("Inquiry accepted (id: {:?})", ack.id);
            SubmissionState::Succeeded
        }
        Ok(ack) => {
            warn!("Inquiry not accepted: {:?}", ack.message);
            SubmissionState::Failed(GENERIC_FAILURE_MESSAGE.to_string())
        }
        Err(e) => {
            error!("Failed to submit inquiry: {}", e);
            SubmissionState::Failed(GENERIC_FAILURE_MESSAGE.to_string())
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: InquiryFields,
    pub state: SubmissionState,
    /// Bumped on every success so a stale reset timer cannot clear a newer one.
    pub generation: u32,
    pub validation: Option<ValidationError>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    Rejected(ValidationError),
    Started,
    Finished(SubmissionState),
    ExpireSuccess(u32),
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                if self.state.is_submitting() {
                    return self;
                }
                next.fields.set(field, value);
                next.validation = None;
                if matches!(next.state, SubmissionState::Failed(_)) {
                    next.state = SubmissionState::Idle;
                }
            }
            FormAction::Rejected(err) => {
                if self.state.is_submitting() {
                    return self;
                }
                next.validation = Some(err);
            }
            FormAction::Started => {
                next.state = SubmissionState::Submitting;
                next.validation = None;
            }
            FormAction::Finished(outcome) => {
                if !self.state.is_submitting() {
                    return self;
                }
                match outcome {
                    SubmissionState::Succeeded => {
                        next.fields = InquiryFields::default();
                        next.generation = next.generation.wrapping_add(1);
                        next.state = SubmissionState::Succeeded;
                    }
                    SubmissionState::Failed(reason) => next.state = SubmissionState::Failed(reason),
                    SubmissionState::Idle | SubmissionState::Submitting => {
                        next.state = SubmissionState::Idle;
                    }
                }
            }
            FormAction::ExpireSuccess(generation) => {
                if self.state != SubmissionState::Succeeded || self.generation != generation {
                    return self;
                }
                next.state = SubmissionState::Idle;
            }
        }
        Rc::new(next)
    }
}

/// Builds the callback the success timer runs, or `None` when there is no
/// success to expire. Once `alive` is cancelled the callback does nothing.
pub fn success_reset<F>(
    form: &ContactForm,
    alive: CancellationToken,
    dispatch: F,
) -> Option<impl FnOnce() + 'static>
where
    F: Fn(FormAction) + 'static,
{
    if form.state != SubmissionState::Succeeded {
        return None;
    }
    let generation = form.generation;
    Some(move || {
        if !alive.is_cancelled() {
            dispatch(FormAction::ExpireSuccess(generation));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::SubmitGate;
    use crate::validation::validate_inquiry;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    enum Reply {
        Accept,
        Refuse,
        Fail,
    }

    struct FakeTransport {
        reply: Reply,
        calls: Cell<usize>,
        last: RefCell<Option<ContactInquiry>>,
    }

    impl FakeTransport {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl InquiryTransport for FakeTransport {
        async fn send_inquiry(&self, inquiry: &ContactInquiry) -> Result<Ack, ApiError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(inquiry.clone());
            match self.reply {
                Reply::Accept => Ok(serde_json::from_value(json!({"success": true, "id": "42"})).unwrap()),
                Reply::Refuse => Ok(serde_json::from_value(json!({"success": false})).unwrap()),
                Reply::Fail => Err(ApiError::Network("connection refused".into())),
            }
        }
    }

    fn jane() -> InquiryFields {
        InquiryFields {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Need a database".into(),
            ..InquiryFields::default()
        }
    }

    fn filled_form() -> Rc<ContactForm> {
        let mut form = Rc::new(ContactForm::default());
        let fields = jane();
        for (field, value) in [
            (Field::Name, fields.name),
            (Field::Email, fields.email),
            (Field::Message, fields.message),
        ] {
            form = form.reduce(FormAction::Edit(field, value));
        }
        form
    }

    /// Drives the same sequence the contact section runs on submit.
    fn run_submit(form: Rc<ContactForm>, gate: &SubmitGate, transport: &FakeTransport) -> Rc<ContactForm> {
        let inquiry = match validate_inquiry(&form.fields) {
            Ok(inquiry) => inquiry,
            Err(err) => return form.reduce(FormAction::Rejected(err)),
        };
        let Some(pass) = gate.try_enter() else {
            return form;
        };
        let form = form.reduce(FormAction::Started);
        assert_eq!(form.state, SubmissionState::Submitting);
        let outcome = block_on(submit(transport, &inquiry));
        drop(pass);
        form.reduce(FormAction::Finished(outcome))
    }

    #[test]
    fn accepted_submission_succeeds_and_clears_fields() {
        let transport = FakeTransport::new(Reply::Accept);
        let form = run_submit(filled_form(), &SubmitGate::new(), &transport);

        assert_eq!(form.state, SubmissionState::Succeeded);
        assert_eq!(form.fields, InquiryFields::default());
        assert_eq!(transport.calls.get(), 1);
        let sent = transport.last.borrow().clone().unwrap();
        assert_eq!(sent.name, "Jane Doe");
        assert_eq!(sent.phone, None);
    }

    #[test]
    fn failures_keep_entered_values_and_show_generic_message() {
        for reply in [Reply::Refuse, Reply::Fail] {
            let transport = FakeTransport::new(reply);
            let form = run_submit(filled_form(), &SubmitGate::new(), &transport);

            assert_eq!(form.state.failure(), Some(GENERIC_FAILURE_MESSAGE));
            assert_eq!(form.fields, jane());
            assert_eq!(transport.calls.get(), 1);
        }
    }

    #[test]
    fn empty_message_never_reaches_the_network() {
        let transport = FakeTransport::new(Reply::Accept);
        let form = filled_form().reduce(FormAction::Edit(Field::Message, "   ".into()));
        let form = run_submit(form, &SubmitGate::new(), &transport);

        assert_eq!(transport.calls.get(), 0);
        assert_eq!(form.state, SubmissionState::Idle);
        assert_eq!(form.validation, Some(ValidationError::MissingMessage));
    }

    #[test]
    fn second_submit_is_not_dispatched_while_one_is_in_flight() {
        let transport = FakeTransport::new(Reply::Accept);
        let gate = SubmitGate::new();
        let in_flight = gate.try_enter().unwrap();

        let form = run_submit(filled_form(), &gate, &transport);
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(form.state, SubmissionState::Idle);

        drop(in_flight);
        let form = run_submit(form, &gate, &transport);
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(form.state, SubmissionState::Succeeded);
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let form = filled_form().reduce(FormAction::Started);
        let after = form.clone().reduce(FormAction::Edit(Field::Name, "Someone else".into()));
        assert!(Rc::ptr_eq(&form, &after));
    }

    #[test]
    fn editing_after_failure_returns_to_idle() {
        let form = filled_form()
            .reduce(FormAction::Started)
            .reduce(FormAction::Finished(SubmissionState::Failed("x".into())))
            .reduce(FormAction::Edit(Field::Company, "Doe Ltd".into()));
        assert_eq!(form.state, SubmissionState::Idle);
        assert_eq!(form.fields.company, "Doe Ltd");
        assert_eq!(form.fields.name, "Jane Doe");
    }

    #[test]
    fn success_expires_only_for_its_own_generation() {
        let form = filled_form()
            .reduce(FormAction::Started)
            .reduce(FormAction::Finished(SubmissionState::Succeeded));
        let generation = form.generation;

        let stale = form.clone().reduce(FormAction::ExpireSuccess(generation.wrapping_sub(1)));
        assert_eq!(stale.state, SubmissionState::Succeeded);

        let reset = form.reduce(FormAction::ExpireSuccess(generation));
        assert_eq!(reset.state, SubmissionState::Idle);
    }

    fn recorder() -> (Rc<RefCell<Vec<FormAction>>>, impl Fn(FormAction) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |action| sink.borrow_mut().push(action))
    }

    #[test]
    fn success_reset_fires_for_the_current_success() {
        let form = filled_form()
            .reduce(FormAction::Started)
            .reduce(FormAction::Finished(SubmissionState::Succeeded));
        let (seen, dispatch) = recorder();

        let fire = success_reset(&form, CancellationToken::new(), dispatch).expect("a success to expire");
        fire();

        let actions = seen.borrow().clone();
        assert_eq!(actions, vec![FormAction::ExpireSuccess(form.generation)]);
        let form = actions.into_iter().fold(form, |form, action| form.reduce(action));
        assert_eq!(form.state, SubmissionState::Idle);
    }

    #[test]
    fn success_reset_after_teardown_dispatches_nothing() {
        let form = filled_form()
            .reduce(FormAction::Started)
            .reduce(FormAction::Finished(SubmissionState::Succeeded));
        let alive = CancellationToken::new();
        let unmount = alive.clone().drop_guard();
        let (seen, dispatch) = recorder();

        let fire = success_reset(&form, alive, dispatch).expect("a success to expire");
        drop(unmount);
        fire();

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn no_reset_without_a_success() {
        let (_, dispatch) = recorder();
        assert!(success_reset(&filled_form(), CancellationToken::new(), dispatch).is_none());
    }

    #[test]
    fn late_completion_is_ignored_when_not_submitting() {
        let form = filled_form();
        let after = form.clone().reduce(FormAction::Finished(SubmissionState::Succeeded));
        assert!(Rc::ptr_eq(&form, &after));
    }
}
