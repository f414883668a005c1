//! The enrollment dialog state machine.
//!
//! Steps advance on form submission only: a submission captures its input,
//! enters the loading sub-state, and sends the matching request to the
//! backend worker; the completion event coming back on the bus advances the
//! step. `back` walks one step backwards without clearing captured input,
//! `reset` clears everything and closes the dialog.
use std::sync::mpsc::Sender;

use coursecat_client::course::Course;

use crate::backend::{Event, Request};

/// Step of the enrollment dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Phone,
    Verification,
    Payment,
    Success,
}

/// Card details captured on the payment step, wrapped so we don't print
/// them by accident
#[derive(Clone, Default, PartialEq)]
pub struct PaymentDetails {
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

impl PaymentDetails {
    /// All four fields are required before the form submits.
    pub fn is_complete(&self) -> bool {
        !self.card_name.is_empty()
            && !self.card_number.is_empty()
            && !self.expiry.is_empty()
            && !self.cvc.is_empty()
    }
}

impl std::fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PaymentDetails (******)")
    }
}

/// The enrollment dialog for one course.
pub struct Dialog {
    course_id: String,
    price: f64,
    requests: Sender<Request>,

    step: Step,
    phone_number: String,
    verification_code: String,
    loading: bool,
    open: bool,
    last_error: Option<String>,
}

impl Dialog {
    pub fn new(course_id: impl Into<String>, price: f64, requests: Sender<Request>) -> Self {
        Dialog {
            course_id: course_id.into(),
            price,
            requests,
            step: Step::Phone,
            phone_number: String::new(),
            verification_code: String::new(),
            loading: false,
            open: false,
            last_error: None,
        }
    }

    pub fn for_course(course: &Course, requests: Sender<Request>) -> Self {
        Self::new(course.id.clone(), course.price, requests)
    }

    /// Show the dialog. Reopening does not disturb captured state.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the dialog, keeping captured state. Only [`Self::reset`] clears.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Submit the phone form: capture the number and ask the backend for a
    /// verification code. Ignored off-step, while loading, or with an empty
    /// number.
    pub fn submit_phone(&mut self, phone: &str) {
        if self.step != Step::Phone || self.loading || phone.trim().is_empty() {
            return;
        }

        self.phone_number = phone.to_owned();
        self.begin_loading();
        self.requests
            .send(Request::SendCode {
                phone: self.phone_number.clone(),
            })
            .unwrap()
    }

    /// Submit the verification form with the code the user received.
    pub fn submit_code(&mut self, code: &str) {
        if self.step != Step::Verification || self.loading || code.trim().is_empty() {
            return;
        }

        self.verification_code = code.to_owned();
        self.begin_loading();
        self.requests
            .send(Request::VerifyCode {
                phone: self.phone_number.clone(),
                code: self.verification_code.clone(),
            })
            .unwrap()
    }

    /// Submit the payment form. All card fields are required.
    pub fn submit_payment(&mut self, details: PaymentDetails) {
        if self.step != Step::Payment || self.loading || !details.is_complete() {
            return;
        }

        self.begin_loading();
        self.requests
            .send(Request::Charge {
                course_id: self.course_id.clone(),
                amount: self.price,
                details,
            })
            .unwrap()
    }

    /// Walk one step backwards, keeping captured input. Ignored while a
    /// submission is in flight.
    pub fn back(&mut self) {
        if self.loading {
            return;
        }

        self.step = match self.step {
            Step::Verification => Step::Phone,
            Step::Payment => Step::Verification,
            s => s,
        };
    }

    /// Return to the phone step from anywhere, clearing all captured input,
    /// and close the dialog.
    pub fn reset(&mut self) {
        self.step = Step::Phone;
        self.phone_number.clear();
        self.verification_code.clear();
        self.loading = false;
        self.last_error = None;
        self.open = false;
    }

    /// Apply a completion event from the backend worker. Events that don't
    /// match an in-flight submission (e.g. arriving after `reset`) are
    /// ignored.
    pub fn handle_event(&mut self, event: Event) {
        if !self.loading {
            return;
        }

        match (self.step, event) {
            (Step::Phone, Event::CodeSent) => {
                self.loading = false;
                self.step = Step::Verification;
            }
            (Step::Verification, Event::CodeVerified) => {
                self.loading = false;
                self.step = Step::Payment;
            }
            (Step::Payment, Event::PaymentAccepted) => {
                self.loading = false;
                self.step = Step::Success;
            }
            (_, Event::Error(msg)) => {
                self.loading = false;
                self.last_error = Some(msg);
            }
            _ => (),
        }
    }

    fn begin_loading(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn verification_code(&self) -> &str {
        &self.verification_code
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    /// The amount shown in the order summary and sent with the charge.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// The most recent backend failure, cleared by the next submission.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
