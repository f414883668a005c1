use std::sync::mpsc::{channel, Receiver, TryRecvError};

use coursecat_enroll::backend::{Event, Request};
use coursecat_enroll::dialog::{Dialog, PaymentDetails, Step};
use pretty_assertions::assert_eq;

fn dialog() -> (Dialog, Receiver<Request>) {
    let (tx, rx) = channel();
    let mut dialog = Dialog::new("vibe-coding", 199.0, tx);
    dialog.open();
    (dialog, rx)
}

fn card() -> PaymentDetails {
    PaymentDetails {
        card_name: "Ada Lovelace".to_owned(),
        card_number: "4242 4242 4242 4242".to_owned(),
        expiry: "12/30".to_owned(),
        cvc: "123".to_owned(),
    }
}

/// Drive the dialog to the given step by submitting and completing.
fn advance_to(dialog: &mut Dialog, step: Step) {
    if dialog.step() == step {
        return;
    }
    dialog.submit_phone("+1 (555) 123-4567");
    dialog.handle_event(Event::CodeSent);
    if step == Step::Verification {
        return;
    }
    dialog.submit_code("123456");
    dialog.handle_event(Event::CodeVerified);
    if step == Step::Payment {
        return;
    }
    dialog.submit_payment(card());
    dialog.handle_event(Event::PaymentAccepted);
}

#[test]
fn submitting_the_phone_form_requests_a_code() {
    let (mut dialog, rx) = dialog();

    dialog.submit_phone("+1 (555) 123-4567");

    assert!(dialog.is_loading());
    assert_eq!(dialog.step(), Step::Phone);
    assert_eq!(
        rx.try_recv().unwrap(),
        Request::SendCode {
            phone: "+1 (555) 123-4567".to_owned()
        }
    );

    dialog.handle_event(Event::CodeSent);

    assert_eq!(dialog.step(), Step::Verification);
    assert!(!dialog.is_loading());
}

#[test]
fn an_empty_phone_number_does_not_submit() {
    let (mut dialog, rx) = dialog();

    dialog.submit_phone("   ");

    assert!(!dialog.is_loading());
    assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
}

#[test]
fn submissions_while_loading_are_ignored() {
    let (mut dialog, rx) = dialog();

    dialog.submit_phone("+1 (555) 123-4567");
    dialog.submit_phone("+1 (555) 999-9999");

    assert!(rx.try_recv().is_ok());
    assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    assert_eq!(dialog.phone_number(), "+1 (555) 123-4567");
}

#[test]
fn verification_sends_the_captured_phone_and_code() {
    let (mut dialog, rx) = dialog();
    advance_to(&mut dialog, Step::Verification);
    let _ = rx.try_recv();

    dialog.submit_code("123456");

    assert_eq!(
        rx.try_recv().unwrap(),
        Request::VerifyCode {
            phone: "+1 (555) 123-4567".to_owned(),
            code: "123456".to_owned()
        }
    );
}

#[test]
fn back_from_verification_preserves_the_phone_number() {
    let (mut dialog, _rx) = dialog();
    advance_to(&mut dialog, Step::Verification);

    dialog.back();

    assert_eq!(dialog.step(), Step::Phone);
    assert_eq!(dialog.phone_number(), "+1 (555) 123-4567");
}

#[test]
fn back_from_payment_preserves_the_code() {
    let (mut dialog, _rx) = dialog();
    advance_to(&mut dialog, Step::Payment);

    dialog.back();

    assert_eq!(dialog.step(), Step::Verification);
    assert_eq!(dialog.verification_code(), "123456");
}

#[test]
fn back_is_ignored_while_loading() {
    let (mut dialog, _rx) = dialog();
    advance_to(&mut dialog, Step::Verification);

    dialog.submit_code("123456");
    dialog.back();

    assert_eq!(dialog.step(), Step::Verification);
    assert!(dialog.is_loading());
}

#[test]
fn incomplete_card_details_do_not_submit() {
    let (mut dialog, rx) = dialog();
    advance_to(&mut dialog, Step::Payment);
    while rx.try_recv().is_ok() {}

    dialog.submit_payment(PaymentDetails {
        cvc: String::new(),
        ..card()
    });

    assert!(!dialog.is_loading());
    assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
}

#[test]
fn the_charge_carries_the_course_and_price() {
    let (mut dialog, rx) = dialog();
    advance_to(&mut dialog, Step::Payment);
    while rx.try_recv().is_ok() {}

    dialog.submit_payment(card());

    assert_eq!(
        rx.try_recv().unwrap(),
        Request::Charge {
            course_id: "vibe-coding".to_owned(),
            amount: 199.0,
            details: card()
        }
    );

    dialog.handle_event(Event::PaymentAccepted);
    assert_eq!(dialog.step(), Step::Success);
}

#[test]
fn reset_returns_to_phone_and_clears_everything() {
    let (mut dialog, _rx) = dialog();
    advance_to(&mut dialog, Step::Success);

    dialog.reset();

    assert_eq!(dialog.step(), Step::Phone);
    assert_eq!(dialog.phone_number(), "");
    assert_eq!(dialog.verification_code(), "");
    assert!(!dialog.is_open());
}

#[test]
fn closing_without_reset_keeps_captured_state() {
    let (mut dialog, _rx) = dialog();
    advance_to(&mut dialog, Step::Verification);

    dialog.close();
    dialog.open();

    assert_eq!(dialog.step(), Step::Verification);
    assert_eq!(dialog.phone_number(), "+1 (555) 123-4567");
}

#[test]
fn a_stale_completion_after_reset_is_ignored() {
    let (mut dialog, _rx) = dialog();

    dialog.submit_phone("+1 (555) 123-4567");
    dialog.reset();
    dialog.handle_event(Event::CodeSent);

    assert_eq!(dialog.step(), Step::Phone);
    assert!(!dialog.is_loading());
}

#[test]
fn a_mismatched_completion_does_not_advance() {
    let (mut dialog, _rx) = dialog();

    dialog.submit_phone("+1 (555) 123-4567");
    dialog.handle_event(Event::PaymentAccepted);

    assert_eq!(dialog.step(), Step::Phone);
    assert!(dialog.is_loading());
}

#[test]
fn a_backend_error_is_surfaced_and_cleared_on_resubmit() {
    let (mut dialog, _rx) = dialog();

    dialog.submit_phone("+1 (555) 123-4567");
    dialog.handle_event(Event::Error("sms provider unavailable".to_owned()));

    assert_eq!(dialog.step(), Step::Phone);
    assert!(!dialog.is_loading());
    assert_eq!(dialog.last_error(), Some("sms provider unavailable"));

    dialog.submit_phone("+1 (555) 123-4567");
    assert_eq!(dialog.last_error(), None);
}

#[test]
fn payment_details_debug_never_prints_the_card() {
    let printed = format!("{:?}", card());

    assert_eq!(printed, "PaymentDetails (******)");
}
