//! The provider side of the enrollment flow: phone verification and payment.
//!
//! The dialog never calls a provider directly; it sends a [`Request`] down
//! the worker channel and reacts to the [`Event`] that comes back on the
//! bus. [`Simulated`] is the only provider shipped today; swapping in a
//! real SMS/payment integration means implementing [`Backend`], without
//! touching the dialog.
use std::{thread, time::Duration};

use anyhow::Result;
use log::debug;

mod worker;
pub use worker::Worker;

use crate::dialog::PaymentDetails;

/// Requests sent to the backend worker
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    SendCode {
        phone: String,
    },
    VerifyCode {
        phone: String,
        code: String,
    },
    Charge {
        course_id: String,
        amount: f64,
        details: PaymentDetails,
    },
}

/// Messages received by the dialog from the backend worker
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Error(String),
    CodeSent,
    CodeVerified,
    PaymentAccepted,
}

/// A provider that can send verification codes, check them, and take payment.
pub trait Backend: Send + 'static {
    fn send_code(&mut self, phone: &str) -> Result<()>;
    fn verify_code(&mut self, phone: &str, code: &str) -> Result<()>;
    fn charge(&mut self, course_id: &str, amount: f64, details: &PaymentDetails) -> Result<()>;
}

/// Stand-in for the real SMS and payment providers: waits a fixed delay per
/// operation, then reports success.
#[derive(Debug, Clone)]
pub struct Simulated {
    pub send_delay: Duration,
    pub verify_delay: Duration,
    pub charge_delay: Duration,
}

impl Default for Simulated {
    fn default() -> Self {
        Simulated {
            send_delay: Duration::from_millis(1500),
            verify_delay: Duration::from_millis(1500),
            charge_delay: Duration::from_millis(2000),
        }
    }
}

impl Simulated {
    /// A simulation with no delays, for tests.
    pub fn instant() -> Self {
        Simulated {
            send_delay: Duration::ZERO,
            verify_delay: Duration::ZERO,
            charge_delay: Duration::ZERO,
        }
    }
}

impl Backend for Simulated {
    fn send_code(&mut self, phone: &str) -> Result<()> {
        debug!("pretending to text a verification code to {}", phone);
        thread::sleep(self.send_delay);
        Ok(())
    }

    fn verify_code(&mut self, _phone: &str, code: &str) -> Result<()> {
        debug!("pretending to verify code {}", code);
        thread::sleep(self.verify_delay);
        Ok(())
    }

    fn charge(&mut self, course_id: &str, amount: f64, _details: &PaymentDetails) -> Result<()> {
        debug!("pretending to charge {} for course {}", amount, course_id);
        thread::sleep(self.charge_delay);
        Ok(())
    }
}
