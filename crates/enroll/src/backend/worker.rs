use anyhow::Result;
use log::debug;
use std::sync::mpsc::{channel, Receiver, Sender};

use super::{Backend, Event, Request};
use crate::event::EventBus;

/// Performs requests it receives from the dialog, and sends the results back.
pub struct Worker<B: Backend> {
    backend: B,
    msg_recv: Receiver<Request>,
    event_send: Sender<Event>,
}

impl<B: Backend> Worker<B> {
    /// Spawn the backend worker on the given event bus, returning a channel
    /// to send requests down.
    pub fn spawn_on(bus: &EventBus<Event>, backend: B) -> Sender<Request> {
        let (cmd_send, cmd_recv) = channel();

        bus.spawn("enroll_worker", move |_, event_send| {
            // we don't need running because the receiver will raise an error and we'll exit
            Worker {
                backend,
                msg_recv: cmd_recv,
                event_send,
            }
            .main()
        });

        cmd_send
    }

    fn main(mut self) {
        while let Ok(msg) = self.msg_recv.recv() {
            debug!("received request: {:?}", msg);
            if let Err(e) = match self.process_msg(msg) {
                Ok(e) => self.event_send.send(e),
                Err(e) => self.event_send.send(Event::Error(e.to_string())),
            } {
                debug!("error sending event: {:?}", e);
                break;
            }
        }

        debug!("shutting down");
    }

    fn process_msg(&mut self, msg: Request) -> Result<Event> {
        match msg {
            Request::SendCode { phone } => {
                self.backend.send_code(&phone)?;
                Ok(Event::CodeSent)
            }
            Request::VerifyCode { phone, code } => {
                self.backend.verify_code(&phone, &code)?;
                Ok(Event::CodeVerified)
            }
            Request::Charge {
                course_id,
                amount,
                details,
            } => {
                self.backend.charge(&course_id, amount, &details)?;
                Ok(Event::PaymentAccepted)
            }
        }
    }
}
