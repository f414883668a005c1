use anyhow::Result;
use log::debug;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;

/// The event bus aggregates events from multiple threads, and joins them all
/// back when required.
#[derive(Debug)]
pub struct EventBus<E> {
    sender: mpsc::Sender<E>,
    receiver: mpsc::Receiver<E>,
    running: Arc<AtomicBool>,
    handles: RefCell<Vec<thread::JoinHandle<()>>>,
}

impl<E> EventBus<E> {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            running: Arc::new(AtomicBool::new(true)),
            handles: Default::default(),
        }
    }

    /// Receive the next event from a publisher thread.
    ///
    /// This function will always block the current thread if
    /// there is no data available and it's possible for more data to be sent.
    pub fn next(&self) -> Result<E> {
        Ok(self.receiver.recv()?)
    }

    /// Spawn a new thread that can publish to this event bus
    pub fn spawn<F>(&self, name: impl ToString, f: F)
    where
        E: Send + 'static,
        F: 'static + Send + FnOnce(Arc<AtomicBool>, Sender<E>),
    {
        let sender = self.sender.clone();
        let running = self.running.clone();
        self.handles.borrow_mut().push(
            thread::Builder::new()
                .name(name.to_string())
                .spawn(move || f(running, sender))
                .unwrap(),
        );
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for EventBus<E> {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        self.handles.borrow_mut().drain(..).for_each(|h| {
            debug!("joining thread {:?}", h.thread().name());
            h.join().unwrap()
        });
    }
}
