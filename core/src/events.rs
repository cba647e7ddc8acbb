use crate::types::ThemeEvent;
use std::sync::mpsc::{self, Receiver, Sender};

/// Fan-out of [`ThemeEvent`]s to any number of subscribers.
///
/// Each subscriber owns a channel receiver. Subscribers whose receiver was
/// dropped are removed the next time an event is published.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<ThemeEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<ThemeEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn publish(&mut self, event: ThemeEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        log::debug!(
            "Published {event:?} to {} subscriber(s)",
            self.subscribers.len()
        );
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
