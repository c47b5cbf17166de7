//! Typed notifications with explicit subscriptions.
//!
//! A [`Signal`] fans each emitted value out to every live subscriber over
//! its own `crossbeam_channel`. Subscribers drain their receiver when it
//! suits them (once per frame in the UI) and release the subscription with
//! [`Signal::unsubscribe`]. Subscribers whose receiver was dropped are pruned
//! on the next emit.

use crossbeam_channel::{Receiver, Sender};

/// Identifies one subscription on a [`Signal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A subscription handle: the id to unsubscribe with and the receiving end.
#[derive(Debug)]
pub struct Subscription<T> {
    pub id: SubscriptionId,
    pub receiver: Receiver<T>,
}

/// Multi-subscriber notification source.
#[derive(Debug)]
pub struct Signal<T> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<T>)>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }
}

impl<T: Clone> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    pub fn subscribe(&mut self) -> Subscription<T> {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push((id, tx));

        Subscription { id, receiver: rx }
    }

    /// Release a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Deliver `value` to every live subscriber.
    pub fn emit(&mut self, value: T) {
        self.subscribers
            .retain(|(_, tx)| tx.send(value.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
