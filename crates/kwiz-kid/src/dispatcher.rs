//! Dispatcher - the inbound entry point of the store
//!
//! UI code and completed effects both send actions through a Dispatcher.
//! Actions are queued on an unbounded channel and applied by the store one
//! at a time, in arrival order.

use crate::actions::Action;
use tokio::sync::mpsc;

/// Cloneable handle for sending actions to the store
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    /// Dispatch an action
    ///
    /// The action is queued and processed after every action already queued.
    pub fn dispatch(&self, action: impl Into<Action>) {
        if let Err(e) = self.tx.send(action.into()) {
            log::error!("Failed to dispatch action: {}", e);
        }
    }
}
