//! Event handler contract.

use crate::event::DomainEvent;

/// Receives events routed by the dispatcher.
///
/// Handlers run synchronously on the notifying thread; anything slow or
/// fallible belongs behind the handler, not in the dispatcher.
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    fn handle(&self, event: &E);
}
