//! Event dispatcher: routes events to handlers by event-type tag.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::event::DomainEvent;
use crate::handler::EventHandler;

/// Explicitly constructed pub/sub registry.
///
/// Maps an event-type tag to an ordered list of handlers. Handlers run
/// synchronously, in registration order, on the notifying thread. The
/// dispatcher is a plain value owned by whoever publishes; there is no
/// process-wide instance.
pub struct EventDispatcher<E: DomainEvent> {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler<E>>>>,
}

impl<E: DomainEvent> EventDispatcher<E> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for `event_type`.
    ///
    /// Registering the same handler instance twice for one tag is a no-op;
    /// handler identity is pointer identity.
    pub fn register(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler<E>>) {
        let entry = self.handlers.entry(event_type.into()).or_default();
        if entry.iter().any(|h| Arc::ptr_eq(h, &handler)) {
            return;
        }
        entry.push(handler);
    }

    /// Remove `handler` from `event_type`; empty tags are dropped.
    pub fn unregister(&mut self, event_type: &str, handler: &Arc<dyn EventHandler<E>>) {
        if let Some(entry) = self.handlers.get_mut(event_type) {
            entry.retain(|h| !Arc::ptr_eq(h, handler));
            if entry.is_empty() {
                self.handlers.remove(event_type);
            }
        }
    }

    /// Drop every registration.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Dispatch `event` to the handlers registered for its tag, in
    /// registration order. Unknown tags are a no-op.
    pub fn notify(&self, event: &E) {
        let Some(handlers) = self.handlers.get(event.event_type()) else {
            return;
        };
        trace!(
            event_type = event.event_type(),
            handlers = handlers.len(),
            "dispatching event"
        );
        for handler in handlers {
            handler.handle(event);
        }
    }

    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers.get(event_type).map_or(0, Vec::len)
    }

    pub fn is_registered(&self, event_type: &str, handler: &Arc<dyn EventHandler<E>>) -> bool {
        self.handlers
            .get(event_type)
            .is_some_and(|entry| entry.iter().any(|h| Arc::ptr_eq(h, handler)))
    }
}

impl<E: DomainEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DomainEvent> fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: Vec<(&str, usize)> = self
            .handlers
            .iter()
            .map(|(tag, entry)| (tag.as_str(), entry.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .finish()
    }
}
