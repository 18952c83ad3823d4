//! Domain event contract.

use chrono::{DateTime, Utc};

/// A domain event: a named fact plus when it occurred.
pub trait DomainEvent {
    /// Stable tag used to route the event to registered handlers.
    fn event_type(&self) -> &'static str;

    fn occurred_at(&self) -> DateTime<Utc>;
}
