//! Events and event kinds.
//!
//! An [`Event`] is a message the owner hands to the machine: a kind tag
//! classifying what happened, plus an optional owner-defined payload. The
//! machine borrows the event for one `handle` call and never retains it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for event-kind enumerations.
///
/// Event kinds classify events into a closed set. Unlike states they need
/// no ordinal — the engine matches kinds by equality while scanning a
/// state's transition list.
///
/// The [`event_enum!`](crate::event_enum) macro generates a conforming
/// implementation for unit-variant enums.
///
/// # Example
///
/// ```rust
/// use gearshift::core::EventKind;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum DoorEvent {
///     Push,
///     TurnKey,
/// }
///
/// impl EventKind for DoorEvent {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Push => "Push",
///             Self::TurnKey => "TurnKey",
///         }
///     }
/// }
/// ```
pub trait EventKind:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the kind's name for display/logging.
    ///
    /// Used in validation diagnostics; must cover every variant.
    fn name(&self) -> &'static str;
}

/// A message instance carrying an [`EventKind`] and an optional payload.
///
/// Events are immutable once created. The payload type `P` is owner-defined
/// and defaults to `()`; a handler that needs the payload reads it through
/// [`Event::payload`], which is a checked access — there is no downcast and
/// no way to misread the payload as the wrong type.
///
/// # Example
///
/// ```rust
/// use gearshift::core::{Event, EventKind};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum Button {
///     Pressed,
///     Released,
/// }
///
/// impl EventKind for Button {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Pressed => "Pressed",
///             Self::Released => "Released",
///         }
///     }
/// }
///
/// let plain: Event<Button> = Event::new(Button::Pressed);
/// assert!(plain.is_of_kind(Button::Pressed));
/// assert!(plain.payload().is_none());
///
/// let tagged = Event::with_payload(Button::Released, 42u32);
/// assert_eq!(tagged.payload(), Some(&42));
/// ```
#[derive(Clone, Debug)]
pub struct Event<K: EventKind, P = ()> {
    kind: K,
    payload: Option<P>,
}

impl<K: EventKind, P> Event<K, P> {
    /// Create an event with no payload.
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            payload: None,
        }
    }

    /// Create an event carrying an owner-defined payload.
    pub fn with_payload(kind: K, payload: P) -> Self {
        Self {
            kind,
            payload: Some(payload),
        }
    }

    /// The event's kind tag.
    pub fn kind(&self) -> K {
        self.kind
    }

    /// Check whether this event's kind equals `kind`. Pure.
    pub fn is_of_kind(&self, kind: K) -> bool {
        self.kind == kind
    }

    /// The payload, if one was attached at creation.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Start,
        Stop,
    }

    impl EventKind for TestEvent {
        fn name(&self) -> &'static str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn event_matches_its_own_kind() {
        let event: Event<TestEvent> = Event::new(TestEvent::Start);
        assert!(event.is_of_kind(TestEvent::Start));
        assert!(!event.is_of_kind(TestEvent::Stop));
    }

    #[test]
    fn kind_accessor_returns_tag() {
        let event: Event<TestEvent> = Event::new(TestEvent::Stop);
        assert_eq!(event.kind(), TestEvent::Stop);
    }

    #[test]
    fn plain_event_has_no_payload() {
        let event: Event<TestEvent, u32> = Event::new(TestEvent::Start);
        assert!(event.payload().is_none());
    }

    #[test]
    fn payload_is_readable_by_reference() {
        let event = Event::with_payload(TestEvent::Start, "slot-3".to_string());
        assert_eq!(event.payload().map(String::as_str), Some("slot-3"));
    }

    #[test]
    fn kind_name_covers_variants() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Stop.name(), "Stop");
    }
}
