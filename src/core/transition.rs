//! State transition rules.
//!
//! A [`Transition`] binds an event kind to a handler predicate and two
//! candidate next states. Resolving a transition runs the handler and picks
//! the success or failure state from its verdict.

use super::event::{Event, EventKind};
use super::state::State;

/// Owner-supplied predicate deciding a transition's outcome.
///
/// Handlers receive the machine's context by reference and the event being
/// dispatched. They must be synchronous and must not panic; the engine
/// treats a panicking handler as a contract violation, not a recoverable
/// case.
pub type Handler<K, C, P> = Box<dyn Fn(&C, &Event<K, P>) -> bool + Send + Sync>;

/// Rule mapping one event kind to a handler and two candidate next states.
///
/// Transitions are immutable: created once at machine construction and
/// never changed. Each transition belongs to exactly one state's list.
///
/// # Example
///
/// ```rust
/// use gearshift::core::{Event, Transition};
/// use gearshift::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light { Off, On }
/// }
///
/// event_enum! {
///     enum Switch { Flip }
/// }
///
/// let transition: Transition<Light, Switch, ()> =
///     Transition::new(Switch::Flip, Light::On, Light::Off, Box::new(|_, _| true));
///
/// assert_eq!(transition.event_kind(), Switch::Flip);
/// assert_eq!(transition.resolve(&(), &Event::new(Switch::Flip)), Light::On);
/// ```
pub struct Transition<S: State, K: EventKind, C, P = ()> {
    event_kind: K,
    on_success: S,
    on_failure: S,
    handler: Handler<K, C, P>,
}

impl<S: State, K: EventKind, C, P> Transition<S, K, C, P> {
    /// Create a transition rule.
    ///
    /// `on_success` is entered when `handler` returns true, `on_failure`
    /// when it returns false.
    pub fn new(event_kind: K, on_success: S, on_failure: S, handler: Handler<K, C, P>) -> Self {
        Self {
            event_kind,
            on_success,
            on_failure,
            handler,
        }
    }

    /// The event kind this transition is registered for. Pure.
    pub fn event_kind(&self) -> K {
        self.event_kind
    }

    /// Run the handler and return the resulting state.
    ///
    /// The handler's verdict selects between the two candidate states; the
    /// engine performs no side effects of its own here.
    pub fn resolve(&self, ctx: &C, event: &Event<K, P>) -> S {
        if (self.handler)(ctx, event) {
            self.on_success
        } else {
            self.on_failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum TestState {
        Ready,
        Working,
        Faulted,
    }

    impl State for TestState {
        const COUNT: usize = 3;

        fn ordinal(&self) -> usize {
            *self as usize
        }

        fn name(&self) -> &'static str {
            match self {
                Self::Ready => "Ready",
                Self::Working => "Working",
                Self::Faulted => "Faulted",
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Go,
    }

    impl EventKind for TestEvent {
        fn name(&self) -> &'static str {
            match self {
                Self::Go => "Go",
            }
        }
    }

    #[test]
    fn resolve_picks_success_state_on_true() {
        let transition: Transition<TestState, TestEvent, ()> = Transition::new(
            TestEvent::Go,
            TestState::Working,
            TestState::Faulted,
            Box::new(|_, _| true),
        );

        let next = transition.resolve(&(), &Event::new(TestEvent::Go));
        assert_eq!(next, TestState::Working);
    }

    #[test]
    fn resolve_picks_failure_state_on_false() {
        let transition: Transition<TestState, TestEvent, ()> = Transition::new(
            TestEvent::Go,
            TestState::Working,
            TestState::Faulted,
            Box::new(|_, _| false),
        );

        let next = transition.resolve(&(), &Event::new(TestEvent::Go));
        assert_eq!(next, TestState::Faulted);
    }

    #[test]
    fn handler_sees_context_and_payload() {
        struct Ctx {
            threshold: u32,
        }

        let transition: Transition<TestState, TestEvent, Ctx, u32> = Transition::new(
            TestEvent::Go,
            TestState::Working,
            TestState::Faulted,
            Box::new(|ctx, event| event.payload().is_some_and(|v| *v >= ctx.threshold)),
        );

        let ctx = Ctx { threshold: 10 };
        let over = Event::with_payload(TestEvent::Go, 12u32);
        let under = Event::with_payload(TestEvent::Go, 7u32);

        assert_eq!(transition.resolve(&ctx, &over), TestState::Working);
        assert_eq!(transition.resolve(&ctx, &under), TestState::Faulted);
    }

    #[test]
    fn event_kind_accessor_is_stable() {
        let transition: Transition<TestState, TestEvent, ()> = Transition::new(
            TestEvent::Go,
            TestState::Working,
            TestState::Ready,
            Box::new(|_, _| true),
        );

        assert_eq!(transition.event_kind(), TestEvent::Go);
        assert_eq!(transition.event_kind(), TestEvent::Go);
    }
}
