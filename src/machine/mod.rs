//! Validated table storage and serialized event dispatch.
//!
//! [`StateMachine`] owns the current state, the frozen transition table,
//! and the owner's context. Construction validates the table once and
//! fails with a [`ConfigError`] on any structural violation; after that
//! the only errors an owner can observe are its own handlers' verdicts,
//! surfaced as success/failure state branches.

mod error;
mod table;

pub use error::{ConfigError, DuplicateEntry};
pub use table::TransitionTable;

use crate::core::{Event, EventKind, State, Transition};
use std::sync::{Mutex, PoisonError};

/// Table-driven state machine with serialized dispatch.
///
/// The machine is passive: it has no threads of its own. Callers invoke
/// [`handle`](StateMachine::handle) from any context; an internal mutex
/// totally orders those calls per machine instance.
///
/// # Example
///
/// ```rust
/// use gearshift::core::{Event, Transition};
/// use gearshift::machine::{StateMachine, TransitionTable};
/// use gearshift::{event_enum, state_enum};
///
/// state_enum! {
///     enum Lamp { Off, On }
/// }
///
/// event_enum! {
///     enum Switch { Flip }
/// }
///
/// let table = TransitionTable::new()
///     .state(
///         Lamp::Off,
///         vec![Transition::new(Switch::Flip, Lamp::On, Lamp::Off, Box::new(|_, _| true))],
///     )
///     .state(
///         Lamp::On,
///         vec![Transition::new(Switch::Flip, Lamp::Off, Lamp::On, Box::new(|_, _| true))],
///     );
///
/// let machine: StateMachine<Lamp, Switch, ()> =
///     StateMachine::new(Lamp::Off, table, ()).unwrap();
/// machine.handle(&Event::new(Switch::Flip));
/// assert_eq!(machine.current_state(), Lamp::On);
/// ```
pub struct StateMachine<S: State, K: EventKind, C, P = ()> {
    current: Mutex<S>,
    // indexed by State::ordinal, frozen after validation
    rows: Vec<Vec<Transition<S, K, C, P>>>,
    context: C,
}

impl<S: State, K: EventKind, C, P> StateMachine<S, K, C, P> {
    /// Build a machine from an initial state, a transition table, and the
    /// owner's context.
    ///
    /// The table is validated exactly once, here. A machine is never
    /// constructed from an invalid table.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::StateCountMismatch`] when the table does not
    ///   register exactly [`State::COUNT`] states
    /// - [`ConfigError::DuplicateStateRow`] when a state is registered twice
    /// - [`ConfigError::OrdinalOutOfRange`] when a state's ordinal falls
    ///   outside `0..COUNT`
    /// - [`ConfigError::EmptyTransitions`] when a state's list is empty
    /// - [`ConfigError::DuplicateEventKinds`] when any state registers the
    ///   same event kind more than once; every offender across every state
    ///   is listed with its multiplicity
    pub fn new(
        initial: S,
        table: TransitionTable<S, K, C, P>,
        context: C,
    ) -> Result<Self, ConfigError> {
        let rows = Self::validate(table)?;
        Ok(Self {
            current: Mutex::new(initial),
            rows,
            context,
        })
    }

    fn validate(
        table: TransitionTable<S, K, C, P>,
    ) -> Result<Vec<Vec<Transition<S, K, C, P>>>, ConfigError> {
        let mut declared = table.into_rows();

        if declared.len() != S::COUNT {
            return Err(ConfigError::StateCountMismatch {
                found: declared.len(),
                expected: S::COUNT,
            });
        }

        let mut seen = vec![false; S::COUNT];
        for (state, transitions) in &declared {
            let ordinal = state.ordinal();
            if ordinal >= S::COUNT {
                return Err(ConfigError::OrdinalOutOfRange {
                    state: state.name(),
                    ordinal,
                    count: S::COUNT,
                });
            }
            if seen[ordinal] {
                return Err(ConfigError::DuplicateStateRow {
                    state: state.name(),
                });
            }
            seen[ordinal] = true;

            if transitions.is_empty() {
                return Err(ConfigError::EmptyTransitions {
                    state: state.name(),
                });
            }
        }

        // Collect every duplicate registration before failing so the error
        // names all offenders, not just the first.
        let mut offenders = Vec::new();
        for (state, transitions) in &declared {
            let mut counts: Vec<(K, usize)> = Vec::new();
            for transition in transitions {
                let kind = transition.event_kind();
                match counts.iter_mut().find(|(k, _)| *k == kind) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((kind, 1)),
                }
            }
            for (kind, count) in counts {
                if count > 1 {
                    offenders.push(DuplicateEntry {
                        state: state.name(),
                        event: kind.name(),
                        count,
                    });
                }
            }
        }
        if !offenders.is_empty() {
            return Err(ConfigError::DuplicateEventKinds { entries: offenders });
        }

        // Every ordinal is present exactly once, so sorting by ordinal
        // yields one row per slot.
        declared.sort_by_key(|(state, _)| state.ordinal());
        Ok(declared
            .into_iter()
            .map(|(_, transitions)| transitions)
            .collect())
    }

    /// Dispatch one event to completion.
    ///
    /// Acquires the machine's lock, scans the current state's transition
    /// list in registration order, resolves the first transition whose kind
    /// matches, and stores the resulting state. An event with no matching
    /// transition in the current state is silently ignored; that is the
    /// specified behavior, not an error.
    ///
    /// Never returns an error and never panics on unmatched events. A slow
    /// handler blocks every other `handle` caller on this machine, since
    /// handlers run inside the lock.
    pub fn handle(&self, event: &Event<K, P>) {
        // A poisoned lock means a handler panicked in violation of its
        // contract; keep dispatching from the last stored state.
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let row = &self.rows[current.ordinal()];
        match row.iter().find(|t| event.is_of_kind(t.event_kind())) {
            Some(transition) => {
                let next = transition.resolve(&self.context, event);
                tracing::debug!(
                    from = current.name(),
                    to = next.name(),
                    event = event.kind().name(),
                    "transition resolved"
                );
                *current = next;
            }
            None => {
                tracing::trace!(
                    state = current.name(),
                    event = event.kind().name(),
                    "event not registered for current state, ignored"
                );
            }
        }
    }

    /// Snapshot of the current state.
    pub fn current_state(&self) -> S {
        *self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Shared access to the owner's context.
    pub fn context(&self) -> &C {
        &self.context
    }
}
