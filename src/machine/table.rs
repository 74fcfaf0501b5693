//! Transition table assembly.

use crate::core::{EventKind, State, Transition};

/// Mapping from state to its ordered transition list.
///
/// Owners build the table row by row before handing it to
/// [`StateMachine::new`], which validates and freezes it. Registration
/// order within a row is preserved and becomes the dispatch scan order.
///
/// [`StateMachine::new`]: crate::machine::StateMachine::new
///
/// # Example
///
/// ```rust
/// use gearshift::core::Transition;
/// use gearshift::machine::TransitionTable;
/// use gearshift::{event_enum, state_enum};
///
/// state_enum! {
///     enum Phase { Armed, Firing }
/// }
///
/// event_enum! {
///     enum Trigger { Pull, Reset }
/// }
///
/// let table: TransitionTable<Phase, Trigger, ()> = TransitionTable::new()
///     .state(
///         Phase::Armed,
///         vec![Transition::new(Trigger::Pull, Phase::Firing, Phase::Armed, Box::new(|_, _| true))],
///     )
///     .state(
///         Phase::Firing,
///         vec![Transition::new(Trigger::Reset, Phase::Armed, Phase::Armed, Box::new(|_, _| true))],
///     );
/// ```
pub struct TransitionTable<S: State, K: EventKind, C, P = ()> {
    rows: Vec<(S, Vec<Transition<S, K, C, P>>)>,
}

impl<S: State, K: EventKind, C, P> TransitionTable<S, K, C, P> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Register one state's transition list.
    ///
    /// Every real state must be registered exactly once; validation at
    /// machine construction enforces this.
    pub fn state(mut self, state: S, transitions: Vec<Transition<S, K, C, P>>) -> Self {
        self.rows.push((state, transitions));
        self
    }

    pub(crate) fn into_rows(self) -> Vec<(S, Vec<Transition<S, K, C, P>>)> {
        self.rows
    }
}

impl<S: State, K: EventKind, C, P> Default for TransitionTable<S, K, C, P> {
    fn default() -> Self {
        Self::new()
    }
}
