//! Structural-configuration errors raised at machine construction.

use std::fmt;
use thiserror::Error;

/// One offending (state, event kind) registration found during validation.
///
/// `count` is the number of times the kind appears in that state's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub state: &'static str,
    pub event: &'static str,
    pub count: usize,
}

impl fmt::Display for DuplicateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "in state '{}' event '{}' appears {} times, expected only once",
            self.state, self.event, self.count
        )
    }
}

/// Errors that make a transition table unusable.
///
/// These are raised exactly once, at [`StateMachine::new`]; a machine is
/// never constructed from a table that violates any of them.
///
/// [`StateMachine::new`]: crate::machine::StateMachine::new
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("transition table registers {found} states, expected {expected}")]
    StateCountMismatch { found: usize, expected: usize },

    #[error("state '{state}' registered more than once in the transition table")]
    DuplicateStateRow { state: &'static str },

    #[error("state '{state}' reports ordinal {ordinal}, outside the declared range 0..{count}")]
    OrdinalOutOfRange {
        state: &'static str,
        ordinal: usize,
        count: usize,
    },

    #[error("empty transition list for state '{state}'")]
    EmptyTransitions { state: &'static str },

    /// Every duplicate registration across every state, with multiplicities.
    #[error("duplicate event registrations: {}", .entries.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    DuplicateEventKinds { entries: Vec<DuplicateEntry> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_mentions_both_counts() {
        let err = ConfigError::StateCountMismatch {
            found: 2,
            expected: 3,
        };
        let message = err.to_string();
        assert!(message.contains('2'));
        assert!(message.contains('3'));
    }

    #[test]
    fn empty_list_names_the_state() {
        let err = ConfigError::EmptyTransitions { state: "Servicing" };
        assert!(err.to_string().contains("Servicing"));
    }

    #[test]
    fn duplicate_entries_list_every_offender() {
        let err = ConfigError::DuplicateEventKinds {
            entries: vec![
                DuplicateEntry {
                    state: "Idle",
                    event: "ButtonPushed",
                    count: 2,
                },
                DuplicateEntry {
                    state: "Dispensing",
                    event: "CupFull",
                    count: 3,
                },
            ],
        };
        let message = err.to_string();
        assert!(message.contains("Idle"));
        assert!(message.contains("ButtonPushed"));
        assert!(message.contains("2 times"));
        assert!(message.contains("Dispensing"));
        assert!(message.contains("CupFull"));
        assert!(message.contains("3 times"));
    }
}
