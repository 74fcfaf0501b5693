//! Core state machine types.
//!
//! This module contains the engine's vocabulary:
//! - State and event-kind contracts via the `State` and `EventKind` traits
//! - Event messages with optional owner payloads
//! - Transition rules binding event kinds to handlers and next states
//!
//! Everything here is pure data plus predicates; dispatch and validation
//! live in [`crate::machine`].

mod event;
mod state;
mod transition;

pub use event::{Event, EventKind};
pub use state::State;
pub use transition::{Handler, Transition};
