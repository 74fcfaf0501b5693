//! Gearshift: a table-driven, thread-safe finite-state-machine engine.
//!
//! Gearshift dispatches events against a fixed transition table. The owner
//! domain supplies the state and event enumerations, the per-transition
//! handler predicates, and an opaque context; the engine supplies
//! table-driven dispatch, construction-time structural validation, and
//! serialized single-event processing.
//!
//! # Core Concepts
//!
//! - **State** / **EventKind**: closed owner enumerations, declared with
//!   [`state_enum!`] and [`event_enum!`] or implemented by hand
//! - **Transition**: an immutable rule binding an event kind to a handler
//!   and two candidate next states (success and failure)
//! - **StateMachine**: validates the table once, then serializes every
//!   `handle` call behind an internal lock
//!
//! Events not registered for the current state are silently ignored; that
//! is a deliberate part of the dispatch contract, not an error.
//!
//! # Example
//!
//! ```rust
//! use gearshift::{event_enum, state_enum, Event, StateMachine, Transition, TransitionTable};
//!
//! state_enum! {
//!     enum Turnstile {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! event_enum! {
//!     enum Visitor {
//!         Coin,
//!         Push,
//!     }
//! }
//!
//! let table = TransitionTable::new()
//!     .state(
//!         Turnstile::Locked,
//!         vec![Transition::new(
//!             Visitor::Coin,
//!             Turnstile::Unlocked,
//!             Turnstile::Locked,
//!             Box::new(|_, _| true),
//!         )],
//!     )
//!     .state(
//!         Turnstile::Unlocked,
//!         vec![Transition::new(
//!             Visitor::Push,
//!             Turnstile::Locked,
//!             Turnstile::Unlocked,
//!             Box::new(|_, _| true),
//!         )],
//!     );
//!
//! let machine: StateMachine<Turnstile, Visitor, ()> =
//!     StateMachine::new(Turnstile::Locked, table, ()).unwrap();
//!
//! machine.handle(&Event::new(Visitor::Push)); // not registered in Locked: ignored
//! assert_eq!(machine.current_state(), Turnstile::Locked);
//!
//! machine.handle(&Event::new(Visitor::Coin));
//! assert_eq!(machine.current_state(), Turnstile::Unlocked);
//! ```

pub mod core;
pub mod machine;

mod macros;

// Re-export commonly used types
pub use crate::core::{Event, EventKind, Handler, State, Transition};
pub use crate::machine::{ConfigError, DuplicateEntry, StateMachine, TransitionTable};
