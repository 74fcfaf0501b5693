//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait, which describes
//! the owner's closed state enumeration to the engine: how many real
//! states exist, how each maps onto a table index, and how each is named
//! in diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are small, copyable tags drawn from a closed enumeration. The
/// engine keys its transition table by `ordinal`, which must assign the
/// contiguous range `0..COUNT` across the enumeration — one slot per real
/// state, none skipped. `COUNT` is the number of real states and is
/// checked against the transition table at machine construction.
///
/// # Required Traits
///
/// - `Copy` + `Eq`: states are compared and stored by value
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable so owners
///   can persist or report them
///
/// The [`state_enum!`](crate::state_enum) macro generates a conforming
/// implementation for unit-variant enums.
///
/// # Example
///
/// ```rust
/// use gearshift::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Closed,
///     Open,
///     Locked,
/// }
///
/// impl State for DoorState {
///     const COUNT: usize = 3;
///
///     fn ordinal(&self) -> usize {
///         *self as usize
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///             Self::Locked => "Locked",
///         }
///     }
/// }
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Number of real states in the enumeration.
    ///
    /// The transition table must register exactly this many states.
    const COUNT: usize;

    /// Position of this state in the range `0..COUNT`.
    ///
    /// Ordinals must be contiguous and unique; the engine uses them as
    /// indices into its transition table.
    fn ordinal(&self) -> usize;

    /// Get the state's name for display/logging.
    ///
    /// Used in validation diagnostics; must cover every variant.
    fn name(&self) -> &'static str;
}
