//! Macros for declaring state and event enumerations.

/// Generate a [`State`](crate::core::State) implementation for a simple
/// unit-variant enum.
///
/// The variant count becomes `State::COUNT` and declaration order fixes
/// each variant's ordinal, so the enum stays the single source of truth
/// for how many table rows the machine expects.
///
/// # Example
///
/// ```
/// use gearshift::state_enum;
/// use gearshift::core::State;
///
/// state_enum! {
///     pub enum VendingState {
///         Idle,
///         Dispensing,
///         Servicing,
///     }
/// }
///
/// assert_eq!(VendingState::COUNT, 3);
/// assert_eq!(VendingState::Servicing.ordinal(), 2);
/// assert_eq!(VendingState::Idle.name(), "Idle");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            const COUNT: usize = [$(stringify!($variant)),*].len();

            fn ordinal(&self) -> usize {
                *self as usize
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an [`EventKind`](crate::core::EventKind) implementation for a
/// simple unit-variant enum.
///
/// # Example
///
/// ```
/// use gearshift::event_enum;
/// use gearshift::core::EventKind;
///
/// event_enum! {
///     pub enum VendingEvent {
///         TeaButtonPushed,
///         CupFull,
///     }
/// }
///
/// assert_eq!(VendingEvent::CupFull.name(), "CupFull");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::EventKind for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
