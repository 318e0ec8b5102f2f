//! Strongly typed, zero-cost identifier wrappers.
//!
//! IDs are dense and sequential from zero, so the inner integer doubles as
//! the index into the owning `Vec` (passenger registry, fleet).  Ordering by
//! ID is the tie-break order used wherever the simulation needs one.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Sequential passenger identity, assigned at spawn (or manual injection).
    pub struct PassengerId(u32);
}

typed_id! {
    /// Elevator car identity; equal to the car's position in the fleet.
    pub struct ElevatorId(u32);
}
