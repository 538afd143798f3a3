//! The error returned by the checked conversions.
//!
//! Nothing else in this crate fails at runtime: every other conversion either compiles, in which
//! case it cannot go wrong beyond the usual integer truncation, or is rejected during compilation.

use thiserror::Error;

/// A conversion performed by [`checked_unit_cast`](crate::checked_unit_cast) could not produce a
/// value in the target representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConversionError {
    /// The value itself cannot be represented in the target type: it is out of range, negative
    /// for an unsigned target, or not a number.
    #[error("value cannot be represented in the target type")]
    Unrepresentable,
    /// Scaling the value by the conversion factor overflowed the target type.
    #[error("rescaling by {num}/{den} overflows the target type")]
    Overflow {
        /// The numerator of the conversion factor.
        num: i128,
        /// The denominator of the conversion factor.
        den: i128,
    },
}
