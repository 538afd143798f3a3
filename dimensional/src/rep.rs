//! The primitive numeric types a quantity can be represented by, and the rules for mixing them.
//!
//! Two relations govern how representations interact:
//!
//! - [`CommonRep`] names the type arithmetic between two representations is carried out in. Any
//!   floating-point operand makes the result floating-point; two integers of the same signedness
//!   meet at the wider one; an unsigned integer meets a signed one only if the signed type is
//!   strictly wider. Other mixed-signedness pairs have no common type, so arithmetic between them
//!   does not compile.
//! - [`Implicit`] marks the pairs that convert without an explicit cast: anything into a
//!   floating-point type, and an integer into an integer type that holds all of its values. A
//!   floating-point value never converts into an integer implicitly.

use std::fmt::{Debug, Display};

use num_traits::{AsPrimitive, NumAssign, NumCast};

/// A primitive numeric type which can carry the value of a [`Quantity`](crate::Quantity).
///
/// This trait is sealed: it is implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`,
/// `u64`, `f32` and `f64`, and cannot be implemented outside this crate.
pub trait Representation:
    sealed::Representation
    + Copy
    + Default
    + Debug
    + Display
    + PartialOrd
    + NumAssign
    + NumCast
    + AsPrimitive<i8>
    + AsPrimitive<i16>
    + AsPrimitive<i32>
    + AsPrimitive<i64>
    + AsPrimitive<u8>
    + AsPrimitive<u16>
    + AsPrimitive<u32>
    + AsPrimitive<u64>
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + Send
    + Sync
    + 'static
{
    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    /// The largest conversion factor numerator or denominator this type can hold.
    const MAX_FACTOR: i128;

    /// Convert from another representation with the semantics of an `as` cast.
    fn from_rep<X: Representation>(value: X) -> Self;

    /// Convert from an `i128` with the semantics of an `as` cast.
    fn from_i128(value: i128) -> Self;
}

macro_rules! integral {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Representation for $t {}

            impl Representation for $t {
                const IS_FLOAT: bool = false;
                const MAX_FACTOR: i128 = <$t>::MAX as i128;

                #[inline]
                fn from_rep<X: Representation>(value: X) -> Self {
                    <X as AsPrimitive<$t>>::as_(value)
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

macro_rules! floating {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Representation for $t {}

            impl Representation for $t {
                const IS_FLOAT: bool = true;
                const MAX_FACTOR: i128 = i128::MAX;

                #[inline]
                fn from_rep<X: Representation>(value: X) -> Self {
                    <X as AsPrimitive<$t>>::as_(value)
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

integral!(i8, i16, i32, i64, u8, u16, u32, u64);
floating!(f32, f64);

/// The representation in which arithmetic between `Self` and `Rhs` is carried out.
///
/// # Examples
///
/// ```
/// use dimensional::rep::Common;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Common<i32, i32>, i32);
/// assert_type_eq_all!(Common<i32, f32>, f32);
/// assert_type_eq_all!(Common<f32, f64>, f64);
/// assert_type_eq_all!(Common<i8, i64>, i64);
/// assert_type_eq_all!(Common<u16, i32>, i32);
/// ```
///
/// An unsigned integer and a signed integer of the same width have no common representation:
///
/// ```compile_fail
/// use dimensional::rep::Common;
///
/// let _: Common<u32, i32> = 0;
/// ```
pub trait CommonRep<Rhs: Representation>: Representation {
    /// The common representation.
    type Output: Representation;
}

/// The common representation of `X` and `Y`.
pub type Common<X, Y> = <X as CommonRep<Y>>::Output;

macro_rules! same {
    ($($t:ty),* $(,)?) => {
        $(
            impl CommonRep<$t> for $t {
                type Output = $t;
            }
        )*
    };
}

macro_rules! promote {
    ($($a:ty, $b:ty => $c:ty;)*) => {
        $(
            impl CommonRep<$b> for $a {
                type Output = $c;
            }

            impl CommonRep<$a> for $b {
                type Output = $c;
            }
        )*
    };
}

same!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

promote! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i16, i32 => i32;
    i16, i64 => i64;
    i32, i64 => i64;

    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u16, u32 => u32;
    u16, u64 => u64;
    u32, u64 => u64;

    u8, i16 => i16;
    u8, i32 => i32;
    u8, i64 => i64;
    u16, i32 => i32;
    u16, i64 => i64;
    u32, i64 => i64;

    f32, f64 => f64;

    i8, f32 => f32;
    i16, f32 => f32;
    i32, f32 => f32;
    i64, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;

    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
}

/// Marks that a value represented by `Self` converts into `To` without an explicit cast.
///
/// # Examples
///
/// ```
/// use dimensional::rep::Implicit;
/// use static_assertions::{assert_impl_all, assert_not_impl_any};
///
/// assert_impl_all!(i32: Implicit<i64>, Implicit<f32>);
/// assert_impl_all!(u8: Implicit<i16>);
/// assert_not_impl_any!(f32: Implicit<i32>);
/// assert_not_impl_any!(i64: Implicit<i32>);
/// assert_not_impl_any!(i8: Implicit<u8>);
/// ```
pub trait Implicit<To: Representation>: Representation {}

macro_rules! implicit {
    ($($from:ty => $($to:ty),+;)*) => {
        $($(
            impl Implicit<$to> for $from {}
        )+)*
    };
}

implicit! {
    i8 => i8, i16, i32, i64, f32, f64;
    i16 => i16, i32, i64, f32, f64;
    i32 => i32, i64, f32, f64;
    i64 => i64, f32, f64;
    u8 => u8, u16, u32, u64, i16, i32, i64, f32, f64;
    u16 => u16, u32, u64, i32, i64, f32, f64;
    u32 => u32, u64, i64, f32, f64;
    u64 => u64, f32, f64;
    f32 => f32, f64;
    f64 => f32, f64;
}

mod sealed {
    pub trait Representation {}
}
