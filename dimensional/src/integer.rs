//! Type-level signed integers, represented by zero [`Z`], the successor [`P`] of a non-negative
//! integer and the predecessor [`M`] of a non-positive integer.
//!
//! Every integer has exactly one representation: `P` is only ever wrapped around `Z` or another
//! `P`, and `M` only around `Z` or another `M`. The arithmetic traits in this module preserve that
//! form, so two integers are equal exactly when their types are equal.

/// The number zero.
///
/// # Examples
///
/// ```
/// use dimensional::integer::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of the non-negative integer `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use dimensional::integer::{P, Z};
///
/// let one: P<Z> = P(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct P<N>(pub N);

/// The predecessor of the non-positive integer `N` (i.e. `N - 1`).
///
/// # Examples
///
/// ```
/// use dimensional::integer::{M, Z};
///
/// let minus_one: M<Z> = M(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct M<N>(pub N);

/// A convenient type synonym for writing out type-level integers using constants.
pub type IntOf<const N: i8> = <Number<N> as ToInteger>::AsInteger;

/// The sum of two type-level integers.
pub type Sum<N, K> = <(N, K) as Add>::Result;

/// The difference of two type-level integers.
pub type Difference<N, K> = <(N, K) as Sub>::Result;

/// The negation of a type-level integer.
pub type Negation<N> = <N as Negate>::Result;

/// All type-level integers can be converted to their value-level equivalent `i32`.
///
/// # Examples
///
/// ```
/// use dimensional::integer::*;
///
/// assert_eq!(<IntOf<0>>::VALUE, 0);
/// assert_eq!(<IntOf<3>>::VALUE, 3);
/// assert_eq!(<IntOf<-2>>::VALUE, -2);
/// assert_eq!(<IntOf<-32>>::VALUE, -32);
/// ```
pub trait Integer: sealed::Integer + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level integer.
    const VALUE: i32;
}

impl Integer for Z {
    const VALUE: i32 = 0;
}

impl<N: Integer> Integer for P<N> {
    const VALUE: i32 = N::VALUE + 1;
}

impl<N: Integer> Integer for M<N> {
    const VALUE: i32 = N::VALUE - 1;
}

/// Add two type-level integers.
///
/// # Examples
///
/// ```
/// use dimensional::integer::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(IntOf<1>, IntOf<1>) as Add>::Result, IntOf<2>);
/// assert_type_eq_all!(<(IntOf<5>, IntOf<-7>) as Add>::Result, IntOf<-2>);
/// assert_type_eq_all!(<(IntOf<-3>, IntOf<3>) as Add>::Result, Z);
/// ```
pub trait Add: sealed::Arithmetic {
    /// The result of the addition.
    type Result: Integer;
}

impl<N: Integer> Add for (Z, N) {
    type Result = N;
}

impl<N: Integer> Add for (P<N>, Z) {
    type Result = P<N>;
}

impl<N: Integer> Add for (M<N>, Z) {
    type Result = M<N>;
}

impl<N: Integer, K: Integer> Add for (P<N>, P<K>)
where
    (N, K): Add,
{
    type Result = P<P<Sum<N, K>>>;
}

impl<N: Integer, K: Integer> Add for (M<N>, M<K>)
where
    (N, K): Add,
{
    type Result = M<M<Sum<N, K>>>;
}

// Opposite signs cancel one step from each side.
impl<N: Integer, K: Integer> Add for (P<N>, M<K>)
where
    (N, K): Add,
{
    type Result = Sum<N, K>;
}

impl<N: Integer, K: Integer> Add for (M<N>, P<K>)
where
    (N, K): Add,
{
    type Result = Sum<N, K>;
}

/// Negate a type-level integer.
///
/// # Examples
///
/// ```
/// use dimensional::integer::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<IntOf<4> as Negate>::Result, IntOf<-4>);
/// assert_type_eq_all!(<Z as Negate>::Result, Z);
/// ```
pub trait Negate: Integer {
    /// The result of the negation.
    type Result: Integer;
}

impl Negate for Z {
    type Result = Z;
}

impl<N: Negate> Negate for P<N> {
    type Result = M<Negation<N>>;
}

impl<N: Negate> Negate for M<N> {
    type Result = P<Negation<N>>;
}

/// Subtract two type-level integers.
///
/// # Examples
///
/// ```
/// use dimensional::integer::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<(IntOf<1>, IntOf<3>) as Sub>::Result, IntOf<-2>);
/// assert_type_eq_all!(<(IntOf<-1>, IntOf<-1>) as Sub>::Result, Z);
/// ```
pub trait Sub: sealed::Arithmetic {
    /// The result of the subtraction.
    type Result: Integer;
}

impl<N: Integer, K: Negate> Sub for (N, K)
where
    (N, Negation<K>): Add,
{
    type Result = Sum<N, Negation<K>>;
}

/// Implemented only by [`Number`], the const-generic spelling of an exponent.
pub trait Constant: sealed::Constant {}

/// An exponent written as an `i8` literal, such as `Number<-2>`.
///
/// Const generics cannot be matched on structurally, so every `Number` in the supported range is
/// paired with the successor chain that spells the same signed integer. For example `Number<2>`
/// pairs with `P<P<Z>>` and `Number<-2>` with `M<M<Z>>`.
#[allow(missing_debug_implementations, missing_copy_implementations)]
pub struct Number<const N: i8>;

impl<const N: i8> Constant for Number<N> {}

/// Maps an `i8` literal to its signed successor chain, a tower of [`P`] over [`Z`] for a positive
/// value or of [`M`] for a negative one.
///
/// This is what [`IntOf`] goes through.
pub trait ToInteger {
    /// The chain of `P` or `M` applied to `Z` with the same value.
    type AsInteger: Integer + ToConstant<AsConstant = Self>;
}

/// Maps a signed successor chain back to the `i8` literal it counts to, for instance `M<M<Z>>` to
/// `Number<-2>`.
pub trait ToConstant: Integer {
    /// The literal with the same value.
    type AsConstant: Constant + ToInteger<AsInteger = Self>;
}

dimensional_macro::generate_integer_conversion_impls!(32);

mod sealed {
    use super::*;

    pub trait Integer: 'static {}
    impl Integer for Z {}
    impl<N: Integer> Integer for P<N> {}
    impl<N: Integer> Integer for M<N> {}

    pub trait Constant: 'static {}
    impl<const N: i8> Constant for Number<N> {}

    pub trait Arithmetic {}
    impl<N: super::Integer, K: super::Integer> Arithmetic for (N, K) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    include!(concat!(env!("OUT_DIR"), "/integer_arithmetic.rs"));

    #[test]
    fn values_match_constants() {
        assert_eq!(<IntOf<17>>::VALUE, 17);
        assert_eq!(<IntOf<-17>>::VALUE, -17);
        assert_eq!(<Sum<IntOf<20>, IntOf<20>>>::VALUE, 40);
        assert_eq!(<Difference<IntOf<-20>, IntOf<20>>>::VALUE, -40);
    }

    #[test]
    fn round_trips_through_constants() {
        assert_type_eq_all!(<IntOf<-5> as ToConstant>::AsConstant, Number<-5>);
        assert_type_eq_all!(<IntOf<0> as ToConstant>::AsConstant, Number<0>);
        assert_type_eq_all!(<IntOf<32> as ToConstant>::AsConstant, Number<32>);
    }
}
