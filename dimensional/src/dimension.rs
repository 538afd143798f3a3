//! Dimension vectors: an integer exponent for each of the three base dimensions, carried entirely
//! in the type.
//!
//! The named units in [`si`](crate::si) use the axes as length, time and mass, in that order, but
//! nothing else in the crate depends on that reading.

use std::{
    fmt::{self, Display, Formatter},
    marker::PhantomData,
    ops,
};

use crate::integer::{self, Difference, IntOf, Integer, Sum, Z};

/// The dimension whose exponents along the three base axes are `D1`, `D2` and `D3`.
///
/// You will rarely need to spell this type out: use the [`Dim`] synonym, which takes the exponents
/// as constants.
///
/// Values of this type are zero-sized tags. They support the same arithmetic as the type-level
/// dimensions they stand for: `*` adds exponents, `/` subtracts them, and `+`/`-` only accept two
/// equal dimensions.
///
/// # Examples
///
/// ```
/// use dimensional::prelude::*;
///
/// let velocity = Dim::<1, 0, 0>::new() / Dim::<0, 1, 0>::new();
/// let _: Dim<1, -1, 0> = velocity;
/// assert_eq!(velocity.to_string(), "[1,-1,0]");
/// ```
///
/// Adding two different dimensions does not compile:
///
/// ```compile_fail
/// use dimensional::prelude::*;
///
/// let _ = Dim::<1, 0, 0>::new() + Dim::<0, 1, 0>::new();
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct Dimension<D1, D2, D3> {
    #[derivative(Debug = "ignore")]
    exponents: PhantomData<fn() -> (D1, D2, D3)>,
}

/// A convenient type synonym for writing out dimensions using constant exponents.
///
/// ```
/// use dimensional::prelude::*;
///
/// assert_eq!(<Dim<2, -1, 0> as DimensionVector>::EXPONENTS, [2, -1, 0]);
/// ```
pub type Dim<const D1: i8, const D2: i8, const D3: i8> =
    Dimension<IntOf<D1>, IntOf<D2>, IntOf<D3>>;

/// The dimension of a pure number, with every exponent zero.
pub type Dimensionless = Dimension<Z, Z, Z>;

/// The dimension of a product of quantities with dimensions `A` and `B`.
pub type Product<A, B> = <A as MulDimension<B>>::Output;

/// The dimension of a quotient of quantities with dimensions `A` and `B`.
pub type Quotient<A, B> = <A as DivDimension<B>>::Output;

impl<D1, D2, D3> Dimension<D1, D2, D3> {
    /// Make a new dimension tag.
    pub const fn new() -> Self {
        Dimension {
            exponents: PhantomData,
        }
    }
}

/// Every [`Dimension`] is a `DimensionVector`, which gives access to its exponents.
pub trait DimensionVector: sealed::DimensionVector + Default + Copy + Send + Sync + 'static {
    /// The exponent along the first axis.
    type D1: Integer;
    /// The exponent along the second axis.
    type D2: Integer;
    /// The exponent along the third axis.
    type D3: Integer;

    /// The three exponents as runtime values.
    const EXPONENTS: [i32; 3] = [
        <Self::D1 as Integer>::VALUE,
        <Self::D2 as Integer>::VALUE,
        <Self::D3 as Integer>::VALUE,
    ];

    /// Whether every exponent is zero.
    const IS_DIMENSIONLESS: bool =
        Self::EXPONENTS[0] == 0 && Self::EXPONENTS[1] == 0 && Self::EXPONENTS[2] == 0;
}

impl<D1: Integer, D2: Integer, D3: Integer> DimensionVector for Dimension<D1, D2, D3> {
    type D1 = D1;
    type D2 = D2;
    type D3 = D3;
}

/// Multiply two dimensions, adding their exponents axis by axis.
///
/// # Examples
///
/// ```
/// use dimensional::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Product<Dim<1, 0, 0>, Dim<0, 1, 0>>, Dim<1, 1, 0>);
/// assert_type_eq_all!(Product<Dim<1, -1, 1>, Dim<0, 1, 2>>, Dim<1, 0, 3>);
/// ```
pub trait MulDimension<Rhs: DimensionVector>: DimensionVector {
    /// The product.
    type Output: DimensionVector;
}

impl<A1, A2, A3, B1, B2, B3> MulDimension<Dimension<B1, B2, B3>> for Dimension<A1, A2, A3>
where
    A1: Integer,
    A2: Integer,
    A3: Integer,
    B1: Integer,
    B2: Integer,
    B3: Integer,
    (A1, B1): integer::Add,
    (A2, B2): integer::Add,
    (A3, B3): integer::Add,
{
    type Output = Dimension<Sum<A1, B1>, Sum<A2, B2>, Sum<A3, B3>>;
}

/// Divide two dimensions, subtracting their exponents axis by axis.
///
/// # Examples
///
/// ```
/// use dimensional::prelude::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Quotient<Dim<1, 0, 0>, Dim<0, 1, 0>>, Dim<1, -1, 0>);
/// assert_type_eq_all!(Quotient<Dim<1, -1, 1>, Dim<0, 1, 2>>, Dim<1, -2, -1>);
/// assert_type_eq_all!(Quotient<Dim<2, 1, 0>, Dim<2, 1, 0>>, Dimensionless);
/// ```
pub trait DivDimension<Rhs: DimensionVector>: DimensionVector {
    /// The quotient.
    type Output: DimensionVector;
}

impl<A1, A2, A3, B1, B2, B3> DivDimension<Dimension<B1, B2, B3>> for Dimension<A1, A2, A3>
where
    A1: Integer,
    A2: Integer,
    A3: Integer,
    B1: Integer,
    B2: Integer,
    B3: Integer,
    (A1, B1): integer::Sub,
    (A2, B2): integer::Sub,
    (A3, B3): integer::Sub,
{
    type Output = Dimension<Difference<A1, B1>, Difference<A2, B2>, Difference<A3, B3>>;
}

impl<D1, D2, D3, Rhs> ops::Mul<Rhs> for Dimension<D1, D2, D3>
where
    Self: MulDimension<Rhs>,
    Rhs: DimensionVector,
{
    type Output = Product<Self, Rhs>;

    fn mul(self, _: Rhs) -> Self::Output {
        Default::default()
    }
}

impl<D1, D2, D3, Rhs> ops::Div<Rhs> for Dimension<D1, D2, D3>
where
    Self: DivDimension<Rhs>,
    Rhs: DimensionVector,
{
    type Output = Quotient<Self, Rhs>;

    fn div(self, _: Rhs) -> Self::Output {
        Default::default()
    }
}

impl<D1: Integer, D2: Integer, D3: Integer> ops::Add for Dimension<D1, D2, D3> {
    type Output = Self;

    fn add(self, _: Self) -> Self {
        self
    }
}

impl<D1: Integer, D2: Integer, D3: Integer> ops::Sub for Dimension<D1, D2, D3> {
    type Output = Self;

    fn sub(self, _: Self) -> Self {
        self
    }
}

impl<D1: Integer, D2: Integer, D3: Integer> Display for Dimension<D1, D2, D3> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let [d1, d2, d3] = Self::EXPONENTS;
        write!(f, "[{},{},{}]", d1, d2, d3)
    }
}

mod sealed {
    use super::*;

    pub trait DimensionVector {}
    impl<D1: Integer, D2: Integer, D3: Integer> DimensionVector for Dimension<D1, D2, D3> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    include!(concat!(env!("OUT_DIR"), "/dimension_arithmetic.rs"));

    #[test]
    fn exponents_read_back() {
        assert_eq!(<Dim<1, -1, 0>>::EXPONENTS, [1, -1, 0]);
        assert!(Dimensionless::IS_DIMENSIONLESS);
        assert!(!<Dim<0, 0, 1>>::IS_DIMENSIONLESS);
    }

    #[test]
    fn value_level_arithmetic() {
        let length = Dim::<1, 0, 0>::new();
        let time = Dim::<0, 1, 0>::new();
        let area: Dim<2, 0, 0> = length * length;
        let _: Dim<1, 1, 0> = length * time;
        let _: Dim<1, -1, 0> = length / time;
        let _: Dimensionless = area / (length * length);
        assert_eq!(length + length, length);
        assert_eq!(format!("{}", length / time), "[1,-1,0]");
    }

    #[test]
    fn equal_dimensions_only_add() {
        assert_impl_all!(Dim<1, 0, 0>: ops::Add<Dim<1, 0, 0>>);
        assert_not_impl_any!(Dim<1, 0, 0>: ops::Add<Dim<0, 1, 0>>, ops::Sub<Dim<1, 0, 1>>);
    }
}
