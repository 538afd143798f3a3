//! Arithmetic on quantities.
//!
//! | Expression | Dimension | Scale | Representation |
//! | :--------- | :-------- | :---- | :------------- |
//! | `a + b`, `a - b` | `D` (both operands must have it) | [`CommonScale<S1, S2>`] | [`Common<X, Y>`] |
//! | `a * b` | `D1 + D2` | [`CommonScale<S1, S2>`] | [`Common<X, Y>`] |
//! | `a / b` | `D1 - D2` | [`CommonScale<S1, S2>`] | [`Common<X, Y>`] |
//! | `a * s`, `s * a`, `a / s` | unchanged | unchanged | [`Common<X, S>`](Common) |
//!
//! Before combining two quantities, each is rescaled into the common scale under its own
//! dimension. A product or quotient whose dimension cancels out entirely is not a quantity at
//! all: it is returned as a bare number in the common representation (see [`Simplify`]).
//!
//! The compound assignments `+=` and `-=` accept any quantity that converts implicitly into the
//! left-hand side (see [`Quantity::from_quantity`]). `*=` and `/=` accept any scalar, compute in
//! the common representation, and cast the result back, so an integral quantity divided by a
//! float is truncated.

use std::ops;

use crate::dimension::{Dimension, DimensionVector, DivDimension, MulDimension, Product, Quotient};
use crate::integer::{Integer, M, P, Z};
use crate::quantity::{common_values, Quantity};
use crate::rep::{Common, CommonRep, Implicit, Representation};
use crate::scale::{CommonScale, ScaleTriple};

/// The result of a product or quotient with dimension `Self`, representation `T` and scale `S`.
///
/// For [`Dimensionless`](crate::Dimensionless) that is the bare `T`; for every other dimension
/// it is a [`Quantity`].
///
/// # Examples
///
/// ```
/// use dimensional::si::{Centimeters, Meters, MetersPerSecond, Seconds};
///
/// let ratio: f32 = Meters::<f32>::new(1.0) / Centimeters::<f32>::new(50.0);
/// assert_eq!(ratio, 2.0);
///
/// // The scale of a result is computed from the operands' scales, so it is converted to be named.
/// let speed: MetersPerSecond<f32> = (Meters::<f32>::new(10.0) / Seconds::<f32>::new(4.0)).convert();
/// assert_eq!(speed.value(), 2.5);
/// ```
pub trait Simplify<T, S>: DimensionVector {
    /// A bare `T` or a `Quantity`.
    type Output;

    /// Wrap a raw value computed in the scale `S`.
    fn simplify(value: T) -> Self::Output;
}

impl<T, S> Simplify<T, S> for Dimension<Z, Z, Z> {
    type Output = T;

    #[inline]
    fn simplify(value: T) -> T {
        value
    }
}

macro_rules! simplify_to_quantity {
    ($(<$($n:ident),*> $d1:ty, $d2:ty, $d3:ty;)*) => {
        $(
            impl<T, S, $($n: Integer),*> Simplify<T, S> for Dimension<$d1, $d2, $d3> {
                type Output = Quantity<T, Self, S>;

                #[inline]
                fn simplify(value: T) -> Self::Output {
                    Quantity::new(value)
                }
            }
        )*
    };
}

simplify_to_quantity! {
    <N, D2, D3> P<N>, D2, D3;
    <N, D2, D3> M<N>, D2, D3;
    <N, D3> Z, P<N>, D3;
    <N, D3> Z, M<N>, D3;
    <N> Z, Z, P<N>;
    <N> Z, Z, M<N>;
}

/// Add two quantities of the same dimension.
///
/// ```
/// use dimensional::prelude::*;
///
/// type Length<T, const N: i64, const D: i64> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<N, D>>>;
///
/// let sum = Length::<i32, 7, 8>::new(10) + Length::<i32, 8, 9>::new(40);
/// assert_eq!(sum.value(), 3190);
/// assert_eq!(sum.scale()[0], (1, 72));
/// ```
///
/// Adding quantities of different dimensions does not compile:
///
/// ```compile_fail
/// use dimensional::si::{Meters, Seconds};
///
/// let _ = Meters::<f32>::new(1.0) + Seconds::<f32>::new(1.0);
/// ```
impl<X, Y, D, S1, S2> ops::Add<Quantity<Y, D, S2>> for Quantity<X, D, S1>
where
    X: CommonRep<Y>,
    Y: Representation,
    D: DimensionVector,
    S1: ScaleTriple,
    S2: ScaleTriple,
{
    type Output = Quantity<Common<X, Y>, D, CommonScale<S1, S2>>;

    #[inline]
    fn add(self, rhs: Quantity<Y, D, S2>) -> Self::Output {
        let (lhs, rhs) = common_values(self, rhs);
        Quantity::new(lhs + rhs)
    }
}

impl<X, Y, D, S1, S2> ops::Sub<Quantity<Y, D, S2>> for Quantity<X, D, S1>
where
    X: CommonRep<Y>,
    Y: Representation,
    D: DimensionVector,
    S1: ScaleTriple,
    S2: ScaleTriple,
{
    type Output = Quantity<Common<X, Y>, D, CommonScale<S1, S2>>;

    #[inline]
    fn sub(self, rhs: Quantity<Y, D, S2>) -> Self::Output {
        let (lhs, rhs) = common_values(self, rhs);
        Quantity::new(lhs - rhs)
    }
}

/// Multiply two quantities of any dimensions.
///
/// ```
/// use dimensional::prelude::*;
///
/// type A = Quantity<i32, Dim<1, -1, 1>, Scale<Ratio<7, 8>>>;
/// type B = Quantity<i32, Dim<0, 1, 2>, Scale<Ratio<8, 9>>>;
///
/// let product = A::new(10) * B::new(40);
/// assert_eq!(product.dimension(), [1, 0, 3]);
/// ```
impl<X, Y, D1, D2, S1, S2> ops::Mul<Quantity<Y, D2, S2>> for Quantity<X, D1, S1>
where
    X: CommonRep<Y>,
    Y: Representation,
    D1: MulDimension<D2>,
    D2: DimensionVector,
    S1: ScaleTriple,
    S2: ScaleTriple,
    Product<D1, D2>: Simplify<Common<X, Y>, CommonScale<S1, S2>>,
{
    type Output = <Product<D1, D2> as Simplify<Common<X, Y>, CommonScale<S1, S2>>>::Output;

    #[inline]
    fn mul(self, rhs: Quantity<Y, D2, S2>) -> Self::Output {
        let lhs = self.rescaled::<Common<X, Y>, CommonScale<S1, S2>>();
        let rhs = rhs.rescaled::<Common<X, Y>, CommonScale<S1, S2>>();
        <Product<D1, D2> as Simplify<Common<X, Y>, CommonScale<S1, S2>>>::simplify(lhs * rhs)
    }
}

/// Divide two quantities of any dimensions.
///
/// ```
/// use dimensional::prelude::*;
///
/// type Length<T, const N: i64, const D: i64> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<N, D>>>;
///
/// // The dimensions cancel, so the result is a plain number.
/// let ratio: f32 = Length::<i32, 7, 8>::new(10) / Length::<f32, 8, 9>::new(40.0);
/// assert_eq!(ratio, 0.24609375);
///
/// let truncated: i32 = Length::<i32, 4, 3>::new(7) / Length::<i32, 4, 3>::new(2);
/// assert_eq!(truncated, 3);
/// ```
impl<X, Y, D1, D2, S1, S2> ops::Div<Quantity<Y, D2, S2>> for Quantity<X, D1, S1>
where
    X: CommonRep<Y>,
    Y: Representation,
    D1: DivDimension<D2>,
    D2: DimensionVector,
    S1: ScaleTriple,
    S2: ScaleTriple,
    Quotient<D1, D2>: Simplify<Common<X, Y>, CommonScale<S1, S2>>,
{
    type Output = <Quotient<D1, D2> as Simplify<Common<X, Y>, CommonScale<S1, S2>>>::Output;

    #[inline]
    fn div(self, rhs: Quantity<Y, D2, S2>) -> Self::Output {
        let lhs = self.rescaled::<Common<X, Y>, CommonScale<S1, S2>>();
        let rhs = rhs.rescaled::<Common<X, Y>, CommonScale<S1, S2>>();
        <Quotient<D1, D2> as Simplify<Common<X, Y>, CommonScale<S1, S2>>>::simplify(lhs / rhs)
    }
}

macro_rules! scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<X, D, S> ops::Mul<$t> for Quantity<X, D, S>
            where
                X: CommonRep<$t>,
                D: DimensionVector,
                S: ScaleTriple,
            {
                type Output = Quantity<Common<X, $t>, D, S>;

                #[inline]
                fn mul(self, rhs: $t) -> Self::Output {
                    let lhs = <Common<X, $t> as Representation>::from_rep(self.value());
                    let rhs = <Common<X, $t> as Representation>::from_rep(rhs);
                    Quantity::new(lhs * rhs)
                }
            }

            impl<Y, D, S> ops::Mul<Quantity<Y, D, S>> for $t
            where
                $t: CommonRep<Y>,
                Y: Representation,
                D: DimensionVector,
                S: ScaleTriple,
            {
                type Output = Quantity<Common<$t, Y>, D, S>;

                #[inline]
                fn mul(self, rhs: Quantity<Y, D, S>) -> Self::Output {
                    let lhs = <Common<$t, Y> as Representation>::from_rep(self);
                    let rhs = <Common<$t, Y> as Representation>::from_rep(rhs.value());
                    Quantity::new(lhs * rhs)
                }
            }

            impl<X, D, S> ops::Div<$t> for Quantity<X, D, S>
            where
                X: CommonRep<$t>,
                D: DimensionVector,
                S: ScaleTriple,
            {
                type Output = Quantity<Common<X, $t>, D, S>;

                #[inline]
                fn div(self, rhs: $t) -> Self::Output {
                    let lhs = <Common<X, $t> as Representation>::from_rep(self.value());
                    let rhs = <Common<X, $t> as Representation>::from_rep(rhs);
                    Quantity::new(lhs / rhs)
                }
            }
        )*
    };
}

scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Add a quantity that converts implicitly into this one.
///
/// ```
/// use dimensional::prelude::*;
///
/// type Length<T, const N: i64, const D: i64> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<N, D>>>;
///
/// let mut a = Length::<i32, 1, 3>::new(40);
/// a += Length::<i32, 4, 3>::new(10);
/// assert_eq!(a.value(), 80);
/// ```
///
/// The other way around, the finer quantity would have to be truncated:
///
/// ```compile_fail
/// use dimensional::prelude::*;
///
/// type Length<T, const N: i64, const D: i64> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<N, D>>>;
///
/// let mut a = Length::<i32, 4, 3>::new(10);
/// a += Length::<i32, 1, 3>::new(40);
/// ```
impl<T, Y, D, S, S2> ops::AddAssign<Quantity<Y, D, S2>> for Quantity<T, D, S>
where
    T: Representation,
    Y: Implicit<T>,
    D: DimensionVector,
    S: ScaleTriple,
    S2: ScaleTriple,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<Y, D, S2>) {
        *self.value_mut() += Self::from_quantity(rhs).value();
    }
}

impl<T, Y, D, S, S2> ops::SubAssign<Quantity<Y, D, S2>> for Quantity<T, D, S>
where
    T: Representation,
    Y: Implicit<T>,
    D: DimensionVector,
    S: ScaleTriple,
    S2: ScaleTriple,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<Y, D, S2>) {
        *self.value_mut() -= Self::from_quantity(rhs).value();
    }
}

impl<T, Y, D, S> ops::MulAssign<Y> for Quantity<T, D, S>
where
    T: CommonRep<Y>,
    Y: Representation,
    D: DimensionVector,
    S: ScaleTriple,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Y) {
        let lhs = <Common<T, Y> as Representation>::from_rep(self.value());
        let rhs = <Common<T, Y> as Representation>::from_rep(rhs);
        *self.value_mut() = T::from_rep(lhs * rhs);
    }
}

impl<T, Y, D, S> ops::DivAssign<Y> for Quantity<T, D, S>
where
    T: CommonRep<Y>,
    Y: Representation,
    D: DimensionVector,
    S: ScaleTriple,
{
    #[inline]
    fn div_assign(&mut self, rhs: Y) {
        let lhs = <Common<T, Y> as Representation>::from_rep(self.value());
        let rhs = <Common<T, Y> as Representation>::from_rep(rhs);
        *self.value_mut() = T::from_rep(lhs / rhs);
    }
}

impl<T, D, S> ops::Neg for Quantity<T, D, S>
where
    T: Representation + ops::Neg<Output = T>,
    D: DimensionVector,
    S: ScaleTriple,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Quantity::new(-self.value())
    }
}
