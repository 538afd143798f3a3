//! Scale triples: one [`Rational`] step size per dimension axis.

use std::marker::PhantomData;

use crate::ratio::{CommonRatio, One, Rational};

/// The scale whose steps along the three axes are `R1`, `R2` and `R3`.
///
/// A quantity of dimension `(d1, d2, d3)` and scale `(r1, r2, r3)` with raw value `v` stands for
/// `v · r1^d1 · r2^d2 · r3^d3` base units. The ratio of an axis whose exponent is zero is never
/// used, which is why the trailing ratios default to [`One`].
///
/// # Examples
///
/// ```
/// use dimensional::prelude::*;
///
/// type Centimeters = Scale<Ratio<1, 100>>;
/// assert_eq!(Centimeters::RATIOS, [(1, 100), (1, 1), (1, 1)]);
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
pub struct Scale<R1 = One, R2 = One, R3 = One> {
    #[derivative(Debug = "ignore")]
    ratios: PhantomData<fn() -> (R1, R2, R3)>,
}

/// The scale two quantities of scales `S1` and `S2` are combined in.
///
/// Along each axis this is the [`CommonRatio`] of the two operands' steps, the finer step both
/// are whole multiples of.
pub type CommonScale<S1, S2> = Scale<
    CommonRatio<<S1 as ScaleTriple>::R1, <S2 as ScaleTriple>::R1>,
    CommonRatio<<S1 as ScaleTriple>::R2, <S2 as ScaleTriple>::R2>,
    CommonRatio<<S1 as ScaleTriple>::R3, <S2 as ScaleTriple>::R3>,
>;

/// Every [`Scale`] is a `ScaleTriple`, which gives access to its ratios.
pub trait ScaleTriple: sealed::ScaleTriple + Send + Sync + 'static {
    /// The step along the first axis.
    type R1: Rational;
    /// The step along the second axis.
    type R2: Rational;
    /// The step along the third axis.
    type R3: Rational;

    /// The three steps as reduced `(numerator, denominator)` pairs.
    const RATIOS: [(i64, i64); 3] = [
        (<Self::R1 as Rational>::NUM, <Self::R1 as Rational>::DEN),
        (<Self::R2 as Rational>::NUM, <Self::R2 as Rational>::DEN),
        (<Self::R3 as Rational>::NUM, <Self::R3 as Rational>::DEN),
    ];
}

impl<R1: Rational, R2: Rational, R3: Rational> ScaleTriple for Scale<R1, R2, R3> {
    type R1 = R1;
    type R2 = R2;
    type R3 = R3;
}

mod sealed {
    use super::*;

    pub trait ScaleTriple {}
    impl<R1: Rational, R2: Rational, R3: Rational> ScaleTriple for Scale<R1, R2, R3> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratio::Ratio;

    #[test]
    fn common_scale_is_finer_on_every_axis() {
        type A = Scale<Ratio<4, 3>, Ratio<4, 3>, Ratio<4, 3>>;
        type B = Scale<Ratio<1, 3>, Ratio<1, 2>, Ratio<7, 8>>;
        assert_eq!(<CommonScale<A, B>>::RATIOS, [(1, 3), (1, 6), (1, 24)]);
        assert_eq!(<CommonScale<B, A>>::RATIOS, <CommonScale<A, B>>::RATIOS);
    }
}
