//! Exact conversion factors between scales, computed during compilation.
//!
//! Converting a quantity of dimension `D` from scale `Src` to scale `Dst` multiplies its raw value
//! by a single rational [`Factor`]. Each axis contributes `(src / dst)^e` for its exponent `e`, and
//! an axis with exponent zero contributes exactly one whatever its nominal ratio is. Powers are
//! taken by exact integer exponentiation, and the whole computation runs in `i128`; if it
//! overflows, compilation fails.

use std::marker::PhantomData;

use crate::dimension::DimensionVector;
use crate::rep::Representation;
use crate::scale::ScaleTriple;

/// A reduced fraction with a positive denominator.
///
/// # Examples
///
/// ```
/// use dimensional::conversion::Factor;
///
/// let factor = Factor::new(6, 4).mul(Factor::new(2, 9));
/// assert_eq!(factor, Factor::new(1, 3));
/// assert!(!factor.is_integer());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Factor {
    /// The numerator.
    pub num: i128,
    /// The denominator, always positive.
    pub den: i128,
}

impl Factor {
    /// The factor `1 / 1`.
    pub const UNITY: Factor = Factor { num: 1, den: 1 };

    /// Make the fraction `num / den`, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// If `den` is zero.
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "conversion factor with a zero denominator");
        let g = gcd(num, den);
        let (num, den) = (num / g, den / g);
        if den < 0 {
            Factor {
                num: -num,
                den: -den,
            }
        } else {
            Factor { num, den }
        }
    }

    /// Multiply two factors, cancelling common divisors before multiplying.
    ///
    /// # Panics
    ///
    /// If the reduced product overflows `i128`.
    pub const fn mul(self, other: Factor) -> Factor {
        let g1 = gcd(self.num, other.den);
        let g2 = gcd(other.num, self.den);
        Factor {
            num: checked(mul(self.num / g1, other.num / g2)),
            den: checked(mul(self.den / g2, other.den / g1)),
        }
    }

    /// The reciprocal of a non-zero factor.
    pub const fn recip(self) -> Factor {
        Factor::new(self.den, self.num)
    }

    /// Raise the factor to a non-negative integer power.
    pub const fn pow(self, exponent: u32) -> Factor {
        // Both halves stay coprime, so there is nothing to reduce.
        Factor {
            num: ipow(self.num, exponent),
            den: ipow(self.den, exponent),
        }
    }

    /// Whether the factor is a whole number.
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Whether the factor is exactly one.
    pub const fn is_unity(self) -> bool {
        self.num == 1 && self.den == 1
    }
}

/// Raise `base` to the power `exponent` by repeated squaring, exactly.
///
/// # Panics
///
/// If the result overflows `i128`.
pub const fn ipow(base: i128, exponent: u32) -> i128 {
    let mut result: i128 = 1;
    let mut base = base;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = checked(mul(result, base));
        }
        exponent >>= 1;
        if exponent > 0 {
            base = checked(mul(base, base));
        }
    }
    result
}

/// The factor contributed by one axis when converting from the step `src` to the step `dst`
/// under the exponent `exponent`.
pub const fn axis_factor(src: (i64, i64), dst: (i64, i64), exponent: i32) -> Factor {
    if exponent == 0 {
        return Factor::UNITY;
    }
    let ratio = Factor::new(src.0 as i128 * dst.1 as i128, src.1 as i128 * dst.0 as i128);
    let ratio = if exponent < 0 { ratio.recip() } else { ratio };
    ratio.pow(exponent.unsigned_abs())
}

/// The combined factor converting a quantity with the given exponents from the scale `src` to the
/// scale `dst`.
///
/// # Examples
///
/// ```
/// use dimensional::conversion::{conversion_factor, Factor};
///
/// let thirds = [(4, 3), (4, 3), (4, 3)];
/// let mixed = [(3, 2), (1, 2), (1, 3)];
/// assert_eq!(conversion_factor([1, 1, 1], thirds, mixed), Factor::new(256, 27));
/// assert_eq!(conversion_factor([1, -1, 0], thirds, mixed), Factor::new(1, 3));
/// ```
pub const fn conversion_factor(
    exponents: [i32; 3],
    src: [(i64, i64); 3],
    dst: [(i64, i64); 3],
) -> Factor {
    let mut factor = Factor::UNITY;
    let mut axis = 0;
    while axis < 3 {
        factor = factor.mul(axis_factor(src[axis], dst[axis], exponents[axis]));
        axis += 1;
    }
    factor
}

/// The conversion of quantities of dimension `D` from the scale `Src` to the scale `Dst`.
///
/// # Examples
///
/// ```
/// use dimensional::conversion::{Conversion, Factor};
/// use dimensional::prelude::*;
///
/// type Area = Dim<2, 0, 0>;
/// type Centimeters = Scale<Ratio<1, 100>>;
/// type Inches = Scale<Ratio<1, 39>>;
/// assert_eq!(
///     Conversion::<Area, Centimeters, Inches>::FACTOR,
///     Factor::new(1521, 10000)
/// );
/// ```
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Conversion<D, Src, Dst> {
    #[derivative(Debug = "ignore")]
    scales: PhantomData<fn() -> (D, Src, Dst)>,
}

impl<D: DimensionVector, Src: ScaleTriple, Dst: ScaleTriple> Conversion<D, Src, Dst> {
    /// The factor to multiply a raw value by.
    pub const FACTOR: Factor = conversion_factor(D::EXPONENTS, Src::RATIOS, Dst::RATIOS);

    /// Whether the conversion never needs to divide.
    pub const IS_EXACT: bool = Self::FACTOR.is_integer();
}

/// A [`Conversion`] into a particular representation, carrying the compile-time checks that
/// depend on it.
pub(crate) struct Rescale<T, D, Src, Dst>(PhantomData<fn() -> (T, D, Src, Dst)>);

impl<T, D, Src, Dst> Rescale<T, D, Src, Dst>
where
    T: Representation,
    D: DimensionVector,
    Src: ScaleTriple,
    Dst: ScaleTriple,
{
    /// The conversion factor, checked to fit in `T`.
    pub(crate) const FACTOR: Factor = {
        let factor = Conversion::<D, Src, Dst>::FACTOR;
        assert!(
            T::IS_FLOAT || (factor.num <= T::MAX_FACTOR && factor.den <= T::MAX_FACTOR),
            "the conversion factor does not fit in the target representation"
        );
        factor
    };

    /// The conversion factor, checked to be a whole number when `T` is integral.
    pub(crate) const EXACT: Factor = {
        let factor = Self::FACTOR;
        assert!(
            T::IS_FLOAT || factor.is_integer(),
            "integral quantities convert implicitly only to a scale that divides theirs exactly; \
             use `unit_cast` to truncate"
        );
        factor
    };
}

/// Convert `value` into the representation `T` and scale it by `factor`.
///
/// The value is cast first, then multiplied by the numerator, then divided by the denominator, so
/// an integral result is truncated toward zero only once. A unity factor is a plain cast.
///
/// # Examples
///
/// ```
/// use dimensional::conversion::{rescale, Factor};
///
/// assert_eq!(rescale::<i32, i32>(10, Factor::new(4, 1)), 40);
/// assert_eq!(rescale::<i32, i32>(7, Factor::new(1, 3)), 2);
/// assert_eq!(rescale::<i32, f64>(7, Factor::new(1, 4)), 1.75);
/// ```
#[inline]
pub fn rescale<X: Representation, T: Representation>(value: X, factor: Factor) -> T {
    let value = T::from_rep(value);
    if factor.is_unity() {
        value
    } else {
        value * T::from_i128(factor.num) / T::from_i128(factor.den)
    }
}

const fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    if a == 0 {
        1
    } else {
        a
    }
}

const fn mul(a: i128, b: i128) -> Option<i128> {
    a.checked_mul(b)
}

const fn checked(value: Option<i128>) -> i128 {
    match value {
        Some(value) => value,
        None => panic!("conversion factor overflows i128"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_powers() {
        assert_eq!(ipow(3, 0), 1);
        assert_eq!(ipow(3, 5), 243);
        assert_eq!(ipow(-2, 3), -8);
        assert_eq!(ipow(10, 18), 1_000_000_000_000_000_000);
    }

    #[test]
    fn zero_exponents_ignore_ratios() {
        let factor = conversion_factor(
            [0, 0, 0],
            [(1, 7), (5, 3), (2, 9)],
            [(11, 1), (1, 1), (3, 4)],
        );
        assert_eq!(factor, Factor::UNITY);
        assert_eq!(axis_factor((1, 39), (60, 1), 0), Factor::UNITY);
    }

    #[test]
    fn negative_exponents_flip() {
        assert_eq!(axis_factor((4, 3), (1, 2), -1), Factor::new(3, 8));
        assert_eq!(axis_factor((4, 3), (1, 2), -3), Factor::new(27, 512));
        assert_eq!(axis_factor((4, 3), (3, 2), 2), Factor::new(64, 81));
    }

    #[test]
    fn combined_factors_are_reduced() {
        let thirds = [(4, 3), (4, 3), (4, 3)];
        assert_eq!(
            conversion_factor([2, -3, 0], thirds, [(3, 2), (1, 2), (1, 3)]),
            Factor::new(1, 24)
        );
        assert_eq!(
            conversion_factor([2, 1, 3], thirds, [(3, 2), (1, 2), (1, 3)]),
            Factor::new(32_768, 243)
        );
    }

    #[test]
    fn rescale_multiplies_before_dividing() {
        assert_eq!(rescale::<i32, i32>(7, Factor::new(2, 3)), 4);
        assert_eq!(rescale::<u8, i64>(200, Factor::new(1000, 1)), 200_000);
        assert_eq!(rescale::<f32, i32>(2.9, Factor::UNITY), 2);
    }
}
