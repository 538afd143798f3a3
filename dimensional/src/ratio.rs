//! Exact positive rationals known at compile time, used as the step size of a scale along one
//! axis.

use std::marker::PhantomData;

/// A positive rational number whose numerator and denominator are compile-time constants, always
/// in lowest terms.
pub trait Rational: Send + Sync + 'static {
    /// The numerator, in lowest terms.
    const NUM: i64;
    /// The denominator, in lowest terms.
    const DEN: i64;
}

/// The rational `N / D`.
///
/// The ratio is reduced when it is read: `Ratio<2, 4>` has numerator `1` and denominator `2`.
///
/// # Examples
///
/// ```
/// use dimensional::ratio::{Ratio, Rational};
///
/// assert_eq!(<Ratio<2, 4>>::NUM, 1);
/// assert_eq!(<Ratio<2, 4>>::DEN, 2);
/// ```
///
/// Both halves must be positive. Reading a ratio with a zero or negative part fails to compile:
///
/// ```compile_fail
/// use dimensional::ratio::{Ratio, Rational};
///
/// let _ = <Ratio<0, 1>>::NUM;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ratio<const N: i64, const D: i64>;

impl<const N: i64, const D: i64> Rational for Ratio<N, D> {
    const NUM: i64 = reduce(N, D).0;
    const DEN: i64 = reduce(N, D).1;
}

/// The unit ratio, `1 / 1`.
pub type One = Ratio<1, 1>;

/// `1000 / 1`.
pub type Kilo = Ratio<1000, 1>;

/// `1 / 100`.
pub type Centi = Ratio<1, 100>;

/// `1 / 1000`.
pub type Milli = Ratio<1, 1000>;

/// `1 / 1_000_000`.
pub type Micro = Ratio<1, 1_000_000>;

/// The largest step of which both `A` and `B` are whole multiples: the greatest common divisor of
/// the numerators over the least common multiple of the denominators.
///
/// This is the common period of two `std::chrono`-style durations, and the step in which two
/// quantities are combined.
///
/// # Examples
///
/// ```
/// use dimensional::ratio::{CommonRatio, Ratio, Rational};
///
/// type Finer = CommonRatio<Ratio<7, 8>, Ratio<8, 9>>;
/// assert_eq!((Finer::NUM, Finer::DEN), (1, 72));
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
pub struct CommonRatio<A, B> {
    #[derivative(Debug = "ignore")]
    operands: PhantomData<fn() -> (A, B)>,
}

impl<A: Rational, B: Rational> Rational for CommonRatio<A, B> {
    const NUM: i64 = common((A::NUM, A::DEN), (B::NUM, B::DEN)).0;
    const DEN: i64 = common((A::NUM, A::DEN), (B::NUM, B::DEN)).1;
}

/// The greatest common divisor of `a` and `b`, always non-negative.
pub const fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// The least common multiple of two positive numbers.
pub const fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a, b) * b
}

/// Reduce `num / den` to lowest terms, failing if either half is not positive.
pub const fn reduce(num: i64, den: i64) -> (i64, i64) {
    assert!(num > 0, "scale ratios must have a positive numerator");
    assert!(den > 0, "scale ratios must have a positive denominator");
    let g = gcd(num, den);
    (num / g, den / g)
}

/// The common step of two reduced ratios.
pub const fn common(a: (i64, i64), b: (i64, i64)) -> (i64, i64) {
    (gcd(a.0, b.0), lcm(a.1, b.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(8, 9), 72);
        assert_eq!(lcm(4, 6), 12);
    }

    #[test]
    fn ratios_are_reduced() {
        assert_eq!((<Ratio<6, 4>>::NUM, <Ratio<6, 4>>::DEN), (3, 2));
        assert_eq!((<Ratio<100, 100>>::NUM, <Ratio<100, 100>>::DEN), (1, 1));
        assert_eq!((Milli::NUM, Milli::DEN), (1, 1000));
    }

    #[test]
    fn common_ratio_is_the_chrono_period() {
        type R = CommonRatio<Ratio<4, 3>, Ratio<1, 3>>;
        assert_eq!((R::NUM, R::DEN), (1, 3));
        type S = CommonRatio<Ratio<2, 3>, Ratio<4, 3>>;
        assert_eq!((S::NUM, S::DEN), (2, 3));
        type T = CommonRatio<Ratio<4, 3>, Ratio<1, 2>>;
        assert_eq!((T::NUM, T::DEN), (1, 6));
        assert_eq!(common((1000, 1), (1, 100)), (1, 100));
    }
}
