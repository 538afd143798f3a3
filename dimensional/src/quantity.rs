//! The [`Quantity`] type and the conversions between quantities.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    marker::PhantomData,
};

use num_traits::{AsPrimitive, ToPrimitive};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use static_assertions::assert_eq_size;

use crate::conversion::{rescale, Conversion, Rescale};
use crate::dimension::{DimensionVector, Dimensionless};
use crate::error::ConversionError;
use crate::rep::{Common, CommonRep, Implicit, Representation};
use crate::scale::{CommonScale, Scale, ScaleTriple};

/// A value of representation `T`, with dimension `D`, measured in the scale `S`.
///
/// A `Quantity` is exactly as large as its `T`: the dimension and the scale only exist in the
/// type, and every check and conversion factor involving them is worked out by the compiler.
///
/// # Examples
///
/// ```
/// use dimensional::prelude::*;
///
/// type Kilometers<T> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<1000, 1>>>;
/// type Meters<T> = Quantity<T, Dim<1, 0, 0>, Scale>;
///
/// let run = Kilometers::<i32>::new(5);
/// let meters = Meters::<i32>::from_quantity(run);
/// assert_eq!(meters.value(), 5000);
/// assert_eq!(run, meters);
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = "T: std::fmt::Debug"),
    Clone(bound = "T: Clone"),
    Copy(bound = "T: Copy"),
    Default(bound = "T: Default"),
    Hash(bound = "T: std::hash::Hash")
)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        crate = "serde_crate",
        transparent,
        bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
    )
)]
#[repr(transparent)]
pub struct Quantity<T, D, S> {
    value: T,
    #[derivative(Debug = "ignore", Hash = "ignore")]
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<fn() -> (D, S)>,
}

assert_eq_size!(Quantity<f64, Dimensionless, Scale>, f64);
assert_eq_size!(Quantity<u8, Dimensionless, Scale>, u8);

impl<T, D, S> Quantity<T, D, S> {
    /// Tag a raw value with this quantity's dimension and scale.
    ///
    /// This is a `const fn`, so constant quantities can be declared:
    ///
    /// ```
    /// use dimensional::prelude::*;
    ///
    /// const SPEED_OF_LIGHT: Quantity<u64, Dim<1, -1, 0>, Scale> = Quantity::new(299_792_458);
    /// assert_eq!(SPEED_OF_LIGHT.value(), 299_792_458);
    /// ```
    pub const fn new(value: T) -> Self {
        Quantity {
            value,
            unit: PhantomData,
        }
    }
}

impl<T, D, S> Quantity<T, D, S>
where
    T: Representation,
    D: DimensionVector,
    S: ScaleTriple,
{
    /// The exponents of this quantity's dimension.
    pub const DIMENSION: [i32; 3] = D::EXPONENTS;

    /// The steps of this quantity's scale, as reduced `(numerator, denominator)` pairs.
    pub const SCALE: [(i64, i64); 3] = S::RATIOS;

    /// The raw value, in this quantity's scale.
    pub fn value(&self) -> T {
        self.value
    }

    /// A mutable reference to the raw value.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The exponents of this quantity's dimension.
    pub fn dimension(&self) -> [i32; 3] {
        Self::DIMENSION
    }

    /// The steps of this quantity's scale.
    pub fn scale(&self) -> [(i64, i64); 3] {
        Self::SCALE
    }

    /// Convert from a quantity of the same dimension without an explicit cast.
    ///
    /// The conversion is allowed when it cannot lose information: into a floating-point
    /// representation always, and between integral representations only when the target type
    /// holds every source value and the target scale divides the source scale exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use dimensional::prelude::*;
    ///
    /// type Length<T, const N: i64, const D: i64> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<N, D>>>;
    ///
    /// let a = Length::<i32, 4, 3>::new(10);
    /// assert_eq!(Length::<i32, 1, 3>::from_quantity(a).value(), 40);
    /// assert_eq!(Length::<i64, 2, 3>::from_quantity(a).value(), 20);
    ///
    /// let c = Length::<f32, 1, 1>::from_quantity(a);
    /// assert!((c.value() - 40.0 / 3.0).abs() < 1e-5);
    /// ```
    ///
    /// Going to a coarser integral scale would have to truncate, so it does not compile:
    ///
    /// ```compile_fail
    /// use dimensional::prelude::*;
    ///
    /// type Length<T, const N: i64, const D: i64> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<N, D>>>;
    ///
    /// let a = Length::<i32, 1, 3>::new(40);
    /// let _ = Length::<i32, 4, 3>::from_quantity(a);
    /// ```
    ///
    /// Neither does turning a floating-point quantity into an integral one:
    ///
    /// ```compile_fail
    /// use dimensional::prelude::*;
    ///
    /// type Meters<T> = Quantity<T, Dim<1, 0, 0>, Scale>;
    ///
    /// let _ = Meters::<i32>::from_quantity(Meters::<f32>::new(10.0));
    /// ```
    pub fn from_quantity<Y, S2>(quantity: Quantity<Y, D, S2>) -> Self
    where
        Y: Implicit<T>,
        S2: ScaleTriple,
    {
        Quantity::new(rescale(quantity.value, Rescale::<T, D, S2, S>::EXACT))
    }

    /// Convert into the quantity `Q` under the same rules as [`Quantity::from_quantity`].
    pub fn convert<Q>(self) -> Q
    where
        Q: Unit<Dim = D>,
        T: Implicit<Q::Rep>,
    {
        Q::from_raw(rescale(
            self.value,
            Rescale::<Q::Rep, D, S, Q::Scale>::EXACT,
        ))
    }

    /// Cast into the quantity `Q`, which must have the same dimension. See [`unit_cast`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dimensional::si::{Meters, Millimeters};
    ///
    /// let a = Millimeters::<f32>::new(7.0);
    /// assert_eq!(a.cast::<Millimeters>().value(), 7.0);
    /// assert!((a.cast::<Meters>().value() - 0.007).abs() < 1e-7);
    /// ```
    pub fn cast<Q: Unit<Dim = D>>(self) -> Q {
        unit_cast(self)
    }

    /// Cast into the quantity `Q` and return its raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dimensional::si::{Meters, Millimeters};
    ///
    /// let a = Millimeters::<f32>::new(7.0);
    /// assert!((a.cast_value::<Meters>() - 0.007).abs() < 1e-7);
    /// ```
    pub fn cast_value<Q: Unit<Dim = D>>(self) -> Q::Rep {
        self.cast::<Q>().raw()
    }

    /// Change only the representation, keeping the dimension and the scale.
    pub fn cast_rep<U: Representation>(self) -> Quantity<U, D, S> {
        Quantity::new(U::from_rep(self.value))
    }

    /// Cast into the quantity `Q`, reporting values that do not fit instead of wrapping them.
    /// See [`checked_unit_cast`].
    pub fn checked_cast<Q: Unit<Dim = D>>(self) -> Result<Q, ConversionError> {
        checked_unit_cast(self)
    }

    /// The raw value converted into `U` and the scale `To`, under this quantity's own dimension.
    #[inline]
    pub(crate) fn rescaled<U: Representation, To: ScaleTriple>(self) -> U {
        rescale(self.value, Rescale::<U, D, S, To>::FACTOR)
    }
}

/// A concrete quantity type, named by its representation, dimension and scale.
///
/// This trait is implemented by every [`Quantity`] and lets generic code name a target unit as a
/// single type parameter, as [`unit_cast`] does.
pub trait Unit: sealed::Unit + Copy + Sized {
    /// The representation of the raw value.
    type Rep: Representation;
    /// The dimension.
    type Dim: DimensionVector;
    /// The scale.
    type Scale: ScaleTriple;

    /// Tag a raw value.
    fn from_raw(value: Self::Rep) -> Self;

    /// The raw value.
    fn raw(&self) -> Self::Rep;
}

impl<T, D, S> Unit for Quantity<T, D, S>
where
    T: Representation,
    D: DimensionVector,
    S: ScaleTriple,
{
    type Rep = T;
    type Dim = D;
    type Scale = S;

    #[inline]
    fn from_raw(value: T) -> Self {
        Quantity::new(value)
    }

    #[inline]
    fn raw(&self) -> T {
        self.value
    }
}

/// Convert a quantity into another quantity of the same dimension, whatever the representations
/// and scales involved.
///
/// The raw value is cast to the target representation, then multiplied by the numerator and
/// divided by the denominator of the conversion factor, which is computed during compilation.
/// Integral results are truncated toward zero, and casting between representations follows the
/// semantics of `as`.
///
/// # Examples
///
/// ```
/// use dimensional::prelude::*;
///
/// type Src<T> = Quantity<T, Dim<1, -1, 0>, Scale<Ratio<4, 3>, Ratio<4, 3>>>;
/// type Dst<T> = Quantity<T, Dim<1, -1, 0>, Scale<Ratio<3, 2>, Ratio<1, 2>>>;
///
/// let speed: Dst<f32> = unit_cast(Src::<f32>::new(7.0));
/// assert!((speed.value() - 7.0 / 3.0).abs() < 1e-6);
///
/// let truncated: Dst<i32> = unit_cast(Src::<i32>::new(8));
/// assert_eq!(truncated.value(), 2);
/// ```
///
/// The dimensions have to match:
///
/// ```compile_fail
/// use dimensional::si::{Meters, Seconds};
/// use dimensional::unit_cast;
///
/// let _: Seconds<f32> = unit_cast(Meters::<f32>::new(1.0));
/// ```
///
/// And integral targets have to be able to hold the conversion factor:
///
/// ```compile_fail
/// use dimensional::prelude::*;
///
/// type Meters<T> = Quantity<T, Dim<1, 0, 0>, Scale>;
/// type Millimeters<T> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<1, 1000>>>;
///
/// let _: Millimeters<i8> = unit_cast(Meters::<i8>::new(1));
/// ```
///
/// Both halves of the factor count, so this holds for conversions to a coarser scale too. Going
/// from meters to kilometers multiplies by `1 / 1000`, and the denominator `1000` does not fit in
/// an `i8`, even though every result would. Use [`checked_unit_cast`] or a wider representation
/// instead:
///
/// ```compile_fail
/// use dimensional::prelude::*;
///
/// type Meters<T> = Quantity<T, Dim<1, 0, 0>, Scale>;
/// type Kilometers<T> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<1000, 1>>>;
///
/// let _: Kilometers<i8> = unit_cast(Meters::<i8>::new(1));
/// ```
pub fn unit_cast<To, Src>(quantity: Src) -> To
where
    Src: Unit,
    To: Unit<Dim = Src::Dim>,
{
    dimension_cast(quantity)
}

/// Convert a quantity into another quantity with any dimension.
///
/// The raw value is rescaled from the source scale to the target scale *under the source
/// dimension*, and then simply relabelled with the target dimension. This is what the
/// multiplication and division operators do with each operand before combining them.
///
/// # Examples
///
/// ```
/// use dimensional::prelude::*;
///
/// type Area = Quantity<f64, Dim<2, 0, 0>, Scale<Ratio<1, 100>>>;
/// type Length = Quantity<f64, Dim<1, 0, 0>, Scale>;
///
/// // Rescaled as an area: one square centimeter is 1/10000 of a square meter.
/// let side: Length = dimension_cast(Area::new(1.0));
/// assert_eq!(side.value(), 0.0001);
/// ```
pub fn dimension_cast<To, Src>(quantity: Src) -> To
where
    Src: Unit,
    To: Unit,
{
    To::from_raw(rescale(
        quantity.raw(),
        Rescale::<To::Rep, Src::Dim, Src::Scale, To::Scale>::FACTOR,
    ))
}

/// Convert a quantity into another quantity of the same dimension like [`unit_cast`], but fail
/// instead of wrapping or saturating a value that does not fit. Integral results are still
/// truncated toward zero.
///
/// The conversion factor is applied in a type wide enough for every source value, `i128` for an
/// integral source and `f64` for a floating-point one, and only the result is narrowed to the
/// target representation. Unlike `unit_cast`, this also accepts conversion factors too large for
/// the target type.
///
/// # Errors
///
/// [`ConversionError::Overflow`] if the rescaled value does not fit the target representation
/// although the original value would have, and [`ConversionError::Unrepresentable`] otherwise: for
/// a value that is not a number, or that is out of range for the target type before and after
/// scaling.
///
/// # Examples
///
/// ```
/// use dimensional::prelude::*;
///
/// type Meters<T> = Quantity<T, Dim<1, 0, 0>, Scale>;
/// type Millimeters<T> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<1, 1000>>>;
/// type Kilometers<T> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<1000, 1>>>;
///
/// let ok: Millimeters<i32> = checked_unit_cast(Meters::<i32>::new(3)).unwrap();
/// assert_eq!(ok.value(), 3000);
///
/// let narrowed: Kilometers<i16> = checked_unit_cast(Meters::<i32>::new(40_000)).unwrap();
/// assert_eq!(narrowed.value(), 40);
///
/// let too_big: Result<Millimeters<i16>, _> = checked_unit_cast(Meters::<i16>::new(300));
/// assert_eq!(too_big, Err(ConversionError::Overflow { num: 1000, den: 1 }));
///
/// let negative: Result<Meters<u32>, _> = checked_unit_cast(Meters::<f64>::new(-1.0));
/// assert_eq!(negative, Err(ConversionError::Unrepresentable));
/// ```
pub fn checked_unit_cast<To, Src>(quantity: Src) -> Result<To, ConversionError>
where
    Src: Unit,
    To: Unit<Dim = Src::Dim>,
{
    let factor = Conversion::<Src::Dim, Src::Scale, To::Scale>::FACTOR;
    let overflow = ConversionError::Overflow {
        num: factor.num,
        den: factor.den,
    };
    let raw = quantity.raw();
    // The original value fitting is what tells an overflow apart from an unrepresentable value.
    let fits = num_traits::cast::<Src::Rep, To::Rep>(raw).is_some();
    let failed = if fits {
        overflow
    } else {
        ConversionError::Unrepresentable
    };

    let value: To::Rep = if <Src::Rep as Representation>::IS_FLOAT {
        let raw: f64 = AsPrimitive::<f64>::as_(raw);
        if raw.is_nan() {
            return Err(ConversionError::Unrepresentable);
        }
        let scaled = raw * factor.num as f64 / factor.den as f64;
        if raw.is_finite() && !scaled.is_finite() {
            return Err(failed);
        }
        num_traits::cast(scaled).ok_or(failed)?
    } else {
        let raw = raw.to_i128().ok_or(ConversionError::Unrepresentable)?;
        let scaled = raw.checked_mul(factor.num).ok_or(failed)? / factor.den;
        num_traits::cast(scaled).ok_or(failed)?
    };

    // Narrowing into a smaller floating-point type saturates instead of failing.
    let narrowed: f64 = AsPrimitive::<f64>::as_(value);
    if <To::Rep as Representation>::IS_FLOAT && !narrowed.is_finite() && fits {
        let original: f64 = AsPrimitive::<f64>::as_(raw);
        if original.is_finite() {
            return Err(overflow);
        }
    }
    Ok(To::from_raw(value))
}

/// Both raw values, converted to their common representation and common scale.
pub(crate) fn common_values<X, Y, D, S1, S2>(
    lhs: Quantity<X, D, S1>,
    rhs: Quantity<Y, D, S2>,
) -> (Common<X, Y>, Common<X, Y>)
where
    X: CommonRep<Y>,
    Y: Representation,
    D: DimensionVector,
    S1: ScaleTriple,
    S2: ScaleTriple,
{
    (
        lhs.rescaled::<Common<X, Y>, CommonScale<S1, S2>>(),
        rhs.rescaled::<Common<X, Y>, CommonScale<S1, S2>>(),
    )
}

/// Quantities of the same dimension compare by the amount they stand for, whatever their scales.
///
/// ```
/// use dimensional::si::{Centimeters, Meters};
///
/// assert_eq!(Meters::<i32>::new(2), Centimeters::<i32>::new(200));
/// assert!(Meters::<f64>::new(1.5) < Centimeters::<i32>::new(151));
/// ```
impl<X, Y, D, S1, S2> PartialEq<Quantity<Y, D, S2>> for Quantity<X, D, S1>
where
    X: CommonRep<Y>,
    Y: Representation,
    D: DimensionVector,
    S1: ScaleTriple,
    S2: ScaleTriple,
{
    fn eq(&self, other: &Quantity<Y, D, S2>) -> bool {
        let (lhs, rhs) = common_values(*self, *other);
        lhs == rhs
    }
}

impl<T, D, S> Eq for Quantity<T, D, S>
where
    T: CommonRep<T> + Eq,
    D: DimensionVector,
    S: ScaleTriple,
{
}

impl<X, Y, D, S1, S2> PartialOrd<Quantity<Y, D, S2>> for Quantity<X, D, S1>
where
    X: CommonRep<Y>,
    Y: Representation,
    D: DimensionVector,
    S1: ScaleTriple,
    S2: ScaleTriple,
{
    fn partial_cmp(&self, other: &Quantity<Y, D, S2>) -> Option<Ordering> {
        let (lhs, rhs) = common_values(*self, *other);
        lhs.partial_cmp(&rhs)
    }
}

impl<T, D, S> Ord for Quantity<T, D, S>
where
    T: CommonRep<T> + Ord,
    D: DimensionVector,
    S: ScaleTriple,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// Prints the raw value followed by the scale and the dimension.
///
/// ```
/// use dimensional::si::Millimeters;
///
/// assert_eq!(Millimeters::<i32>::new(7).to_string(), "7 (1/1000, 1/1, 1/1) [1,0,0]");
/// assert_eq!(format!("{:.1}", Millimeters::<f32>::new(7.26)), "7.3 (1/1000, 1/1, 1/1) [1,0,0]");
/// ```
impl<T, D, S> Display for Quantity<T, D, S>
where
    T: Representation,
    D: DimensionVector,
    S: ScaleTriple,
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let [(n1, d1), (n2, d2), (n3, d3)] = S::RATIOS;
        let [e1, e2, e3] = D::EXPONENTS;
        Display::fmt(&self.value, f)?;
        write!(
            f,
            " ({}/{}, {}/{}, {}/{}) [{},{},{}]",
            n1, d1, n2, d2, n3, d3, e1, e2, e3
        )
    }
}

mod sealed {
    use super::*;

    pub trait Unit {}
    impl<T: Representation, D: DimensionVector, S: ScaleTriple> Unit for Quantity<T, D, S> {}
}
