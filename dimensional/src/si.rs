//! Named units, reading the three axes as length, time and mass.
//!
//! Every unit takes its representation as a parameter, defaulting to `f32`. Note that in
//! expression position the parameter is inferred rather than defaulted, so `Meters::new(1.0)`
//! is a `Meters<f64>`; write `Meters::<f32>::new(1.0)` to be explicit.
//!
//! # Examples
//!
//! ```
//! use dimensional::si::*;
//!
//! let walk = Kilometers::<f64>::new(1.5) + Meters::<f64>::new(250.0);
//! let minutes = Minutes::<f64>::new(20.0);
//! let pace: MetersPerSecond<f64> = (walk / minutes).convert();
//! assert!((pace.value() - 1750.0 / 1200.0).abs() < 1e-12);
//!
//! let fast: InchesPerHour<f64> = pace.cast();
//! assert!(fast.value() > 200_000.0);
//! ```

use crate::dimension::Dim;
use crate::quantity::Quantity;
use crate::ratio::{Centi, Kilo, Micro, Milli, One, Ratio};
use crate::scale::Scale;

/// A length measured in steps of `R` meters.
pub type Length<T, R> = Quantity<T, Dim<1, 0, 0>, Scale<R>>;

/// A duration measured in steps of `R` seconds.
pub type Time<T, R> = Quantity<T, Dim<0, 1, 0>, Scale<One, R>>;

/// A mass measured in steps of `R` kilograms.
pub type Mass<T, R> = Quantity<T, Dim<0, 0, 1>, Scale<One, One, R>>;

/// One inch, in meters.
pub type Inch = Ratio<127, 5000>;

/// One foot, in meters.
pub type Foot = Ratio<381, 1250>;

/// One minute, in seconds.
pub type Minute = Ratio<60, 1>;

/// One hour, in seconds.
pub type Hour = Ratio<3600, 1>;

/// Meters.
pub type Meters<T = f32> = Length<T, One>;
/// Kilometers.
pub type Kilometers<T = f32> = Length<T, Kilo>;
/// Centimeters.
pub type Centimeters<T = f32> = Length<T, Centi>;
/// Millimeters.
pub type Millimeters<T = f32> = Length<T, Milli>;
/// Micrometers.
pub type Micrometers<T = f32> = Length<T, Micro>;
/// Inches.
pub type Inches<T = f32> = Length<T, Inch>;
/// Feet.
pub type Feet<T = f32> = Length<T, Foot>;

/// Seconds.
pub type Seconds<T = f32> = Time<T, One>;
/// Milliseconds.
pub type Milliseconds<T = f32> = Time<T, Milli>;
/// Minutes.
pub type Minutes<T = f32> = Time<T, Minute>;
/// Hours.
pub type Hours<T = f32> = Time<T, Hour>;

/// Kilograms.
pub type Kilograms<T = f32> = Mass<T, One>;
/// Grams.
pub type Grams<T = f32> = Mass<T, Milli>;

/// Square meters.
pub type SquareMeters<T = f32> = Quantity<T, Dim<2, 0, 0>, Scale>;
/// Cubic meters.
pub type CubicMeters<T = f32> = Quantity<T, Dim<3, 0, 0>, Scale>;
/// Hertz.
pub type Hertz<T = f32> = Quantity<T, Dim<0, -1, 0>, Scale>;
/// Meters per second.
pub type MetersPerSecond<T = f32> = Quantity<T, Dim<1, -1, 0>, Scale>;
/// Kilometers per hour.
pub type KilometersPerHour<T = f32> = Quantity<T, Dim<1, -1, 0>, Scale<Kilo, Hour>>;
/// Inches per hour.
pub type InchesPerHour<T = f32> = Quantity<T, Dim<1, -1, 0>, Scale<Inch, Hour>>;
/// Meters per second squared.
pub type MetersPerSecondSquared<T = f32> = Quantity<T, Dim<1, -2, 0>, Scale>;
/// Square meters per second, e.g. a volumetric flux.
pub type SquareMetersPerSecond<T = f32> = Quantity<T, Dim<2, -1, 0>, Scale>;
/// Newtons.
pub type Newtons<T = f32> = Quantity<T, Dim<1, -2, 1>, Scale>;

/// Standard gravity.
pub const STANDARD_GRAVITY: MetersPerSecondSquared<f64> = Quantity::new(9.80665);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_conversions() {
        let foot: Meters<f64> = Feet::<f64>::new(1.0).convert();
        assert!((foot.value() - 0.3048).abs() < 1e-12);
        assert_eq!(Feet::<i32>::new(1), Inches::<i32>::new(12));
        assert_eq!(Meters::<i32>::from_quantity(Kilometers::<i32>::new(3)).value(), 3000);
    }

    #[test]
    fn time_conversions() {
        assert_eq!(Seconds::<i32>::from_quantity(Hours::<i32>::new(2)).value(), 7200);
        assert_eq!(Minutes::<i32>::new(90).cast_value::<Hours<i32>>(), 1);
    }

    #[test]
    fn force_from_mass_and_acceleration() {
        let weight = Kilograms::<f64>::new(2.0) * STANDARD_GRAVITY;
        let weight: Newtons<f64> = weight.convert();
        assert!((weight.value() - 19.6133).abs() < 1e-12);
    }

    #[test]
    fn speed_conversions() {
        let speed: MetersPerSecond<f64> = KilometersPerHour::<f64>::new(36.0).cast();
        assert!((speed.value() - 10.0).abs() < 1e-12);
        assert_eq!(
            Kilometers::<i32>::new(36).dimension(),
            Meters::<i32>::new(0).dimension()
        );
    }

    #[test]
    fn displays_velocity() {
        let velocity = MetersPerSecond::<f32>::new(4.0);
        assert_eq!(velocity.to_string(), "4 (1/1, 1/1, 1/1) [1,-1,0]");
        let converted: InchesPerHour<f32> = velocity.cast();
        assert!(converted.to_string().ends_with("(127/5000, 3600/1, 1/1) [1,-1,0]"));
    }
}
