/*!
Compile-time dimensional analysis with exact rational unit conversion.

A [`Quantity<T, D, S>`](Quantity) is a raw number of type `T` tagged, in its type alone, with a
*dimension* `D` and a *scale* `S`:

- the dimension is a vector of three integer exponents over base dimensions (conventionally
  length, time and mass), written [`Dim<1, -1, 0>`](Dim) for a velocity;
- the scale is one exact positive rational per axis, the step size of the raw value relative to
  the base unit, written [`Scale<Ratio<1, 100>>`](Scale) for centimeters.

Arithmetic on quantities is:

- **dimensionally checked**: adding meters to seconds, or casting one into the other, is a type
  error;
- **automatically rescaled**: adding thirds of a meter to eighths of a meter produces a result in
  a common scale both convert into exactly;
- **careful with representations**: integral quantities convert implicitly only when no
  information can be lost, and otherwise require an explicit [`unit_cast`].

Every conversion factor is computed exactly, in integers, by the compiler. At runtime an operation
costs at most a multiplication and a division per operand on top of the arithmetic itself, and a
`Quantity` is exactly the size of its `T`.

## Quick reference

The **[`prelude`]** exports everything needed to declare units and compute with them, and the
**[`si`]** module names the common ones.

```
use dimensional::prelude::*;
use dimensional::si::{Centimeters, Meters, Seconds};

// Quantities of the same dimension add, whatever their scales.
let total = Meters::<i32>::new(2) + Centimeters::<i32>::new(50);
assert_eq!(total.value(), 250);
assert_eq!(total.scale()[0], (1, 100));

// Dividing by a time produces a velocity.
let velocity = total / Seconds::<i32>::new(5);
assert_eq!(velocity.dimension(), [1, -1, 0]);

// Converting to a coarser integral scale needs an explicit cast, which truncates.
let meters: Meters<i32> = unit_cast(total);
assert_eq!(meters.value(), 2);
```

| Operation | Requirement | Result |
| :-------- | :---------- | :----- |
| [`Quantity::new`] | none | a quantity with the given raw value |
| [`Quantity::from_quantity`], [`Quantity::convert`] | same dimension, lossless | the same amount in another unit |
| [`unit_cast`], [`Quantity::cast`] | same dimension | the same amount, truncated if integral |
| [`checked_unit_cast`] | same dimension | the same amount, or a [`ConversionError`] |
| [`dimension_cast`] | none | the raw value rescaled under the source dimension |
| `a + b`, `a - b`, `a += b`, comparisons | same dimension | see [`ops`] |
| `a * b`, `a / b` | none | a quantity, or a bare number if dimensionless |
| `a * s`, `s * a`, `a / s`, `a *= s`, `a /= s` | `s` a primitive number | same dimension and scale |

Checks that depend only on types, like matching dimensions, are reported by the trait system.
Checks that depend on the values of ratios, like whether a conversion is exact, are constant
evaluations that fail when the offending expression is compiled into a binary: they are reported
by `cargo build` and `cargo test`, but not by `cargo check`.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

pub mod conversion;
pub mod dimension;
pub mod error;
pub mod integer;
pub mod ops;
pub mod quantity;
pub mod ratio;
pub mod rep;
pub mod scale;
pub mod si;

pub use dimension::{Dim, Dimension, DimensionVector, Dimensionless};
pub use error::ConversionError;
pub use quantity::{checked_unit_cast, dimension_cast, unit_cast, Quantity, Unit};
pub use ratio::{Ratio, Rational};
pub use scale::{Scale, ScaleTriple};

/// The prelude module for quickly getting started with dimensional quantities.
///
/// This module is designed to be imported as `use dimensional::prelude::*;`, which brings into
/// scope all the bits and pieces you need to declare units and compute with them.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::dimension::{
        Dim, Dimension, DimensionVector, Dimensionless, DivDimension, MulDimension, Product,
        Quotient,
    };
    #[doc(no_inline)]
    pub use crate::error::ConversionError;
    #[doc(no_inline)]
    pub use crate::ops::Simplify;
    #[doc(no_inline)]
    pub use crate::quantity::{checked_unit_cast, dimension_cast, unit_cast, Quantity, Unit};
    #[doc(no_inline)]
    pub use crate::ratio::{One, Ratio, Rational};
    #[doc(no_inline)]
    pub use crate::rep::{Common, CommonRep, Implicit, Representation};
    #[doc(no_inline)]
    pub use crate::scale::{CommonScale, Scale, ScaleTriple};
}
