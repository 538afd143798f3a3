use dimensional::prelude::*;
use dimensional::si::{Meters, Seconds};
use static_assertions::{assert_not_impl_any, assert_type_eq_all};

type Length<T, const N: i64, const D: i64> = Quantity<T, Dim<1, 0, 0>, Scale<Ratio<N, D>>>;

#[test]
fn addition_uses_the_common_scale() {
    let a = Length::<i32, 4, 3>::new(10);

    let b = a + Length::<i32, 1, 3>::new(40);
    assert_eq!(b.value(), 80);
    assert_eq!(b.scale()[0], (1, 3));

    let c = a + Length::<i32, 2, 3>::new(70);
    assert_eq!(c.value(), 90);
    assert_eq!(c.scale()[0], (2, 3));

    let d = Length::<i32, 7, 8>::new(10) + Length::<i32, 8, 9>::new(40);
    assert_eq!(d.value(), 3190);
    assert_eq!(d.scale()[0], (1, 72));
}

#[test]
fn addition_keeps_the_dimension() {
    type Velocity<T, const N: i64, const D: i64> =
        Quantity<T, Dim<1, -1, 0>, Scale<Ratio<N, D>, Ratio<N, D>>>;
    let sum = Velocity::<f32, 4, 3>::new(1.0) + Velocity::<f32, 1, 3>::new(1.0);
    assert_eq!(sum.dimension(), [1, -1, 0]);
    let difference = Velocity::<f32, 4, 3>::new(1.0) - Velocity::<f32, 1, 3>::new(1.0);
    assert_eq!(difference.dimension(), [1, -1, 0]);
}

#[test]
fn addition_widens_the_representation() {
    let a = Length::<u8, 1, 1>::new(200) + Length::<i16, 1, 1>::new(-300);
    let value: i16 = a.value();
    assert_eq!(value, -100);

    let b = Length::<i32, 4, 3>::new(10) + Length::<f32, 1, 3>::new(0.5);
    let value: f32 = b.value();
    assert_eq!(value, 40.5);

    let c = Length::<f32, 1, 1>::new(1.0) - Length::<f64, 1, 1>::new(0.25);
    let value: f64 = c.value();
    assert_eq!(value, 0.75);
}

#[test]
fn multiplication_uses_the_common_scale() {
    let a = Length::<i32, 4, 3>::new(10);

    let b = a * Length::<i32, 1, 3>::new(40);
    assert_eq!(b.value(), 1600);
    assert_eq!(b.scale()[0], (1, 3));

    let c = a * Length::<i32, 2, 3>::new(40);
    assert_eq!(c.value(), 800);
    assert_eq!(c.scale()[0], (2, 3));

    let d = Length::<i32, 7, 8>::new(10) * Length::<i32, 8, 9>::new(40);
    assert_eq!(d.value(), 1_612_800);
    assert_eq!(d.scale()[0], (1, 72));
}

#[test]
fn multiplication_adds_exponents() {
    type A = Quantity<f32, Dim<1, -1, 1>, Scale>;
    type B = Quantity<f32, Dim<0, 1, 2>, Scale>;
    type C = Quantity<f32, Dim<-1, 1, 0>, Scale>;

    assert_eq!((A::new(1.0) * B::new(1.0)).dimension(), [1, 0, 3]);
    assert_eq!((B::new(1.0) * C::new(1.0)).dimension(), [-1, 2, 2]);
    assert_eq!((A::new(1.0) * A::new(1.0)).dimension(), [2, -2, 2]);
}

#[test]
fn division_subtracts_exponents() {
    type A = Quantity<f32, Dim<1, -1, 1>, Scale>;
    type B = Quantity<f32, Dim<0, 1, 2>, Scale>;

    assert_eq!((A::new(1.0) / B::new(1.0)).dimension(), [1, -2, -1]);
    assert_eq!((B::new(1.0) / A::new(1.0)).dimension(), [-1, 2, 1]);

    let speed = Meters::<i32>::new(10) / Seconds::<i32>::new(2);
    assert_eq!(speed.to_string(), "5 (1/1, 1/1, 1/1) [1,-1,0]");
}

#[test]
fn dimensionless_division_is_a_bare_number() {
    let a: i32 = Length::<i32, 4, 3>::new(10) / Length::<i32, 1, 3>::new(40);
    assert_eq!(a, 1);

    let b: f64 = Length::<f64, 4, 3>::new(10.0) / Length::<f64, 2, 3>::new(160.0);
    assert_eq!(b, 0.125);

    let e1 = Length::<i32, 7, 8>::new(10);
    let e2 = Length::<f32, 8, 9>::new(40.0);
    let forward: f32 = e1 / e2;
    assert_eq!(forward, 0.24609375);
    let backward: f32 = e2 / e1;
    assert!((backward - 4.063_492_3).abs() < 1e-6);

    let truncated: i32 = e1 / Length::<i32, 8, 9>::new(40);
    assert_eq!(truncated, 0);
    let truncated: i32 = Length::<i32, 8, 9>::new(40) / e1;
    assert_eq!(truncated, 4);
}

#[test]
fn dimensionless_product_is_a_bare_number() {
    type PerMeter<T> = Quantity<T, Dim<-1, 0, 0>, Scale>;
    let count: f64 = Length::<f64, 1, 100>::new(50.0) * PerMeter::<f64>::new(2.0);
    assert_eq!(count, 1.0);

    let count: i64 = Length::<i64, 1, 1>::new(3) * PerMeter::<i64>::new(4);
    assert_eq!(count, 12);
}

#[test]
fn inverse_axes_combine_in_the_finer_step() {
    type PerLength<T, const N: i64, const D: i64> =
        Quantity<T, Dim<-1, 0, 0>, Scale<Ratio<N, D>>>;
    let sum = PerLength::<i32, 1, 3>::new(10) + PerLength::<i32, 2, 3>::new(5);
    assert_eq!(sum.scale()[0], (1, 3));
    assert_eq!(sum.value(), 12);

    type Minutes = Quantity<f64, Dim<0, 1, 0>, Scale<One, Ratio<60, 1>>>;
    let rate = Meters::<f64>::new(90.0) / Minutes::new(1.0);
    assert_eq!(rate.scale()[1], (1, 1));
    assert_eq!(rate.value(), 1.5);
}

#[test]
fn division_truncates_integral_results() {
    let a1 = Length::<i32, 4, 3>::new(7);
    let a2 = Length::<i32, 4, 3>::new(2);
    assert_eq!(a1 / a2, 3);

    let b1 = Length::<f32, 4, 3>::new(7.0);
    let b2 = Length::<f32, 4, 3>::new(2.0);
    assert_eq!(b1 / b2, 3.5);
    assert!((b2 / b1 - 0.285_714_3).abs() < 1e-6);
}

#[test]
fn result_types() {
    type Meters<T> = Quantity<T, Dim<1, 0, 0>, Scale>;
    assert_type_eq_all!(<Meters<i32> as std::ops::Div<Meters<i32>>>::Output, i32);
    assert_type_eq_all!(<Meters<u8> as std::ops::Div<Meters<f32>>>::Output, f32);
    assert_type_eq_all!(
        <Meters<i16> as std::ops::Mul<Meters<i64>>>::Output,
        Quantity<i64, Dim<2, 0, 0>, CommonScale<Scale, Scale>>
    );
}

#[test]
fn mixed_dimensions_do_not_add() {
    assert_not_impl_any!(Meters<f32>: std::ops::Add<Seconds<f32>>, std::ops::Sub<Seconds<f32>>);
    assert_not_impl_any!(Meters<f32>: std::ops::AddAssign<Seconds<f32>>);
    assert_not_impl_any!(Meters<f32>: PartialEq<Seconds<f32>>, PartialOrd<Seconds<f32>>);
}

#[test]
fn compound_assignment() {
    let mut a = Length::<i32, 1, 3>::new(40);
    a += Length::<i32, 4, 3>::new(10);
    assert_eq!(a.value(), 80);

    let mut b = Length::<f32, 1, 1>::new(0.0);
    b += Length::<i32, 4, 3>::new(20);
    assert!((b.value() - 80.0 / 3.0).abs() < 1e-5);

    let mut c = Length::<i32, 1, 3>::new(20);
    c -= Length::<i32, 4, 3>::new(10);
    assert_eq!(c.value(), -20);

    let mut d = Length::<i32, 1, 1>::new(7);
    d *= 2i32;
    assert_eq!(d.value(), 14);

    let mut e = Length::<i32, 1, 1>::new(7);
    e /= 2i32;
    assert_eq!(e.value(), 3);
    e /= 2.0f32;
    assert_eq!(e.value(), 1);

    let mut f = Length::<f32, 1, 1>::new(7.0);
    f /= 2i32;
    assert_eq!(f.value(), 3.5);
    f /= 2.0f64;
    assert_eq!(f.value(), 1.75);
}

#[test]
fn scalar_operations() {
    let a = Length::<i32, 4, 3>::new(10);
    assert_eq!((a * 2i32).value(), 20);
    assert_eq!((2i32 * a).value(), 20);
    assert_eq!((a * 2i32).scale()[0], (4, 3));

    let b = Length::<i32, 4, 3>::new(41) * 0.5f64;
    let value: f64 = b.value();
    assert_eq!(value, 20.5);

    assert_eq!((Length::<i32, 4, 3>::new(7) / 2i32).value(), 3);
    assert_eq!((Length::<i32, 4, 3>::new(7) / 2.0f64).value(), 3.5);
    assert_eq!((0.5f32 * Length::<u8, 1, 1>::new(3)).value(), 1.5);
}

#[test]
fn comparisons_across_scales_and_representations() {
    assert_eq!(Length::<i32, 4, 3>::new(3), Length::<i32, 1, 1>::new(4));
    assert!(Length::<u8, 1, 100>::new(101) > Length::<i32, 1, 1>::new(1));
    assert!(Length::<f64, 1, 1>::new(0.5) <= Length::<i32, 1, 2>::new(1));
    assert_ne!(Length::<f32, 1, 3>::new(1.0), Length::<f32, 1, 1>::new(0.33));
}
