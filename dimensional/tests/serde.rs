#![cfg(feature = "serde")]

use dimensional::si::{Kilometers, Meters, MetersPerSecond};

#[test]
fn serializes_as_the_raw_value() {
    let distance = Kilometers::<f64>::new(1.5);
    assert_eq!(serde_json::to_string(&distance).unwrap(), "1.5");

    let speeds = vec![MetersPerSecond::<i32>::new(3), MetersPerSecond::<i32>::new(-4)];
    assert_eq!(serde_json::to_string(&speeds).unwrap(), "[3,-4]");
}

#[test]
fn deserializes_into_the_declared_unit() {
    let distance: Kilometers<f64> = serde_json::from_str("2.25").unwrap();
    assert_eq!(distance.value(), 2.25);
    assert_eq!(distance, Meters::<f64>::new(2250.0));
}

#[test]
fn rejects_values_of_the_wrong_representation() {
    assert!(serde_json::from_str::<Meters<u8>>("-1").is_err());
    assert!(serde_json::from_str::<Meters<i32>>("\"one\"").is_err());
}
