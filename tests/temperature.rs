use kitchen_units::{convert_temperature, Unit};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(diff <= tol, "{label} expected {expected:.4} got {actual:.4} (diff {diff:.6})");
}

#[test]
fn oven_350f_in_celsius() {
    let c = convert_temperature(350.0, Unit::Fahrenheit, Unit::Celsius).unwrap();
    assert_close("350F", c, 176.67, 5e-3);
}

#[test]
fn celsius_to_fahrenheit_reference_points() {
    let boil = convert_temperature(100.0, Unit::Celsius, Unit::Fahrenheit).unwrap();
    assert_close("boil", boil, 212.0, 1e-9);
    let freeze = convert_temperature(0.0, Unit::Celsius, Unit::Fahrenheit).unwrap();
    assert_close("freeze", freeze, 32.0, 1e-9);
    let crossover = convert_temperature(-40.0, Unit::Fahrenheit, Unit::Celsius).unwrap();
    assert_close("-40", crossover, -40.0, 1e-9);
}

#[test]
fn same_temperature_unit_is_identity() {
    assert_eq!(convert_temperature(-12.5, Unit::Celsius, Unit::Celsius), Some(-12.5));
    assert_eq!(convert_temperature(0.0, Unit::Fahrenheit, Unit::Fahrenheit), Some(0.0));
}

#[test]
fn non_temperature_units_are_rejected() {
    assert_eq!(convert_temperature(1.0, Unit::Celsius, Unit::Cups), None);
    assert_eq!(convert_temperature(1.0, Unit::Grams, Unit::Fahrenheit), None);
    assert_eq!(convert_temperature(1.0, Unit::Cups, Unit::Cups), None);
}
