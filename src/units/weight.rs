use super::Unit;

/// 무게 단위의 g 환산 계수. 무게 단위가 아니면 None.
pub fn weight_factor(unit: Unit) -> Option<f64> {
    match unit {
        Unit::Grams => Some(1.0),
        Unit::Kilograms => Some(1000.0),
        Unit::Ounces => Some(28.3495),
        Unit::Pounds => Some(453.592),
        _ => None,
    }
}

fn to_grams(value: f64, unit: Unit) -> Option<f64> {
    weight_factor(unit).map(|f| value * f)
}

fn from_grams(value_g: f64, unit: Unit) -> Option<f64> {
    weight_factor(unit).map(|f| value_g / f)
}

/// 무게를 변환한다.
pub fn convert_weight(value: f64, from: Unit, to: Unit) -> Option<f64> {
    let grams = to_grams(value, from)?;
    from_grams(grams, to)
}
