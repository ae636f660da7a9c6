use super::Unit;

/// 밀도 기준이 되는 1컵의 부피 [ml].
pub const CUP_ML: f64 = 240.0;

/// 부피 단위의 ml 환산 계수. 부피 단위가 아니면 None.
pub fn volume_factor(unit: Unit) -> Option<f64> {
    match unit {
        Unit::Milliliters => Some(1.0),
        Unit::Liters => Some(1000.0),
        Unit::Teaspoons => Some(5.0),
        Unit::Tablespoons => Some(15.0),
        Unit::FluidOunces => Some(29.5735),
        Unit::Cups => Some(CUP_ML),
        _ => None,
    }
}

fn to_milliliters(value: f64, unit: Unit) -> Option<f64> {
    volume_factor(unit).map(|f| value * f)
}

fn from_milliliters(value_ml: f64, unit: Unit) -> Option<f64> {
    volume_factor(unit).map(|f| value_ml / f)
}

/// 부피를 변환한다. 둘 중 하나라도 부피 단위가 아니면 None.
pub fn convert_volume(value: f64, from: Unit, to: Unit) -> Option<f64> {
    let ml = to_milliliters(value, from)?;
    from_milliliters(ml, to)
}
