use super::Unit;
use crate::conversion::ConversionError;

/// 화씨를 섭씨로 변환한다.
pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * 5.0 / 9.0
}

/// 섭씨를 화씨로 변환한다.
pub fn celsius_to_fahrenheit(value: f64) -> f64 {
    value * 9.0 / 5.0 + 32.0
}

/// 온도를 변환한다. 재료와 무관하며 온도 단위 쌍이 아니면 None.
///
/// 같은 온도 단위끼리는 값을 그대로 돌려준다.
pub fn convert_temperature(value: f64, from: Unit, to: Unit) -> Option<f64> {
    match (from, to) {
        (Unit::Fahrenheit, Unit::Fahrenheit) | (Unit::Celsius, Unit::Celsius) => Some(value),
        (Unit::Fahrenheit, Unit::Celsius) => Some(fahrenheit_to_celsius(value)),
        (Unit::Celsius, Unit::Fahrenheit) => Some(celsius_to_fahrenheit(value)),
        _ => None,
    }
}

/// 온도 문맥에서 단위 문자열을 해석한다. 일반 별칭표와 달리 `c`를 섭씨로 본다.
pub fn parse_temperature_unit(s: &str) -> Result<Unit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" => Ok(Unit::Celsius),
        _ => s.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_c_means_celsius_here() {
        assert_eq!(parse_temperature_unit("C").unwrap(), Unit::Celsius);
        assert_eq!(parse_temperature_unit("F").unwrap(), Unit::Fahrenheit);
        assert_eq!(parse_temperature_unit("cup").unwrap(), Unit::Cups);
    }
}
