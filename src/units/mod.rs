//! 주방 계량 단위 정의 및 종류별 환산 모듈 모음.

pub mod temperature;
pub mod volume;
pub mod weight;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;
use crate::measurement::{MeasurementSystem, MeasurementType};

pub use temperature::{convert_temperature, parse_temperature_unit};
pub use volume::{convert_volume, volume_factor, CUP_ML};
pub use weight::{convert_weight, weight_factor};

/// 계량 단위. 각 단위는 정확히 하나의 측정 종류에 속한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    Milliliters,
    Liters,
    Teaspoons,
    Tablespoons,
    FluidOunces,
    Cups,
    Grams,
    Kilograms,
    Ounces,
    Pounds,
    Fahrenheit,
    Celsius,
    Pieces,
    Pinch,
    Dash,
}

impl Unit {
    pub const ALL: [Unit; 15] = [
        Unit::Milliliters,
        Unit::Liters,
        Unit::Teaspoons,
        Unit::Tablespoons,
        Unit::FluidOunces,
        Unit::Cups,
        Unit::Grams,
        Unit::Kilograms,
        Unit::Ounces,
        Unit::Pounds,
        Unit::Fahrenheit,
        Unit::Celsius,
        Unit::Pieces,
        Unit::Pinch,
        Unit::Dash,
    ];

    pub fn measurement_type(&self) -> MeasurementType {
        match self {
            Unit::Milliliters
            | Unit::Liters
            | Unit::Teaspoons
            | Unit::Tablespoons
            | Unit::FluidOunces
            | Unit::Cups => MeasurementType::Volume,
            Unit::Grams | Unit::Kilograms | Unit::Ounces | Unit::Pounds => MeasurementType::Weight,
            Unit::Fahrenheit | Unit::Celsius => MeasurementType::Temperature,
            Unit::Pieces | Unit::Pinch | Unit::Dash => MeasurementType::Quantity,
        }
    }

    pub fn system(&self) -> MeasurementSystem {
        match self {
            Unit::Milliliters | Unit::Liters | Unit::Grams | Unit::Kilograms | Unit::Celsius => {
                MeasurementSystem::Metric
            }
            Unit::Teaspoons
            | Unit::Tablespoons
            | Unit::FluidOunces
            | Unit::Cups
            | Unit::Ounces
            | Unit::Pounds
            | Unit::Fahrenheit => MeasurementSystem::Imperial,
            Unit::Pieces | Unit::Pinch | Unit::Dash => MeasurementSystem::Universal,
        }
    }

    /// 측정 종류의 기준 단위(ml 또는 g)로의 선형 계수.
    /// 온도와 개수 단위는 None.
    pub fn base_factor(&self) -> Option<f64> {
        match self.measurement_type() {
            MeasurementType::Volume => volume_factor(*self),
            MeasurementType::Weight => weight_factor(*self),
            MeasurementType::Temperature | MeasurementType::Quantity => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Milliliters => "ml",
            Unit::Liters => "l",
            Unit::Teaspoons => "tsp",
            Unit::Tablespoons => "tbsp",
            Unit::FluidOunces => "fl oz",
            Unit::Cups => "cup",
            Unit::Grams => "g",
            Unit::Kilograms => "kg",
            Unit::Ounces => "oz",
            Unit::Pounds => "lb",
            Unit::Fahrenheit => "°F",
            Unit::Celsius => "°C",
            Unit::Pieces => "pc",
            Unit::Pinch => "pinch",
            Unit::Dash => "dash",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Milliliters => "milliliters",
            Unit::Liters => "liters",
            Unit::Teaspoons => "teaspoons",
            Unit::Tablespoons => "tablespoons",
            Unit::FluidOunces => "fluid ounces",
            Unit::Cups => "cups",
            Unit::Grams => "grams",
            Unit::Kilograms => "kilograms",
            Unit::Ounces => "ounces",
            Unit::Pounds => "pounds",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Celsius => "celsius",
            Unit::Pieces => "pieces",
            Unit::Pinch => "pinch",
            Unit::Dash => "dash",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 단위 별칭 표. 소문자로 비교한다.
const UNIT_ALIASES: &[(&str, Unit)] = &[
    ("ml", Unit::Milliliters),
    ("milliliter", Unit::Milliliters),
    ("milliliters", Unit::Milliliters),
    ("millilitre", Unit::Milliliters),
    ("l", Unit::Liters),
    ("liter", Unit::Liters),
    ("liters", Unit::Liters),
    ("litre", Unit::Liters),
    ("tsp", Unit::Teaspoons),
    ("t", Unit::Teaspoons),
    ("teaspoon", Unit::Teaspoons),
    ("teaspoons", Unit::Teaspoons),
    ("tbsp", Unit::Tablespoons),
    ("tbs", Unit::Tablespoons),
    ("tablespoon", Unit::Tablespoons),
    ("tablespoons", Unit::Tablespoons),
    ("fl oz", Unit::FluidOunces),
    ("floz", Unit::FluidOunces),
    ("fluid ounce", Unit::FluidOunces),
    ("fluid ounces", Unit::FluidOunces),
    ("c", Unit::Cups),
    ("cup", Unit::Cups),
    ("cups", Unit::Cups),
    ("g", Unit::Grams),
    ("gram", Unit::Grams),
    ("grams", Unit::Grams),
    ("kg", Unit::Kilograms),
    ("kilogram", Unit::Kilograms),
    ("kilograms", Unit::Kilograms),
    ("oz", Unit::Ounces),
    ("ounce", Unit::Ounces),
    ("ounces", Unit::Ounces),
    ("lb", Unit::Pounds),
    ("lbs", Unit::Pounds),
    ("pound", Unit::Pounds),
    ("pounds", Unit::Pounds),
    ("f", Unit::Fahrenheit),
    ("°f", Unit::Fahrenheit),
    ("fahrenheit", Unit::Fahrenheit),
    ("°c", Unit::Celsius),
    ("celsius", Unit::Celsius),
    ("pc", Unit::Pieces),
    ("piece", Unit::Pieces),
    ("pieces", Unit::Pieces),
    ("whole", Unit::Pieces),
    ("pinch", Unit::Pinch),
    ("pinches", Unit::Pinch),
    ("dash", Unit::Dash),
    ("dashes", Unit::Dash),
];

impl FromStr for Unit {
    type Err = ConversionError;

    /// `cup`, `Tbsp`, `°F` 같은 표기를 단위로 해석한다.
    /// `c`는 컵으로 해석되므로 섭씨는 `°c` 또는 `celsius`로 적는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        UNIT_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, unit)| *unit)
            .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_unit_has_one_type_and_linear_units_have_factors() {
        for unit in Unit::ALL {
            let factor = unit.base_factor();
            assert_eq!(factor.is_some(), unit.measurement_type().is_linear(), "{unit:?}");
            if let Some(f) = factor {
                assert!(f > 0.0 && f.is_finite());
            }
        }
    }

    #[test]
    fn base_units_have_unit_factor() {
        assert_eq!(Unit::Milliliters.base_factor(), Some(1.0));
        assert_eq!(Unit::Grams.base_factor(), Some(1.0));
        assert_eq!(Unit::Cups.base_factor(), Some(240.0));
        assert_eq!(Unit::Pounds.base_factor(), Some(453.592));
    }

    #[test]
    fn aliases_resolve_case_insensitively() {
        assert_eq!("Cups".parse::<Unit>().unwrap(), Unit::Cups);
        assert_eq!(" TBSP ".parse::<Unit>().unwrap(), Unit::Tablespoons);
        assert_eq!("°F".parse::<Unit>().unwrap(), Unit::Fahrenheit);
        assert_eq!("fl oz".parse::<Unit>().unwrap(), Unit::FluidOunces);
    }

    #[test]
    fn every_canonical_symbol_parses_back() {
        for unit in Unit::ALL {
            assert_eq!(unit.symbol().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn per_type_helpers_agree_with_factors() {
        assert_eq!(convert_volume(1.0, Unit::Liters, Unit::Milliliters), Some(1000.0));
        assert_eq!(convert_volume(1.0, Unit::Liters, Unit::Grams), None);
        assert_eq!(convert_weight(2.0, Unit::Kilograms, Unit::Grams), Some(2000.0));
        assert_eq!(convert_weight(1.0, Unit::Cups, Unit::Grams), None);
    }

    #[test]
    fn systems_split_metric_and_imperial() {
        assert_eq!(Unit::Milliliters.system(), MeasurementSystem::Metric);
        assert_eq!(Unit::Celsius.system(), MeasurementSystem::Metric);
        assert_eq!(Unit::Cups.system(), MeasurementSystem::Imperial);
        assert_eq!(Unit::Fahrenheit.system(), MeasurementSystem::Imperial);
        assert_eq!(Unit::Pinch.system(), MeasurementSystem::Universal);
    }

    #[test]
    fn unknown_alias_is_reported() {
        match "smidgen".parse::<Unit>() {
            Err(ConversionError::UnknownUnit(s)) => assert_eq!(s, "smidgen"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
