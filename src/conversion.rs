//! 재료 밀도를 반영한 부피/무게 환산 엔진.
//!
//! 모든 연산은 상수 테이블 조회와 산술만으로 끝나는 순수 함수다.

use log::{debug, trace};
use serde::Serialize;
use thiserror::Error;

use crate::ingredients::Ingredient;
use crate::measurement::MeasurementType;
use crate::units::{convert_volume, convert_weight, volume_factor, weight_factor, Unit, CUP_ML};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum ConversionError {
    /// 0 이하이거나 유한하지 않은 수량
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
    /// 두 단위 사이에 정의된 환산 경로가 없음
    #[error("cannot convert {from} to {to} for {ingredient}")]
    UnsupportedConversion {
        from: Unit,
        to: Unit,
        ingredient: Ingredient,
    },
    /// 알 수 없는 재료 이름
    #[error("unknown ingredient: {0}")]
    UnknownIngredient(String),
    /// 알 수 없는 단위 문자열
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// 해석이 둘 이상 가능한 변환 요청
    #[error("ambiguous conversion: {0}")]
    AmbiguousConversion(String),
    /// 허용 범위를 벗어난 수량
    #[error("amount {amount} is outside {min}..={max}")]
    AmountOutOfRange { amount: f64, min: f64, max: f64 },
}

/// 상세 변환 결과. 성공이면 `converted_amount`가 있고 `error`가 없다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub original_amount: f64,
    pub converted_amount: Option<f64>,
    pub ingredient: Ingredient,
    pub from_unit: Unit,
    pub to_unit: Unit,
    /// 0.0 ~ 1.0 사이의 신뢰도
    pub confidence: f64,
    pub error: Option<ConversionError>,
    pub notes: Option<String>,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        self.converted_amount.is_some() && self.error.is_none()
    }

    fn failure(
        amount: f64,
        ingredient: Ingredient,
        from: Unit,
        to: Unit,
        error: ConversionError,
    ) -> Self {
        Self {
            original_amount: amount,
            converted_amount: None,
            ingredient,
            from_unit: from,
            to_unit: to,
            confidence: 0.0,
            error: Some(error),
            notes: None,
        }
    }
}

impl std::fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.converted_amount, &self.error) {
            (Some(value), None) => write!(
                f,
                "{} {} {} = {:.2} {}",
                self.original_amount, self.from_unit, self.ingredient, value, self.to_unit
            ),
            (_, Some(err)) => write!(f, "{err}"),
            (None, None) => write!(f, "no result"),
        }
    }
}

/// 같은 종류(부피↔부피, 무게↔무게) 변환의 신뢰도.
pub const SAME_TYPE_CONFIDENCE: f64 = 0.98;
/// 온도 변환 경로의 신뢰도.
pub const TEMPERATURE_CONFIDENCE: f64 = 0.99;
const CROSS_TYPE_FALLBACK_CONFIDENCE: f64 = 0.50;
const DEFAULT_DENSITY_CONFIDENCE: f64 = 0.75;

const SAME_UNIT_NOTE: &str = "Same unit, no conversion needed";
const VOLUME_TO_WEIGHT_NOTE: &str = "Weight measurements are more accurate for baking";
const WEIGHT_TO_VOLUME_NOTE: &str = "Volume measurement may vary based on packing method";

/// 수량을 변환한다. 실패하면 이유 없이 None을 돌려준다.
pub fn convert(amount: f64, ingredient: Ingredient, from: Unit, to: Unit) -> Option<f64> {
    convert_with_details(amount, ingredient, from, to).converted_amount
}

/// 수량을 변환하고 신뢰도와 참고 사항을 함께 돌려준다.
///
/// 실패도 결과 값 안에 담기며 이 함수 자체는 실패하지 않는다. 수량 검증이
/// 같은 단위 검사보다 먼저 수행되므로 0 이하 수량은 단위가 같아도 실패한다.
pub fn convert_with_details(
    amount: f64,
    ingredient: Ingredient,
    from: Unit,
    to: Unit,
) -> ConversionResult {
    if let Err(err) = validate_amount(amount) {
        debug!("rejecting {amount} {from} {ingredient}: {err}");
        return ConversionResult::failure(amount, ingredient, from, to, err);
    }

    if from == to {
        return ConversionResult {
            original_amount: amount,
            converted_amount: Some(amount),
            ingredient,
            from_unit: from,
            to_unit: to,
            confidence: 1.0,
            error: None,
            notes: Some(SAME_UNIT_NOTE.to_string()),
        };
    }

    let factor = match conversion_factor(ingredient, from, to) {
        Ok(f) => f,
        Err(err) => {
            debug!("{err}");
            return ConversionResult::failure(amount, ingredient, from, to, err);
        }
    };

    let from_type = from.measurement_type();
    let to_type = to.measurement_type();
    let converted = amount * factor;
    debug!("{amount} {from} -> {converted} {to} ({ingredient}, {from_type}->{to_type})");

    ConversionResult {
        original_amount: amount,
        converted_amount: Some(converted),
        ingredient,
        from_unit: from,
        to_unit: to,
        confidence: confidence(from_type, to_type, ingredient),
        error: None,
        notes: conversion_notes(from_type, to_type, ingredient),
    }
}

/// `from` 단위 1만큼이 `to` 단위로 얼마인지 계산한다.
///
/// 부피↔무게는 1컵(240 ml) 당 재료 밀도를 거쳐 환산한다. 온도와 개수 단위가
/// 끼는 쌍은 `UnsupportedConversion`이다.
pub fn conversion_factor(
    ingredient: Ingredient,
    from: Unit,
    to: Unit,
) -> Result<f64, ConversionError> {
    let unsupported = || ConversionError::UnsupportedConversion {
        from,
        to,
        ingredient,
    };

    let factor = match (from.measurement_type(), to.measurement_type()) {
        (MeasurementType::Volume, MeasurementType::Volume) => {
            convert_volume(1.0, from, to).ok_or_else(unsupported)?
        }
        (MeasurementType::Weight, MeasurementType::Weight) => {
            convert_weight(1.0, from, to).ok_or_else(unsupported)?
        }
        (MeasurementType::Volume, MeasurementType::Weight) => {
            let f = volume_factor(from).ok_or_else(unsupported)?;
            let t = weight_factor(to).ok_or_else(unsupported)?;
            // 원래 부피를 컵 비율로 바꾼 뒤 밀도로 g을 구하고 목표 무게 단위로 환산
            (f / CUP_ML) * ingredient.density() / t
        }
        (MeasurementType::Weight, MeasurementType::Volume) => {
            let f = weight_factor(from).ok_or_else(unsupported)?;
            let t = volume_factor(to).ok_or_else(unsupported)?;
            (f / ingredient.density()) * CUP_ML / t
        }
        _ => return Err(unsupported()),
    };
    trace!("factor {from}->{to} for {ingredient}: {factor}");
    Ok(factor)
}

fn validate_amount(amount: f64) -> Result<(), ConversionError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ConversionError::InvalidAmount(amount))
    }
}

/// 측정 종류 쌍과 재료에 따른 고정 신뢰도 테이블.
pub fn confidence(from: MeasurementType, to: MeasurementType, ingredient: Ingredient) -> f64 {
    use crate::measurement::MeasurementType::*;
    match (from, to) {
        (Volume, Volume) | (Weight, Weight) => SAME_TYPE_CONFIDENCE,
        (Temperature, Temperature) => TEMPERATURE_CONFIDENCE,
        (Volume, Weight) | (Weight, Volume) => density_confidence(ingredient),
        _ => CROSS_TYPE_FALLBACK_CONFIDENCE,
    }
}

fn density_confidence(ingredient: Ingredient) -> f64 {
    match ingredient {
        Ingredient::Water
        | Ingredient::Milk
        | Ingredient::Oil
        | Ingredient::Cream
        | Ingredient::Honey
        | Ingredient::MapleSyrup
        | Ingredient::VanillaExtract => 0.95,
        Ingredient::AllPurposeFlour | Ingredient::GranulatedSugar | Ingredient::Salt => 0.85,
        Ingredient::BrownSugar | Ingredient::PowderedSugar => 0.75,
        Ingredient::Butter | Ingredient::CoconutOil => 0.80,
        Ingredient::CocoaPowder => 0.70,
        _ => DEFAULT_DENSITY_CONFIDENCE,
    }
}

/// 종류가 다른 변환에만 붙는 참고 사항. 해당 사항이 없으면 None.
///
/// 순서는 재료 계량 요령, 재료별 상황 메모, 변환 방향 메모이며 `". "`로 잇는다.
pub fn conversion_notes(
    from: MeasurementType,
    to: MeasurementType,
    ingredient: Ingredient,
) -> Option<String> {
    if from == to {
        return None;
    }

    let mut parts: Vec<&str> = Vec::new();
    if let Some(tip) = ingredient.measurement_tip() {
        parts.push(tip);
    }
    if let Some(context) = context_note(from, ingredient) {
        parts.push(context);
    }
    match (from, to) {
        (MeasurementType::Volume, MeasurementType::Weight) => parts.push(VOLUME_TO_WEIGHT_NOTE),
        (MeasurementType::Weight, MeasurementType::Volume) => parts.push(WEIGHT_TO_VOLUME_NOTE),
        _ => {}
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(". "))
    }
}

fn context_note(from: MeasurementType, ingredient: Ingredient) -> Option<&'static str> {
    let from_volume = from == MeasurementType::Volume;
    match ingredient {
        Ingredient::BrownSugar if from_volume => Some("Assumes firmly packed brown sugar"),
        Ingredient::Butter if from_volume => Some("Assumes room temperature butter"),
        Ingredient::Honey | Ingredient::MapleSyrup => Some("Liquid measurement"),
        Ingredient::CocoaPowder if from_volume => Some("Sift cocoa powder before measuring"),
        i if i.is_flour() && from_volume => Some("Assumes spooned and leveled flour"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::MeasurementType::*;

    #[test]
    fn notes_absent_for_same_type() {
        assert_eq!(conversion_notes(Volume, Volume, Ingredient::BrownSugar), None);
        assert_eq!(conversion_notes(Weight, Weight, Ingredient::AllPurposeFlour), None);
    }

    #[test]
    fn notes_are_joined_in_order() {
        let notes = conversion_notes(Volume, Weight, Ingredient::BrownSugar).unwrap();
        assert_eq!(
            notes,
            "Pack brown sugar firmly into the cup. Assumes firmly packed brown sugar. \
             Weight measurements are more accurate for baking"
        );
    }

    #[test]
    fn flour_variants_share_context_note() {
        for flour in [Ingredient::BreadFlour, Ingredient::AlmondFlour] {
            let notes = conversion_notes(Volume, Weight, flour).unwrap();
            assert!(notes.contains("Assumes spooned and leveled flour"), "{notes}");
        }
        let reverse = conversion_notes(Weight, Volume, Ingredient::BreadFlour).unwrap();
        assert!(!reverse.contains("spooned and leveled flour"));
        assert!(reverse.ends_with(WEIGHT_TO_VOLUME_NOTE));
    }

    #[test]
    fn syrup_note_applies_in_both_directions() {
        let notes = conversion_notes(Weight, Volume, Ingredient::Honey).unwrap();
        assert!(notes.contains("Liquid measurement"));
    }

    #[test]
    fn water_only_gets_direction_note() {
        assert_eq!(
            conversion_notes(Volume, Weight, Ingredient::Water).as_deref(),
            Some(VOLUME_TO_WEIGHT_NOTE)
        );
    }

    #[test]
    fn confidence_table_matches_tiers() {
        assert_eq!(confidence(Volume, Volume, Ingredient::CocoaPowder), 0.98);
        assert_eq!(confidence(Temperature, Temperature, Ingredient::Water), 0.99);
        assert_eq!(confidence(Volume, Weight, Ingredient::VanillaExtract), 0.95);
        assert_eq!(confidence(Weight, Volume, Ingredient::Salt), 0.85);
        assert_eq!(confidence(Volume, Weight, Ingredient::PowderedSugar), 0.75);
        assert_eq!(confidence(Volume, Weight, Ingredient::CoconutOil), 0.80);
        assert_eq!(confidence(Volume, Weight, Ingredient::CocoaPowder), 0.70);
        assert_eq!(confidence(Volume, Weight, Ingredient::RolledOats), 0.75);
        assert_eq!(confidence(Quantity, Volume, Ingredient::Water), 0.50);
    }

    #[test]
    fn nan_amount_is_invalid() {
        let res = convert_with_details(f64::NAN, Ingredient::Water, Unit::Cups, Unit::Grams);
        assert!(matches!(res.error, Some(ConversionError::InvalidAmount(_))));
        assert!(!res.is_success());
    }
}
