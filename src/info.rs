use std::collections::BTreeMap;

use serde::Serialize;

use crate::ingredients::{Ingredient, IngredientCategory};
use crate::measurement::{MeasurementSystem, MeasurementType};
use crate::units::Unit;

const DESCRIPTION: &str = "Converts cooking measurements between volume, weight, temperature \
and quantity units, using ingredient densities for volume-weight conversions.";

/// 지원하는 재료/단위 목록과 파생 통계를 담은 읽기 전용 스냅샷.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionInfo {
    pub ingredients: Vec<Ingredient>,
    pub units: Vec<Unit>,
    pub systems: Vec<MeasurementSystem>,
    pub measurement_types: Vec<MeasurementType>,
    pub description: &'static str,
    pub units_by_type: BTreeMap<MeasurementType, Vec<Unit>>,
    pub ingredients_by_category: BTreeMap<IngredientCategory, Vec<Ingredient>>,
    /// 재료 수 × 단위 수 × (단위 수 - 1). 지원하지 않는 쌍도 포함한 상한값이다.
    pub total_conversions: usize,
}

pub fn conversion_info() -> ConversionInfo {
    let ingredients: Vec<Ingredient> = Ingredient::all().collect();
    let units = Unit::ALL.to_vec();

    let mut units_by_type: BTreeMap<MeasurementType, Vec<Unit>> = BTreeMap::new();
    for unit in &units {
        units_by_type
            .entry(unit.measurement_type())
            .or_default()
            .push(*unit);
    }

    let mut ingredients_by_category: BTreeMap<IngredientCategory, Vec<Ingredient>> =
        BTreeMap::new();
    for ingredient in &ingredients {
        ingredients_by_category
            .entry(ingredient.category())
            .or_default()
            .push(*ingredient);
    }

    let total_conversions = ingredients.len() * units.len() * units.len().saturating_sub(1);

    ConversionInfo {
        ingredients,
        units,
        systems: MeasurementSystem::ALL.to_vec(),
        measurement_types: MeasurementType::ALL.to_vec(),
        description: DESCRIPTION,
        units_by_type,
        ingredients_by_category,
        total_conversions,
    }
}
