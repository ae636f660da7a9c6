//! 인분 수에 맞춰 레시피 재료량을 비례 조정한다.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::Unit;

/// 레시피의 재료 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: Unit) -> Self {
        Self {
            name: name.into(),
            amount,
            unit,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// 재료 목록을 `from_servings`인분에서 `to_servings`인분으로 조정한다.
///
/// 인분 수 중 하나라도 0 이하이면 입력을 그대로 복사해 돌려준다.
/// 수량의 부호는 검사하지 않는다.
pub fn scale_recipe(
    ingredients: &[RecipeIngredient],
    from_servings: i32,
    to_servings: i32,
) -> Vec<RecipeIngredient> {
    if from_servings <= 0 || to_servings <= 0 {
        debug!("ignoring scale request {from_servings} -> {to_servings}");
        return ingredients.to_vec();
    }
    let factor = f64::from(to_servings) / f64::from(from_servings);
    ingredients
        .iter()
        .map(|item| RecipeIngredient {
            amount: item.amount * factor,
            ..item.clone()
        })
        .collect()
}

/// 레시피 파일 로드 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("failed to read recipe: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse recipe: {0}")]
    Parse(#[from] toml::de::Error),
}

/// TOML로 저장되는 레시피 문서.
///
/// ```toml
/// name = "Pancakes"
/// servings = 4
///
/// [[ingredients]]
/// name = "flour"
/// amount = 2.0
/// unit = "Cups"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: String,
    pub servings: i32,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    pub fn from_toml_str(src: &str) -> Result<Self, RecipeError> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RecipeError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// `to_servings`인분으로 조정한 사본. 조정이 적용되지 않으면 인분 수도 그대로 둔다.
    pub fn scaled(&self, to_servings: i32) -> Recipe {
        let applied = self.servings > 0 && to_servings > 0;
        Recipe {
            name: self.name.clone(),
            servings: if applied { to_servings } else { self.servings },
            ingredients: scale_recipe(&self.ingredients, self.servings, to_servings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recipe_document() {
        let src = r#"
name = "Pancakes"
servings = 4

[[ingredients]]
name = "flour"
amount = 2.0
unit = "Cups"

[[ingredients]]
name = "milk"
amount = 1.5
unit = "Cups"
notes = "cold"
"#;
        let recipe = Recipe::from_toml_str(src).unwrap();
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].notes.as_deref(), Some("cold"));

        let doubled = recipe.scaled(8);
        assert_eq!(doubled.servings, 8);
        assert_eq!(doubled.ingredients[0].amount, 4.0);
        assert_eq!(doubled.ingredients[1].amount, 3.0);
    }

    #[test]
    fn non_positive_target_keeps_servings() {
        let recipe = Recipe {
            name: "Toast".into(),
            servings: 2,
            ingredients: vec![RecipeIngredient::new("butter", 1.0, Unit::Tablespoons)],
        };
        let same = recipe.scaled(0);
        assert_eq!(same, recipe);
    }

    #[test]
    fn bad_unit_is_a_parse_error() {
        let src = "servings = 1\n[[ingredients]]\nname = \"x\"\namount = 1.0\nunit = \"Bushels\"\n";
        assert!(matches!(Recipe::from_toml_str(src), Err(RecipeError::Parse(_))));
    }
}
