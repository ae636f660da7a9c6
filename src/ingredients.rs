//! 재료별 밀도(1컵 = 240 ml 당 g)와 계량 요령을 담은 정적 테이블.
//! 값은 실온에서 각 재료의 표준 계량법(밀가루는 떠서 깎기, 황설탕은 꾹꾹 눌러 담기)을
//! 기준으로 한 참고값이다.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;

/// 재료 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IngredientCategory {
    Flours,
    Sugars,
    Sweeteners,
    Liquids,
    Dairy,
    Fats,
    Leavening,
    Seasonings,
    Baking,
    Grains,
}

impl IngredientCategory {
    pub fn name(&self) -> &'static str {
        match self {
            IngredientCategory::Flours => "flours",
            IngredientCategory::Sugars => "sugars",
            IngredientCategory::Sweeteners => "sweeteners",
            IngredientCategory::Liquids => "liquids",
            IngredientCategory::Dairy => "dairy",
            IngredientCategory::Fats => "fats",
            IngredientCategory::Leavening => "leavening",
            IngredientCategory::Seasonings => "seasonings",
            IngredientCategory::Baking => "baking",
            IngredientCategory::Grains => "grains",
        }
    }
}

impl std::fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 계량 대상 재료.
///
/// 선언 순서는 `INGREDIENTS` 테이블의 순서와 같아야 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ingredient {
    AllPurposeFlour,
    BreadFlour,
    CakeFlour,
    WholeWheatFlour,
    AlmondFlour,
    GranulatedSugar,
    BrownSugar,
    PowderedSugar,
    Honey,
    MapleSyrup,
    Water,
    Milk,
    Cream,
    Oil,
    VanillaExtract,
    Butter,
    CoconutOil,
    Salt,
    BakingSoda,
    BakingPowder,
    CocoaPowder,
    RolledOats,
    Rice,
    ChocolateChips,
}

#[derive(Debug)]
pub struct IngredientData {
    pub ingredient: Ingredient,
    pub name: &'static str,
    pub category: IngredientCategory,
    /// 1컵(240 ml)의 질량 [g]
    pub grams_per_cup: f64,
    /// 부피로 계량할 때의 요령
    pub tip: Option<&'static str>,
    pub aliases: &'static [&'static str],
}

impl Ingredient {
    pub fn all() -> impl Iterator<Item = Ingredient> {
        INGREDIENTS.iter().map(|d| d.ingredient)
    }

    pub fn data(&self) -> &'static IngredientData {
        &INGREDIENTS[*self as usize]
    }

    /// 1컵(240 ml) 당 g.
    pub fn density(&self) -> f64 {
        self.data().grams_per_cup
    }

    pub fn name(&self) -> &'static str {
        self.data().name
    }

    pub fn category(&self) -> IngredientCategory {
        self.data().category
    }

    pub fn measurement_tip(&self) -> Option<&'static str> {
        self.data().tip
    }

    pub fn is_flour(&self) -> bool {
        self.category() == IngredientCategory::Flours
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 이름 또는 별칭으로 재료를 찾는다. 대소문자, `-`/`_`와 공백 차이는 무시한다.
pub fn find_ingredient(name: &str) -> Option<Ingredient> {
    let key = normalize(name);
    INGREDIENTS
        .iter()
        .find(|d| normalize(d.name) == key || d.aliases.iter().any(|a| normalize(a) == key))
        .map(|d| d.ingredient)
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromStr for Ingredient {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_ingredient(s).ok_or_else(|| ConversionError::UnknownIngredient(s.to_string()))
    }
}

const FLOUR_TIP: &str = "Spoon flour into the cup and level it off";
const SYRUP_TIP: &str = "Lightly oil the measuring cup so it pours out cleanly";

const INGREDIENTS: &[IngredientData] = &[
    IngredientData {
        ingredient: Ingredient::AllPurposeFlour,
        name: "all-purpose flour",
        category: IngredientCategory::Flours,
        grams_per_cup: 120.0,
        tip: Some(FLOUR_TIP),
        aliases: &["flour", "ap flour", "plain flour", "allpurposeflour"],
    },
    IngredientData {
        ingredient: Ingredient::BreadFlour,
        name: "bread flour",
        category: IngredientCategory::Flours,
        grams_per_cup: 127.0,
        tip: Some(FLOUR_TIP),
        aliases: &["strong flour", "breadflour"],
    },
    IngredientData {
        ingredient: Ingredient::CakeFlour,
        name: "cake flour",
        category: IngredientCategory::Flours,
        grams_per_cup: 114.0,
        tip: Some(FLOUR_TIP),
        aliases: &["pastry flour", "cakeflour"],
    },
    IngredientData {
        ingredient: Ingredient::WholeWheatFlour,
        name: "whole wheat flour",
        category: IngredientCategory::Flours,
        grams_per_cup: 113.0,
        tip: Some(FLOUR_TIP),
        aliases: &["wholemeal flour", "wheat flour", "wholewheatflour"],
    },
    IngredientData {
        ingredient: Ingredient::AlmondFlour,
        name: "almond flour",
        category: IngredientCategory::Flours,
        grams_per_cup: 96.0,
        tip: Some(FLOUR_TIP),
        aliases: &["almond meal", "ground almonds", "almondflour"],
    },
    IngredientData {
        ingredient: Ingredient::GranulatedSugar,
        name: "granulated sugar",
        category: IngredientCategory::Sugars,
        grams_per_cup: 200.0,
        tip: None,
        aliases: &["sugar", "white sugar", "caster sugar", "granulatedsugar"],
    },
    IngredientData {
        ingredient: Ingredient::BrownSugar,
        name: "brown sugar",
        category: IngredientCategory::Sugars,
        grams_per_cup: 250.0,
        tip: Some("Pack brown sugar firmly into the cup"),
        aliases: &["light brown sugar", "dark brown sugar", "brownsugar"],
    },
    IngredientData {
        ingredient: Ingredient::PowderedSugar,
        name: "powdered sugar",
        category: IngredientCategory::Sugars,
        grams_per_cup: 120.0,
        tip: Some("Sift powdered sugar to break up lumps"),
        aliases: &["icing sugar", "confectioners sugar", "confectioners' sugar", "powderedsugar"],
    },
    IngredientData {
        ingredient: Ingredient::Honey,
        name: "honey",
        category: IngredientCategory::Sweeteners,
        grams_per_cup: 340.0,
        tip: Some(SYRUP_TIP),
        aliases: &[],
    },
    IngredientData {
        ingredient: Ingredient::MapleSyrup,
        name: "maple syrup",
        category: IngredientCategory::Sweeteners,
        grams_per_cup: 322.0,
        tip: Some(SYRUP_TIP),
        aliases: &["maple", "maplesyrup"],
    },
    IngredientData {
        ingredient: Ingredient::Water,
        name: "water",
        category: IngredientCategory::Liquids,
        grams_per_cup: 240.0,
        tip: None,
        aliases: &[],
    },
    IngredientData {
        ingredient: Ingredient::Milk,
        name: "milk",
        category: IngredientCategory::Dairy,
        grams_per_cup: 245.0,
        tip: None,
        aliases: &["whole milk"],
    },
    IngredientData {
        ingredient: Ingredient::Cream,
        name: "cream",
        category: IngredientCategory::Dairy,
        grams_per_cup: 238.0,
        tip: None,
        aliases: &["heavy cream", "whipping cream", "double cream"],
    },
    IngredientData {
        ingredient: Ingredient::Oil,
        name: "vegetable oil",
        category: IngredientCategory::Fats,
        grams_per_cup: 218.0,
        tip: None,
        aliases: &["oil", "canola oil", "olive oil"],
    },
    IngredientData {
        ingredient: Ingredient::VanillaExtract,
        name: "vanilla extract",
        category: IngredientCategory::Baking,
        grams_per_cup: 208.0,
        tip: None,
        aliases: &["vanilla", "vanillaextract"],
    },
    IngredientData {
        ingredient: Ingredient::Butter,
        name: "butter",
        category: IngredientCategory::Fats,
        grams_per_cup: 227.0,
        tip: Some("Use room temperature butter"),
        aliases: &["unsalted butter", "salted butter"],
    },
    IngredientData {
        ingredient: Ingredient::CoconutOil,
        name: "coconut oil",
        category: IngredientCategory::Fats,
        grams_per_cup: 218.0,
        tip: Some("Melt coconut oil before measuring by volume"),
        aliases: &["coconutoil"],
    },
    IngredientData {
        ingredient: Ingredient::Salt,
        name: "salt",
        category: IngredientCategory::Seasonings,
        grams_per_cup: 288.0,
        tip: None,
        aliases: &["table salt", "fine salt"],
    },
    IngredientData {
        ingredient: Ingredient::BakingSoda,
        name: "baking soda",
        category: IngredientCategory::Leavening,
        grams_per_cup: 220.0,
        tip: None,
        aliases: &["bicarbonate of soda", "sodium bicarbonate", "bakingsoda"],
    },
    IngredientData {
        ingredient: Ingredient::BakingPowder,
        name: "baking powder",
        category: IngredientCategory::Leavening,
        grams_per_cup: 192.0,
        tip: None,
        aliases: &["bakingpowder"],
    },
    IngredientData {
        ingredient: Ingredient::CocoaPowder,
        name: "cocoa powder",
        category: IngredientCategory::Baking,
        grams_per_cup: 85.0,
        tip: None,
        aliases: &["cocoa", "unsweetened cocoa", "cocoapowder"],
    },
    IngredientData {
        ingredient: Ingredient::RolledOats,
        name: "rolled oats",
        category: IngredientCategory::Grains,
        grams_per_cup: 90.0,
        tip: None,
        aliases: &["oats", "oatmeal", "rolledoats"],
    },
    IngredientData {
        ingredient: Ingredient::Rice,
        name: "rice",
        category: IngredientCategory::Grains,
        grams_per_cup: 185.0,
        tip: None,
        aliases: &["white rice", "uncooked rice"],
    },
    IngredientData {
        ingredient: Ingredient::ChocolateChips,
        name: "chocolate chips",
        category: IngredientCategory::Baking,
        grams_per_cup: 170.0,
        tip: None,
        aliases: &["chocolate chip", "choc chips", "chocolatechips"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum() {
        for (idx, data) in INGREDIENTS.iter().enumerate() {
            assert_eq!(data.ingredient as usize, idx, "{}", data.name);
        }
    }

    #[test]
    fn densities_are_positive_and_finite() {
        for ingredient in Ingredient::all() {
            let d = ingredient.density();
            assert!(d > 0.0 && d.is_finite(), "{ingredient:?}");
        }
    }

    #[test]
    fn lookup_by_alias_ignores_case_and_separators() {
        assert_eq!(find_ingredient("AP Flour"), Some(Ingredient::AllPurposeFlour));
        assert_eq!(find_ingredient("all_purpose_flour"), Some(Ingredient::AllPurposeFlour));
        assert_eq!(find_ingredient("  Icing   Sugar "), Some(Ingredient::PowderedSugar));
        assert_eq!("mapleSyrup".parse::<Ingredient>().unwrap(), Ingredient::MapleSyrup);
    }

    #[test]
    fn aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for data in INGREDIENTS {
            assert!(seen.insert(normalize(data.name)), "{}", data.name);
            for alias in data.aliases {
                assert!(seen.insert(normalize(alias)), "{alias}");
            }
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(matches!(
            "unobtainium".parse::<Ingredient>(),
            Err(ConversionError::UnknownIngredient(_))
        ));
    }
}
