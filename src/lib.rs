//! 핵심 변환 로직을 라이브러리로 분리하여 CLI 외의 호출자(앱 셸, 음성 비서 등)도
//! 같은 엔진을 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod info;
pub mod ingredients;
pub mod measurement;
pub mod recipe;
pub mod ui_cli;
pub mod units;

pub use conversion::{convert, convert_with_details, ConversionError, ConversionResult};
pub use info::{conversion_info, ConversionInfo};
pub use ingredients::{Ingredient, IngredientCategory};
pub use measurement::{MeasurementSystem, MeasurementType};
pub use recipe::{scale_recipe, Recipe, RecipeIngredient};
pub use units::{convert_temperature, Unit};
