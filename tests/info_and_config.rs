use kitchen_units::config::{self, Config};
use kitchen_units::recipe::Recipe;
use kitchen_units::{conversion_info, Ingredient, IngredientCategory, MeasurementType, Unit};

#[test]
fn info_groups_and_counts() {
    let info = conversion_info();
    let n_ing = info.ingredients.len();
    let n_units = info.units.len();
    assert_eq!(n_units, Unit::ALL.len());
    assert_eq!(info.total_conversions, n_ing * n_units * (n_units - 1));
    assert_eq!(info.measurement_types.len(), 4);
    assert_eq!(info.systems.len(), 3);

    let grouped: usize = info.units_by_type.values().map(Vec::len).sum();
    assert_eq!(grouped, n_units);
    assert_eq!(
        info.units_by_type[&MeasurementType::Temperature],
        vec![Unit::Fahrenheit, Unit::Celsius]
    );
    assert!(info.units_by_type[&MeasurementType::Volume].contains(&Unit::Cups));

    let flours = &info.ingredients_by_category[&IngredientCategory::Flours];
    assert!(flours.contains(&Ingredient::AllPurposeFlour));
    assert!(!flours.contains(&Ingredient::PowderedSugar));
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_default_at(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let content = "decimal_places = 1\n[default_units]\nvolume = \"Tablespoons\"\n";
    std::fs::write(&path, content).unwrap();
    let cfg = config::load_or_default_at(&path).unwrap();
    assert_eq!(cfg.decimal_places, 1);
    assert_eq!(cfg.default_units.volume, Unit::Tablespoons);
    assert_eq!(cfg.default_units.weight, Unit::Grams);
    assert!(cfg.show_notes);
    assert_eq!(cfg.format_amount(176.666), "176.7");
}

#[test]
fn config_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let cfg = Config {
        language: "ko".into(),
        show_notes: false,
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();
    assert_eq!(config::load_or_default_at(&path).unwrap(), cfg);
}

#[test]
fn malformed_config_is_an_error_and_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let original = "language = \"ko\"\ndecimal_places = \"three\"\nshow_notes = false\n";
    std::fs::write(&path, original).unwrap();
    assert!(matches!(
        config::load_or_default_at(&path),
        Err(config::ConfigError::Parse(_))
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn recipe_file_loads_and_scales() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cookies.toml");
    std::fs::write(
        &path,
        r#"
name = "Cookies"
servings = 24

[[ingredients]]
name = "brown sugar"
amount = 1.0
unit = "Cups"
notes = "packed"
"#,
    )
    .unwrap();
    let recipe = Recipe::load(&path).unwrap().scaled(12);
    assert_eq!(recipe.servings, 12);
    assert_eq!(recipe.ingredients[0].amount, 0.5);
    assert_eq!(recipe.ingredients[0].notes.as_deref(), Some("packed"));
}
