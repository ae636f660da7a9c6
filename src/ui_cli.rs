use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::{self, ConversionResult, TEMPERATURE_CONFIDENCE};
use crate::i18n::{keys, Translator};
use crate::info;
use crate::ingredients::Ingredient;
use crate::measurement::MeasurementType;
use crate::recipe::Recipe;
use crate::units::{self, Unit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Temperature,
    Scale,
    Info,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_CONVERT,
        keys::MAIN_MENU_TEMPERATURE,
        keys::MAIN_MENU_SCALE,
        keys::MAIN_MENU_INFO,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Convert),
        "2" => Some(MenuChoice::Temperature),
        "3" => Some(MenuChoice::Scale),
        "4" => Some(MenuChoice::Info),
        "5" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 재료 단위 변환 메뉴를 처리한다.
pub fn handle_convert(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    let amount = read_f64(tr, &tr.t(keys::PROMPT_AMOUNT))?;
    let ingredient: Ingredient = read_line(&tr.t(keys::PROMPT_INGREDIENT))?.parse()?;
    let from: Unit = read_line(&tr.t(keys::PROMPT_FROM_UNIT))?.parse()?;
    let to_input = read_line(&tr.t(keys::PROMPT_TO_UNIT))?;
    // 비워 두면 반대 종류의 기본 단위로 변환
    let to: Unit = if to_input.trim().is_empty() {
        match from.measurement_type() {
            MeasurementType::Volume => cfg.default_units.weight,
            _ => cfg.default_units.volume,
        }
    } else {
        to_input.parse()?
    };
    let result = conversion::convert_with_details(amount, ingredient, from, to);
    match result.error {
        Some(err) => Err(err.into()),
        None => {
            print_result(&result, cfg, tr);
            Ok(())
        }
    }
}

/// 오븐 온도 변환 메뉴를 처리한다. 입력 단위의 반대 온도 단위로 변환한다.
pub fn handle_temperature(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_HEADING));
    let value = read_f64(tr, &tr.t(keys::PROMPT_TEMPERATURE_VALUE))?;
    let from = units::parse_temperature_unit(&read_line(&tr.t(keys::PROMPT_FROM_UNIT))?)?;
    let to = match from {
        Unit::Fahrenheit => Unit::Celsius,
        Unit::Celsius => Unit::Fahrenheit,
        _ => cfg.default_units.temperature,
    };
    match units::convert_temperature(value, from, to) {
        Some(converted) => print_temperature(value, from, converted, to, cfg, tr),
        None => println!("{}", tr.t(keys::TEMPERATURE_UNSUPPORTED)),
    }
    Ok(())
}

/// 레시피 인분 조정 메뉴를 처리한다.
pub fn handle_scale(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SCALE_HEADING));
    let path = read_line(&tr.t(keys::PROMPT_RECIPE_PATH))?;
    let recipe = Recipe::load(path.trim())?;
    let target = loop {
        let s = read_line(&tr.t(keys::PROMPT_TARGET_SERVINGS))?;
        match s.trim().parse::<i32>() {
            Ok(v) => break v,
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    };
    print_recipe(&recipe.scaled(target), cfg, tr);
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT), cfg.decimal_places);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let s = read_line(&tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
            match s.trim().parse::<usize>() {
                Ok(places) if places <= 6 => cfg.decimal_places = places,
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => cfg.show_notes = !cfg.show_notes,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

pub fn print_result(result: &ConversionResult, cfg: &Config, tr: &Translator) {
    if let Some(value) = result.converted_amount {
        println!(
            "{} {} {} {} = {} {}",
            tr.t(keys::RESULT_LABEL),
            result.original_amount,
            result.from_unit,
            result.ingredient,
            cfg.format_amount(value),
            result.to_unit
        );
    }
    println!(
        "{} {:.0}%",
        tr.t(keys::RESULT_CONFIDENCE),
        result.confidence * 100.0
    );
    if cfg.show_notes {
        if let Some(notes) = &result.notes {
            println!("{} {notes}", tr.t(keys::RESULT_NOTES));
        }
    }
}

pub fn print_temperature(
    value: f64,
    from: Unit,
    converted: f64,
    to: Unit,
    cfg: &Config,
    tr: &Translator,
) {
    println!(
        "{} {value} {from} = {} {to}",
        tr.t(keys::RESULT_LABEL),
        cfg.format_amount(converted)
    );
    if from != to {
        println!(
            "{} {:.0}%",
            tr.t(keys::RESULT_CONFIDENCE),
            TEMPERATURE_CONFIDENCE * 100.0
        );
    }
}

pub fn print_recipe(recipe: &Recipe, cfg: &Config, tr: &Translator) {
    println!("{} ({} {})", recipe.name, recipe.servings, tr.t(keys::SCALE_SERVINGS));
    for item in &recipe.ingredients {
        let amount = cfg.format_amount(item.amount);
        match &item.notes {
            Some(notes) => println!("- {amount} {} {} ({notes})", item.unit, item.name),
            None => println!("- {amount} {} {}", item.unit, item.name),
        }
    }
}

pub fn print_info(tr: &Translator) {
    let info = info::conversion_info();
    println!("{}", tr.t(keys::INFO_HEADING));
    println!("{}", info.description);
    for (kind, units) in &info.units_by_type {
        let symbols: Vec<String> = units
            .iter()
            .map(|u| format!("{} ({})", u.symbol(), u.system()))
            .collect();
        println!("[{kind}] {}", symbols.join(", "));
    }
    for (category, ingredients) in &info.ingredients_by_category {
        let names: Vec<String> = ingredients
            .iter()
            .map(|i| format!("{} ({:.0} g/cup)", i.name(), i.density()))
            .collect();
        println!("[{category}] {}", names.join(", "));
    }
    println!(
        "{} {}",
        tr.t(keys::INFO_TOTAL_CONVERSIONS),
        info.total_conversions
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력 스트림이 닫혔으면 `UnexpectedEof` 오류.
fn read_line_from(reader: &mut impl BufRead) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
