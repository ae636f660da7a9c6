use std::path::{Path, PathBuf};

use clap::Subcommand;
use log::debug;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::i18n::{self, Translator};
use crate::ingredients::Ingredient;
use crate::recipe::{Recipe, RecipeError};
use crate::ui_cli::{self, MenuChoice};
use crate::units::{self, Unit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// 레시피 파일 오류
    #[error(transparent)]
    Recipe(#[from] RecipeError),
    /// 온도 단위가 아닌 쌍으로 온도 변환을 요청함
    #[error("cannot convert temperature from {0} to {1}")]
    Temperature(Unit, Unit),
}

/// 비대화식 하위 명령.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// 재료 수량을 다른 단위로 변환한다 (ex: convert 1 flour cup g)
    Convert {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        ingredient: String,
        from: String,
        to: String,
    },
    /// 온도를 변환한다 (ex: temp 350 F C)
    Temp {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// TOML 레시피 파일을 목표 인분으로 조정한다
    Scale {
        recipe: PathBuf,
        #[arg(long)]
        to: i32,
    },
    /// 지원하는 단위와 재료 목록을 출력한다
    Info,
}

/// 하위 명령 하나를 실행한다.
pub fn execute(command: Command, config: &Config, tr: &Translator) -> Result<(), AppError> {
    debug!("executing {command:?}");
    match command {
        Command::Convert {
            amount,
            ingredient,
            from,
            to,
        } => {
            let ingredient: Ingredient = ingredient.parse()?;
            let from: Unit = from.parse()?;
            let to: Unit = to.parse()?;
            let result = conversion::convert_with_details(amount, ingredient, from, to);
            if let Some(err) = result.error {
                return Err(err.into());
            }
            ui_cli::print_result(&result, config, tr);
        }
        Command::Temp { value, from, to } => {
            let from = units::parse_temperature_unit(&from)?;
            let to = units::parse_temperature_unit(&to)?;
            let converted = units::convert_temperature(value, from, to)
                .ok_or(AppError::Temperature(from, to))?;
            ui_cli::print_temperature(value, from, converted, to, config, tr);
        }
        Command::Scale { recipe, to } => {
            let recipe = Recipe::load(recipe)?;
            ui_cli::print_recipe(&recipe.scaled(to), config, tr);
        }
        Command::Info => ui_cli::print_info(tr),
    }
    Ok(())
}

/// CLI 애플리케이션의 대화식 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &Translator) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::Convert => ui_cli::handle_convert(tr, config),
            MenuChoice::Temperature => ui_cli::handle_temperature(tr, config),
            MenuChoice::Scale => ui_cli::handle_scale(tr, config),
            MenuChoice::Info => {
                ui_cli::print_info(tr);
                Ok(())
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save_to(config_path).map_err(AppError::from)
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        // 입력 오류는 메뉴로 돌아가고 입출력 오류만 루프를 끝낸다
        match outcome {
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX)),
            Ok(()) => {}
        }
    }
    Ok(())
}
