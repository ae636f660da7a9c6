use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kitchen_units::app::{self, Command};
use kitchen_units::{config, i18n};

/// 재료 밀도를 반영한 주방 계량 단위 변환기.
#[derive(Debug, Parser)]
#[command(name = "kitchen_units", version, about)]
struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, short = 'L', global = true)]
    lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,
    /// 디버그 로그 출력
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화식 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // 읽을 수 없는 설정 파일은 덮어쓰지 않고 종료한다
    let mut cfg = match config::load_or_default_at(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{}: {err}", cli.config.display());
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);

    let outcome = match cli.command {
        Some(command) => app::execute(command, &cfg, &tr),
        None => app::run(&mut cfg, &cli.config, &tr),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}
