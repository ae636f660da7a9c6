use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_TEMPERATURE: &str = "main_menu.temperature";
    pub const MAIN_MENU_SCALE: &str = "main_menu.scale";
    pub const MAIN_MENU_INFO: &str = "main_menu.info";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const PROMPT_AMOUNT: &str = "prompt.amount";
    pub const PROMPT_INGREDIENT: &str = "prompt.ingredient";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const RESULT_LABEL: &str = "result.label";
    pub const RESULT_CONFIDENCE: &str = "result.confidence";
    pub const RESULT_NOTES: &str = "result.notes";

    pub const TEMPERATURE_HEADING: &str = "temperature.heading";
    pub const PROMPT_TEMPERATURE_VALUE: &str = "prompt.temperature_value";
    pub const TEMPERATURE_UNSUPPORTED: &str = "temperature.unsupported";

    pub const SCALE_HEADING: &str = "scale.heading";
    pub const PROMPT_RECIPE_PATH: &str = "prompt.recipe_path";
    pub const PROMPT_TARGET_SERVINGS: &str = "prompt.target_servings";
    pub const SCALE_SERVINGS: &str = "scale.servings";

    pub const INFO_HEADING: &str = "info.heading";
    pub const INFO_TOTAL_CONVERSIONS: &str = "info.total_conversions";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 → 키 순으로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Cow::Borrowed(v.as_str());
        }
        let builtin: Option<&str> = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        Cow::Borrowed(builtin.unwrap_or(key))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 테이블은 `a.b` 형태의 키로 평탄화한다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 주방 계량 변환기 ===",
        MAIN_MENU_CONVERT => "1) 재료 단위 변환",
        MAIN_MENU_TEMPERATURE => "2) 오븐 온도 변환",
        MAIN_MENU_SCALE => "3) 레시피 인분 조정",
        MAIN_MENU_INFO => "4) 지원 목록",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CONVERT_HEADING => "\n-- 재료 단위 변환 --",
        PROMPT_AMOUNT => "수량: ",
        PROMPT_INGREDIENT => "재료(ex: flour, brown sugar, honey): ",
        PROMPT_FROM_UNIT => "입력 단위(ex: cup, tbsp, g): ",
        PROMPT_TO_UNIT => "변환 단위(ex: g, oz, ml): ",
        RESULT_LABEL => "변환 결과:",
        RESULT_CONFIDENCE => "신뢰도:",
        RESULT_NOTES => "참고:",
        TEMPERATURE_HEADING => "\n-- 오븐 온도 변환 --",
        PROMPT_TEMPERATURE_VALUE => "온도 값: ",
        TEMPERATURE_UNSUPPORTED => "온도 단위끼리만 변환할 수 있습니다.",
        SCALE_HEADING => "\n-- 레시피 인분 조정 --",
        PROMPT_RECIPE_PATH => "레시피 파일 경로(.toml): ",
        PROMPT_TARGET_SERVINGS => "목표 인분: ",
        SCALE_SERVINGS => "인분",
        INFO_HEADING => "\n-- 지원 목록 --",
        INFO_TOTAL_CONVERSIONS => "전체 변환 조합 수(상한):",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 소수점 자리수:",
        SETTINGS_OPTIONS => "1) 소수점 자리수  2) 참고 사항 표시 전환",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_DECIMALS => "새 소수점 자리수 (0-6): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Kitchen Units ===",
        MAIN_MENU_CONVERT => "1) Convert ingredient",
        MAIN_MENU_TEMPERATURE => "2) Oven temperature",
        MAIN_MENU_SCALE => "3) Scale recipe",
        MAIN_MENU_INFO => "4) Supported units & ingredients",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CONVERT_HEADING => "\n-- Convert Ingredient --",
        PROMPT_AMOUNT => "Amount: ",
        PROMPT_INGREDIENT => "Ingredient (ex: flour, brown sugar, honey): ",
        PROMPT_FROM_UNIT => "From unit (ex: cup, tbsp, g): ",
        PROMPT_TO_UNIT => "To unit (ex: g, oz, ml): ",
        RESULT_LABEL => "Result:",
        RESULT_CONFIDENCE => "Confidence:",
        RESULT_NOTES => "Notes:",
        TEMPERATURE_HEADING => "\n-- Oven Temperature --",
        PROMPT_TEMPERATURE_VALUE => "Temperature value: ",
        TEMPERATURE_UNSUPPORTED => "Only temperature units can be converted here.",
        SCALE_HEADING => "\n-- Scale Recipe --",
        PROMPT_RECIPE_PATH => "Recipe file (.toml): ",
        PROMPT_TARGET_SERVINGS => "Target servings: ",
        SCALE_SERVINGS => "servings",
        INFO_HEADING => "\n-- Supported Units & Ingredients --",
        INFO_TOTAL_CONVERSIONS => "Total conversion pairs (upper bound):",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current decimal places:",
        SETTINGS_OPTIONS => "1) Decimal places  2) Toggle notes",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_DECIMALS => "New decimal places (0-6): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings updated.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_key_for_unknown() {
        let tr = Translator::new("ko-KR");
        assert_eq!(tr.language(), Language::Ko);
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[general]\nerror_prefix = \"Fehler\"\n").unwrap();
        assert_eq!(map.get(keys::ERROR_PREFIX).map(String::as_str), Some("Fehler"));
    }

    #[test]
    fn every_english_key_has_korean_text() {
        use keys::*;
        for key in [MAIN_MENU_TITLE, CONVERT_HEADING, SCALE_SERVINGS, SETTINGS_SAVED] {
            assert!(en(key).is_some() && ko(key).is_some(), "{key}");
        }
    }

    #[test]
    fn decimal_prompt_differs_from_current_value_label() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::SETTINGS_PROMPT_DECIMALS), "New decimal places (0-6): ");
        assert_ne!(tr.t(keys::SETTINGS_PROMPT_DECIMALS), tr.t(keys::SETTINGS_CURRENT));
        assert!(ko(keys::SETTINGS_PROMPT_DECIMALS).is_some());
    }
}
