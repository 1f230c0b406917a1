//! Japanese integer definitions.

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::error::ConfigError;
use crate::models::{Mode, TypeTag};
use crate::rules::{build_rule_table, RuleTable};

use super::{LanguageBundle, RuleDef};

pub const LANGUAGE: &str = "ja-JP";
pub const DOMAIN: &str = "Integer";

pub const INTEGER_PREFIX: &str = "integer";
pub const NUMBER: &str = "number";
pub const NUMBER_SUFFIX: &str = "number-suffix";
pub const DOTTED_NUMBER: &str = "dotted-number";
pub const MIXED_NUMBER: &str = "mixed-number";
pub const JAPANESE: &str = "japanese";
pub const JAPANESE_IDIOM: &str = "japanese-idiom";

// 123456, １２３４５６
pub const NUMBERS_SPECIALS_CHARS: &str = r"[0-9０-９]+";
// Digits on either side of a decimal point belong to a decimal.
pub const DECIMAL_BEFORE: &str = r"[0-9０-９][.．]";
pub const DECIMAL_AFTER: &str = r"[.．][0-9０-９]";

// －１２３４５６, マイナス5
pub const SIGNED_NUMBERS_SPECIALS_CHARS: &str = r"(?:マイナス|負|[-－])\s*[0-9０-９]+";
// 1-2 and 10 - 3 are a range and a subtraction.
pub const DIGIT_BEFORE_SIGN: &str = r"[0-9０-９]\s*";

// 5万, 3千, マイナス2百
pub const NUMBERS_WITH_MULTIPLIER: &str =
    r"(?:(?:マイナス|負)\s*)?[0-9０-９]+\s*[十百千万億兆]+";

// 15k, 16 G, ３Ｍ
pub const NUMBERS_SPECIALS_CHARS_WITH_SUFFIX: &str =
    r"(?:(?:マイナス|負|[-－])\s*)?[0-9０-９]+\s*[KkMGTBbＫｋＭＧＴＢｂ]";
pub const LATIN_LETTER: &str = r"[A-Za-zＡ-Ｚａ-ｚ]";

// 1,234, ２，３３２，１１１
pub const DOTTED_NUMBERS_SPECIALS_CHAR: &str =
    r"(?:(?:マイナス|負|[-－])\s*)?(?:[0-9]{1,3}(?:[,，][0-9]{3})+|[０-９]{1,3}(?:[,，][０-９]{3})+)";
pub const DIGIT: &str = r"[0-9０-９]";
pub const DIGIT_OR_DECIMAL: &str = r"[0-9０-９]|[.．][0-9０-９]";

// 半ダース, 半百
pub const NUMBERS_WITH_HALF_DOZEN: &str = r"半(?:ダース|[十百千万])";

pub const HALF_UNIT: &str = r"半";

// 一ダース, 五十ダース, 3ダース
pub const NUMBERS_WITH_DOZEN: &str = r"(?:[〇零一二三四五六七八九十百千万]+|[0-9０-９]+)\s*ダース";

// 一百五十五, マイナス三千
pub const NATIVE_NUMBERS: &str = r"(?:(?:マイナス|負)\s*)?[〇零一二三四五六七八九十百千万億兆]+";

// In default mode a native numeral may not touch another ideograph, except
// 約 (about), 計 (total), 全 (all), 毎 (every), 各 (each) before it
pub const BLOCKING_PREFIX_IDEOGRAPH: &str = r"[\p{Han}--[約計全毎各]]";

// and common counters after it.
pub const BLOCKING_SUFFIX_IDEOGRAPH: &str =
    r"[\p{Han}--[個人本枚回歳円年月日時分秒匹冊台件度倍番階杯点週]]";

/// Build the Japanese definition bundle.
pub fn bundle() -> LanguageBundle {
    let tag = |subtype: &str| TypeTag::new(INTEGER_PREFIX, subtype);

    LanguageBundle {
        language: LANGUAGE.to_string(),
        domain: DOMAIN.to_string(),
        base: vec![
            RuleDef::new("digits", NUMBERS_SPECIALS_CHARS, tag(NUMBER))
                .not_preceded_by(DECIMAL_BEFORE)
                .not_followed_by(DECIMAL_AFTER),
            RuleDef::new(
                "digits-with-multiplier",
                NUMBERS_WITH_MULTIPLIER,
                tag(MIXED_NUMBER),
            )
            .not_preceded_by(DECIMAL_BEFORE),
            RuleDef::new("signed-digits", SIGNED_NUMBERS_SPECIALS_CHARS, tag(NUMBER))
                .not_preceded_by(DIGIT_BEFORE_SIGN)
                .not_followed_by(DECIMAL_AFTER),
            RuleDef::new(
                "digits-with-suffix",
                NUMBERS_SPECIALS_CHARS_WITH_SUFFIX,
                tag(NUMBER_SUFFIX),
            )
            .not_followed_by(LATIN_LETTER),
            RuleDef::new("dotted-digits", DOTTED_NUMBERS_SPECIALS_CHAR, tag(DOTTED_NUMBER))
                .not_preceded_by(DIGIT)
                .not_followed_by(DIGIT_OR_DECIMAL),
            RuleDef::new("half-dozen", NUMBERS_WITH_HALF_DOZEN, tag(JAPANESE_IDIOM)),
            RuleDef::new("half-unit", HALF_UNIT, tag(JAPANESE_IDIOM)),
            RuleDef::new("dozen", NUMBERS_WITH_DOZEN, tag(JAPANESE_IDIOM)),
        ],
        allow_listed: RuleDef::new("native-allow-listed", NATIVE_NUMBERS, tag(JAPANESE))
            .not_preceded_by(BLOCKING_PREFIX_IDEOGRAPH)
            .not_followed_by(BLOCKING_SUFFIX_IDEOGRAPH),
        aggressive: RuleDef::new("native-aggressive", NATIVE_NUMBERS, tag(JAPANESE)),
    }
}

lazy_static! {
    static ref DEFAULT_TABLE: Result<Arc<RuleTable>, ConfigError> =
        build_rule_table(Mode::Default, &bundle()).map(Arc::new);
    static ref EXTRACT_ALL_TABLE: Result<Arc<RuleTable>, ConfigError> =
        build_rule_table(Mode::ExtractAll, &bundle()).map(Arc::new);
}

/// Shared Japanese rule table for `mode`, built on first use.
pub fn rule_table(mode: Mode) -> Result<Arc<RuleTable>, ConfigError> {
    let cached = match mode {
        Mode::Default => &*DEFAULT_TABLE,
        Mode::ExtractAll => &*EXTRACT_ALL_TABLE,
    };
    cached.clone()
}
