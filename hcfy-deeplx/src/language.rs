//! Language code registry
//!
//! DeepLX speaks two-letter upper-case codes (`ZH`, `EN`, ...) while Hcfy clients
//! label languages with Chinese display names (`中文(简体)`, `英语`, ...). The forward
//! table lives on [`LanguageCode`]; [`LanguageRegistry`] holds the inverse, built
//! once at startup and shared read-only afterwards.
//!
//! # Example
//!
//! ```
//! use hcfy_deeplx::language::{LanguageCode, LanguageRegistry};
//!
//! let registry = LanguageRegistry::new();
//! assert_eq!(registry.code_for("英语"), Some(LanguageCode::En));
//! assert_eq!(registry.code_for("克林贡语"), None);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Display name Hcfy uses for Simplified Chinese
pub const SIMPLIFIED_CHINESE: &str = "中文(简体)";

/// A backend language code known to DeepLX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageCode {
    Zh,
    De,
    En,
    Es,
    Fr,
    It,
    Ja,
    Nl,
    Pl,
    Pt,
    Ru,
    Bg,
    Cs,
    Da,
    El,
    Et,
    Fi,
    Hu,
    Lt,
    Lv,
    Ro,
    Sk,
    Sl,
    Sv,
}

impl LanguageCode {
    /// Every known code, in table order
    pub const ALL: [LanguageCode; 24] = [
        LanguageCode::Zh,
        LanguageCode::De,
        LanguageCode::En,
        LanguageCode::Es,
        LanguageCode::Fr,
        LanguageCode::It,
        LanguageCode::Ja,
        LanguageCode::Nl,
        LanguageCode::Pl,
        LanguageCode::Pt,
        LanguageCode::Ru,
        LanguageCode::Bg,
        LanguageCode::Cs,
        LanguageCode::Da,
        LanguageCode::El,
        LanguageCode::Et,
        LanguageCode::Fi,
        LanguageCode::Hu,
        LanguageCode::Lt,
        LanguageCode::Lv,
        LanguageCode::Ro,
        LanguageCode::Sk,
        LanguageCode::Sl,
        LanguageCode::Sv,
    ];

    /// The code as DeepLX expects it in `target_lang`
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::Zh => "ZH",
            LanguageCode::De => "DE",
            LanguageCode::En => "EN",
            LanguageCode::Es => "ES",
            LanguageCode::Fr => "FR",
            LanguageCode::It => "IT",
            LanguageCode::Ja => "JA",
            LanguageCode::Nl => "NL",
            LanguageCode::Pl => "PL",
            LanguageCode::Pt => "PT",
            LanguageCode::Ru => "RU",
            LanguageCode::Bg => "BG",
            LanguageCode::Cs => "CS",
            LanguageCode::Da => "DA",
            LanguageCode::El => "EL",
            LanguageCode::Et => "ET",
            LanguageCode::Fi => "FI",
            LanguageCode::Hu => "HU",
            LanguageCode::Lt => "LT",
            LanguageCode::Lv => "LV",
            LanguageCode::Ro => "RO",
            LanguageCode::Sk => "SK",
            LanguageCode::Sl => "SL",
            LanguageCode::Sv => "SV",
        }
    }

    /// The label an Hcfy client uses for this language
    pub fn display_name(self) -> &'static str {
        match self {
            LanguageCode::Zh => SIMPLIFIED_CHINESE,
            LanguageCode::De => "德语",
            LanguageCode::En => "英语",
            LanguageCode::Es => "西班牙语",
            LanguageCode::Fr => "法语",
            LanguageCode::It => "意大利语",
            LanguageCode::Ja => "日语",
            LanguageCode::Nl => "荷兰语",
            LanguageCode::Pl => "波兰语",
            LanguageCode::Pt => "葡萄牙语",
            LanguageCode::Ru => "俄语",
            LanguageCode::Bg => "保加利亚语",
            LanguageCode::Cs => "捷克语",
            LanguageCode::Da => "丹麦语",
            LanguageCode::El => "希腊语",
            LanguageCode::Et => "爱沙尼亚语",
            LanguageCode::Fi => "芬兰语",
            LanguageCode::Hu => "匈牙利语",
            LanguageCode::Lt => "立陶宛语",
            LanguageCode::Lv => "拉脱维亚语",
            LanguageCode::Ro => "罗马尼亚语",
            LanguageCode::Sk => "斯洛伐克语",
            LanguageCode::Sl => "斯洛文尼亚语",
            LanguageCode::Sv => "瑞典语",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the DeepLX codes in [`LanguageCode::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code: {0:?}")]
pub struct ParseLanguageCodeError(pub String);

impl FromStr for LanguageCode {
    type Err = ParseLanguageCodeError;

    /// Parse a backend code, ignoring case (`"en"` and `"EN"` both work)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLanguageCodeError(s.to_string()))
    }
}

/// Inverse lookup from Hcfy display names to backend codes
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    by_display_name: HashMap<&'static str, LanguageCode>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        let by_display_name = LanguageCode::ALL
            .into_iter()
            .map(|code| (code.display_name(), code))
            .collect();
        Self { by_display_name }
    }

    /// Look up the backend code for a client display name
    ///
    /// Unknown names yield `None`; callers decide what absence means.
    pub fn code_for(&self, display_name: &str) -> Option<LanguageCode> {
        self.by_display_name.get(display_name).copied()
    }

    pub fn display_name_for(&self, code: LanguageCode) -> &'static str {
        code.display_name()
    }

    /// Accept either a display name or a backend code
    pub fn resolve(&self, label: &str) -> Option<LanguageCode> {
        self.code_for(label)
            .or_else(|| label.parse::<LanguageCode>().ok())
    }

    /// Known languages in table order
    pub fn languages(&self) -> impl Iterator<Item = (LanguageCode, &'static str)> + '_ {
        LanguageCode::ALL
            .into_iter()
            .map(|code| (code, code.display_name()))
    }

    pub fn len(&self) -> usize {
        self.by_display_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_display_name.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_code() {
        let registry = LanguageRegistry::new();
        for code in LanguageCode::ALL {
            assert_eq!(
                registry.code_for(registry.display_name_for(code)),
                Some(code),
                "round trip failed for {code}"
            );
        }
    }

    #[test]
    fn test_mapping_is_a_bijection() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.len(), LanguageCode::ALL.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_unknown_display_name_is_absent() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.code_for("unrecognized name"), None);
        assert_eq!(registry.code_for(""), None);
        // Codes are not display names
        assert_eq!(registry.code_for("EN"), None);
    }

    #[test]
    fn test_known_pairs() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.code_for("英语"), Some(LanguageCode::En));
        assert_eq!(registry.code_for(SIMPLIFIED_CHINESE), Some(LanguageCode::Zh));
        assert_eq!(registry.code_for("俄语"), Some(LanguageCode::Ru));
        assert_eq!(LanguageCode::Sv.as_str(), "SV");
        assert_eq!(LanguageCode::Ja.to_string(), "JA");
    }

    #[test]
    fn test_parse_code_case_insensitive() {
        assert_eq!("en".parse::<LanguageCode>(), Ok(LanguageCode::En));
        assert_eq!(" DE ".parse::<LanguageCode>(), Ok(LanguageCode::De));
        assert!("xx".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn test_parse_unknown_code_error() {
        let err = "klingon".parse::<LanguageCode>().unwrap_err();
        assert_eq!(err, ParseLanguageCodeError("klingon".to_string()));
        assert_eq!(err.to_string(), "unknown language code: \"klingon\"");
    }

    #[test]
    fn test_resolve_accepts_names_and_codes() {
        let registry = LanguageRegistry::new();
        assert_eq!(registry.resolve("法语"), Some(LanguageCode::Fr));
        assert_eq!(registry.resolve("fr"), Some(LanguageCode::Fr));
        assert_eq!(registry.resolve("nope"), None);
    }

    #[test]
    fn test_languages_in_table_order() {
        let registry = LanguageRegistry::new();
        let first: Vec<_> = registry.languages().take(3).collect();
        assert_eq!(
            first,
            vec![
                (LanguageCode::Zh, SIMPLIFIED_CHINESE),
                (LanguageCode::De, "德语"),
                (LanguageCode::En, "英语"),
            ]
        );
    }
}
