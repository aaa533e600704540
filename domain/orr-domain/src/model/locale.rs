//! リテール版の検出対象ロケール
//!
//! 検出・アンインストールの両フローで共有する単一の固定表。

use std::fmt;

use super::registry_paths::{RETAIL_KEY_PREFIX, UNINSTALL_BASE};

/// リテール版が登録されうるロケール（25種、表の順序が検出順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    EnUs,
    EsEs,
    FrFr,
    DeDe,
    ItIt,
    JaJp,
    KoKr,
    PtBr,
    PtPt,
    RuRu,
    ZhCn,
    ZhTw,
    NlNl,
    PlPl,
    SvSe,
    DaDk,
    FiFi,
    NbNo,
    TrTr,
    CsCz,
    HuHu,
    ElGr,
    ArSa,
    HeIl,
    ThTh,
}

const ALL_LOCALES: [Locale; 25] = [
    Locale::EnUs,
    Locale::EsEs,
    Locale::FrFr,
    Locale::DeDe,
    Locale::ItIt,
    Locale::JaJp,
    Locale::KoKr,
    Locale::PtBr,
    Locale::PtPt,
    Locale::RuRu,
    Locale::ZhCn,
    Locale::ZhTw,
    Locale::NlNl,
    Locale::PlPl,
    Locale::SvSe,
    Locale::DaDk,
    Locale::FiFi,
    Locale::NbNo,
    Locale::TrTr,
    Locale::CsCz,
    Locale::HuHu,
    Locale::ElGr,
    Locale::ArSa,
    Locale::HeIl,
    Locale::ThTh,
];

impl Locale {
    /// 全ロケール（固定順）
    pub fn all() -> &'static [Locale] {
        &ALL_LOCALES
    }

    /// ロケールコード（例: en-US）
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EsEs => "es-ES",
            Locale::FrFr => "fr-FR",
            Locale::DeDe => "de-DE",
            Locale::ItIt => "it-IT",
            Locale::JaJp => "ja-JP",
            Locale::KoKr => "ko-KR",
            Locale::PtBr => "pt-BR",
            Locale::PtPt => "pt-PT",
            Locale::RuRu => "ru-RU",
            Locale::ZhCn => "zh-CN",
            Locale::ZhTw => "zh-TW",
            Locale::NlNl => "nl-NL",
            Locale::PlPl => "pl-PL",
            Locale::SvSe => "sv-SE",
            Locale::DaDk => "da-DK",
            Locale::FiFi => "fi-FI",
            Locale::NbNo => "nb-NO",
            Locale::TrTr => "tr-TR",
            Locale::CsCz => "cs-CZ",
            Locale::HuHu => "hu-HU",
            Locale::ElGr => "el-GR",
            Locale::ArSa => "ar-SA",
            Locale::HeIl => "he-IL",
            Locale::ThTh => "th-TH",
        }
    }

    /// ロケールコードから変換（大文字小文字は区別しない）
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }

    /// アンインストールキー名（例: "O365HomePremRetail - en-US"）
    pub fn retail_key_name(&self) -> String {
        format!("{}{}", RETAIL_KEY_PREFIX, self.code())
    }

    /// HKLM からのアンインストールキーパス
    pub fn retail_key_path(&self) -> String {
        format!(r"{}\{}", UNINSTALL_BASE, self.retail_key_name())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// ロケール一覧を ", " 区切りで連結
pub fn join_locales(locales: &[Locale]) -> String {
    locales
        .iter()
        .map(|l| l.code())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_25_unique_codes() {
        let codes: HashSet<&str> = Locale::all().iter().map(|l| l.code()).collect();
        assert_eq!(Locale::all().len(), 25);
        assert_eq!(codes.len(), 25);
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(Locale::from_code("en-us"), Some(Locale::EnUs));
        assert_eq!(Locale::from_code(" ZH-tw "), Some(Locale::ZhTw));
        assert_eq!(Locale::from_code("xx-XX"), None);
    }

    #[test]
    fn retail_key_path_uses_uninstall_base() {
        assert_eq!(
            Locale::FrFr.retail_key_path(),
            r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall\O365HomePremRetail - fr-FR"
        );
    }

    #[test]
    fn join_locales_keeps_order() {
        assert_eq!(join_locales(&[Locale::EnUs, Locale::FrFr]), "en-US, fr-FR");
        assert_eq!(join_locales(&[]), "");
    }
}
