//! Per-language keyword tables.
//!
//! A receipt line is worth keeping when it carries one of the field labels
//! the fiscal data operator prints (seller BIN, registration numbers, fiscal
//! sign, totals in tenge). The two tables are parallel translations of the
//! same labels; matching is plain substring containment, so entries like
//! "ИП" and "₸" intentionally catch many lines.

use super::classify::Language;

const RUSSIAN: &[&str] = &[
    "Фискальный чек",
    "ИП",
    "Платеж успешно совершен",
    "₸",
    "Продажа",
    "Фото и видео",
    "№ чека",
    "QR",
    "Дата и время",
    "Оплачено",
    "Адрес",
    "ИИН/БИН продавца",
    "ФИО покупателя",
    "РНМ",
    "ЗНМ",
    "ФП",
    "ОФД",
];

const KAZAKH: &[&str] = &[
    "Фискалдық түбіртек",
    "ИП",
    "Төлем сәтті өтті",
    "₸",
    "Сату",
    "Фото и видео",
    "Түбіртек №",
    "QR",
    "Күні мен уақыты",
    "Төленді",
    "Мекенжай",
    "Сатушының ЖСН/БСН",
    "Сатып алушының аты-жөні",
    "МТН",
    "МЗН",
    "ФБ",
    "ФДО",
];

impl Language {
    /// Keyword table for this language; empty for [`Language::Unknown`].
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Language::Russian => RUSSIAN,
            Language::Kazakh => KAZAKH,
            Language::Unknown => &[],
        }
    }
}

/// True when `line` contains at least one keyword (case-sensitive).
pub fn matches_any(line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| line.contains(k))
}
