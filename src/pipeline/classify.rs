//! Language detection from the first page of a receipt.
//!
//! Kaspi and other Kazakh POS systems print the same receipt in either
//! Russian or Kazakh. The heading phrase on page 1 is the only reliable
//! signal, so detection is a short ordered list of marker checks rather
//! than any statistical model. Order matters: a bilingual page that carries
//! both a Russian and a Kazakh heading resolves to whichever rule comes
//! first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document language, decided once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Russian,
    Kazakh,
    Unknown,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::Russian => "russian",
            Language::Kazakh => "kazakh",
            Language::Unknown => "unknown",
        })
    }
}

/// Ordered detection rules: the first rule with any matching marker wins.
const RULES: &[(&[&str], Language)] = &[
    (&["Счет на оплату", "Фискальный чек"], Language::Russian),
    (&["Төлем шоты", "Фискалдық түбіртек"], Language::Kazakh),
    (&["Сатып алғаным"], Language::Kazakh),
    (&["Покупки"], Language::Russian),
];

/// Classify a document by the text of its first page.
///
/// An empty string (zero-page document) is [`Language::Unknown`].
pub fn classify(first_page_text: &str) -> Language {
    RULES
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| first_page_text.contains(m)))
        .map(|(_, lang)| *lang)
        .unwrap_or(Language::Unknown)
}
