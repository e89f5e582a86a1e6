//! Line filtering: keep the receipt lines that carry a known field label.

use super::classify::Language;
use super::keywords::matches_any;
use super::source::PageText;
use crate::error::ReceiptError;
use tracing::debug;

/// Emitted instead of lines when the document language is not recognized.
pub const LANGUAGE_NOT_RECOGNIZED: &str = "Language not recognized.";

/// Split page text into trimmed, non-empty lines.
///
/// Only `\n` is a break; the trim drops the `\r` of a CRLF pair, while a
/// bare `\r` stays inside its line.
pub fn page_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Collect every line of every page that contains a keyword of `language`.
///
/// Lines keep document order (page, then line) and duplicates are kept.
/// For [`Language::Unknown`] no page is read and the result is the single
/// [`LANGUAGE_NOT_RECOGNIZED`] sentinel.
pub fn filter_lines<D: PageText + ?Sized>(
    doc: &D,
    language: Language,
) -> Result<Vec<String>, ReceiptError> {
    let keywords = language.keywords();
    if keywords.is_empty() {
        return Ok(vec![LANGUAGE_NOT_RECOGNIZED.to_string()]);
    }

    let mut lines = Vec::new();
    for index in 0..doc.page_count() {
        let text = doc.extract_text(index)?;
        let before = lines.len();
        lines.extend(
            page_lines(&text)
                .filter(|line| matches_any(line, keywords))
                .map(str::to_string),
        );
        debug!("Page {}: kept {} lines", index + 1, lines.len() - before);
    }
    Ok(lines)
}
