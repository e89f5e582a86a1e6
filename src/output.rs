//! Result types and the JSON line printed by the CLI.

use crate::error::ReceiptError;
use crate::pipeline::classify::Language;
use crate::pipeline::filter::LANGUAGE_NOT_RECOGNIZED;
use serde::Serialize;

/// Lines extracted from one receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLines {
    /// Language detected from the first page.
    pub language: Language,
    /// Kept lines in document order. Holds only the
    /// "Language not recognized." sentinel when `language` is unknown.
    pub lines: Vec<String>,
}

impl ReceiptLines {
    /// True when the document matched neither language.
    pub fn is_recognized(&self) -> bool {
        self.language != Language::Unknown
    }

    /// The array printed on success.
    pub fn into_output(self) -> Vec<String> {
        if self.is_recognized() {
            self.lines
        } else {
            vec![LANGUAGE_NOT_RECOGNIZED.to_string()]
        }
    }
}

/// Render a pipeline result as one line of JSON.
///
/// Non-ASCII text is written literally, not `\u`-escaped.
pub fn render_json(result: &Result<ReceiptLines, ReceiptError>) -> String {
    let array = match result {
        Ok(lines) => lines.clone().into_output(),
        Err(e) => vec![e.output_message()],
    };
    // Serialising a Vec<String> cannot fail.
    serde_json::to_string(&array).unwrap_or_else(|_| String::from("[]"))
}
