//! Error types for the edgequake-receipts library.
//!
//! Every failure is fatal for the run: a receipt either yields its full line
//! list or nothing at all. [`ReceiptError`] carries the detail needed for a
//! useful message, while [`ErrorKind`] collapses the variants into the four
//! outcomes a caller actually branches on (bad invocation, missing file,
//! unreadable document, anything else).
//!
//! Messages are kept on a single line because the CLI embeds them verbatim
//! in a one-element JSON array.

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ReceiptError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong invocation arity or otherwise unusable arguments.
    Usage,
    /// The input path does not resolve to a file.
    NotFound,
    /// The file exists but is not a readable PDF document.
    Parse,
    /// Any other fault during binding, extraction, or filtering.
    Unknown,
}

/// All errors returned by the edgequake-receipts library.
#[derive(Debug, Error)]
pub enum ReceiptError {
    // ── Usage errors ──────────────────────────────────────────────────────
    /// The binary was invoked with zero or more than one path.
    #[error("No file path provided")]
    NoFilePath,

    /// Arguments other than the path could not be parsed.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{}' (first bytes: {magic:?})", .path.display())]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{}' is corrupt: {detail}", .path.display())]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{}' is encrypted and requires a password (use --password)", .path.display())]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{}'", .path.display())]
    WrongPassword { path: PathBuf },

    /// A page index past the end of the document was requested.
    #[error("Page {page} is out of range (document has {total} pages)")]
    PageOutOfRange { page: usize, total: usize },

    /// pdfium could not build the text layer of a page.
    #[error("Text extraction failed for page {page}: {detail}")]
    TextExtractionFailed { page: usize, detail: String },

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error("Failed to bind to pdfium library: {0}. Set PDFIUM_LIB_PATH=/path/to/libpdfium or pass --pdfium-lib")]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReceiptError {
    /// Which of the four terminal outcomes this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReceiptError::NoFilePath
            | ReceiptError::InvalidArguments(_)
            | ReceiptError::InvalidConfig(_) => ErrorKind::Usage,
            ReceiptError::FileNotFound { .. } => ErrorKind::NotFound,
            ReceiptError::NotAPdf { .. }
            | ReceiptError::CorruptPdf { .. }
            | ReceiptError::PasswordRequired { .. }
            | ReceiptError::WrongPassword { .. } => ErrorKind::Parse,
            ReceiptError::PermissionDenied { .. }
            | ReceiptError::PageOutOfRange { .. }
            | ReceiptError::TextExtractionFailed { .. }
            | ReceiptError::PdfiumBindingFailed(_)
            | ReceiptError::Internal(_) => ErrorKind::Unknown,
        }
    }

    /// The single string emitted in the JSON error array.
    pub fn output_message(&self) -> String {
        format!("Error: {self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_path_message_is_exact() {
        assert_eq!(
            ReceiptError::NoFilePath.output_message(),
            "Error: No file path provided"
        );
        assert_eq!(ReceiptError::NoFilePath.kind(), ErrorKind::Usage);
    }

    #[test]
    fn file_not_found_keeps_path_verbatim() {
        let e = ReceiptError::FileNotFound {
            path: PathBuf::from("чеки/receipt 1.pdf"),
        };
        assert_eq!(e.output_message(), "Error: File not found: чеки/receipt 1.pdf");
        assert_eq!(e.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn parse_kinds() {
        let path = PathBuf::from("a.pdf");
        assert_eq!(
            ReceiptError::NotAPdf {
                path: path.clone(),
                magic: *b"PK\x03\x04"
            }
            .kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            ReceiptError::CorruptPdf {
                path: path.clone(),
                detail: "bad xref".into()
            }
            .kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            ReceiptError::PasswordRequired { path }.kind(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn messages_are_single_line() {
        let errors = [
            ReceiptError::PdfiumBindingFailed("dlopen failed".into()),
            ReceiptError::TextExtractionFailed {
                page: 2,
                detail: "PdfiumLibraryInternalError".into(),
            },
            ReceiptError::PasswordRequired {
                path: PathBuf::from("x.pdf"),
            },
        ];
        for e in errors {
            assert!(!e.to_string().contains('\n'), "multi-line: {e}");
        }
    }

    #[test]
    fn argument_and_config_errors_are_usage() {
        assert_eq!(
            ReceiptError::InvalidArguments("a value is required".into()).kind(),
            ErrorKind::Usage
        );
        assert_eq!(
            ReceiptError::InvalidConfig("password must not be empty".into()).kind(),
            ErrorKind::Usage
        );
        assert_eq!(ReceiptError::Internal("x".into()).kind(), ErrorKind::Unknown);
    }

    #[test]
    fn page_out_of_range_display() {
        let e = ReceiptError::PageOutOfRange { page: 7, total: 3 };
        assert!(e.to_string().contains("Page 7"));
        assert!(e.to_string().contains("3 pages"));
    }
}
