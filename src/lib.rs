//! # edgequake-receipts
//!
//! Pull the field lines out of Russian and Kazakh fiscal receipt PDFs.
//!
//! ## Why keyword filtering?
//!
//! Receipts from Kazakh POS terminals and banking apps are generated PDFs
//! with a real text layer, but their layout is a loose stack of label/value
//! lines. Rather than parse fields, this crate keeps every line that carries
//! a known field label ("Оплачено", "Сатушының ЖСН/БСН", "₸", …) and lets the
//! caller do field-level parsing on a short, predictable list.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input     validate path + %PDF magic
//!  ├─ 2. Open      load via pdfium (bound lazily)
//!  ├─ 3. Classify  russian / kazakh / unknown from page-1 markers
//!  ├─ 4. Filter    keep trimmed lines containing a language keyword
//!  └─ 5. Output    one JSON array of strings
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_receipts::{extract, render_json, ExtractionConfig};
//!
//! let config = ExtractionConfig::default();
//! let result = extract("receipt.pdf", &config);
//! println!("{}", render_json(&result));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `receipt-lines` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder};
pub use error::{ErrorKind, ReceiptError};
pub use extract::{extract, extract_document, extract_with};
pub use output::{render_json, ReceiptLines};
pub use pipeline::classify::{classify, Language};
pub use pipeline::filter::{filter_lines, LANGUAGE_NOT_RECOGNIZED};
pub use pipeline::pdfium::{PdfiumDocument, PdfiumSource};
pub use pipeline::source::{InMemoryDocument, InMemorySource, PageText, TextSource};
