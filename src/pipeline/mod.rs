//! Pipeline stages for receipt line extraction.
//!
//! Each submodule implements exactly one step, so each is testable on its
//! own and the PDF backend can be swapped without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ pdfium ──▶ classify ──▶ filter
//! (path)    (text)     (page 1)     (keywords)
//! ```
//!
//! 1. [`input`]    — validate the path and `%PDF` magic before binding pdfium
//! 2. [`pdfium`]   — open the document and render page text on demand
//! 3. [`classify`] — pick the document language from first-page markers
//! 4. [`keywords`] — per-language field-label tables
//! 5. [`filter`]   — keep lines carrying a label, in document order
//!
//! [`source`] holds the traits that decouple steps 3–5 from pdfium.

pub mod classify;
pub mod filter;
pub mod input;
pub mod keywords;
pub mod pdfium;
pub mod source;
