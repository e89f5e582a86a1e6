//! Extraction entry points: open → classify → filter → close.
//!
//! [`extract`] is the one-call API over pdfium. [`extract_with`] accepts any
//! [`TextSource`] and [`extract_document`] works on a handle that is already
//! open; both exist so the pipeline can run without the pdfium library.
//!
//! The handle is owned by a local binding for the whole run. Whether the
//! run succeeds or a page fails, it is released before the result is
//! returned.

use crate::config::ExtractionConfig;
use crate::error::ReceiptError;
use crate::output::ReceiptLines;
use crate::pipeline::classify::classify;
use crate::pipeline::filter::filter_lines;
use crate::pipeline::pdfium::PdfiumSource;
use crate::pipeline::source::{PageText, TextSource};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Extract keyword lines from a receipt PDF.
///
/// # Errors
/// - [`ReceiptError::FileNotFound`] / [`ReceiptError::PermissionDenied`]
/// - [`ReceiptError::NotAPdf`] / [`ReceiptError::CorruptPdf`] / password errors
/// - [`ReceiptError::PdfiumBindingFailed`] when no pdfium library loads
/// - [`ReceiptError::TextExtractionFailed`] when a page's text cannot be built
///
/// An unrecognized language is **not** an error; see
/// [`ReceiptLines::is_recognized`].
pub fn extract(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ReceiptLines, ReceiptError> {
    let source = PdfiumSource::new(config);
    extract_with(&source, path)
}

/// Run the pipeline against any [`TextSource`].
pub fn extract_with<S: TextSource>(
    source: &S,
    path: impl AsRef<Path>,
) -> Result<ReceiptLines, ReceiptError> {
    let start = Instant::now();
    let path = path.as_ref();
    info!("Starting extraction: {}", path.display());

    // ── Step 1: Open ─────────────────────────────────────────────────────
    let doc = source.open(path)?;

    // ── Steps 2–3: Classify + filter ─────────────────────────────────────
    let result = extract_document(&doc);

    // ── Step 4: Close ────────────────────────────────────────────────────
    doc.close();

    match &result {
        Ok(r) => info!(
            "Extraction complete: {} lines, language={}, {}ms",
            r.lines.len(),
            r.language,
            start.elapsed().as_millis()
        ),
        Err(e) => warn!("Extraction failed: {}", e),
    }
    result
}

/// Classify and filter an open document.
///
/// Page 1 is read once for classification and read again by the filter.
pub fn extract_document<D: PageText + ?Sized>(doc: &D) -> Result<ReceiptLines, ReceiptError> {
    let first_page = if doc.page_count() == 0 {
        String::new()
    } else {
        doc.extract_text(0)?
    };

    let language = classify(&first_page);
    debug!("Detected language: {}", language);

    let lines = filter_lines(doc, language)?;
    Ok(ReceiptLines { language, lines })
}
