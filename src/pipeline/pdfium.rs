//! pdfium-backed [`TextSource`]: open receipts and pull page text.
//!
//! ## Why bind lazily?
//!
//! Binding loads a ~30 MB shared library. Doing it on the first `open`
//! (after [`resolve_local`] has validated the path) means a typo in the path
//! is reported as "file not found" on any host, including ones where pdfium
//! is not installed yet.
//!
//! ## Why `get_or_try_init`?
//!
//! A `PdfDocument<'a>` borrows the `Pdfium` that loaded it, so the source
//! keeps the bound library and hands out documents that borrow from it.

use crate::config::ExtractionConfig;
use crate::error::ReceiptError;
use crate::pipeline::input::resolve_local;
use crate::pipeline::source::{PageText, TextSource};
use once_cell::unsync::OnceCell;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Opens receipts through the pdfium C library.
pub struct PdfiumSource {
    library_path: Option<PathBuf>,
    password: Option<String>,
    pdfium: OnceCell<Pdfium>,
}

impl PdfiumSource {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            library_path: config.pdfium_library_path.clone(),
            password: config.password.clone(),
            pdfium: OnceCell::new(),
        }
    }

    fn pdfium(&self) -> Result<&Pdfium, ReceiptError> {
        self.pdfium.get_or_try_init(|| bind(self.library_path.as_deref()))
    }
}

/// Bind to an explicit library, else `./libpdfium.*`, else the system loader.
fn bind(library_path: Option<&Path>) -> Result<Pdfium, ReceiptError> {
    let bindings = match library_path {
        Some(path) => Pdfium::bind_to_library(path),
        None => Pdfium::bind_to_library(&Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library()),
    }
    .map_err(|e| ReceiptError::PdfiumBindingFailed(e.to_string()))?;

    debug!("Bound pdfium library");
    Ok(Pdfium::new(bindings))
}

impl TextSource for PdfiumSource {
    type Document<'a> = PdfiumDocument<'a>;

    fn open<'a>(&'a self, path: &Path) -> Result<Self::Document<'a>, ReceiptError> {
        let path = resolve_local(path)?;
        let pdfium = self.pdfium()?;
        let password = self.password.as_deref();

        let document = pdfium.load_pdf_from_file(&path, password).map_err(|e| {
            let err_str = format!("{:?}", e);
            if err_str.contains("Password") || err_str.contains("password") {
                if password.is_some() {
                    ReceiptError::WrongPassword { path: path.clone() }
                } else {
                    ReceiptError::PasswordRequired { path: path.clone() }
                }
            } else {
                ReceiptError::CorruptPdf {
                    path: path.clone(),
                    detail: err_str,
                }
            }
        })?;

        let page_count = document.pages().len() as usize;
        info!("PDF loaded: {} ({} pages)", path.display(), page_count);

        Ok(PdfiumDocument {
            path,
            page_count,
            document,
        })
    }
}

/// An open receipt. Dropping it closes the underlying pdfium document.
pub struct PdfiumDocument<'a> {
    path: PathBuf,
    page_count: usize,
    document: PdfDocument<'a>,
}

impl PdfiumDocument<'_> {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PageText for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn extract_text(&self, index: usize) -> Result<String, ReceiptError> {
        if index >= self.page_count {
            return Err(ReceiptError::PageOutOfRange {
                page: index + 1,
                total: self.page_count,
            });
        }

        let failed = |detail: String| ReceiptError::TextExtractionFailed {
            page: index + 1,
            detail,
        };

        let page = self
            .document
            .pages()
            .get(
                index
                    .try_into()
                    .map_err(|_| failed(format!("page index {index} exceeds pdfium range")))?,
            )
            .map_err(|e| failed(format!("{:?}", e)))?;

        // Image-only pages have an empty text layer, not an error.
        let text = page.text().map_err(|e| failed(format!("{:?}", e)))?.all();
        debug!("Extracted page {}: {} chars", index + 1, text.chars().count());
        Ok(text)
    }
}

impl Drop for PdfiumDocument<'_> {
    fn drop(&mut self) {
        debug!("Closed {}", self.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;

    #[test]
    fn missing_file_reported_before_binding() {
        let source = PdfiumSource::new(&ExtractionConfig::default());
        let err = source
            .open(Path::new("/definitely/not/a/real/receipt.pdf"))
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(source.pdfium.get().is_none(), "pdfium must not be bound yet");
    }

    #[test]
    fn non_pdf_reported_before_binding() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"<html>receipt</html>").unwrap();

        let source = PdfiumSource::new(&ExtractionConfig::default());
        let err = source.open(f.path()).err().unwrap();
        assert!(matches!(err, ReceiptError::NotAPdf { .. }));
        assert!(source.pdfium.get().is_none());
    }
}
