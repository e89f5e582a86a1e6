//! The document-reader capability the pipeline is written against.
//!
//! [`TextSource`] opens a path into a handle; [`PageText`] is what an open
//! handle can do. Classification and filtering only ever see `PageText`, so
//! they run unchanged over pdfium ([`crate::pipeline::pdfium`]) or over text
//! held in memory ([`InMemoryDocument`]).
//!
//! Releasing a handle is tied to `Drop`: once the driver owns a handle, every
//! exit path (success, `?` on a failed page, panic unwind) releases it.

use crate::error::ReceiptError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An open document that can render page text on demand.
pub trait PageText {
    /// Number of pages; may be zero.
    fn page_count(&self) -> usize;

    /// Plain text of page `index` (0-based).
    ///
    /// Returns an empty string for pages with no text layer. Layout,
    /// reading order, and whitespace are best-effort.
    fn extract_text(&self, index: usize) -> Result<String, ReceiptError>;

    /// Release the handle now instead of at end of scope.
    fn close(self)
    where
        Self: Sized,
    {
        drop(self);
    }
}

/// Something that can open a path into a [`PageText`] handle.
pub trait TextSource {
    type Document<'a>: PageText
    where
        Self: 'a;

    /// Open `path`.
    ///
    /// # Errors
    /// [`ReceiptError::FileNotFound`] when the path does not resolve, a
    /// parse-kind error when it is not a valid document.
    fn open<'a>(&'a self, path: &Path) -> Result<Self::Document<'a>, ReceiptError>;
}

/// Page text already held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryDocument {
    pages: Vec<String>,
}

impl InMemoryDocument {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }
}

impl PageText for InMemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn extract_text(&self, index: usize) -> Result<String, ReceiptError> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(ReceiptError::PageOutOfRange {
                page: index + 1,
                total: self.pages.len(),
            })
    }
}

/// A [`TextSource`] backed by a path → pages map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: HashMap<PathBuf, InMemoryDocument>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `doc` under `path`, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<PathBuf>, doc: InMemoryDocument) -> &mut Self {
        self.documents.insert(path.into(), doc);
        self
    }
}

impl TextSource for InMemorySource {
    type Document<'a> = &'a InMemoryDocument;

    fn open<'a>(&'a self, path: &Path) -> Result<Self::Document<'a>, ReceiptError> {
        self.documents
            .get(path)
            .ok_or_else(|| ReceiptError::FileNotFound {
                path: path.to_path_buf(),
            })
    }
}

impl<T: PageText + ?Sized> PageText for &T {
    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn extract_text(&self, index: usize) -> Result<String, ReceiptError> {
        (**self).extract_text(index)
    }
}
