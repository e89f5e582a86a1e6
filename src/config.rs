//! Configuration for receipt extraction.
//!
//! The pipeline itself has no tunables: the language markers and keyword
//! tables are fixed. What does vary between hosts is where the pdfium
//! shared library lives and whether the receipt is password-protected, so
//! [`ExtractionConfig`] carries exactly those two knobs.

use crate::error::ReceiptError;
use std::fmt;
use std::path::PathBuf;

/// Configuration for opening receipt PDFs.
///
/// Built via [`ExtractionConfig::builder()`] or using
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use edgequake_receipts::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .password("1234")
///     .build()
///     .unwrap();
/// assert_eq!(config.password.as_deref(), Some("1234"));
/// ```
#[derive(Clone, Default)]
pub struct ExtractionConfig {
    /// Explicit path to the pdfium shared library.
    ///
    /// When `None`, the platform library name is tried in the current
    /// directory and then via the system loader. A bad path surfaces as
    /// [`ReceiptError::PdfiumBindingFailed`] on the first open.
    pub pdfium_library_path: Option<PathBuf>,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("pdfium_library_path", &self.pdfium_library_path)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder with default settings.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::default()
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Default)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn pdfium_library_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdfium_library_path = Some(path.into());
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    /// Build the configuration, validating all fields.
    pub fn build(self) -> Result<ExtractionConfig, ReceiptError> {
        let c = &self.config;
        if let Some(ref pwd) = c.password {
            if pwd.is_empty() {
                return Err(ReceiptError::InvalidConfig(
                    "password must not be empty".into(),
                ));
            }
        }
        Ok(self.config)
    }
}
