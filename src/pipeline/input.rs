//! Input resolution: validate a user-supplied path before pdfium sees it.
//!
//! pdfium reports every load failure as an opaque error code, so a missing
//! file and a truncated PDF look alike. Checking existence, read permission,
//! and the `%PDF` magic up front gives callers the right [`ReceiptError`]
//! variant, and it happens before the pdfium library is bound at all.

use crate::error::ReceiptError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF";

/// Readers accept the header anywhere in the first 1 KiB (BOMs, mail
/// gateway prefixes).
const HEADER_WINDOW: usize = 1024;

/// Validate that `path` is an existing, readable file with a `%PDF` header
/// in its first [`HEADER_WINDOW`] bytes.
pub fn resolve_local(path: &Path) -> Result<PathBuf, ReceiptError> {
    let path = path.to_path_buf();

    if !path.is_file() {
        return Err(ReceiptError::FileNotFound { path });
    }

    let head = match std::fs::File::open(&path) {
        Ok(f) => {
            let mut head = Vec::with_capacity(HEADER_WINDOW);
            f.take(HEADER_WINDOW as u64)
                .read_to_end(&mut head)
                .map_err(|e| ReceiptError::Internal(e.to_string()))?;
            head
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(ReceiptError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(ReceiptError::FileNotFound { path });
        }
    };

    if head.len() < PDF_MAGIC.len() {
        return Err(ReceiptError::CorruptPdf {
            path,
            detail: "file is shorter than a PDF header".into(),
        });
    }
    if !head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC) {
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&head[..4]);
        return Err(ReceiptError::NotAPdf { path, magic });
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}
