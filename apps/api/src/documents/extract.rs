//! Text extraction for uploaded documents. PDFs go through `pdf-extract`;
//! anything else must already be UTF-8 text.

use thiserror::Error;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Uploaded file is neither a PDF nor UTF-8 text")]
    NotText,
}

/// Content sniffing wins; the extension is only a fallback.
pub fn detect_kind(filename: &str, bytes: &[u8]) -> DocumentKind {
    if bytes.starts_with(PDF_MAGIC) || filename.to_lowercase().ends_with(".pdf") {
        DocumentKind::Pdf
    } else {
        DocumentKind::PlainText
    }
}

/// Blocking: PDF parsing is CPU-heavy, call from `spawn_blocking`.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    match detect_kind(filename, bytes) {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        DocumentKind::PlainText => std::str::from_utf8(bytes)
            .map(|text| text.trim_start_matches('\u{feff}').to_string())
            .map_err(|_| ExtractError::NotText),
    }
}

/// Stored names get a 36-char UUID and a dash in front; the total must fit
/// the usual 255-byte filesystem limit.
const MAX_FILENAME_BYTES: usize = 255 - 37;

/// Strips any client-side directory components. Returns `None` when nothing
/// usable is left, or when the name has control characters or is too long to store.
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    if base.len() > MAX_FILENAME_BYTES || base.chars().any(char::is_control) {
        return None;
    }
    match base {
        "" | "." | ".." => None,
        _ => Some(base.to_string()),
    }
}
