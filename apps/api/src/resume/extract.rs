use bytes::Bytes;

use crate::errors::AppError;
use crate::resume::docx::docx_text;

/// A resume file as received from the upload form.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

/// MIME type of a Word `.docx` document.
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// How an upload is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
    PlainText,
}

impl ResumeUpload {
    /// By content type, `.pdf` extension, or the `%PDF-` magic bytes.
    pub fn is_pdf(&self) -> bool {
        self.has_content_type("application/pdf")
            || self.has_extension(".pdf")
            || self.data.starts_with(b"%PDF-")
    }

    /// By content type, `.docx` extension, or the zip local-header magic bytes.
    pub fn is_docx(&self) -> bool {
        self.has_content_type(DOCX_CONTENT_TYPE)
            || self.has_extension(".docx")
            || self.data.starts_with(b"PK\x03\x04")
    }

    pub fn format(&self) -> ResumeFormat {
        if self.is_pdf() {
            ResumeFormat::Pdf
        } else if self.is_docx() {
            ResumeFormat::Docx
        } else {
            ResumeFormat::PlainText
        }
    }

    fn has_content_type(&self, expected: &str) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(expected))
    }

    fn has_extension(&self, extension: &str) -> bool {
        self.file_name
            .as_deref()
            .is_some_and(|n| n.to_ascii_lowercase().ends_with(extension))
    }
}

/// Extracts plain text from an uploaded resume. PDF and DOCX documents are
/// parsed on the blocking pool; anything else must be UTF-8 text.
pub async fn extract_text(upload: &ResumeUpload) -> Result<String, AppError> {
    if upload.data.is_empty() {
        return Err(AppError::Validation("Uploaded resume is empty".to_string()));
    }

    let text = match upload.format() {
        ResumeFormat::Pdf => {
            extract_blocking("PDF", upload.data.clone(), |data| {
                pdf_extract::extract_text_from_mem(data).map_err(|e| e.to_string())
            })
            .await?
        }
        ResumeFormat::Docx => {
            extract_blocking("DOCX", upload.data.clone(), |data| {
                docx_text(data).map_err(|e| format!("{e:#}"))
            })
            .await?
        }
        ResumeFormat::PlainText => String::from_utf8(upload.data.to_vec()).map_err(|_| {
            AppError::Validation("Resume must be a PDF, DOCX or UTF-8 text file".to_string())
        })?,
    };

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the resume".to_string(),
        ));
    }
    Ok(text)
}

/// Document parsing is CPU-bound; a parser error or panic is a bad upload.
async fn extract_blocking<F>(
    kind: &'static str,
    data: Bytes,
    extract: F,
) -> Result<String, AppError>
where
    F: FnOnce(&[u8]) -> Result<String, String> + Send + 'static,
{
    tokio::task::spawn_blocking(move || extract(&data))
        .await
        .map_err(|e| {
            if e.is_panic() {
                // The PDF extractor panics on some malformed documents
                AppError::Validation(format!("Could not read {kind} resume"))
            } else {
                AppError::Internal(anyhow::anyhow!(
                    "spawn_blocking failed in {kind} extraction: {e}"
                ))
            }
        })?
        .map_err(|e| AppError::Validation(format!("Could not read {kind} resume: {e}")))
}
