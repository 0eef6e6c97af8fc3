use crate::models::ExtractedDocument;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Errors that can occur while turning an upload into text
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("Document exceeds the {limit} byte upload limit")]
    TooLarge { limit: usize },

    #[error("Could not extract text from PDF: {0}")]
    Pdf(String),

    #[error("Document is not valid UTF-8 text")]
    InvalidText(#[from] std::string::FromUtf8Error),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Upload formats the service can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Resolve a `Content-Type` header value, ignoring parameters such as charset
    pub fn from_content_type(content_type: &str) -> Result<Self, ExtractionError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" => Ok(DocumentKind::Pdf),
            "text/plain" => Ok(DocumentKind::PlainText),
            _ => Err(ExtractionError::UnsupportedType(content_type.to_string())),
        }
    }
}

/// Document text extractor
///
/// Library failures, including panics from malformed PDFs, stop here and come
/// back as `ExtractionError`.
#[derive(Debug, Clone, Copy)]
pub struct TextExtractor {
    max_upload_bytes: usize,
}

impl TextExtractor {
    pub fn new(max_upload_bytes: usize) -> Self {
        Self { max_upload_bytes }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Reject uploads over the size limit before reading them
    pub fn check_size(&self, len: usize) -> Result<(), ExtractionError> {
        if len > self.max_upload_bytes {
            return Err(ExtractionError::TooLarge {
                limit: self.max_upload_bytes,
            });
        }
        Ok(())
    }

    /// Extract text synchronously
    pub fn extract(
        &self,
        kind: DocumentKind,
        bytes: &[u8],
        content_length_known: bool,
    ) -> Result<ExtractedDocument, ExtractionError> {
        self.check_size(bytes.len())?;

        let text = match kind {
            DocumentKind::PlainText => String::from_utf8(bytes.to_vec())?,
            DocumentKind::Pdf => extract_pdf_text(bytes)?,
        };

        tracing::debug!("Extracted {} characters from {:?} upload", text.len(), kind);

        Ok(ExtractedDocument::new(text, content_length_known))
    }

    /// Extract text on the blocking thread pool
    pub async fn extract_blocking(
        &self,
        kind: DocumentKind,
        bytes: Vec<u8>,
        content_length_known: bool,
    ) -> Result<ExtractedDocument, ExtractionError> {
        let extractor = *self;
        tokio::task::spawn_blocking(move || extractor.extract(kind, &bytes, content_length_known))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))?
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            tracing::warn!("PDF extraction failed: {}", e);
            Err(ExtractionError::Pdf(e.to_string()))
        }
        Err(_) => {
            tracing::warn!("PDF extraction panicked on malformed input");
            Err(ExtractionError::Pdf("malformed document".to_string()))
        }
    }
}
