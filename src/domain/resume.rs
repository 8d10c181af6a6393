//! Resume metadata and upload validation.
//!
//! Only metadata is inspected: the declared MIME type and the byte size.
//! File contents are never opened.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound on resume size (5 MiB).
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TXT: &str = "text/plain";

/// Accepted resume formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeKind {
    Pdf,
    Docx,
    Txt,
}

impl ResumeKind {
    pub const ALL: [ResumeKind; 3] = [ResumeKind::Pdf, ResumeKind::Docx, ResumeKind::Txt];

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            MIME_PDF => Some(ResumeKind::Pdf),
            MIME_DOCX => Some(ResumeKind::Docx),
            MIME_TXT => Some(ResumeKind::Txt),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ResumeKind::Pdf => MIME_PDF,
            ResumeKind::Docx => MIME_DOCX,
            ResumeKind::Txt => MIME_TXT,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ResumeKind::Pdf => "pdf",
            ResumeKind::Docx => "docx",
            ResumeKind::Txt => "txt",
        }
    }
}

/// A user-selected file as described by the host: name, size and declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    pub mime: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime: mime.into(),
        }
    }
}

/// An accepted resume. Holds metadata only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeReference {
    pub name: String,
    pub size_bytes: u64,
    pub kind: ResumeKind,
}

impl ResumeReference {
    /// Size in megabytes, for display (`1.25 MB`).
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }
}

/// Validate a selected file.
///
/// The type check runs first, so an oversized PNG reports `UnsupportedType`.
/// A file of exactly [`MAX_RESUME_BYTES`] is accepted.
pub fn validate_upload(file: &FileMeta) -> Result<ResumeReference, ValidationError> {
    let Some(kind) = ResumeKind::from_mime(&file.mime) else {
        return Err(ValidationError::UnsupportedType {
            mime: file.mime.clone(),
        });
    };
    if file.size_bytes > MAX_RESUME_BYTES {
        return Err(ValidationError::TooLarge {
            size_bytes: file.size_bytes,
            limit_bytes: MAX_RESUME_BYTES,
        });
    }
    Ok(ResumeReference {
        name: file.name.clone(),
        size_bytes: file.size_bytes,
        kind,
    })
}

/// Best-effort MIME type for a file extension (case-insensitive).
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => MIME_PDF,
        "docx" => MIME_DOCX,
        "txt" => MIME_TXT,
        "doc" => "application/msword",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "md" => "text/markdown",
        "rtf" => "application/rtf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn png_is_rejected_regardless_of_size() {
        for size in [0, MB, 50 * MB] {
            let err = validate_upload(&FileMeta::new("photo.png", size, "image/png")).unwrap_err();
            assert!(matches!(err, ValidationError::UnsupportedType { .. }));
        }
    }

    #[test]
    fn six_megabyte_text_is_too_large() {
        let err = validate_upload(&FileMeta::new("cv.txt", 6 * MB, MIME_TXT)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLarge {
                size_bytes: 6 * MB,
                limit_bytes: MAX_RESUME_BYTES
            }
        );
    }

    #[test]
    fn one_megabyte_pdf_is_accepted() {
        let resume = validate_upload(&FileMeta::new("cv.pdf", MB, MIME_PDF)).unwrap();
        assert_eq!(resume.kind, ResumeKind::Pdf);
        assert_eq!(resume.name, "cv.pdf");
        assert!((resume.size_mb() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn exactly_at_limit_is_accepted() {
        assert!(validate_upload(&FileMeta::new("cv.docx", MAX_RESUME_BYTES, MIME_DOCX)).is_ok());
        assert!(validate_upload(&FileMeta::new("cv.docx", MAX_RESUME_BYTES + 1, MIME_DOCX)).is_err());
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(mime_for_extension("PDF"), MIME_PDF);
        assert_eq!(mime_for_extension("exe"), "application/octet-stream");
        for kind in ResumeKind::ALL {
            assert_eq!(mime_for_extension(kind.extension()), kind.mime());
        }
    }
}
