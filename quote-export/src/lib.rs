//! The export pipeline.
//!
//! Both exporters are pure readers: they take the document (and, for PDF,
//! the rasterized preview) once at call start, re-derive totals through
//! `quote_core::calculations`, and hand back finished bytes plus the file
//! name derived from the quote number. Nothing here mutates state; a
//! failure is a single terminal error for the caller to surface.

pub mod docx;
pub mod filename;
pub mod pdf;

pub use docx::{DocxExportError, export_docx};
pub use filename::export_file_name;
pub use pdf::{PdfExportError, export_pdf};

/// A finished export: bytes plus the name to save them under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
