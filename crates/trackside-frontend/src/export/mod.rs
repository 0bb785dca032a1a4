//! Report preview and export.
//!
//! Artifacts are produced from the currently rendered view state, not from
//! an independent data model: the CSV writer serializes the table as shown,
//! and the PDF document embeds the chart raster the renderer holds at export
//! time.

pub mod csv;
pub mod pdf;
pub mod report;

/// Errors surfaced by an export attempt.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The PDF collaborator is not installed. User-visible; the operation
    /// is aborted.
    #[error("PDF generation library is not available")]
    DependencyMissing,
    #[error("nothing to export")]
    NoData,
    #[error("failed to write export artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF backend failed: {0}")]
    Backend(String),
}
