use std::path::Path;

use crate::export::ExportError;
use crate::export::csv::TableState;

/// One block of a multi-section report.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportSection {
    /// A data table rendered with the report's striped table style.
    Table { heading: String, table: TableState },
    /// A chart raster captured from the rendered surface.
    Chart { heading: String, png: Vec<u8> },
    /// Bulleted insight/recommendation lines.
    BulletList { heading: String, items: Vec<String> },
}

/// A complete report document, assembled from rendered view state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub subtitle: String,
    /// Human-readable generation date shown under the header.
    pub generated_on: String,
    /// `(label, value)` parameter pairs the report was produced with.
    pub parameters: Vec<(String, String)>,
    pub sections: Vec<ReportSection>,
    /// Centered footer line on every page.
    pub footer: String,
}

/// The opaque PDF-producing collaborator.
///
/// The binary format is entirely its concern; the exporter only hands it a
/// [`ReportDocument`] and writes whatever bytes come back.
pub trait PdfBackend {
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, ExportError>;
}

/// Export boundary owning the optional PDF collaborator.
pub struct ReportExporter {
    pdf: Option<Box<dyn PdfBackend>>,
}

impl ReportExporter {
    /// An exporter without a PDF collaborator; PDF attempts fail with
    /// [`ExportError::DependencyMissing`] while CSV keeps working.
    pub fn without_pdf() -> Self {
        Self { pdf: None }
    }

    pub fn with_pdf(backend: Box<dyn PdfBackend>) -> Self {
        Self { pdf: Some(backend) }
    }

    pub fn pdf_available(&self) -> bool {
        self.pdf.is_some()
    }

    /// Renders the document and writes it to `path`.
    pub fn export_pdf(&self, document: &ReportDocument, path: &Path) -> Result<(), ExportError> {
        let backend = self.pdf.as_ref().ok_or(ExportError::DependencyMissing)?;
        let bytes = backend.render(document)?;
        std::fs::write(path, bytes)?;
        log::info!(
            "Exported report {:?} ({} section(s)) to {path:?}",
            document.title,
            document.sections.len()
        );
        Ok(())
    }
}
