//! Document exporter: letter → paginated PDF bytes
//!
//! Nothing here touches the disk. The caller receives an
//! [`ExportArtifact`] and decides where the bytes go.

pub mod font;
pub mod layout;

use std::fs;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};
use thiserror::Error;

use crate::letter::{Letter, LetterAssembler, LetterError};
use crate::wizard::{evaluate, Gate, Session};
pub use font::LetterFont;
pub use layout::{PageGeometry, PlacedLine};

/// MIME type offered with the download
pub const PDF_MIME: &str = "application/pdf";

const DOCUMENT_TITLE: &str = "편지";
const LAYER_NAME: &str = "Letter";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("the letter is not ready to export")]
    NotReady(Gate),

    #[error(transparent)]
    Letter(#[from] LetterError),

    #[error("failed to embed font: {0}")]
    Font(String),

    #[error("failed to write PDF: {0}")]
    Pdf(String),

    #[error("failed to save '{path}': {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A finished document, held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Hand the document to the user by writing it into `dir`
    pub fn save_into(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(&self.file_name);
        fs::create_dir_all(dir)
            .and_then(|()| fs::write(&path, &self.bytes))
            .map_err(|source| ExportError::Save {
                path: path.clone(),
                source,
            })?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "Saved letter PDF");
        Ok(path)
    }
}

/// Serializes letters with a fixed page layout
pub struct PdfExporter {
    font: LetterFont,
    geometry: PageGeometry,
}

impl PdfExporter {
    pub fn new(font: LetterFont) -> Self {
        Self {
            font,
            geometry: PageGeometry::default(),
        }
    }

    pub fn font(&self) -> &LetterFont {
        &self.font
    }

    /// Render an assembled letter to PDF bytes
    pub fn export(&self, letter: &Letter) -> Result<ExportArtifact, ExportError> {
        let g = self.geometry;
        let (doc, first_page, first_layer) = PdfDocument::new(
            DOCUMENT_TITLE,
            Mm(g.width_mm),
            Mm(g.height_mm),
            LAYER_NAME,
        );
        let (regular, bold) = self.register_fonts(&doc)?;

        let pages = layout::paginate(letter, &g);
        let mut targets = vec![(first_page, first_layer)];
        for _ in 1..pages.len() {
            targets.push(doc.add_page(Mm(g.width_mm), Mm(g.height_mm), LAYER_NAME));
        }
        for (page, (page_index, layer_index)) in pages.iter().zip(targets) {
            let layer = doc.get_page(page_index).get_layer(layer_index);
            for line in &page.lines {
                let font = if line.bold { &bold } else { &regular };
                layer.use_text(
                    self.encode(&line.text),
                    g.font_size_pt,
                    Mm(line.x_mm),
                    Mm(line.y_mm),
                    font,
                );
            }
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        tracing::info!(
            file = %letter.file_name,
            pages = pages.len(),
            bytes = bytes.len(),
            fallback_font = self.font.is_fallback(),
            "Exported letter"
        );

        Ok(ExportArtifact {
            file_name: letter.file_name.clone(),
            mime: PDF_MIME,
            bytes,
        })
    }

    fn register_fonts(
        &self,
        doc: &PdfDocumentReference,
    ) -> Result<(IndirectFontRef, IndirectFontRef), ExportError> {
        match &self.font {
            LetterFont::Primary { bytes, .. } => {
                // single face; emphasis falls back to the regular weight
                let font = doc
                    .add_external_font(bytes.as_slice())
                    .map_err(|e| ExportError::Font(e.to_string()))?;
                Ok((font.clone(), font))
            }
            LetterFont::Fallback { .. } => {
                let regular = doc
                    .add_builtin_font(BuiltinFont::Helvetica)
                    .map_err(|e| ExportError::Font(e.to_string()))?;
                let bold = doc
                    .add_builtin_font(BuiltinFont::HelveticaBold)
                    .map_err(|e| ExportError::Font(e.to_string()))?;
                Ok((regular, bold))
            }
        }
    }

    fn encode(&self, text: &str) -> String {
        if self.font.is_fallback() {
            font::latin_fallback(text)
        } else {
            text.to_string()
        }
    }
}

/// Assemble and export a session, refusing unless the gate is open
pub fn export_session(
    session: &Session,
    assembler: &LetterAssembler,
    exporter: &PdfExporter,
) -> Result<ExportArtifact, ExportError> {
    let gate = evaluate(session);
    if !gate.is_ready() {
        return Err(ExportError::NotReady(gate));
    }
    let letter = assembler.assemble(session)?;
    exporter.export(&letter)
}
