//! Letter font loading with graceful fallback

use printpdf::PdfDocument;
use std::fs;
use std::path::{Path, PathBuf};

/// Which font the PDF is set in
#[derive(Debug, Clone)]
pub enum LetterFont {
    /// External TrueType/OpenType font covering Hangul
    Primary { path: PathBuf, bytes: Vec<u8> },
    /// Built-in Helvetica; Hangul renders as '?'
    Fallback { path: PathBuf, reason: String },
}

impl LetterFont {
    /// Load the font once at startup. Never fails: a missing or broken
    /// file degrades to [`LetterFont::Fallback`].
    pub fn load(path: &Path) -> Self {
        match read_font(path) {
            Ok(bytes) => {
                tracing::info!(path = %path.display(), size = bytes.len(), "Loaded letter font");
                LetterFont::Primary {
                    path: path.to_path_buf(),
                    bytes,
                }
            }
            Err(reason) => {
                tracing::warn!(path = %path.display(), %reason, "Letter font unavailable, using Helvetica");
                LetterFont::Fallback {
                    path: path.to_path_buf(),
                    reason,
                }
            }
        }
    }

    /// Built-in font without attempting a file
    pub fn builtin() -> Self {
        LetterFont::Fallback {
            path: PathBuf::new(),
            reason: "no font file configured".to_string(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LetterFont::Fallback { .. })
    }

    /// Non-fatal warning for the user, if the fallback is in use
    pub fn warning(&self) -> Option<String> {
        match self {
            LetterFont::Primary { .. } => None,
            LetterFont::Fallback { path, reason } => {
                let file = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "font".to_string());
                Some(format!(
                    "PDF 출력 시 한글 폰트 로드 오류: {reason}. '{file}' 파일이 없거나 손상되었을 수 있습니다. PDF에서 한글이 올바르게 표시되지 않을 수 있습니다."
                ))
            }
        }
    }
}

/// Read and fully parse the font, so a broken file is caught here and
/// not on the first export
fn read_font(path: &Path) -> Result<Vec<u8>, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    PdfDocument::empty("font check")
        .add_external_font(bytes.as_slice())
        .map_err(|e| format!("not a usable TrueType or OpenType font ({e})"))?;
    Ok(bytes)
}

/// Make text safe for the built-in font: anything outside ASCII becomes '?'
pub fn latin_fallback(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' })
        .collect()
}
