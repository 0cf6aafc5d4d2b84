//! Common types shared across modules.
//!
//! The vocabulary here is consumed by both the pattern registry and the
//! retrieval boundary, so it lives outside either module.

use serde::{Deserialize, Serialize};

/// Office Open XML document container type, as inferred from a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Word document (.docx)
    Docx,
    /// PowerPoint presentation (.pptx)
    Pptx,
    /// Excel workbook (.xlsx)
    Xlsx,
    /// Not a recognized OOXML container
    Unknown,
}

impl DocumentKind {
    /// Infer the document kind from a filename extension (case-insensitive,
    /// without the leading period).
    pub fn from_extension(ext: &str) -> Self {
        if ext.eq_ignore_ascii_case("docx") {
            Self::Docx
        } else if ext.eq_ignore_ascii_case("pptx") {
            Self::Pptx
        } else if ext.eq_ignore_ascii_case("xlsx") {
            Self::Xlsx
        } else {
            Self::Unknown
        }
    }

    /// The canonical filename extension, or `None` for [`Self::Unknown`].
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Docx => Some("docx"),
            Self::Pptx => Some("pptx"),
            Self::Xlsx => Some("xlsx"),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension().unwrap_or("unknown"))
    }
}
