//! Container entry and classified part records.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::classify::{is_embedded_path, part_category, part_kind};

/// One named file entry from the extraction collaborator.
///
/// Produced by whatever unpacked the OOXML container; immutable, one per
/// archive member. This crate never reads the archive itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerEntry {
    /// Path of the member inside the container (e.g. `word/document.xml`)
    pub name: String,

    /// Decoded text content of the member
    pub content: String,

    /// Raw bytes of the member
    pub buffer: Bytes,
}

impl ContainerEntry {
    /// Create a new container entry.
    pub fn new(name: impl Into<String>, content: impl Into<String>, buffer: Bytes) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            buffer,
        }
    }
}

/// Coarse OOXML subsystem owning a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    /// WordprocessingML part under `word/`
    Word,
    /// PresentationML part under `ppt/`
    Powerpoint,
    /// SpreadsheetML part under `xl/`
    Excel,
    /// Chart part, regardless of hosting subsystem
    Chart,
    /// Drawing part, regardless of hosting subsystem
    Drawing,
    /// Anything else (content types, doc props, themes, ...)
    Other,
}

/// Processing role of a part in the substitution pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartCategory {
    /// Primary document body (document.xml, slideN.xml, sheetN.xml, ...)
    Content,
    /// Relationship descriptor under `_rels`
    Relationships,
    /// Chart definition
    Chart,
    /// Drawing definition
    Drawing,
    /// Header or footer part
    HeaderFooter,
    /// Comments part
    Comments,
    /// Presentation notes slide
    Notes,
    /// Anything without a recognized role
    Other,
}

impl PartCategory {
    /// Number of categories; sized for rank tables.
    pub(crate) const COUNT: usize = 8;
}

/// One XML part of the container, tagged for processing.
///
/// Every field besides the payload is derived deterministically from `path`
/// alone; classification never inspects content. Records are created once
/// during discovery and consumed read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XmlFileRecord {
    /// Path of the part inside the container
    pub path: String,

    /// Decoded text content of the part
    pub content: String,

    /// Raw bytes of the part
    pub buffer: Bytes,

    /// Subsystem owning the part
    pub kind: PartKind,

    /// Processing role of the part
    pub category: PartCategory,

    /// Whether the part represents a nested object (chart, drawing,
    /// embedded spreadsheet) rather than primary flow content
    pub is_embedded: bool,
}

impl XmlFileRecord {
    /// Classify a container entry into a part record.
    pub fn classify(entry: ContainerEntry) -> Self {
        let kind = part_kind(&entry.name);
        let category = part_category(&entry.name);
        let is_embedded = is_embedded_path(&entry.name);
        Self {
            path: entry.name,
            content: entry.content,
            buffer: entry.buffer,
            kind,
            category,
            is_embedded,
        }
    }
}
