//! Extension-based MIME and document type detection.
//!
//! Uses `phf` for a compile-time lookup table; detection never touches the
//! file contents.

use crate::common::DocumentKind;
use phf::phf_map;

/// Fallback MIME type for unrecognized extensions.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Compile-time extension-to-MIME map (keys lowercase).
static MIME_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    // OOXML containers
    "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    // Legacy Office containers
    "doc" => "application/msword",
    "ppt" => "application/vnd.ms-powerpoint",
    "xls" => "application/vnd.ms-excel",
    // Common neighbors in template storage
    "xml" => "application/xml",
    "pdf" => "application/pdf",
    "zip" => "application/zip",
    "json" => "application/json",
    "txt" => "text/plain",
    "html" => "text/html",
    "csv" => "text/csv",
    "png" => "image/png",
    "jpg" => "image/jpeg",
    "jpeg" => "image/jpeg",
    "gif" => "image/gif",
};

/// MIME type for a filename, from its extension alone (case-insensitive).
/// Unrecognized or missing extensions yield [`DEFAULT_MIME_TYPE`].
pub fn detect_mime_type(filename: &str) -> &'static str {
    extension(filename)
        .and_then(|ext| MIME_TYPES.get(ext.to_ascii_lowercase().as_str()).copied())
        .unwrap_or(DEFAULT_MIME_TYPE)
}

/// Document container type for a filename (case-insensitive extension match).
pub fn detect_document_type(filename: &str) -> DocumentKind {
    extension(filename)
        .map(DocumentKind::from_extension)
        .unwrap_or(DocumentKind::Unknown)
}

fn extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}
