//! Pomelo - template placeholder discovery and XML part analysis for
//! Office Open XML documents
//!
//! This library operates on an already-extracted OOXML container (the file
//! entries of a .docx, .pptx, or .xlsx archive) and provides the
//! classification-and-analysis layer of a template substitution pipeline:
//!
//! - **Discovery**: filter container entries down to XML parts and tag each
//!   with the subsystem that owns it, its processing role, and whether it
//!   represents an embedded object ([`discover_xml_files`])
//! - **Ordering**: stable-sort tagged parts so primary content is processed
//!   before auxiliary and embedded content ([`sort_xml_files`])
//! - **Analysis**: extract readable text and a flat structural summary from
//!   one XML part, tolerating malformed markup ([`parse_xml_content`])
//! - **Placeholder grammar**: recognize `(((...)))` template tokens in text
//!   and attribute values ([`contains_placeholder`])
//! - **Pattern registry**: glob-style path patterns describing where each
//!   document type stores its placeholder-bearing parts
//!   ([`patterns::file_patterns_for`])
//!
//! Container extraction (ZIP handling) and placeholder *substitution* are
//! collaborators outside this crate; the optional `fetch` module covers the
//! retrieval boundary (local paths, `file://` and `http(s)://` URLs).
//!
//! # Example
//!
//! ```rust
//! use bytes::Bytes;
//! use pomelo::{ContainerEntry, discover_xml_files, parse_xml_content, sort_xml_files};
//!
//! let entries = vec![
//!     ContainerEntry::new(
//!         "word/document.xml",
//!         "<w:document><w:t>Hello (((customer.name)))</w:t></w:document>",
//!         Bytes::new(),
//!     ),
//!     ContainerEntry::new("word/media/image1.png", "", Bytes::new()),
//! ];
//!
//! // Non-XML entries are dropped; each record is classified from its path alone.
//! let mut records = discover_xml_files(entries);
//! assert_eq!(records.len(), 1);
//!
//! // Primary content sorts before charts and other embedded parts.
//! sort_xml_files(&mut records);
//!
//! for record in &records {
//!     let analysis = parse_xml_content(&record.content);
//!     assert_eq!(analysis.text_content, "Hello (((customer.name)))");
//! }
//! ```

/// Tolerant XML content analysis: text extraction and structural summaries.
pub mod analysis;

/// Shared vocabulary types used across modules.
pub mod common;

/// Container entry discovery, path-based classification, and ordering.
pub mod discovery;

/// Error types for pomelo operations.
pub mod error;

/// Template retrieval boundary: fetching, MIME and document type detection.
pub mod fetch;

/// Glob-style path patterns for placeholder-bearing parts per document type.
pub mod patterns;

/// Lexical grammar of `(((...)))` template placeholder tokens.
pub mod placeholder;

// Re-export the types most callers need
pub use analysis::{XmlAnalysis, XmlAttribute, XmlStructure, parse_xml_content};
pub use common::DocumentKind;
pub use discovery::{
    CategoryOrder, ContainerEntry, PartCategory, PartKind, XmlFileRecord, discover_xml_files,
    is_xml_file, sort_xml_files, sort_xml_files_with,
};
pub use error::{PomeloError, Result};
pub use placeholder::{PlaceholderShape, contains_placeholder};
