//! Tolerant XML content analysis.
//!
//! Extracts human-readable text and a lightweight structural summary from a
//! single XML part. The scanner is deliberately NOT a strict parser: it works
//! on raw bytes between `<` and `>` delimiters, so unbalanced or truncated
//! markup degrades to best-effort extraction instead of an error. Parts that
//! fail schema expectations must still be classified and scanned for
//! placeholders, which rules out a DOM or a validating reader here.
//!
//! Performance notes:
//! - Uses memchr for fast delimiter searching
//! - No allocation proportional to markup, only to extracted results

mod structure;
mod text;

pub use structure::{XmlAttribute, XmlStructure, analyze_xml_structure};
pub use text::extract_text_content;

use serde::{Deserialize, Serialize};

/// Result of analyzing one XML part.
///
/// Created fresh per call; holds no shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XmlAnalysis {
    /// The input exactly as given
    pub original_content: String,

    /// Markup-free text, whitespace-collapsed and trimmed
    pub text_content: String,

    /// Whether the original string was non-empty
    pub has_content: bool,

    /// Flat element/attribute summary of the markup
    pub xml_structure: XmlStructure,
}

/// Analyze one XML part.
///
/// Total over arbitrary input: malformed or unterminated markup never fails,
/// and empty input yields an empty analysis.
///
/// # Examples
///
/// ```rust
/// use pomelo::parse_xml_content;
///
/// let analysis = parse_xml_content("<document><text>Hello (((placeholder)))</text></document>");
/// assert!(analysis.has_content);
/// assert_eq!(analysis.text_content, "Hello (((placeholder)))");
/// assert_eq!(analysis.xml_structure.elements, vec!["document", "text"]);
/// ```
pub fn parse_xml_content(xml: &str) -> XmlAnalysis {
    XmlAnalysis {
        original_content: xml.to_string(),
        text_content: extract_text_content(xml),
        has_content: !xml.is_empty(),
        xml_structure: analyze_xml_structure(xml),
    }
}
