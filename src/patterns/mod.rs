//! Registry of glob-style path patterns for placeholder-bearing parts.
//!
//! The discovery pipeline uses these patterns to decide which container
//! paths are substitution candidates for a given document type, independent
//! of the per-file classification in [`crate::discovery`]. Type-specific
//! primary-content patterns come first, followed by a fixed tail of
//! embedded-content patterns common to all types.

use crate::common::DocumentKind;
use glob::Pattern;

const WORD_PATTERNS: &[&str] = &[
    "word/document.xml",
    "word/header*.xml",
    "word/footer*.xml",
];

const POWERPOINT_PATTERNS: &[&str] = &[
    "ppt/slides/slide*.xml",
    "ppt/slideLayouts/slideLayout*.xml",
];

const EXCEL_PATTERNS: &[&str] = &["xl/worksheets/sheet*.xml", "xl/sharedStrings.xml"];

/// Embedded-content patterns appended for every document type.
const EMBEDDED_PATTERNS: &[&str] = &[
    "word/embeddings/**/*.xml",
    "ppt/embeddings/**/*.xml",
    "ppt/charts/chart*.xml",
    "xl/embeddings/**/*.xml",
    "xl/charts/chart*.xml",
];

const NO_PATTERNS: &[&str] = &[];

/// Glob-style path patterns for a document type's placeholder-bearing parts,
/// primary content first, embedded tail last.
///
/// An unrecognized document type yields only the embedded tail.
///
/// # Examples
///
/// ```rust
/// use pomelo::DocumentKind;
/// use pomelo::patterns::file_patterns_for;
///
/// let patterns = file_patterns_for(DocumentKind::Xlsx);
/// assert!(patterns.contains(&"xl/worksheets/sheet*.xml"));
/// assert!(patterns.contains(&"xl/charts/chart*.xml"));
/// ```
pub fn file_patterns_for(kind: DocumentKind) -> Vec<&'static str> {
    let primary = match kind {
        DocumentKind::Docx => WORD_PATTERNS,
        DocumentKind::Pptx => POWERPOINT_PATTERNS,
        DocumentKind::Xlsx => EXCEL_PATTERNS,
        DocumentKind::Unknown => NO_PATTERNS,
    };
    primary.iter().chain(EMBEDDED_PATTERNS).copied().collect()
}

/// Check a container path against a pattern list.
///
/// Invalid patterns never match; they cannot occur in the built-in registry.
pub fn matches_any(patterns: &[&str], path: &str) -> bool {
    patterns
        .iter()
        .any(|pattern| Pattern::new(pattern).is_ok_and(|p| p.matches(path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_patterns_then_embedded_tail() {
        let patterns = file_patterns_for(DocumentKind::Docx);
        assert_eq!(patterns[0], "word/document.xml");
        assert!(patterns.contains(&"word/header*.xml"));
        assert!(patterns.ends_with(EMBEDDED_PATTERNS));
    }

    #[test]
    fn test_excel_patterns_scenario() {
        let patterns = file_patterns_for(DocumentKind::Xlsx);
        assert!(patterns.contains(&"xl/worksheets/sheet*.xml"));
        assert!(patterns.contains(&"xl/charts/chart*.xml"));
    }

    #[test]
    fn test_unknown_kind_gets_tail_only() {
        assert_eq!(file_patterns_for(DocumentKind::Unknown), EMBEDDED_PATTERNS);
    }

    #[test]
    fn test_matches_container_paths() {
        let patterns = file_patterns_for(DocumentKind::Docx);
        assert!(matches_any(&patterns, "word/document.xml"));
        assert!(matches_any(&patterns, "word/header2.xml"));
        assert!(matches_any(&patterns, "word/embeddings/sheet/data.xml"));
        assert!(matches_any(&patterns, "ppt/charts/chart1.xml"));
        assert!(!matches_any(&patterns, "word/styles.xml"));
        assert!(!matches_any(&patterns, "word/media/image1.png"));
    }
}
