//! Path-based part classification.
//!
//! Classification is a pure function of the part path: each classifier is an
//! ordered table of (predicate, result) rules evaluated top to bottom, first
//! match wins. This keeps the precedence (`_rels` beats `charts`, `charts`
//! beats the subsystem roots) visible as data instead of nested conditionals.
//! None of these functions can fail; unexpected path shapes degrade to the
//! `Other`/`false` defaults.

use super::record::{PartCategory, PartKind};

/// Ordered kind rules, most specific first.
const KIND_RULES: &[(fn(&str) -> bool, PartKind)] = &[
    (contains_charts, PartKind::Chart),
    (contains_drawings, PartKind::Drawing),
    (word_root, PartKind::Word),
    (ppt_root, PartKind::Powerpoint),
    (xl_root, PartKind::Excel),
];

/// Ordered category rules, most specific first.
const CATEGORY_RULES: &[(fn(&str) -> bool, PartCategory)] = &[
    (contains_rels, PartCategory::Relationships),
    (contains_charts, PartCategory::Chart),
    (contains_drawings, PartCategory::Drawing),
    (header_footer_segment, PartCategory::HeaderFooter),
    (contains_comments, PartCategory::Comments),
    (contains_notes_slide, PartCategory::Notes),
    (primary_content_name, PartCategory::Content),
];

/// Check whether a container member name denotes an XML part.
///
/// True for `.xml` files (case-insensitive) and for relationship descriptors
/// (`.rels`, possibly nested under `_rels/`). Pure string predicate.
pub fn is_xml_file(name: &str) -> bool {
    ends_with_ignore_case(name, ".xml") || ends_with_ignore_case(name, ".rels")
}

/// The OOXML subsystem owning a part, from its path alone.
pub fn part_kind(path: &str) -> PartKind {
    first_match(KIND_RULES, path).unwrap_or(PartKind::Other)
}

/// The processing role of a part, from its path alone.
pub fn part_category(path: &str) -> PartCategory {
    first_match(CATEGORY_RULES, path).unwrap_or(PartCategory::Other)
}

/// Whether a path denotes an embedded object rather than primary flow
/// content. Embedded parts still require placeholder scanning; they just
/// sort after their host content.
pub fn is_embedded_path(path: &str) -> bool {
    path.contains("embeddings")
        || matches!(
            part_category(path),
            PartCategory::Chart | PartCategory::Drawing
        )
}

fn first_match<T: Copy>(rules: &[(fn(&str) -> bool, T)], path: &str) -> Option<T> {
    rules
        .iter()
        .find(|(predicate, _)| predicate(path))
        .map(|&(_, result)| result)
}

fn contains_charts(path: &str) -> bool {
    path.contains("charts")
}

fn contains_drawings(path: &str) -> bool {
    path.contains("drawings")
}

fn contains_rels(path: &str) -> bool {
    path.contains("_rels")
}

fn contains_comments(path: &str) -> bool {
    path.contains("comments")
}

fn contains_notes_slide(path: &str) -> bool {
    path.contains("notesSlide")
}

fn word_root(path: &str) -> bool {
    path.starts_with("word/")
}

fn ppt_root(path: &str) -> bool {
    path.starts_with("ppt/")
}

fn xl_root(path: &str) -> bool {
    path.starts_with("xl/")
}

/// `header` or `footer` in the final path segment.
fn header_footer_segment(path: &str) -> bool {
    let segment = final_segment(path);
    segment.contains("header") || segment.contains("footer")
}

/// Canonical main-body names: `document.xml`, `slide<digits>.xml`,
/// `sheet<digits>.xml`, `sharedStrings.xml`.
fn primary_content_name(path: &str) -> bool {
    let segment = final_segment(path);
    segment == "document.xml"
        || segment == "sharedStrings.xml"
        || numbered_part(segment, "slide")
        || numbered_part(segment, "sheet")
}

fn numbered_part(segment: &str, prefix: &str) -> bool {
    segment
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(".xml"))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn final_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    let name = name.as_bytes();
    let suffix = suffix.as_bytes();
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_xml_file() {
        assert!(is_xml_file("word/document.xml"));
        assert!(is_xml_file("word/DOCUMENT.XML"));
        assert!(is_xml_file("_rels/.rels"));
        assert!(is_xml_file("word/_rels/document.xml.rels"));
        assert!(!is_xml_file("word/media/image1.png"));
        assert!(!is_xml_file("docProps/thumbnail.jpeg"));
        assert!(!is_xml_file(""));
    }

    #[test]
    fn test_part_kind() {
        assert_eq!(part_kind("word/document.xml"), PartKind::Word);
        assert_eq!(part_kind("ppt/slides/slide1.xml"), PartKind::Powerpoint);
        assert_eq!(part_kind("xl/worksheets/sheet1.xml"), PartKind::Excel);
        // charts and drawings win over the subsystem root
        assert_eq!(part_kind("word/charts/chart1.xml"), PartKind::Chart);
        assert_eq!(part_kind("xl/drawings/drawing1.xml"), PartKind::Drawing);
        assert_eq!(part_kind("[Content_Types].xml"), PartKind::Other);
        assert_eq!(part_kind("docProps/core.xml"), PartKind::Other);
    }

    #[test]
    fn test_part_category_precedence() {
        // _rels beats everything, including charts
        assert_eq!(
            part_category("ppt/charts/_rels/chart1.xml.rels"),
            PartCategory::Relationships
        );
        assert_eq!(part_category("xl/charts/chart1.xml"), PartCategory::Chart);
        assert_eq!(
            part_category("word/drawings/drawing1.xml"),
            PartCategory::Drawing
        );
        assert_eq!(part_category("word/header1.xml"), PartCategory::HeaderFooter);
        assert_eq!(part_category("word/footer2.xml"), PartCategory::HeaderFooter);
        assert_eq!(part_category("word/comments.xml"), PartCategory::Comments);
        assert_eq!(
            part_category("ppt/notesSlides/notesSlide1.xml"),
            PartCategory::Notes
        );
    }

    #[test]
    fn test_part_category_content() {
        assert_eq!(part_category("word/document.xml"), PartCategory::Content);
        assert_eq!(part_category("ppt/slides/slide12.xml"), PartCategory::Content);
        assert_eq!(part_category("xl/worksheets/sheet1.xml"), PartCategory::Content);
        assert_eq!(part_category("xl/sharedStrings.xml"), PartCategory::Content);
        // layouts are not primary bodies
        assert_eq!(
            part_category("ppt/slideLayouts/slideLayout1.xml"),
            PartCategory::Other
        );
        assert_eq!(part_category("word/styles.xml"), PartCategory::Other);
    }

    #[test]
    fn test_header_footer_requires_final_segment() {
        // 'header' in a directory name alone does not categorize the file
        assert_eq!(part_category("word/headers/styles.xml"), PartCategory::Other);
    }

    #[test]
    fn test_is_embedded_path() {
        assert!(is_embedded_path("word/embeddings/oleObject1.xml"));
        assert!(is_embedded_path("xl/charts/chart1.xml"));
        assert!(is_embedded_path("word/drawings/drawing1.xml"));
        assert!(!is_embedded_path("word/document.xml"));
        assert!(!is_embedded_path("word/header1.xml"));
    }

    #[test]
    fn test_embedded_matches_category_definition() {
        for path in [
            "word/document.xml",
            "xl/charts/chart3.xml",
            "ppt/drawings/drawing1.xml",
            "xl/embeddings/workbook1.xml",
            "ppt/notesSlides/notesSlide1.xml",
            "random/path.xml",
        ] {
            let expected = path.contains("embeddings")
                || matches!(
                    part_category(path),
                    PartCategory::Chart | PartCategory::Drawing
                );
            assert_eq!(is_embedded_path(path), expected, "path: {path}");
        }
    }
}
