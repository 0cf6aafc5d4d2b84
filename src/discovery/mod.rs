//! Container entry discovery, classification, and ordering.
//!
//! Data flow: container entries -> [`discover_xml_files`] -> tagged
//! [`XmlFileRecord`]s -> [`sort_xml_files`] -> ordered record sequence. Each
//! record is then analyzed independently; records carry no shared state, so
//! callers may process the sorted sequence in parallel as long as they apply
//! substitutions in the sorted order.

mod classify;
mod order;
mod record;

pub use classify::{is_embedded_path, is_xml_file, part_category, part_kind};
pub use order::{CategoryOrder, sort_xml_files, sort_xml_files_with};
pub use record::{ContainerEntry, PartCategory, PartKind, XmlFileRecord};

/// Locate and classify the XML parts among a container's entries.
///
/// Entries whose name does not satisfy [`is_xml_file`] (images, thumbnails,
/// binaries) are dropped; the surviving entries keep their input order and
/// are classified purely from their paths.
///
/// # Examples
///
/// ```rust
/// use bytes::Bytes;
/// use pomelo::{ContainerEntry, PartCategory, PartKind, discover_xml_files};
///
/// let records = discover_xml_files(vec![
///     ContainerEntry::new("word/document.xml", "<w:document/>", Bytes::new()),
///     ContainerEntry::new("word/media/image1.png", "", Bytes::new()),
/// ]);
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].kind, PartKind::Word);
/// assert_eq!(records[0].category, PartCategory::Content);
/// assert!(!records[0].is_embedded);
/// ```
pub fn discover_xml_files<I>(entries: I) -> Vec<XmlFileRecord>
where
    I: IntoIterator<Item = ContainerEntry>,
{
    entries
        .into_iter()
        .filter(|entry| is_xml_file(&entry.name))
        .map(XmlFileRecord::classify)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn entry(name: &str) -> ContainerEntry {
        ContainerEntry::new(name, "", Bytes::new())
    }

    #[test]
    fn test_non_xml_entries_dropped() {
        let records = discover_xml_files(vec![
            entry("word/document.xml"),
            entry("word/media/image1.png"),
            entry("docProps/thumbnail.jpeg"),
            entry("_rels/.rels"),
        ]);
        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["word/document.xml", "_rels/.rels"]);
    }

    #[test]
    fn test_output_count_matches_predicate() {
        let names = [
            "word/document.xml",
            "image1.png",
            "word/_rels/document.xml.rels",
            "media/video.mp4",
            "xl/worksheets/sheet1.xml",
        ];
        let records = discover_xml_files(names.iter().map(|n| entry(n)));
        let expected = names.iter().filter(|n| is_xml_file(n)).count();
        assert_eq!(records.len(), expected);
    }

    #[test]
    fn test_single_record_scenario() {
        let records = discover_xml_files(vec![entry("word/document.xml"), entry("image1.png")]);
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.path, "word/document.xml");
        assert_eq!(record.kind, PartKind::Word);
        assert_eq!(record.category, PartCategory::Content);
        assert!(!record.is_embedded);
    }

    #[test]
    fn test_payload_carried_through() {
        let records = discover_xml_files(vec![ContainerEntry::new(
            "word/document.xml",
            "<w:document/>",
            Bytes::from_static(b"<w:document/>"),
        )]);
        assert_eq!(records[0].content, "<w:document/>");
        assert_eq!(records[0].buffer.as_ref(), b"<w:document/>");
    }
}
