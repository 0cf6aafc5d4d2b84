//! Flat structural summary of XML markup.
//!
//! Elements are collected as a token stream (duplicates retained, document
//! order), not a tree. Attributes are kept only when their value carries
//! placeholder syntax, since those are the ones the substitution engine will
//! revisit.

use crate::placeholder::contains_placeholder;
use memchr::memchr;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One `name="value"` attribute whose value carries placeholder syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlAttribute {
    /// Attribute name as written, including any namespace prefix
    pub name: String,

    /// Attribute value, entity-unescaped where the escapes are well-formed
    pub value: String,
}

/// Flat element/attribute summary of one XML part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlStructure {
    /// Local names of start and self-closing tags, in document order,
    /// duplicates retained
    pub elements: Vec<String>,

    /// Placeholder-bearing attributes, in document order
    pub attributes: SmallVec<[XmlAttribute; 8]>,
}

/// Scan an XML fragment for element names and placeholder-bearing attributes.
///
/// Tolerant byte-level scan: every `<...>` span is inspected in isolation, so
/// imbalance never fails. End tags, comments, processing instructions, and
/// DOCTYPE declarations contribute nothing. Empty or whitespace-only input
/// yields an empty structure.
pub fn analyze_xml_structure(xml: &str) -> XmlStructure {
    let bytes = xml.as_bytes();
    let mut structure = XmlStructure::default();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(rel) = memchr(b'<', &bytes[pos..]) else {
            break;
        };
        let open = pos + rel;
        let Some(close) = memchr(b'>', &bytes[open..]) else {
            break;
        };
        let close = open + close;
        scan_tag(&xml[open + 1..close], &mut structure);
        pos = close + 1;
    }

    structure
}

/// Inspect the interior of one `<...>` span.
fn scan_tag(tag: &str, structure: &mut XmlStructure) {
    match tag.bytes().next() {
        // End tag, comment/DOCTYPE/CDATA, or processing instruction
        None | Some(b'/') | Some(b'!') | Some(b'?') => return,
        _ => {},
    }

    // Self-closing tags still declare an element
    let tag = tag.strip_suffix('/').unwrap_or(tag);

    let name_end = tag
        .find(|c: char| c.is_whitespace())
        .unwrap_or(tag.len());
    let raw_name = &tag[..name_end];
    if raw_name.is_empty() {
        return;
    }

    let local_name = raw_name.rsplit(':').next().unwrap_or(raw_name);
    structure.elements.push(local_name.to_string());

    scan_attributes(&tag[name_end..], &mut structure.attributes);
}

/// Collect `name="value"` pairs whose value carries placeholder syntax.
fn scan_attributes(rest: &str, out: &mut SmallVec<[XmlAttribute; 8]>) {
    let bytes = rest.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        // Skip separators between attributes
        while pos < bytes.len() && (bytes[pos].is_ascii_whitespace() || bytes[pos] == b'/') {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        let name_start = pos;
        while pos < bytes.len() && bytes[pos] != b'=' && !bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        let name = &rest[name_start..pos];

        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() || bytes[pos] != b'=' {
            // Valueless attribute, move on
            continue;
        }
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        let quote = bytes[pos];
        let value = if quote == b'"' || quote == b'\'' {
            pos += 1;
            let value_start = pos;
            match memchr(quote, &bytes[pos..]) {
                Some(end) => {
                    let value = &rest[value_start..pos + end];
                    pos += end + 1;
                    value
                },
                None => {
                    // Unterminated quote: take what remains
                    let value = &rest[value_start..];
                    pos = bytes.len();
                    value
                },
            }
        } else {
            let value_start = pos;
            while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            &rest[value_start..pos]
        };

        if !name.is_empty() && contains_placeholder(value) {
            out.push(XmlAttribute {
                name: name.to_string(),
                value: unescape_value(value),
            });
        }
    }
}

/// Unescape XML entities in an attribute value, keeping the raw text when the
/// entity syntax is itself malformed.
fn unescape_value(raw: &str) -> String {
    match quick_xml::escape::unescape(raw) {
        Ok(value) => value.into_owned(),
        Err(_) => raw.to_string(),
    }
}
