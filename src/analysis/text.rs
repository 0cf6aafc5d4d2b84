//! Markup-free text extraction.

use memchr::memchr;

/// Extract the readable text of an XML fragment.
///
/// Strips every `<...>` span, joins the surviving text segments with a single
/// space, collapses whitespace runs, and trims. Text following an
/// unterminated `<` is dropped: only segments between recognizable tag
/// delimiters survive, and balanced nesting is never required.
///
/// Idempotent: re-running on its own output returns the same string.
pub fn extract_text_content(xml: &str) -> String {
    let bytes = xml.as_bytes();
    let mut out = String::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match memchr(b'<', &bytes[pos..]) {
            Some(rel) => {
                let open = pos + rel;
                push_segment(&mut out, &xml[pos..open]);
                match memchr(b'>', &bytes[open..]) {
                    Some(close) => pos = open + close + 1,
                    // Unterminated tag: the remainder is markup, not text.
                    None => return out,
                }
            },
            None => {
                push_segment(&mut out, &xml[pos..]);
                break;
            },
        }
    }

    out
}

/// Append a text segment, collapsing its whitespace and separating it from
/// previous segments with a single space.
fn push_segment(out: &mut String, segment: &str) {
    for word in segment.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(
            extract_text_content("<w:p><w:t>Hello</w:t><w:t>World</w:t></w:p>"),
            "Hello World"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            extract_text_content("<a>  one \n two\t\tthree  </a>"),
            "one two three"
        );
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(extract_text_content("no markup at all"), "no markup at all");
    }

    #[test]
    fn test_unterminated_tag_drops_tail() {
        assert_eq!(extract_text_content("before <w:t unterminated"), "before");
    }

    #[test]
    fn test_unbalanced_nesting_tolerated() {
        assert_eq!(
            extract_text_content("<a><b>inner</a> trailing"),
            "inner trailing"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(extract_text_content(""), "");
    }

    proptest! {
        /// Re-running the extractor on its own output is a fixed point.
        #[test]
        fn prop_idempotent(input in ".{0,200}") {
            let once = extract_text_content(&input);
            let twice = extract_text_content(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
