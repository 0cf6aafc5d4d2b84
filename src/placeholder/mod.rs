//! Lexical grammar of template placeholder tokens.
//!
//! A placeholder is a substring delimited by triple parentheses, in one of
//! three shapes:
//!
//! - Plain reference: `(((path.to.field)))` - a dotted path with no `=`
//! - Numeric-indexed directive: `(((2=chart.series.value)))` - selects a
//!   specific instance before applying the reference
//! - Named directive: `(((DeletePageIfEmpty=invoice.items)))` - a control
//!   instruction carrying a condition argument
//!
//! This layer is a pure lexical classifier: it finds tokens and tells the
//! shapes apart, but interpreting the path or argument belongs to the
//! substitution engine downstream.

use serde::{Deserialize, Serialize};

/// Lexical shape of a placeholder token body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceholderShape {
    /// Dotted path reference with no directive part
    Plain,
    /// `NNN=...` - an all-digit index prefix selecting an instance
    Indexed,
    /// `Name=...` - a named control directive with an argument
    Directive,
}

impl PlaceholderShape {
    /// Classify a token body (the text between `(((` and `)))`).
    pub fn classify(body: &str) -> Self {
        match body.split_once('=') {
            None => Self::Plain,
            Some((prefix, _))
                if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) =>
            {
                Self::Indexed
            },
            Some(_) => Self::Directive,
        }
    }
}

/// Check whether a text fragment contains at least one placeholder token.
///
/// Empty input yields `false`. Tokens with an empty body (`((()))`) do not
/// count.
///
/// # Examples
///
/// ```rust
/// use pomelo::placeholder::contains_placeholder;
///
/// assert!(contains_placeholder("Dear (((customer.name))),"));
/// assert!(contains_placeholder("(((42=chart.series.value)))"));
/// assert!(!contains_placeholder("no tokens here"));
/// ```
#[inline]
pub fn contains_placeholder(text: &str) -> bool {
    placeholder_bodies(text).next().is_some()
}

/// Iterate over the bodies of every well-delimited placeholder token in a
/// text fragment, in document order.
pub fn placeholder_bodies(text: &str) -> PlaceholderBodies<'_> {
    PlaceholderBodies { text, pos: 0 }
}

/// Iterator over placeholder token bodies. See [`placeholder_bodies`].
#[derive(Debug, Clone)]
pub struct PlaceholderBodies<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for PlaceholderBodies<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();
        loop {
            let open = memchr::memmem::find(&bytes[self.pos..], b"(((")? + self.pos;
            let body_start = open + 3;
            let body_end = memchr::memmem::find(&bytes[body_start..], b")))")? + body_start;
            self.pos = body_end + 3;
            if body_end > body_start {
                // Delimiters are ASCII, so these offsets are char boundaries.
                return Some(&self.text[body_start..body_end]);
            }
        }
    }
}
