//! Template retrieval boundary.
//!
//! The classification core operates purely on in-memory structures; this
//! module is the collaborator that brings a template into memory in the
//! first place. A template source is a local filesystem path, a `file://`
//! URL, or an absolute `http(s)://` URL. Failures are surfaced as distinct
//! error kinds (validation, not-found, HTTP status, transport) and propagate
//! unrecovered; no retries happen here.
//!
//! HTTP(S) retrieval is gated behind the `fetch` cargo feature (enabled by
//! default), which pulls in `reqwest`.

mod mime;

pub use mime::{DEFAULT_MIME_TYPE, detect_document_type, detect_mime_type};

#[cfg(feature = "fetch")]
use crate::error::{PomeloError, Result};

/// Filename used when a source has no usable final path segment.
pub const DEFAULT_TEMPLATE_FILENAME: &str = "template.docx";

/// Fetch a template's raw bytes from a path or URL.
///
/// # Errors
///
/// - [`PomeloError::InvalidSource`] for an empty source
/// - [`PomeloError::Http`] for a non-success HTTP status
/// - [`PomeloError::Network`] for transport failures
/// - [`PomeloError::TemplateNotFound`] for a missing local file
#[cfg(feature = "fetch")]
pub async fn fetch_template(source: &str) -> Result<Vec<u8>> {
    if source.trim().is_empty() {
        return Err(PomeloError::InvalidSource(
            "template source must not be empty".to_string(),
        ));
    }

    if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(source).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PomeloError::Http {
                url: source.to_string(),
                status: status.as_u16(),
            });
        }
        return Ok(response.bytes().await?.to_vec());
    }

    let path = source.strip_prefix("file://").unwrap_or(source);
    read_local(path)
}

#[cfg(feature = "fetch")]
fn read_local(path: &str) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => PomeloError::TemplateNotFound(path.to_string()),
        _ => PomeloError::Io(err),
    })
}

/// Extract the filename from a URL or path: the last path segment with any
/// query string and hash fragment stripped. Falls back to
/// [`DEFAULT_TEMPLATE_FILENAME`] when no segment remains.
pub fn extract_filename(source: &str) -> &str {
    let without_suffix = source
        .split(['?', '#'])
        .next()
        .unwrap_or(source);
    let segment = without_suffix
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(without_suffix);
    if segment.is_empty() {
        DEFAULT_TEMPLATE_FILENAME
    } else {
        segment
    }
}


#[cfg(all(test, feature = "fetch"))]
mod fetch_tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_empty_source_is_invalid() {
        assert!(matches!(
            fetch_template("").await,
            Err(PomeloError::InvalidSource(_))
        ));
        assert!(matches!(
            fetch_template("   ").await,
            Err(PomeloError::InvalidSource(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_local_file() {
        let result = fetch_template("/definitely/not/here/template.docx").await;
        assert!(matches!(result, Err(PomeloError::TemplateNotFound(_))));
    }

    #[tokio::test]
    async fn test_local_path_and_file_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"PK\x03\x04fake").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let via_path = fetch_template(&path).await.unwrap();
        assert_eq!(via_path, b"PK\x03\x04fake");

        let via_url = fetch_template(&format!("file://{path}")).await.unwrap();
        assert_eq!(via_url, b"PK\x03\x04fake");
    }
}
