//! SVG document wrapping and data-URI encoding.
//!
//! Style bodies are drawn in a fixed `0 0 100 100` viewBox; [`document`] adds
//! the outer element that scales them to the requested pixel size. Keeping
//! the viewBox independent of the size means a body stays valid at any size.

use base64::Engine;
use thiserror::Error;

/// Prefix of every generated data URI.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Error decoding a data URI back to markup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The string is not an SVG base64 data URI
    #[error("not an SVG data URI (expected prefix 'data:image/svg+xml;base64,')")]
    MissingPrefix,
    /// The payload is not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not UTF-8
    #[error("decoded SVG is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Wrap a style body in a complete SVG document of `size` x `size` pixels.
///
/// ```
/// use seedavatar::encode::document;
///
/// let svg = document("<rect/>", 64);
/// assert!(svg.starts_with(r#"<svg width="64" height="64" viewBox="0 0 100 100""#));
/// assert!(svg.ends_with("<rect/></svg>"));
/// ```
pub fn document(body: &str, size: u32) -> String {
    format!(
        r#"<svg width="{size}" height="{size}" viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg">{body}</svg>"#,
        size = size,
        body = body
    )
}

/// Encode SVG markup as a base64 data URI.
pub fn to_data_uri(svg: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(svg.as_bytes());
    format!("{}{}", DATA_URI_PREFIX, payload)
}

/// Decode a data URI produced by [`to_data_uri`] back to SVG markup.
///
/// ```
/// use seedavatar::encode::{decode_data_uri, to_data_uri};
///
/// let uri = to_data_uri("<svg/>");
/// assert_eq!(decode_data_uri(&uri).unwrap(), "<svg/>");
/// ```
///
/// # Errors
///
/// Returns `DecodeError` if the prefix is missing or the payload is not
/// base64-encoded UTF-8.
pub fn decode_data_uri(uri: &str) -> Result<String, DecodeError> {
    let payload = uri.strip_prefix(DATA_URI_PREFIX).ok_or(DecodeError::MissingPrefix)?;
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
    Ok(String::from_utf8(bytes)?)
}
