//! Team image encoding.
//!
//! Images travel through the API as data URIs and are stored as raw bytes. Stored images
//! are always returned as PNG URIs regardless of the media type they were submitted with.

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;

const DATA_IMAGE_PREFIX: &str = "data:image";
const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Submitted image is not a decodable `data:image/...;base64,` URI.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid Base64 format.")]
pub struct InvalidImage;

/// Decodes an image submitted by a client.
///
/// # Returns
/// - `Ok(None)` - Empty string, meaning no image
/// - `Ok(Some(bytes))` - Decoded payload of the data URI
/// - `Err(InvalidImage)` - Value is not a data URI or its payload is not valid base64
pub fn decode_data_uri(value: &str) -> Result<Option<Vec<u8>>, InvalidImage> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    if !value.starts_with(DATA_IMAGE_PREFIX) {
        return Err(InvalidImage);
    }

    let (header, payload) = value.split_once(',').ok_or(InvalidImage)?;
    if !header.ends_with(";base64") {
        return Err(InvalidImage);
    }

    let bytes = STANDARD.decode(payload).map_err(|_| InvalidImage)?;

    Ok(Some(bytes))
}

/// Encodes stored image bytes as a PNG data URI.
pub fn encode_data_uri(bytes: &[u8]) -> String {
    format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(bytes))
}
