//! Base64 and data-URI helpers

use base64::{engine::general_purpose::STANDARD, Engine};
use crate::error::{AppError, Result};

/// Prefix attached to every image returned by the edit service
pub const OUTPUT_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

const IMAGE_DATA_URL_START: &str = "data:image/";
const BASE64_MARKER: &str = ";base64,";

/// Encode binary data to base64 string
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode base64 (bare or data URL) to binary data
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(strip_data_url_prefix(encoded).trim())
        .map_err(|e| AppError::InvalidRequest(format!("Invalid base64 data: {}", e)))
}

/// Remove a leading `data:image/<type>;base64,` prefix, if any
pub fn strip_data_url_prefix(data: &str) -> &str {
    if !data.starts_with(IMAGE_DATA_URL_START) {
        return data;
    }
    match data.find(BASE64_MARKER) {
        Some(idx) => &data[idx + BASE64_MARKER.len()..],
        None => data,
    }
}

/// Media type declared by a data URL, e.g. `image/png`. Parameters are dropped.
pub fn media_type_from_data_url(data_url: &str) -> Option<&str> {
    if !data_url.starts_with(IMAGE_DATA_URL_START) {
        return None;
    }
    let header = &data_url["data:".len()..data_url.find(BASE64_MARKER)?];
    header.split(';').next()
}
