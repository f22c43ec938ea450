//! Image payloads - normalization, upload loading and result download

pub mod base64;
pub mod file;

use serde::{Deserialize, Serialize};

/// Media type assumed when a payload does not declare one
pub const DEFAULT_MEDIA_TYPE: &str = "image/jpeg";

/// An encoded image carried as base64 text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    /// Declared media type, when known
    pub media_type: Option<String>,
    /// Base64 data without any data-URI prefix
    pub data: String,
}

impl ImagePayload {
    /// Parse a data URL or bare base64 string
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        Self {
            media_type: base64::media_type_from_data_url(input).map(str::to_string),
            data: base64::strip_data_url_prefix(input).to_string(),
        }
    }

    pub fn from_bytes(bytes: &[u8], media_type: &str) -> Self {
        Self {
            media_type: Some(media_type.to_string()),
            data: base64::encode(bytes),
        }
    }

    /// Wrap base64 returned by the edit service under the fixed output type
    pub fn generated(data: impl Into<String>) -> Self {
        Self {
            media_type: Some(DEFAULT_MEDIA_TYPE.to_string()),
            data: data.into(),
        }
    }

    pub fn media_type(&self) -> &str {
        self.media_type.as_deref().unwrap_or(DEFAULT_MEDIA_TYPE)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type(), self.data)
    }

    pub fn decode(&self) -> crate::Result<Vec<u8>> {
        base64::decode(&self.data)
    }

    /// Size of the decoded image in bytes, estimated from the base64 length
    pub fn approx_size(&self) -> usize {
        let padding = self.data.bytes().rev().take_while(|b| *b == b'=').count();
        (self.data.len() / 4 * 3).saturating_sub(padding)
    }
}
