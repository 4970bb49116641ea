// src/utils/string_encoding.rs
use crate::error::{MrdError, Result};

/// Decode an attribute string payload, rejecting invalid UTF-8
pub fn decode_attribute_string(bytes: &[u8]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| MrdError::InvalidUtf8)
}

/// Byte length of an attribute string as stored in the header
pub fn attribute_string_len(value: &str) -> Result<u32> {
    u32::try_from(value.len()).map_err(|_| {
        MrdError::InvalidDimension(format!(
            "attribute string of {} bytes exceeds the u32 length field",
            value.len()
        ))
    })
}
