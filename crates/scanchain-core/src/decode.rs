use scanchain_types::{BatchRecord, DecodeError, Result};

use crate::query;

/// Decode one query-string component: `+` is a space, `%XX` is a byte.
///
/// Strict on malformed input: a `%` without two hex digits, or an escape
/// sequence that is not valid UTF-8, yields `None`. The producer encodes
/// with `encodeURIComponent`, whose paired decoder throws on both.
pub fn decode_component(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hi = hex_digit(*bytes.get(i + 1)?)?;
                let lo = hex_digit(*bytes.get(i + 2)?)?;
                out.push(hi << 4 | lo);
                i += 3;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8(out).ok()
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}

/// Decode an already-extracted `data` value into a record.
///
/// An empty value counts as missing, not as a parse attempt.
pub fn decode_payload(raw: &str) -> Result<BatchRecord> {
    if raw.is_empty() {
        return Err(DecodeError::MissingData);
    }
    let json = decode_component(raw)
        .ok_or_else(|| DecodeError::CorruptData("malformed percent-encoding".to_string()))?;
    serde_json::from_str(&json).map_err(|err| DecodeError::CorruptData(err.to_string()))
}

/// Locate the `data` parameter in a query string and decode it.
pub fn decode_query(query: &str) -> Result<BatchRecord> {
    match query::raw_param(query, crate::DATA_PARAM) {
        Some(raw) => decode_payload(raw),
        None => Err(DecodeError::MissingData),
    }
}
