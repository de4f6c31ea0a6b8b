//! Base64 decoding for token segments
//!
//! Tokens are Base64URL per RFC 4648, but pasted tokens are frequently
//! padded, wrapped across lines or use the standard alphabet. ASCII
//! whitespace is ignored, and both alphabets are accepted with or without
//! padding. Decoded output is bounded by a size limit.

use crate::error::{Error, Result};
use base64::{
    Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use std::borrow::Cow;

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Decode a Base64URL (or standard Base64) string to bytes with maximum size limit
pub(crate) fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    let input = strip_whitespace(input);
    let result = URL_SAFE_LENIENT
        .decode(&*input)
        .or_else(|url_err| STANDARD_LENIENT.decode(&*input).map_err(|_| url_err))
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64URL decode failed: {e}")))?;

    if result.len() > max_size {
        return Err(Error::SegmentTooLarge {
            size: result.len(),
            max: max_size,
        });
    }

    Ok(result)
}

/// Decode a Base64URL string to text with size limit
///
/// Bytes that are not valid UTF-8 are read as Latin-1, one character per
/// byte, so no input is rejected at this step.
pub(crate) fn decode_string(input: &str, max_size: usize) -> Result<String> {
    let bytes = decode_bytes(input, max_size)?;
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|e| e.into_bytes().into_iter().map(char::from).collect()))
}

fn strip_whitespace(input: &str) -> Cow<'_, str> {
    if input.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(input.chars().filter(|c| !c.is_ascii_whitespace()).collect())
    } else {
        Cow::Borrowed(input)
    }
}
