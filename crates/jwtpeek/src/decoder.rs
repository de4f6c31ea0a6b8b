//! Token decoding
//!
//! Decoding never fails: every part of the input that cannot be decoded is
//! kept verbatim, and the resulting record reports whether it has the shape
//! of a token.

use crate::limits::{
    MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_TOKEN_LENGTH,
};
use crate::record::TokenRecord;
use crate::segment::Segment;

/// Size limits applied while decoding
///
/// The default places no limit on input or segment sizes. Use
/// [`DecoderConfig::bounded`] or the individual setters to cap them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    max_token_length: usize,
    max_header_size: usize,
    max_payload_size: usize,
    max_signature_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_token_length: usize::MAX,
            max_header_size: usize::MAX,
            max_payload_size: usize::MAX,
            max_signature_size: usize::MAX,
        }
    }
}

impl DecoderConfig {
    /// Create a new config without size limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with conventional limits for untrusted input
    ///
    /// Raw input up to 64KB, decoded header up to 8KB, decoded payload up
    /// to 64KB and decoded signature up to 1KB.
    pub fn bounded() -> Self {
        Self {
            max_token_length: MAX_TOKEN_LENGTH,
            max_header_size: MAX_DECODED_HEADER_SIZE,
            max_payload_size: MAX_DECODED_PAYLOAD_SIZE,
            max_signature_size: MAX_DECODED_SIGNATURE_SIZE,
        }
    }

    /// Set the maximum raw input length in bytes
    ///
    /// Longer input is not decoded at all and yields an invalid record.
    pub fn max_token_length(mut self, bytes: usize) -> Self {
        self.max_token_length = bytes;
        self
    }

    /// Set the maximum decoded header size in bytes
    pub fn max_header_size(mut self, bytes: usize) -> Self {
        self.max_header_size = bytes;
        self
    }

    /// Set the maximum decoded payload size in bytes
    pub fn max_payload_size(mut self, bytes: usize) -> Self {
        self.max_payload_size = bytes;
        self
    }

    /// Set the maximum decoded signature size in bytes
    pub fn max_signature_size(mut self, bytes: usize) -> Self {
        self.max_signature_size = bytes;
        self
    }
}

/// Decodes raw strings into [`TokenRecord`]s
///
/// The decoder is configured once and can be reused for any number of
/// inputs. It holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder without size limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with custom limits
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// The limits this decoder applies
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a raw string
    ///
    /// The input is split on `.` unconditionally. Parts 0, 1 and 2 are
    /// decoded as header, payload and signature; further parts are only
    /// kept in [`TokenRecord::segments`].
    pub fn decode(&self, raw: &str) -> TokenRecord {
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();

        if raw.len() > self.config.max_token_length {
            tracing::warn!(
                size = raw.len(),
                max = self.config.max_token_length,
                "token too large, not decoding"
            );
            let raw_text = |index: usize| segments.get(index).cloned().map(Segment::RawText);
            let (header, payload, signature) = (raw_text(0), raw_text(1), raw_text(2));
            return TokenRecord::new(raw.to_string(), segments, header, payload, signature);
        }

        let decode_part = |index: usize, max_size: usize| {
            segments
                .get(index)
                .map(|part| Segment::decode(part, max_size))
        };
        let header = decode_part(0, self.config.max_header_size);
        let payload = decode_part(1, self.config.max_payload_size);
        let signature = decode_part(2, self.config.max_signature_size);

        let record = TokenRecord::new(raw.to_string(), segments, header, payload, signature);
        tracing::debug!(
            parts = record.segments().len(),
            valid = record.is_valid(),
            exp = record.expiration(),
            "decoded token"
        );
        record
    }
}

/// Decode a raw string without size limits
///
/// Shorthand for `Decoder::new().decode(raw)`.
pub fn decode(raw: &str) -> TokenRecord {
    Decoder::new().decode(raw)
}
