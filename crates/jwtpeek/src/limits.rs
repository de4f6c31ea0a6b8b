//! Conventional size limits for decoding untrusted input
//!
//! The default decoder is unbounded so that any well-formed token decodes.
//! These values back [`DecoderConfig::bounded`](crate::DecoderConfig::bounded)
//! for callers that inspect input from untrusted sources.

/// Maximum length for a raw token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

// ============================================================================
// Decoded segment size limits
// ============================================================================

/// Maximum size for the decoded header JSON (8KB)
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for the decoded payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for the decoded signature segment (1KB)
/// RSA signatures are typically 256-512 bytes
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;
