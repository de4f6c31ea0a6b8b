//! Errors for jwtpeek
//!
//! Decoding itself never fails; these errors surface only from the typed
//! views over decoded segments and from the strict session operations.

use thiserror::Error;

/// Message shown next to input that does not decode into a token
pub const INVALID_TOKEN_HINT: &str = "Invalid JWT";

/// JWTPeek Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Segment Errors
    // ============================================================================
    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    #[error("Segment too large: {size} bytes (maximum: {max} bytes)")]
    SegmentTooLarge { size: usize, max: usize },

    #[error("Token has no {0} segment")]
    SegmentMissing(&'static str),

    #[error("Token {0} segment is not a JSON object")]
    SegmentNotDocument(&'static str),

    // ============================================================================
    // Session Errors
    // ============================================================================
    #[error("Invalid JWT")]
    TokenInvalid,

    #[error("No valid token to save")]
    NothingToSave,

    #[error("No saved token at position {index} (history has {len} entries)")]
    HistoryIndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for JWTPeek operations
pub type Result<T> = std::result::Result<T, Error>;
