//! Decoded token records

use crate::claims::{self, Claims, TokenHeader};
use crate::error::{Error, INVALID_TOKEN_HINT, Result};
use crate::segment::Segment;
use serde_json::Value;

/// The decoded form of one raw input string
///
/// A record is built once by the decoder and never changes afterwards.
/// Decoding the same string twice yields equal records. Structural
/// validity only means the header and payload are JSON objects; nothing
/// about the signature is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    original: String,
    segments: Vec<String>,
    header: Option<Segment>,
    payload: Option<Segment>,
    signature: Option<Segment>,
    is_valid: bool,
    expiration: i64,
}

impl TokenRecord {
    pub(crate) fn new(
        original: String,
        segments: Vec<String>,
        header: Option<Segment>,
        payload: Option<Segment>,
        signature: Option<Segment>,
    ) -> Self {
        let is_valid = matches!(
            (&header, &payload),
            (Some(Segment::Document(_)), Some(Segment::Document(_)))
        );
        let expiration = payload
            .as_ref()
            .and_then(Segment::as_document)
            .and_then(|document| document.get("exp"))
            .and_then(numeric_seconds)
            .unwrap_or(0);

        Self {
            original,
            segments,
            header,
            payload,
            signature,
            is_valid,
            expiration,
        }
    }

    /// The input string, verbatim
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The input split on `.`, regardless of how many parts there are
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Decoded first segment, `None` if absent
    pub fn header(&self) -> Option<&Segment> {
        self.header.as_ref()
    }

    /// Decoded second segment, `None` if absent
    pub fn payload(&self) -> Option<&Segment> {
        self.payload.as_ref()
    }

    /// Decoded third segment, `None` if absent
    pub fn signature(&self) -> Option<&Segment> {
        self.signature.as_ref()
    }

    /// Whether both header and payload decoded to JSON objects
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The `exp` claim in seconds, or 0 when there is none
    pub fn expiration(&self) -> i64 {
        self.expiration
    }

    /// Whether the token expired before `now_millis`
    ///
    /// A record without an `exp` claim reports 0 and is therefore always
    /// expired for any positive `now_millis`.
    pub fn is_expired(&self, now_millis: u64) -> bool {
        i128::from(self.expiration) * 1000 < i128::from(now_millis)
    }

    /// Hint to show next to the input when the record is not a token
    pub fn invalid_hint(&self) -> Option<&'static str> {
        (!self.is_valid).then_some(INVALID_TOKEN_HINT)
    }

    /// Pretty-printed header JSON
    pub fn header_json(&self) -> Option<String> {
        self.header.as_ref().and_then(Segment::to_pretty_json)
    }

    /// Pretty-printed payload JSON
    pub fn payload_json(&self) -> Option<String> {
        self.payload.as_ref().and_then(Segment::to_pretty_json)
    }

    /// Payload claims as `(name, display value)` rows
    ///
    /// Rows are ordered by claim name. String values are shown without
    /// quotes, everything else as compact JSON. Empty when the payload is
    /// not a document.
    pub fn payload_entries(&self) -> Vec<(String, String)> {
        let Some(document) = self.payload.as_ref().and_then(Segment::as_document) else {
            return Vec::new();
        };

        document
            .iter()
            .map(|(key, value)| {
                let display = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), display)
            })
            .collect()
    }

    /// Typed view of the header
    pub fn header_view(&self) -> Result<TokenHeader> {
        claims::from_document(document_of(self.header.as_ref(), "header")?)
    }

    /// Typed view of the registered payload claims
    pub fn claims(&self) -> Result<Claims> {
        self.claims_as()
    }

    /// Deserialize the payload into a caller-defined claims type
    pub fn claims_as<C: serde::de::DeserializeOwned>(&self) -> Result<C> {
        claims::from_document(document_of(self.payload.as_ref(), "payload")?)
    }

    /// Borrow the record if it is a token, otherwise fail with [`Error::TokenInvalid`]
    pub fn ensure_valid(&self) -> Result<&Self> {
        if self.is_valid {
            Ok(self)
        } else {
            Err(Error::TokenInvalid)
        }
    }
}

/// A record committed to a session's history
#[derive(Debug, Clone, PartialEq)]
pub struct SavedToken {
    record: TokenRecord,
    saved_at: u64,
}

impl SavedToken {
    pub(crate) fn new(record: TokenRecord, saved_at: u64) -> Self {
        Self { record, saved_at }
    }

    /// The saved record
    pub fn record(&self) -> &TokenRecord {
        &self.record
    }

    /// Unwrap the saved record
    pub fn into_record(self) -> TokenRecord {
        self.record
    }

    /// Save time in milliseconds since the Unix epoch
    pub fn saved_at(&self) -> u64 {
        self.saved_at
    }

    /// See [`TokenRecord::is_expired`]
    pub fn is_expired(&self, now_millis: u64) -> bool {
        self.record.is_expired(now_millis)
    }
}

fn document_of<'a>(
    segment: Option<&'a Segment>,
    name: &'static str,
) -> Result<&'a serde_json::Map<String, Value>> {
    segment
        .ok_or(Error::SegmentMissing(name))?
        .as_document()
        .ok_or(Error::SegmentNotDocument(name))
}

/// `exp` as whole seconds, if it is a number
fn numeric_seconds(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => Some(claims::whole_seconds(number)),
        _ => None,
    }
}
