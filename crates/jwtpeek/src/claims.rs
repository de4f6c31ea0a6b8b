//! Typed views over decoded header and payload documents
//!
//! These views are read-only conveniences for presentation. They never
//! affect whether a record is considered a token: a payload whose `exp` is
//! a string still decodes, it just fails to produce a [`Claims`] view.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

/// JWT header structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: Option<String>,

    /// Token type (typically "JWT")
    #[serde(rename = "typ")]
    pub token_type: Option<String>,

    /// Key ID (for JWKS key selection)
    #[serde(rename = "kid")]
    pub key_id: Option<String>,
}

/// Audience claim, which RFC 7519 allows as a string or an array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    /// Check whether `value` is one of the audiences
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Audience::Single(aud) => aud == value,
            Audience::Multiple(auds) => auds.iter().any(|aud| aud == value),
        }
    }
}

/// Registered claims from RFC 7519
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    /// Issuer (iss)
    #[serde(rename = "iss")]
    pub issuer: Option<String>,
    /// Subject (sub)
    #[serde(rename = "sub")]
    pub subject: Option<String>,
    /// Audience (aud)
    #[serde(rename = "aud")]
    pub audience: Option<Audience>,
    /// Expiration Time (exp), seconds since Unix epoch
    #[serde(rename = "exp", default, deserialize_with = "numeric_date")]
    pub expiration: Option<i64>,
    /// Not Before (nbf)
    #[serde(rename = "nbf", default, deserialize_with = "numeric_date")]
    pub not_before: Option<i64>,
    /// Issued At (iat)
    #[serde(rename = "iat", default, deserialize_with = "numeric_date")]
    pub issued_at: Option<i64>,
    /// JWT ID (jti)
    #[serde(rename = "jti")]
    pub jwt_id: Option<String>,
}

/// Whole seconds from a JSON number
///
/// Floats are truncated toward zero and integers beyond the `i64` range
/// saturate.
pub(crate) fn whole_seconds(number: &Number) -> i64 {
    number
        .as_i64()
        .or_else(|| number.as_u64().map(|n| i64::try_from(n).unwrap_or(i64::MAX)))
        .unwrap_or_else(|| number.as_f64().map_or(0, |f| f as i64))
}

fn numeric_date<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Number>::deserialize(deserializer)?.map(|number| whole_seconds(&number)))
}

/// Deserialize a document into any typed view
pub(crate) fn from_document<T: DeserializeOwned>(document: &Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(document.clone()))
        .map_err(|e| Error::FormatInvalidJson(e.to_string()))
}
