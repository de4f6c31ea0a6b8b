//! # jwtpeek - Decode and Inspect JSON Web Tokens
//!
//! **jwtpeek** turns a pasted string into a structured view of a JSON Web
//! Token and keeps an in-memory history of the tokens you chose to save.
//! It is meant for inspector tools: nothing here verifies signatures or
//! validates claims, and nothing here ever fails on bad input.
//!
//! ## Quick Start
//!
//! ```
//! use jwtpeek::{Segment, decode};
//!
//! let record = decode("eyJhbGciOiJIUzI1NiJ9.eyJleHAiOjB9.sig");
//!
//! assert!(record.is_valid());
//! assert_eq!(record.header_view().unwrap().algorithm.as_deref(), Some("HS256"));
//! assert_eq!(record.expiration(), 0);
//! assert_eq!(record.signature(), Some(&Segment::RawText("sig".into())));
//! ```
//!
//! ## Decoding
//!
//! The input is split on `.` and the first three parts are decoded as
//! header, payload and signature:
//!
//! ```text
//! "<header>.<payload>.<signature>"
//!     │ split on '.'
//!     ▼
//! Base64URL decode ──► text ──► JSON object ──► Segment::Document
//!     │ any step fails
//!     ▼
//! Segment::RawText (the part, verbatim)
//! ```
//!
//! ASCII whitespace inside a part is ignored while decoding, so tokens
//! pasted across several lines still decode. Decoded bytes that are not
//! UTF-8 are read as Latin-1.
//!
//! A record is valid when header and payload are both documents. The
//! payload's numeric `exp` claim is surfaced as [`TokenRecord::expiration`]
//! and defaults to 0, which [`TokenRecord::is_expired`] reports as expired.
//!
//! ## Sessions
//!
//! [`TokenSession`] follows an inspector page: every input change is
//! decoded, a valid token becomes the current record, the current record
//! can be saved, and saved records are listed oldest first and can be
//! loaded back or removed by position.
//!
//! ```
//! use jwtpeek::{ManualClock, TokenSession};
//!
//! let clock = ManualClock::new(1_000);
//! let mut session = TokenSession::with_clock(clock.clone());
//!
//! session.input("eyJhbGciOiJIUzI1NiJ9.eyJleHAiOjB9.sig").unwrap();
//! assert_eq!(session.save_current().unwrap().saved_at(), 1_000);
//!
//! assert!(session.input("garbage").is_err());
//! assert!(!session.can_save());
//!
//! assert!(session.remove_at(5).is_none());
//! assert!(session.remove_at(0).is_some());
//! ```
//!
//! ## Limits
//!
//! The default decoder accepts input of any size. To decode untrusted
//! input with bounded memory, use [`DecoderConfig::bounded`] (raw input
//! 64KB, header 8KB, payload 64KB, signature 1KB) or set individual limits.
//! Exceeding a limit degrades to raw text like any other decoding failure.

mod clock;
mod decoder;
mod error;
mod record;
mod segment;

// Internal modules
pub(crate) mod claims;
pub(crate) mod limits;
pub(crate) mod session;
pub(crate) mod utils;

// Public Interface
pub use claims::{Audience, Claims, TokenHeader};
pub use clock::{Clock, ManualClock, SystemClock};
pub use decoder::{Decoder, DecoderConfig, decode};
pub use error::{Error, INVALID_TOKEN_HINT, Result};
pub use record::{SavedToken, TokenRecord};
pub use segment::Segment;
pub use session::TokenSession;
