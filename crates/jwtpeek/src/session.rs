//! Token inspection session
//!
//! A session tracks the record currently on display and an in-memory
//! history of saved records. History is kept sorted by save time, oldest
//! first; records saved at the same millisecond keep their save order.
//! All positions passed to the session refer to that sorted order.

use crate::clock::{Clock, SystemClock};
use crate::decoder::Decoder;
use crate::error::{Error, Result};
use crate::record::{SavedToken, TokenRecord};

/// Decodes input, tracks the current token and keeps a history of saved tokens
///
/// ```
/// use jwtpeek::TokenSession;
///
/// let mut session = TokenSession::new();
/// let token = "eyJhbGciOiJIUzI1NiJ9.eyJleHAiOjB9.sig";
///
/// assert!(session.input(token).is_ok());
/// session.save_current().unwrap();
///
/// assert_eq!(session.history().len(), 1);
/// assert_eq!(session.history()[0].record().original(), token);
/// assert!(session.current().is_none());
/// ```
#[derive(Debug)]
pub struct TokenSession<C: Clock = SystemClock> {
    decoder: Decoder,
    clock: C,
    current: Option<TokenRecord>,
    history: Vec<SavedToken>,
}

impl TokenSession<SystemClock> {
    /// Create a session with default limits and the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TokenSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TokenSession<C> {
    /// Create a session with default limits and a custom clock
    pub fn with_clock(clock: C) -> Self {
        Self::with_decoder(Decoder::new(), clock)
    }

    /// Create a session with a configured decoder and a custom clock
    pub fn with_decoder(decoder: Decoder, clock: C) -> Self {
        Self {
            decoder,
            clock,
            current: None,
            history: Vec::new(),
        }
    }

    /// Decode a raw string without touching session state
    pub fn decode(&self, raw: &str) -> TokenRecord {
        self.decoder.decode(raw)
    }

    /// Current time according to the session clock
    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Whether `record` has expired at the session clock's current time
    pub fn is_expired(&self, record: &TokenRecord) -> bool {
        record.is_expired(self.now_millis())
    }

    // ============================================================================
    // Current record
    // ============================================================================

    /// Decode new input and make it the current record
    ///
    /// Invalid input clears the current record and fails with
    /// [`Error::TokenInvalid`], so nothing can be saved until the input
    /// is a token again.
    pub fn input(&mut self, raw: &str) -> Result<&TokenRecord> {
        let record = self.decoder.decode(raw);
        if !record.is_valid() {
            self.current = None;
            return Err(Error::TokenInvalid);
        }
        Ok(&*self.current.insert(record))
    }

    /// The record on display, if the last input was a token
    pub fn current(&self) -> Option<&TokenRecord> {
        self.current.as_ref()
    }

    /// Whether there is a current record to save
    pub fn can_save(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the current record
    pub fn clear_current(&mut self) {
        self.current = None;
    }

    /// Commit the current record to history and clear it
    pub fn save_current(&mut self) -> Result<&SavedToken> {
        let record = self.current.take().ok_or(Error::NothingToSave)?;
        Ok(self.commit(record))
    }

    /// Re-decode a saved record and make it current
    pub fn load(&mut self, index: usize) -> Result<&TokenRecord> {
        let original = self
            .history
            .get(index)
            .ok_or(Error::HistoryIndexOutOfRange {
                index,
                len: self.history.len(),
            })?
            .record()
            .original()
            .to_string();

        tracing::debug!(index, "loading saved token");
        self.input(&original)
    }

    // ============================================================================
    // History
    // ============================================================================

    /// Save a record to history, stamped with the current time
    ///
    /// Any record is accepted. Callers are expected to only commit valid
    /// records; [`TokenSession::try_commit`] enforces that.
    pub fn commit(&mut self, record: TokenRecord) -> &SavedToken {
        let saved_at = self.clock.now_millis();
        let index = self
            .history
            .partition_point(|saved| saved.saved_at() <= saved_at);

        if !record.is_valid() {
            tracing::warn!(index, "committing invalid token");
        }
        tracing::debug!(index, saved_at, "token saved");

        self.history.insert(index, SavedToken::new(record, saved_at));
        &self.history[index]
    }

    /// Save a record to history, rejecting records that are not tokens
    pub fn try_commit(&mut self, record: TokenRecord) -> Result<&SavedToken> {
        record.ensure_valid()?;
        Ok(self.commit(record))
    }

    /// Saved records, oldest first
    pub fn history(&self) -> &[SavedToken] {
        &self.history
    }

    /// Remove the saved record at `index`
    ///
    /// Out of range indices leave history unchanged and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<SavedToken> {
        if index >= self.history.len() {
            tracing::debug!(index, len = self.history.len(), "remove ignored, no such entry");
            return None;
        }

        tracing::debug!(index, "token removed");
        Some(self.history.remove(index))
    }

    /// Number of saved records
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been saved
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Remove every saved record
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
