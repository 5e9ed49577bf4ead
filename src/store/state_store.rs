//! The state store that owns the tracker's four persisted values.

use crate::{
    Error,
    store::adapter::StorageAdapter,
    tracker::{Entry, decode_log, encode_log},
};

/// The budget every week starts from, in dollars.
pub const INITIAL_TOTAL: f64 = 130.0;

/// The storage key for the expense draft field.
pub const KEY_DRAFT_EXPENSE: &str = "expense";
/// The storage key for the reason draft field.
pub const KEY_DRAFT_REASON: &str = "reason";
/// The storage key for the expense log.
pub const KEY_LOG: &str = "log";
/// The storage key for the running total.
pub const KEY_TOTAL: &str = "total";

/// Owns the four persisted values: the two draft fields, the expense log,
/// and the running total.
///
/// Constructed once at application start with defaults loaded from the
/// injected [StorageAdapter]. Reads are served from the in-memory copy;
/// every set writes through to storage immediately, with no batching.
#[derive(Debug)]
pub struct WeekStore<S: StorageAdapter> {
    storage: S,
    draft_expense: String,
    draft_reason: String,
    log: Vec<Entry>,
    total: f64,
}

impl<S: StorageAdapter> WeekStore<S> {
    /// Create a [WeekStore], loading each field from `storage`.
    ///
    /// Absent keys take their defaults: empty drafts, an empty log, and a
    /// total of [INITIAL_TOTAL]. A log or total that fails to decode also
    /// falls back to its default rather than refusing to start.
    ///
    /// # Errors
    /// Returns an error if `storage` cannot be read.
    pub fn new(storage: S) -> Result<Self, Error> {
        let draft_expense = storage.read(KEY_DRAFT_EXPENSE)?.unwrap_or_default();
        let draft_reason = storage.read(KEY_DRAFT_REASON)?.unwrap_or_default();

        let log = match storage.read(KEY_LOG)? {
            Some(text) => decode_log(&text).unwrap_or_else(|error| {
                tracing::warn!("starting with an empty expense log: {error}");
                Vec::new()
            }),
            None => Vec::new(),
        };

        let total = storage
            .read(KEY_TOTAL)?
            .and_then(|text| text.parse().ok())
            .unwrap_or(INITIAL_TOTAL);

        Ok(Self {
            storage,
            draft_expense,
            draft_reason,
            log,
            total,
        })
    }

    /// The current text of the expense draft field.
    pub fn draft_expense(&self) -> &str {
        &self.draft_expense
    }

    /// Set the expense draft field, writing it through to storage.
    pub fn set_draft_expense(&mut self, value: &str) -> Result<(), Error> {
        self.draft_expense = value.to_owned();
        self.storage.write(KEY_DRAFT_EXPENSE, value)
    }

    /// The current text of the reason draft field.
    pub fn draft_reason(&self) -> &str {
        &self.draft_reason
    }

    /// Set the reason draft field, writing it through to storage.
    pub fn set_draft_reason(&mut self, value: &str) -> Result<(), Error> {
        self.draft_reason = value.to_owned();
        self.storage.write(KEY_DRAFT_REASON, value)
    }

    /// The expense log in insertion order.
    pub fn log(&self) -> &[Entry] {
        &self.log
    }

    /// Replace the expense log, writing the encoded log through to storage.
    pub fn set_log(&mut self, log: Vec<Entry>) -> Result<(), Error> {
        let text = encode_log(&log)?;
        self.log = log;
        self.storage.write(KEY_LOG, &text)
    }

    /// The running total for the week, in dollars.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Set the running total, writing it through to storage.
    pub fn set_total(&mut self, total: f64) -> Result<(), Error> {
        self.total = total;
        self.storage.write(KEY_TOTAL, &total.to_string())
    }

    /// Consume the store, returning the underlying storage adapter.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
