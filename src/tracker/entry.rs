//! The expense log entry type and its storage codec.

use serde::{Deserialize, Serialize};

use crate::Error;

/// One committed expense record.
///
/// The amount is kept as the raw text the user typed, not the parsed number.
/// Entries are immutable once created and have no identity beyond their
/// position in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The text representation of the monetary amount.
    pub expense: String,
    /// The free-text label for the expense.
    pub reason: String,
}

/// Encode the expense log as JSON text for storage.
pub fn encode_log(log: &[Entry]) -> Result<String, Error> {
    serde_json::to_string(log).map_err(|error| Error::EncodeLog(error.to_string()))
}

/// Decode the stored JSON text back into the expense log.
pub fn decode_log(text: &str) -> Result<Vec<Entry>, Error> {
    serde_json::from_str(text).map_err(|error| Error::DecodeLog(error.to_string()))
}
