//! Persistence for the tracker's four keyed values: the storage port, its
//! adapters, and the state store that owns the in-memory copies.

mod adapter;
mod state_store;

pub use adapter::{MemoryStorage, SqliteStorage, StorageAdapter, create_storage_table};
pub use state_store::{
    INITIAL_TOTAL, KEY_DRAFT_EXPENSE, KEY_DRAFT_REASON, KEY_LOG, KEY_TOTAL, WeekStore,
};
