//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::store::{StorageAdapter, WeekStore};

/// The state of the web server.
///
/// The week store sits behind a mutex so that each user action is fully
/// processed before the next begins; there is exactly one logical writer.
#[derive(Debug)]
pub struct AppState<S: StorageAdapter> {
    /// The store that owns the tracker's four persisted values.
    pub store: Arc<Mutex<WeekStore<S>>>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<S: StorageAdapter> AppState<S> {
    /// Create a new [AppState] around `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland".
    pub fn new(store: WeekStore<S>, local_timezone: &str) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            local_timezone: local_timezone.to_owned(),
        }
    }
}

// Manual impl because the derive would require `S: Clone`.
impl<S: StorageAdapter> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            local_timezone: self.local_timezone.clone(),
        }
    }
}
