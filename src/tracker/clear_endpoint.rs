//! Defines the endpoint for clearing the whole expense log.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    store::{StorageAdapter, WeekStore},
    tracker::core::clear_expenses,
};

/// The state needed to clear the expense log.
#[derive(Debug)]
pub struct ClearExpensesState<S: StorageAdapter> {
    pub store: Arc<Mutex<WeekStore<S>>>,
}

impl<S: StorageAdapter> Clone for ClearExpensesState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: StorageAdapter> FromRef<AppState<S>> for ClearExpensesState<S> {
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that empties the log and hard-resets the total to the
/// starting budget, then redirects to the tracker view.
pub async fn clear_expenses_endpoint<S>(State(state): State<ClearExpensesState<S>>) -> Response
where
    S: StorageAdapter + Send + 'static,
{
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    if let Err(error) = clear_expenses(&mut store) {
        tracing::error!("could not clear the expense log: {error}");
        return error.into_alert_response();
    }

    (
        HxRedirect(endpoints::TRACKER_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
