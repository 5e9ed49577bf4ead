//! Defines the endpoint for persisting the draft fields as the user types.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    store::{StorageAdapter, WeekStore},
};

/// The state needed to update the draft fields.
#[derive(Debug)]
pub struct DraftState<S: StorageAdapter> {
    pub store: Arc<Mutex<WeekStore<S>>>,
}

impl<S: StorageAdapter> Clone for DraftState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: StorageAdapter> FromRef<AppState<S>> for DraftState<S> {
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The form data for a draft update.
///
/// Each input posts only itself when it changes, so either field may be
/// absent. Fields with any other name are ignored.
#[derive(Debug, Deserialize)]
pub struct DraftForm {
    pub expense: Option<String>,
    pub reason: Option<String>,
}

/// A route handler that persists the changed draft field, with no validation.
pub async fn update_draft_endpoint<S>(
    State(state): State<DraftState<S>>,
    Form(form): Form<DraftForm>,
) -> Response
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

    if let Some(value) = &form.expense {
        if let Err(error) = store.set_draft_expense(value) {
            tracing::error!("could not persist the expense draft: {error}");
            return error.into_alert_response();
        }
    }

    if let Some(value) = &form.reason {
        if let Err(error) = store.set_draft_reason(value) {
            tracing::error!("could not persist the reason draft: {error}");
            return error.into_alert_response();
        }
    }

    StatusCode::NO_CONTENT.into_response()
}
