//! Defines the endpoint for submitting the entry form.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    store::{StorageAdapter, WeekStore},
    tracker::core::{SubmitOutcome, submit_expense},
};

/// The state needed to submit an expense.
#[derive(Debug)]
pub struct SubmitExpenseState<S: StorageAdapter> {
    pub store: Arc<Mutex<WeekStore<S>>>,
}

impl<S: StorageAdapter> Clone for SubmitExpenseState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: StorageAdapter> FromRef<AppState<S>> for SubmitExpenseState<S> {
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The form data for submitting an expense.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The text representation of the amount spent.
    pub expense: String,
    /// What the money was spent on.
    pub reason: String,
}

/// A route handler for submitting an expense, redirects to the tracker view.
///
/// The posted values are routed into the drafts first, the same as the final
/// input-change events, and the submission then reads from the store. A
/// malformed amount records nothing but still clears the drafts; the
/// redirect is issued either way and no error is shown.
pub async fn submit_expense_endpoint<S>(
    State(state): State<SubmitExpenseState<S>>,
    Form(form): Form<ExpenseForm>,
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

    let result = store
        .set_draft_expense(&form.expense)
        .and_then(|()| store.set_draft_reason(&form.reason))
        .and_then(|()| submit_expense(&mut store));

    match result {
        Ok(SubmitOutcome::Recorded) => {}
        Ok(SubmitOutcome::InvalidAmount) => {
            tracing::debug!("discarded entry with unparseable amount {:?}", form.expense);
        }
        Err(error) => {
            tracing::error!("could not submit expense with {form:?}: {error}");
            return error.into_alert_response();
        }
    }

    (
        HxRedirect(endpoints::TRACKER_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
