//! Defines the endpoint for deleting a single expense from the log.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    store::{StorageAdapter, WeekStore},
    tracker::core::delete_expense,
};

/// The state needed to delete an expense.
#[derive(Debug)]
pub struct DeleteExpenseState<S: StorageAdapter> {
    pub store: Arc<Mutex<WeekStore<S>>>,
}

impl<S: StorageAdapter> Clone for DeleteExpenseState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: StorageAdapter> FromRef<AppState<S>> for DeleteExpenseState<S> {
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting the expense at `index`, restoring its amount
/// to the total. Redirects to the tracker view on success.
pub async fn delete_expense_endpoint<S>(
    Path(index): Path<usize>,
    State(state): State<DeleteExpenseState<S>>,
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

    match delete_expense(&mut store, index) {
        Ok(()) => (
            HxRedirect(endpoints::TRACKER_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error @ Error::DeleteMissingExpense(_)) => error.into_alert_response(),
        Err(error) => {
            tracing::error!("could not delete expense {index}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod delete_expense_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        endpoints,
        store::{INITIAL_TOTAL, MemoryStorage, WeekStore},
        test_utils::assert_hx_redirect,
        tracker::Entry,
    };

    use super::{DeleteExpenseState, delete_expense_endpoint};

    fn get_test_state() -> DeleteExpenseState<MemoryStorage> {
        let mut store = WeekStore::new(MemoryStorage::new()).unwrap();
        store
            .set_log(vec![Entry {
                expense: "50".to_owned(),
                reason: "groceries".to_owned(),
            }])
            .unwrap();
        store.set_total(INITIAL_TOTAL - 50.0).unwrap();

        DeleteExpenseState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    #[tokio::test]
    async fn deletes_expense_and_redirects() {
        let state = get_test_state();

        let response = delete_expense_endpoint(Path(0), State(state.clone())).await;

        assert_hx_redirect(&response, endpoints::TRACKER_VIEW);

        let store = state.store.lock().unwrap();
        assert!(store.log().is_empty());
        assert_eq!(store.total(), INITIAL_TOTAL);
    }

    #[tokio::test]
    async fn missing_index_responds_not_found() {
        let state = get_test_state();

        let response = delete_expense_endpoint(Path(7), State(state.clone())).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let store = state.store.lock().unwrap();
        assert_eq!(store.log().len(), 1);
        assert_eq!(store.total(), INITIAL_TOTAL - 50.0);
    }
}
