//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::{
    AppState, endpoints,
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
    store::StorageAdapter,
    tracker::{
        clear_expenses_endpoint, delete_expense_endpoint, get_tracker_page,
        submit_expense_endpoint, update_draft_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: StorageAdapter + Send + 'static,
{
    Router::new()
        .route(endpoints::TRACKER_VIEW, get(get_tracker_page::<S>))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(endpoints::DRAFT_API, post(update_draft_endpoint::<S>))
        .route(
            endpoints::EXPENSES_API,
            post(submit_expense_endpoint::<S>).delete(clear_expenses_endpoint::<S>),
        )
        .route(
            endpoints::DELETE_EXPENSE,
            delete(delete_expense_endpoint::<S>),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;
    use scraper::Html;

    use crate::{
        AppState, endpoints,
        store::{MemoryStorage, WeekStore},
        test_utils::{assert_form_input_with_value, must_get_form},
    };

    use super::build_router;

    fn new_test_server() -> TestServer {
        let store = WeekStore::new(MemoryStorage::new()).unwrap();
        let state = AppState::new(store, "Etc/UTC");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn tracker_page_renders_with_starting_budget() {
        let server = new_test_server();

        let response = server.get(endpoints::TRACKER_VIEW).await;

        response.assert_status_ok();
        let text = response.text();
        assert!(text.contains("Week of"));
        assert!(text.contains("Total: $130.00"));
        assert!(text.contains("No expenses logged yet."));
    }

    #[tokio::test]
    async fn submitted_expense_appears_in_log() {
        let server = new_test_server();

        let response = server
            .post(endpoints::EXPENSES_API)
            .form(&[("expense", "50"), ("reason", "groceries")])
            .await;

        assert_eq!(response.header("hx-redirect"), endpoints::TRACKER_VIEW);

        let page = server.get(endpoints::TRACKER_VIEW).await.text();
        assert!(page.contains("$50 for groceries"));
        assert!(page.contains("Total: $80.00"));
    }

    #[tokio::test]
    async fn deleted_expense_restores_total() {
        let server = new_test_server();
        server
            .post(endpoints::EXPENSES_API)
            .form(&[("expense", "50"), ("reason", "groceries")])
            .await;

        let response = server
            .delete(&endpoints::format_endpoint(endpoints::DELETE_EXPENSE, 0))
            .await;

        assert_eq!(response.header("hx-redirect"), endpoints::TRACKER_VIEW);

        let page = server.get(endpoints::TRACKER_VIEW).await.text();
        assert!(page.contains("No expenses logged yet."));
        assert!(page.contains("Total: $130.00"));
    }

    #[tokio::test]
    async fn clearing_expenses_resets_the_week() {
        let server = new_test_server();
        server
            .post(endpoints::EXPENSES_API)
            .form(&[("expense", "50"), ("reason", "groceries")])
            .await;
        server
            .post(endpoints::EXPENSES_API)
            .form(&[("expense", "20"), ("reason", "petrol")])
            .await;

        let response = server.delete(endpoints::EXPENSES_API).await;

        assert_eq!(response.header("hx-redirect"), endpoints::TRACKER_VIEW);

        let page = server.get(endpoints::TRACKER_VIEW).await.text();
        assert!(page.contains("No expenses logged yet."));
        assert!(page.contains("Total: $130.00"));
    }

    #[tokio::test]
    async fn drafts_survive_a_page_reload() {
        let server = new_test_server();

        server
            .post(endpoints::DRAFT_API)
            .form(&[("expense", "12.50")])
            .await;
        server
            .post(endpoints::DRAFT_API)
            .form(&[("reason", "bus fare")])
            .await;

        let page = server.get(endpoints::TRACKER_VIEW).await.text();
        let html = Html::parse_document(&page);
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "expense", "text", "12.50");
        assert_form_input_with_value(&form, "reason", "text", "bus fare");
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found_page() {
        let server = new_test_server();

        let response = server.get("/not-a-page").await;

        response.assert_status_not_found();
        assert!(response.text().contains("404"));
    }
}
