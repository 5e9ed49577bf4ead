//! The tracker page, the app's only view.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE,
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, format_currency,
    },
    store::{StorageAdapter, WeekStore},
    timezone::get_local_offset,
    tracker::Entry,
    week::week_label,
};

/// The state needed for the tracker page.
#[derive(Debug)]
pub struct TrackerPageState<S: StorageAdapter> {
    pub store: Arc<Mutex<WeekStore<S>>>,
    pub local_timezone: String,
}

impl<S: StorageAdapter> Clone for TrackerPageState<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            local_timezone: self.local_timezone.clone(),
        }
    }
}

impl<S: StorageAdapter> FromRef<AppState<S>> for TrackerPageState<S> {
    fn from_ref(state: &AppState<S>) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the tracker page: the week header, the entry form, and the log.
pub async fn get_tracker_page<S>(State(state): State<TrackerPageState<S>>) -> Result<Response, Error>
where
    S: StorageAdapter + Send + 'static,
{
    let offset = get_local_offset(&state.local_timezone)
        .ok_or_else(|| Error::InvalidTimezone(state.local_timezone.clone()))?;
    let today = OffsetDateTime::now_utc().to_offset(offset).date();
    let label = week_label(today);

    let store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    Ok(tracker_view(
        &label,
        store.total(),
        store.draft_expense(),
        store.draft_reason(),
        store.log(),
    )
    .into_response())
}

fn tracker_view(
    week_label: &str,
    total: f64,
    draft_expense: &str,
    draft_reason: &str,
    log: &[Entry],
) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            header class=(CARD_STYLE)
            {
                h1 class="flex justify-center" { "Week of " (week_label) }
                h2 class="flex justify-center text-2xl" { "Total: " (format_currency(total)) }
            }

            section class=(CARD_STYLE)
            {
                p class="pb-4 text-center" { "Enter Expense and Reason:" }

                form
                    hx-post=(endpoints::EXPENSES_API)
                    hx-target-error="#alert-container"
                    class="flex flex-col gap-4"
                {
                    div
                    {
                        label for="expense" class=(FORM_LABEL_STYLE) { "Expense" }

                        input
                            id="expense"
                            type="text"
                            name="expense"
                            placeholder="50"
                            required
                            value=(draft_expense)
                            hx-post=(endpoints::DRAFT_API)
                            hx-trigger="change"
                            hx-swap="none"
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    div
                    {
                        label for="reason" class=(FORM_LABEL_STYLE) { "Reason" }

                        input
                            id="reason"
                            type="text"
                            name="reason"
                            placeholder="groceries"
                            required
                            value=(draft_reason)
                            hx-post=(endpoints::DRAFT_API)
                            hx-trigger="change"
                            hx-swap="none"
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Submit" }
                }
            }

            section class=(CARD_STYLE)
            {
                h2 class="flex justify-center" { "Log for Week " (week_label) }

                ul class="flex flex-col items-center py-2"
                {
                    @for (index, entry) in log.iter().enumerate()
                    {
                        li class="flex flex-row items-center justify-center gap-2"
                        {
                            "$" (entry.expense) " for " (entry.reason)

                            button
                                type="button"
                                hx-delete=(endpoints::format_endpoint(endpoints::DELETE_EXPENSE, index))
                                hx-target-error="#alert-container"
                                class=(BUTTON_DELETE_STYLE)
                            {
                                "x"
                            }
                        }
                    }

                    @if log.is_empty()
                    {
                        li class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            "No expenses logged yet."
                        }
                    }
                }

                button
                    type="button"
                    hx-delete=(endpoints::EXPENSES_API)
                    hx-target-error="#alert-container"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Clear All"
                }
            }
        }
    );

    base("Tracker", &content)
}
