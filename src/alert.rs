//! Alert fragments for displaying error messages to users.
//!
//! Alerts are rendered into the fixed `#alert-container` element in the base
//! layout via `hx-target-error` on the element that issued the request.

use maud::{Markup, html};

const ERROR_ALERT_STYLE: &str = "flex items-center gap-3 p-4 mb-4 rounded-lg \
    text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400";

/// A dismissable message shown in the page's alert container.
pub struct Alert {
    message: String,
    details: String,
}

impl Alert {
    /// Create an alert reporting a failed action.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    pub fn into_html(self) -> Markup {
        html!(
            div class=(ERROR_ALERT_STYLE) role="alert"
            {
                div
                {
                    span class="font-medium" { (self.message) }

                    @if !self.details.is_empty()
                    {
                        p class="text-sm" { (self.details) }
                    }
                }

                button
                    type="button"
                    class="ms-auto bg-transparent border-none cursor-pointer"
                    aria-label="Close"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "✕"
                }
            }
        )
    }
}
