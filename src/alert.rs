//! Error alerts shown to users after a failed action.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element of the page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// An error message shown to the user after an action failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// A short summary of what failed.
    pub message: String,
    /// What went wrong and how to fix it.
    pub details: String,
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        html! {
            div
                id="alert-container"
                hx-swap-oob="true"
                role="alert"
                class="w-full max-w-md px-4"
                style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
            {
                div class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400"
                {
                    span class="font-medium" { (self.message) }
                    " " (self.details)

                    button
                        type="button"
                        class="ms-2 underline"
                        onclick="this.closest('#alert-container').classList.add('hidden')"
                    {
                        "Dismiss"
                    }
                }
            }
        }
    }

    /// Render the alert with the status code `status_code`.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, self.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::{Html, Selector};

    use super::Alert;

    fn get_test_alert() -> Alert {
        Alert {
            message: "Could not delete transaction".to_owned(),
            details: "The transaction could not be found.".to_owned(),
        }
    }

    #[test]
    fn alert_includes_message_and_details() {
        let markup = get_test_alert().into_html().into_string();

        let fragment = Html::parse_fragment(&markup);
        let selector = Selector::parse("[role=alert]").unwrap();
        let alert = fragment.select(&selector).next().expect("want alert element");
        let text = alert.text().collect::<String>();
        assert!(text.contains("Could not delete transaction"));
        assert!(text.contains("The transaction could not be found."));
    }

    #[test]
    fn alert_is_swapped_out_of_band() {
        let markup = get_test_alert().into_html().into_string();

        let fragment = Html::parse_fragment(&markup);
        let selector = Selector::parse("#alert-container[hx-swap-oob=true]").unwrap();
        assert!(fragment.select(&selector).next().is_some());
    }

    #[test]
    fn response_uses_given_status() {
        let response = get_test_alert().into_response_with_status(StatusCode::NOT_FOUND);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
