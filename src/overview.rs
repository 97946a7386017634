//! The overview page: the new transaction form, the month and category
//! filters, the filtered transactions and the dashboard for them.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    aggregation::{CategoryFilter, filter_by_category, filter_by_month, summarize},
    app_state::{SharedTransactions, lock_transactions},
    dashboard::dashboard_view,
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, base, dollar_input_styles,
    },
    month::{format_month_label, format_month_value, month_options, parse_month, start_of_month},
    timezone::local_today,
    transaction::{Category, new_transaction_form, transactions_table},
};

/// The state needed for the overview page.
#[derive(Debug, Clone)]
pub struct OverviewState {
    /// The transactions to show.
    pub transactions: SharedTransactions,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for OverviewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The filters selected on the overview page.
///
/// Missing or invalid values fall back to the current month and all categories.
#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    /// The month to show, e.g. "2024-01".
    pub month: Option<String>,
    /// The category to show, "all" or a category identifier.
    pub category: Option<String>,
}

/// The filters resolved from an [OverviewQuery].
#[derive(Debug, Clone, Copy, PartialEq)]
struct Selection {
    month: Date,
    category: CategoryFilter,
}

impl Selection {
    fn from_query(query: &OverviewQuery, today: Date) -> Self {
        let month = query
            .month
            .as_deref()
            .and_then(parse_month)
            .unwrap_or_else(|| start_of_month(today));
        let category = query
            .category
            .as_deref()
            .and_then(CategoryFilter::parse)
            .unwrap_or_default();

        Self { month, category }
    }

    /// The URL of the overview page with this selection.
    fn url(&self) -> String {
        let month = format_month_value(self.month);
        let query = [("month", month.as_str()), ("category", self.category.as_str())];

        match serde_urlencoded::to_string(query) {
            Ok(query) => format!("{}?{query}", endpoints::ROOT),
            Err(error) => {
                tracing::warn!("could not encode overview query: {error}");
                endpoints::ROOT.to_owned()
            }
        }
    }
}

/// Route handler for the overview page.
pub async fn get_overview_page(
    State(state): State<OverviewState>,
    Query(query): Query<OverviewQuery>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let selection = Selection::from_query(&query, today);

    let selected = {
        let transactions = lock_transactions(&state.transactions)?;
        let in_month = filter_by_month(&transactions, selection.month);
        filter_by_category(&in_month, selection.category)
    };

    let summary = summarize(&selected);
    let (dashboard, mut head_elements) = dashboard_view(&summary);
    head_elements.push(dollar_input_styles());

    let redirect_url = selection.url();

    let content = html! {
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl grid grid-cols-1 lg:grid-cols-3 gap-6"
            {
                section id="new-transaction" class={ "lg:col-span-1 " (CARD_STYLE) }
                {
                    h2 class="mb-4 text-xl font-bold" { "Add New Transaction" }

                    (new_transaction_form(today, &redirect_url))
                }

                div class="lg:col-span-2 space-y-6"
                {
                    section id="transactions" class=(CARD_STYLE)
                    {
                        div class="flex justify-between flex-wrap items-end gap-4 mb-4"
                        {
                            h2 class="text-xl font-bold" { "Transactions" }

                            (filter_form(&selection, today))
                        }

                        (transactions_table(&selected, &redirect_url))
                    }

                    (dashboard)
                }
            }
        }
    };

    Ok(base("Overview", &head_elements, &content).into_response())
}

/// The GET form that changes the month and category of the page.
fn filter_form(selection: &Selection, today: Date) -> Markup {
    let mut months = month_options(today);
    if !months.contains(&selection.month) {
        months.push(selection.month);
    }

    html! {
        form
            id="filters"
            method="get"
            action=(endpoints::ROOT)
            class="flex flex-wrap items-end gap-2"
        {
            div
            {
                label for="month" class=(FORM_LABEL_STYLE) { "Month" }

                select
                    name="month"
                    id="month"
                    onchange="this.form.submit()"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for month in &months {
                        option
                            value=(format_month_value(*month))
                            selected[*month == selection.month]
                        {
                            (format_month_label(*month))
                        }
                    }
                }
            }

            div
            {
                label for="filter-category" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    name="category"
                    id="filter-category"
                    onchange="this.form.submit()"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option
                        value=(CategoryFilter::All.as_str())
                        selected[selection.category == CategoryFilter::All]
                    {
                        "All Categories"
                    }

                    @for category in Category::ALL {
                        option
                            value=(category.as_str())
                            selected[selection.category == CategoryFilter::Only(category)]
                        {
                            (category.label())
                        }
                    }
                }
            }

            noscript
            {
                button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Apply" }
            }
        }
    }
}
