//! Dashboard module
//!
//! Shows the totals for the selected transactions: income, expenses and the
//! balance as cards, and the spending per category as a doughnut chart.

mod cards;
mod charts;

use maud::{Markup, html};

use crate::{aggregation::Summary, html::HeadElement};

use cards::summary_cards_view;
use charts::{DashboardChart, charts_script, charts_view, spending_chart};

/// Where the ECharts library is served from.
const ECHARTS_SCRIPT: &str = "/static/echarts.6.0.0.min.js";

/// Renders the dashboard for `summary`.
///
/// Returns the dashboard markup and the head elements needed to draw its chart.
pub fn dashboard_view(summary: &Summary) -> (Markup, Vec<HeadElement>) {
    let breakdown = summary.spending_breakdown();

    let charts = if breakdown.is_empty() {
        Vec::new()
    } else {
        vec![DashboardChart {
            id: "spending-by-category-chart",
            options: spending_chart(&breakdown).to_string(),
        }]
    };

    let markup = html! {
        section id="dashboard" class="w-full space-y-4"
        {
            (summary_cards_view(summary))

            @if charts.is_empty() {
                div class="rounded p-8 text-center text-gray-500 dark:text-gray-400"
                {
                    "No spending to show for this selection."
                }
            } @else {
                (charts_view(&charts))
            }
        }
    };

    let head_elements = if charts.is_empty() {
        Vec::new()
    } else {
        vec![
            HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
            charts_script(&charts),
        ]
    };

    (markup, head_elements)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use scraper::{Html, Selector};

    use crate::{
        aggregation::Summary, dashboard::dashboard_view, html::HeadElement,
        transaction::Category,
    };

    #[test]
    fn shows_empty_state_without_spending() {
        let summary = Summary {
            total_income: 100.0,
            balance: 100.0,
            ..Default::default()
        };

        let (markup, head_elements) = dashboard_view(&summary);

        let html = Html::parse_fragment(&markup.into_string());
        let text: String = html.root_element().text().collect();
        assert!(text.contains("No spending to show for this selection."));
        assert!(head_elements.is_empty());
    }

    #[test]
    fn includes_chart_for_spending() {
        let summary = Summary {
            total_expense: 30.0,
            balance: -30.0,
            category_totals: HashMap::from([(Category::Food, 30.0)]),
            ..Default::default()
        };

        let (markup, head_elements) = dashboard_view(&summary);

        let html = Html::parse_fragment(&markup.into_string());
        let chart = Selector::parse("#spending-by-category-chart").unwrap();
        assert!(html.select(&chart).next().is_some(), "want chart container");
        assert!(matches!(
            head_elements.as_slice(),
            [HeadElement::ScriptLink(_), HeadElement::ScriptSource(_)]
        ));
    }
}
