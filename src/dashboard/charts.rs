//! Chart generation and rendering for the dashboard.
//!
//! The spending chart is a doughnut of the category totals. It is generated
//! as JSON configuration for the ECharts library and rendered with a HTML
//! container and JavaScript initialization code.

use charming::{
    Chart,
    component::{Legend, Title},
    element::{Color, JsFunction, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::{html::HeadElement, transaction::Category};

/// The colours of the doughnut segments, used in order of the breakdown.
const SEGMENT_COLORS: [&str; 8] = [
    "#38bdf8", "#f472b6", "#fb923c", "#4ade80", "#a78bfa", "#facc15", "#f87171", "#94a3b8",
];

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            @for chart in charts {
                div
                    id=(chart.id)
                    class="min-h-[380px] rounded dark:bg-gray-100"
                {}
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// A doughnut chart with one segment per entry of `breakdown`.
pub(super) fn spending_chart(breakdown: &[(Category, f64)]) -> Chart {
    let data: Vec<(f64, &str)> = breakdown
        .iter()
        .map(|(category, total)| (*total, category.label()))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by Category").left("center"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().bottom("0%").left("center"))
        .color(SEGMENT_COLORS.into_iter().map(Color::from).collect())
        .series(
            Pie::new()
                .name("Spending")
                .radius(vec!["40%", "70%"])
                .data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
