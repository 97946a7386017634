//! Cards showing the income, expense and balance totals.

use maud::{Markup, html};

use crate::{
    aggregation::Summary,
    html::{CARD_STYLE, amount_class, format_currency},
};

pub(super) fn summary_cards_view(summary: &Summary) -> Markup {
    html! {
        div class="grid grid-cols-1 sm:grid-cols-3 gap-4"
        {
            (summary_card(
                "total-income",
                "Total Income",
                summary.total_income,
                "text-green-700 dark:text-green-300",
            ))
            (summary_card(
                "total-expense",
                "Total Expenses",
                summary.total_expense,
                "text-red-700 dark:text-red-300",
            ))
            (summary_card(
                "balance",
                "Balance",
                summary.balance,
                amount_class(summary.balance),
            ))
        }
    }
}

fn summary_card(id: &str, title: &str, amount: f64, amount_style: &str) -> Markup {
    html! {
        div id=(id) class=(CARD_STYLE)
        {
            h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (title) }

            p class={ "mt-1 text-2xl font-bold " (amount_style) }
            {
                (format_currency(amount))
            }
        }
    }
}
