//! The table listing the transactions on the overview page.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint, with_redirect_url},
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, LINK_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, amount_class, format_currency, truncate_description,
    },
    transaction::Transaction,
};

/// Renders `transactions` in the order given.
///
/// The edit links and delete buttons send the client back to `redirect_url`
/// once they are done.
pub fn transactions_table(transactions: &[Transaction], redirect_url: &str) -> Markup {
    html! {
        div class="overflow-x-auto dark:bg-gray-800"
        {
            table class="w-full text-sm text-left rtl:text-right
                text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (table_row(transaction, redirect_url))
                    }

                    @if transactions.is_empty() {
                        tr
                        {
                            td
                                colspan="5"
                                class="px-6 py-4 text-center
                                    text-gray-500 dark:text-gray-400"
                            {
                                "No transactions found for this selection."
                            }
                        }
                    }
                }
            }
        }
    }
}

fn table_row(transaction: &Transaction, redirect_url: &str) -> Markup {
    let (description, tooltip) = truncate_description(&transaction.description);
    let signed_amount = transaction.signed_amount();
    let edit_url = with_redirect_url(
        &format_endpoint(endpoints::EDIT_TRANSACTION_VIEW, transaction.id.as_str()),
        redirect_url,
    );
    let delete_url = with_redirect_url(
        &format_endpoint(endpoints::TRANSACTION, transaction.id.as_str()),
        redirect_url,
    );

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class=(TABLE_CELL_STYLE) { (transaction.display_date()) }

            td class=(TABLE_CELL_STYLE) title=[tooltip] { (description) }

            td class=(TABLE_CELL_STYLE)
            {
                span class=(CATEGORY_BADGE_STYLE) { (transaction.category.label()) }
            }

            td class={ (TABLE_CELL_STYLE) " text-right font-medium " (amount_class(signed_amount)) }
            {
                (format_currency(signed_amount))
            }

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(edit_url) class=(LINK_STYLE) { "Edit" }

                    button
                        hx-delete=(delete_url)
                        hx-confirm="Are you sure you want to delete this transaction?"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}
