//! The form fields and form data shared by the create and edit transaction endpoints.

use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    Error,
    html::{
        FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE,
    },
    transaction::core::{
        Category, EXPENSE_CATEGORIES, INCOME_CATEGORIES, Transaction, TransactionBuilder,
        TransactionType, iso_date,
    },
};

pub struct TransactionFormDefaults<'a> {
    pub transaction_type: TransactionType,
    pub amount: Option<f64>,
    pub date: Date,
    pub description: Option<&'a str>,
    pub category: Category,
    pub autofocus_amount: bool,
}

impl TransactionFormDefaults<'_> {
    /// The defaults for a new transaction: an expense dated `today` in [Category::Other].
    pub fn new_transaction(today: Date) -> Self {
        Self {
            transaction_type: TransactionType::Expense,
            amount: None,
            date: today,
            description: None,
            category: Category::Other,
            autofocus_amount: true,
        }
    }
}

impl<'a> From<&'a Transaction> for TransactionFormDefaults<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            transaction_type: transaction.transaction_type,
            amount: Some(transaction.amount),
            date: transaction.date,
            description: Some(&transaction.description),
            category: transaction.category,
            autofocus_amount: false,
        }
    }
}

pub fn transaction_form_fields(defaults: &TransactionFormDefaults<'_>) -> Markup {
    let is_expense = matches!(defaults.transaction_type, TransactionType::Expense);
    let amount_str = defaults.amount.map(|amount| amount.to_string());
    // Amounts stored with sub-cent precision must still pass the browser's step check.
    let amount_step = match defaults.amount {
        Some(amount) if !is_whole_cents(amount) => "any",
        _ => "0.01",
    };

    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { "Transaction type" }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                div class="flex items-center gap-3"
                {
                    input
                        name="type"
                        id="transaction-type-expense"
                        type="radio"
                        value=(TransactionType::Expense.as_str())
                        checked[is_expense]
                        required
                        tabindex="0"
                        class=(FORM_RADIO_INPUT_STYLE);

                    label
                        for="transaction-type-expense"
                        class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Expense"
                    }
                }

                div class="flex items-center gap-3"
                {
                    input
                        name="type"
                        id="transaction-type-income"
                        type="radio"
                        value=(TransactionType::Income.as_str())
                        checked[!is_expense]
                        required
                        tabindex="0"
                        class=(FORM_RADIO_INPUT_STYLE);

                    label
                        for="transaction-type-income"
                        class=(FORM_RADIO_LABEL_STYLE)
                    {
                        "Income"
                    }
                }
            }
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step=(amount_step)
                    placeholder="0.00"
                    min="0"
                    required
                    value=[amount_str.as_deref()]
                    autofocus[defaults.autofocus_amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        div
        {
            label
                for="description"
                class=(FORM_LABEL_STYLE)
            {
                "Description"
            }

            input
                name="description"
                id="description"
                type="text"
                placeholder="e.g. Grocery shopping"
                required
                value=[defaults.description]
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category"
                id="category"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                (category_options("Expense", EXPENSE_CATEGORIES, is_expense, defaults.category))
                (category_options("Income", INCOME_CATEGORIES, !is_expense, defaults.category))
            }
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// An option group for `categories`.
///
/// `Other` appears in both groups, so only the group for the selected
/// transaction type may mark `selected` as selected.
fn category_options(
    label: &str,
    categories: &[Category],
    is_selected_type: bool,
    selected: Category,
) -> Markup {
    html! {
        optgroup label=(label)
        {
            @for category in categories {
                option
                    value=(category.as_str())
                    selected[is_selected_type && *category == selected]
                {
                    (category.label())
                }
            }
        }
    }
}

/// The form data for creating or editing a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// Text detailing the transaction.
    pub description: String,
    /// What the transaction was for.
    pub category: Category,
    /// The date when the transaction ocurred.
    #[serde(with = "iso_date")]
    pub date: Date,
}

impl TransactionForm {
    /// Check the submitted values and turn them into a [TransactionBuilder].
    ///
    /// The description is trimmed of surrounding whitespace.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::InvalidAmount] if the amount is negative or not finite,
    /// - [Error::EmptyDescription] if the description is blank,
    /// - [Error::CategoryMismatch] if the category does not belong to the transaction type.
    pub fn validate(self) -> Result<TransactionBuilder, Error> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        if !self.category.belongs_to(self.transaction_type) {
            return Err(Error::CategoryMismatch {
                category: self.category,
                transaction_type: self.transaction_type,
            });
        }

        Ok(
            Transaction::build(self.transaction_type, self.amount, self.date, description)
                .category(self.category),
        )
    }
}

fn is_whole_cents(amount: f64) -> bool {
    format!("{amount:.2}").parse::<f64>() == Ok(amount)
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use super::{TransactionForm, TransactionFormDefaults, transaction_form_fields};
    use crate::{
        Error,
        transaction::core::{Category, TransactionType},
    };

    fn render_fields(defaults: &TransactionFormDefaults<'_>) -> Html {
        let fields = transaction_form_fields(defaults);
        Html::parse_fragment(&fields.into_string())
    }

    fn get_test_form() -> TransactionForm {
        TransactionForm {
            transaction_type: TransactionType::Expense,
            amount: 30.0,
            description: "Lunch".to_owned(),
            category: Category::Food,
            date: date!(2024 - 01 - 10),
        }
    }

    #[test]
    fn transaction_form_fields_checks_selected_type() {
        let cases = [
            (TransactionType::Expense, "expense"),
            (TransactionType::Income, "income"),
        ];

        for (transaction_type, expected) in cases {
            let html = render_fields(&TransactionFormDefaults {
                transaction_type,
                ..TransactionFormDefaults::new_transaction(date!(2024 - 01 - 10))
            });

            let selector = Selector::parse("input[type=radio][checked]").unwrap();
            let checked: Vec<_> = html
                .select(&selector)
                .map(|input| input.value().attr("value").unwrap_or_default())
                .collect();
            assert_eq!(checked, vec![expected]);
        }
    }

    #[test]
    fn new_transaction_defaults_to_expense_in_other_dated_today() {
        let today = date!(2024 - 03 - 15);
        let html = render_fields(&TransactionFormDefaults::new_transaction(today));

        let date_selector = Selector::parse("input[name=date]").unwrap();
        let date_input = html.select(&date_selector).next().expect("want date input");
        assert_eq!(date_input.value().attr("value"), Some("2024-03-15"));

        let selected_selector = Selector::parse("option[selected]").unwrap();
        let selected: Vec<_> = html.select(&selected_selector).collect();
        assert_eq!(selected.len(), 1, "want exactly one selected category");
        assert_eq!(selected[0].value().attr("value"), Some("other"));

        let group_selector = Selector::parse("optgroup[label=Expense] option[selected]").unwrap();
        assert!(html.select(&group_selector).next().is_some());
    }

    #[test]
    fn category_select_groups_categories_by_type() {
        let html = render_fields(&TransactionFormDefaults::new_transaction(date!(
            2024 - 03 - 15
        )));

        let income_selector = Selector::parse("optgroup[label=Income] option").unwrap();
        let income: Vec<_> = html
            .select(&income_selector)
            .map(|option| option.value().attr("value").unwrap_or_default())
            .collect();
        assert_eq!(
            income,
            vec!["salary", "investment", "side-hustle", "gift", "other"]
        );

        let expense_selector = Selector::parse("optgroup[label=Expense] option").unwrap();
        assert_eq!(html.select(&expense_selector).count(), 8);
    }

    #[test]
    fn existing_transaction_prefills_fields() {
        let transaction = crate::test_utils::create_test_transaction(
            "a",
            TransactionType::Income,
            1234.5,
            date!(2024 - 02 - 29),
            Category::SideHustle,
        );
        let html = render_fields(&TransactionFormDefaults::from(&transaction));

        let amount_selector = Selector::parse("input[name=amount]").unwrap();
        let amount = html.select(&amount_selector).next().expect("want amount input");
        assert_eq!(amount.value().attr("value"), Some("1234.5"));
        assert_eq!(amount.value().attr("step"), Some("0.01"));
        assert_eq!(amount.value().attr("autofocus"), None);

        let selected_selector = Selector::parse("optgroup[label=Income] option[selected]").unwrap();
        let selected = html
            .select(&selected_selector)
            .next()
            .expect("want selected income category");
        assert_eq!(selected.value().attr("value"), Some("side-hustle"));
    }

    #[test]
    fn edit_form_keeps_sub_cent_amounts() {
        let transaction = crate::test_utils::create_test_transaction(
            "a",
            TransactionType::Expense,
            12.345,
            date!(2024 - 02 - 01),
            Category::Food,
        );
        let html = render_fields(&TransactionFormDefaults::from(&transaction));

        let amount_selector = Selector::parse("input[name=amount]").unwrap();
        let amount = html.select(&amount_selector).next().expect("want amount input");
        assert_eq!(amount.value().attr("value"), Some("12.345"));
        assert_eq!(amount.value().attr("step"), Some("any"));
    }

    #[test]
    fn deserializes_form_fields() {
        let form: TransactionForm = serde_html_form::from_str(
            "type=income&amount=12.34&description=Pay&category=side-hustle&date=2024-01-05",
        )
        .unwrap();

        assert_eq!(form.transaction_type, TransactionType::Income);
        assert_eq!(form.amount, 12.34);
        assert_eq!(form.description, "Pay");
        assert_eq!(form.category, Category::SideHustle);
        assert_eq!(form.date, date!(2024 - 01 - 05));
    }

    #[test]
    fn validate_trims_description() {
        let form = TransactionForm {
            description: "  Lunch  ".to_owned(),
            ..get_test_form()
        };

        let builder = form.validate().unwrap();

        assert_eq!(builder.description, "Lunch");
        assert_eq!(builder.category, Category::Food);
    }

    #[test]
    fn validate_accepts_zero_amount() {
        let form = TransactionForm {
            amount: 0.0,
            ..get_test_form()
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn validate_rejects_invalid_amounts() {
        for amount in [-0.01, f64::NAN, f64::INFINITY] {
            let form = TransactionForm {
                amount,
                ..get_test_form()
            };

            assert!(
                matches!(form.validate(), Err(Error::InvalidAmount(_))),
                "want {amount} to be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_blank_description() {
        let form = TransactionForm {
            description: "   ".to_owned(),
            ..get_test_form()
        };

        assert_eq!(form.validate(), Err(Error::EmptyDescription));
    }

    #[test]
    fn validate_rejects_category_of_other_type() {
        let form = TransactionForm {
            transaction_type: TransactionType::Income,
            category: Category::Food,
            ..get_test_form()
        };

        assert_eq!(
            form.validate(),
            Err(Error::CategoryMismatch {
                category: Category::Food,
                transaction_type: TransactionType::Income,
            })
        );
    }
}
