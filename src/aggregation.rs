//! Filtering and summarising a transaction collection.
//!
//! Everything here is a pure function of its inputs, the views call these on
//! the in-memory collection every time a page is rendered.

use std::{collections::HashMap, fmt};

use time::Date;

use crate::transaction::{Category, Transaction, TransactionType};

/// Selects which categories to keep in [filter_by_category].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep every transaction.
    #[default]
    All,
    /// Keep transactions with exactly this category.
    Only(Category),
}

impl CategoryFilter {
    /// The value used for this filter in query strings, "all" or a category identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Parse a filter from a query string value.
    ///
    /// Returns `None` if `value` is neither "all" nor a category identifier.
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            Some(CategoryFilter::All)
        } else {
            Category::from_identifier(value).map(CategoryFilter::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Totals computed over a transaction collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    /// The sum of the amounts of all income transactions.
    pub total_income: f64,
    /// The sum of the amounts of all expense transactions.
    pub total_expense: f64,
    /// `total_income - total_expense`.
    pub balance: f64,
    /// The sum of the amounts per category, regardless of transaction type.
    ///
    /// Only categories that appear in the input are present. Since
    /// [Category::Other] is shared between income and expenses, its total
    /// pools both.
    pub category_totals: HashMap<Category, f64>,
}

impl Summary {
    /// The categories with a positive total, largest first.
    ///
    /// Categories with equal totals are ordered by label.
    pub fn spending_breakdown(&self) -> Vec<(Category, f64)> {
        let mut breakdown: Vec<_> = self
            .category_totals
            .iter()
            .filter(|(_, total)| **total > 0.0)
            .map(|(category, total)| (*category, *total))
            .collect();

        breakdown.sort_by(|(a_category, a_total), (b_category, b_total)| {
            b_total
                .total_cmp(a_total)
                .then_with(|| a_category.label().cmp(b_category.label()))
        });

        breakdown
    }
}

/// Keep the transactions that happened in the same calendar month and year as `reference_date`.
pub fn filter_by_month(transactions: &[Transaction], reference_date: Date) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| {
            transaction.date.year() == reference_date.year()
                && transaction.date.month() == reference_date.month()
        })
        .cloned()
        .collect()
}

/// Keep the transactions matching `filter`.
pub fn filter_by_category(transactions: &[Transaction], filter: CategoryFilter) -> Vec<Transaction> {
    match filter {
        CategoryFilter::All => transactions.to_vec(),
        CategoryFilter::Only(category) => transactions
            .iter()
            .filter(|transaction| transaction.category == category)
            .cloned()
            .collect(),
    }
}

/// Compute the income, expense, balance and per-category totals of `transactions`.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => summary.total_income += transaction.amount,
            TransactionType::Expense => summary.total_expense += transaction.amount,
        }

        *summary
            .category_totals
            .entry(transaction.category)
            .or_insert(0.0) += transaction.amount;
    }

    summary.balance = summary.total_income - summary.total_expense;

    summary
}
