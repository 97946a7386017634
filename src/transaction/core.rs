//! Defines the core data models for transactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use uuid::Uuid;

time::serde::format_description!(pub(crate) iso_date, Date, "[year]-[month]-[day]");

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day] [month repr:short] [year]");

// ============================================================================
// MODELS
// ============================================================================

/// The opaque, unique identifier of a [Transaction].
///
/// New IDs are random UUIDs, but any string read from storage is accepted
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a fresh, random ID.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    Expense,
}

impl TransactionType {
    /// The value used for this type in forms and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The categories a transaction of this type may use.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            TransactionType::Income => INCOME_CATEGORIES,
            TransactionType::Expense => EXPENSE_CATEGORIES,
        }
    }
}

/// A fixed label classifying what a transaction was for.
///
/// Income and expense transactions draw from different sets of categories,
/// see [INCOME_CATEGORIES] and [EXPENSE_CATEGORIES]. Both sets contain
/// [Category::Other].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Income from employment.
    Salary,
    /// Income from dividends, interest or sales of assets.
    Investment,
    /// Income from work outside of employment.
    SideHustle,
    /// Money received as a gift.
    Gift,
    /// Groceries and eating out.
    Food,
    /// Fuel, fares and vehicle costs.
    Transportation,
    /// Rent, mortgage and home costs.
    Housing,
    /// Power, water, internet and phone bills.
    Utilities,
    /// Hobbies, events and subscriptions.
    Entertainment,
    /// Medical and fitness costs.
    Health,
    /// Courses, books and fees.
    Education,
    /// Anything else, valid for both income and expenses.
    Other,
}

/// The categories available to income transactions.
pub const INCOME_CATEGORIES: &[Category] = &[
    Category::Salary,
    Category::Investment,
    Category::SideHustle,
    Category::Gift,
    Category::Other,
];

/// The categories available to expense transactions.
pub const EXPENSE_CATEGORIES: &[Category] = &[
    Category::Food,
    Category::Transportation,
    Category::Housing,
    Category::Utilities,
    Category::Entertainment,
    Category::Health,
    Category::Education,
    Category::Other,
];

impl Category {
    /// Every category, income categories first.
    pub const ALL: [Category; 12] = [
        Category::Salary,
        Category::Investment,
        Category::SideHustle,
        Category::Gift,
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Utilities,
        Category::Entertainment,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    /// The identifier used for this category in forms and storage, e.g. "side-hustle".
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Investment => "investment",
            Category::SideHustle => "side-hustle",
            Category::Gift => "gift",
            Category::Food => "food",
            Category::Transportation => "transportation",
            Category::Housing => "housing",
            Category::Utilities => "utilities",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Education => "education",
            Category::Other => "other",
        }
    }

    /// The human readable name of the category, e.g. "Side hustle".
    pub fn label(&self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Investment => "Investment",
            Category::SideHustle => "Side hustle",
            Category::Gift => "Gift",
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    /// Parse a category from its identifier, e.g. "side-hustle".
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == identifier)
    }

    /// Whether a transaction of `transaction_type` may use this category.
    pub fn belongs_to(&self, transaction_type: TransactionType) -> bool {
        transaction_type.categories().contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// The amount is always non-negative, whether it adds to or subtracts from
/// the balance is decided by `transaction_type`.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// What the transaction was for.
    pub category: Category,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        transaction_type: TransactionType,
        amount: f64,
        date: Date,
        description: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            transaction_type,
            amount,
            date,
            description: description.to_owned(),
            category: Category::Other,
        }
    }

    /// The amount with the sign implied by the transaction type, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// The date formatted for display, e.g. "05 Jan 2024".
    pub fn display_date(&self) -> String {
        format_display_date(self.date)
    }
}

/// Format `date` for display, e.g. "05 Jan 2024".
pub fn format_display_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// A builder for creating [Transaction] instances.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// use crate::transaction::{Category, Transaction, TransactionType};
///
/// let transaction = Transaction::build(
///         TransactionType::Expense,
///         45.99,
///         date!(2025 - 01 - 15),
///         "Coffee",
///     )
///     .category(Category::Food)
///     .finalize();
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether the money was earned or spent.
    pub transaction_type: TransactionType,

    /// The magnitude of the transaction, never negative.
    pub amount: f64,

    /// The date when the transaction occurred.
    pub date: Date,

    /// A human-readable description of the transaction.
    pub description: String,

    /// Defaults to [Category::Other], which is valid for both types.
    pub category: Category,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Create the transaction with a fresh, random ID.
    pub fn finalize(self) -> Transaction {
        self.finalize_with_id(TransactionId::new_random())
    }

    /// Create the transaction with the given `id`, e.g. when replacing an existing transaction.
    pub fn finalize_with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            description: self.description,
            date: self.date,
            category: self.category,
            transaction_type: self.transaction_type,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
