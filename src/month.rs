//! Month selection for the overview page.
//!
//! A month is represented by the [Date] of its first day.

use time::{Date, Duration, Month, format_description::BorrowedFormatItem, macros::format_description};

/// How many months the month selector offers, counting the current month.
pub const MONTH_OPTION_COUNT: usize = 12;

const MONTH_VALUE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]");
const MONTH_LABEL_FORMAT: &[BorrowedFormatItem] =
    format_description!("[month repr:long] [year]");

/// The first day of the month containing `date`.
pub fn start_of_month(date: Date) -> Date {
    date - Duration::days(i64::from(date.day()) - 1)
}

/// The first day of the month before the month starting on `month`.
fn previous_month(month: Date) -> Option<Date> {
    let (year, previous) = match month.month() {
        Month::January => (month.year() - 1, Month::December),
        other => (month.year(), other.previous()),
    };

    Date::from_calendar_date(year, previous, 1).ok()
}

/// The months offered by the month selector, the month containing `today` first, then the
/// eleven months before it.
pub fn month_options(today: Date) -> Vec<Date> {
    std::iter::successors(Some(start_of_month(today)), |month| previous_month(*month))
        .take(MONTH_OPTION_COUNT)
        .collect()
}

/// Parse a month from a query string value such as "2024-01".
///
/// Returns the first day of that month, or `None` if `value` is not a valid month.
pub fn parse_month(value: &str) -> Option<Date> {
    let (year, month) = value.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u8 = month.parse().ok()?;
    let month = Month::try_from(month).ok()?;

    Date::from_calendar_date(year, month, 1).ok()
}

/// The query string value for the month containing `date`, e.g. "2024-01".
pub fn format_month_value(date: Date) -> String {
    date.format(MONTH_VALUE_FORMAT)
        .unwrap_or_else(|_| format!("{}-{:02}", date.year(), date.month() as u8))
}

/// The display name for the month containing `date`, e.g. "January 2024".
pub fn format_month_label(date: Date) -> String {
    date.format(MONTH_LABEL_FORMAT)
        .unwrap_or_else(|_| format!("{} {}", date.month(), date.year()))
}
