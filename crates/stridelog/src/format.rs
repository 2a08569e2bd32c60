//! Presentation helpers for stridelog.
//!
//! Pure, stateless formatting functions used by the CLI output layer. None
//! of these carry business logic; failures are handled by simple default
//! substitution.

use chrono::{Local, NaiveDate};

/// ANSI escape sequence that starts strike-through text.
const STRIKE_ON: &str = "\u{1b}[9m";

/// ANSI escape sequence that resets text attributes.
const STRIKE_OFF: &str = "\u{1b}[0m";

/// Format a number to two decimal places.
///
/// Any non-finite input (NaN or infinity) renders as the literal `"0.00"`.
#[must_use]
pub fn fixed_decimal(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "0.00".to_string()
    }
}

/// Format an integer percentage with a percent suffix.
#[must_use]
pub fn percent(value: u32) -> String {
    format!("{value}%")
}

/// Render a date relative to today ("3 days ago").
#[must_use]
pub fn relative_date(date: NaiveDate) -> String {
    relative_date_from(date, Local::now().date_naive())
}

/// Render a date relative to an explicit "today".
#[must_use]
pub fn relative_date_from(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();

    match days {
        i64::MIN..=-2 => format!("in {} days", -days),
        -1 => "tomorrow".to_string(),
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=13 => "1 week ago".to_string(),
        14..=29 => format!("{} weeks ago", days / 7),
        30..=59 => "1 month ago".to_string(),
        60..=364 => format!("{} months ago", days / 30),
        365..=729 => "1 year ago".to_string(),
        _ => format!("{} years ago", days / 365),
    }
}

/// Wrap text in a terminal strike-through marker.
///
/// Control characters are stripped from the input first so it cannot smuggle
/// its own escape sequences; the wrapping marker itself is emitted verbatim.
#[must_use]
pub fn strikethrough(text: &str) -> String {
    let escaped: String = text.chars().filter(|c| !c.is_control()).collect();
    format!("{STRIKE_ON}{escaped}{STRIKE_OFF}")
}
