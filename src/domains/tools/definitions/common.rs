//! Common utilities shared across the flight, hotel and travel tools.
//!
//! This module provides city name normalization, argument validation and the
//! small formatting helpers every generator uses.

use chrono::NaiveDate;

use crate::domains::tools::ToolError;

/// Currency every generated price is quoted in.
pub const CURRENCY: &str = "TL";

/// Lower-case alias to canonical display name.
const CITY_ALIASES: &[(&str, &str)] = &[
    ("istanbul", "İstanbul"),
    ("ankara", "Ankara"),
    ("izmir", "İzmir"),
    ("antalya", "Antalya"),
    ("bursa", "Bursa"),
    ("adana", "Adana"),
    ("trabzon", "Trabzon"),
    ("gaziantep", "Gaziantep"),
];

/// Upper bound on normalization passes before a form is considered stable.
const MAX_NORMALIZE_PASSES: usize = 4;

/// Map a free-form city name to its canonical display form.
///
/// Known cities resolve through the alias table regardless of case; anything
/// else is capitalized. The result is a fixed point:
/// `normalize_city(&normalize_city(x)) == normalize_city(x)`.
pub fn normalize_city(city: &str) -> String {
    let mut current = normalize_once(city.trim());

    // Capitalizing can widen a character ("ß" becomes "SS") or reveal an
    // alias ("ıstanbul" becomes "Istanbul"), so repeat until stable.
    for _ in 0..MAX_NORMALIZE_PASSES {
        let next = normalize_once(&current);
        if next == current {
            break;
        }
        current = next;
    }

    current
}

fn normalize_once(city: &str) -> String {
    let key = fold_lowercase(city);
    CITY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| capitalize(city))
}

/// Lower-case `text`, folding the Turkish dotted capital `İ` to a plain `i`.
///
/// `char::to_lowercase` maps `İ` to `i` followed by U+0307, which would never
/// match an alias.
fn fold_lowercase(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| *c != COMBINING_DOT_ABOVE)
        .collect()
}

const COMBINING_DOT_ABOVE: char = '\u{307}';

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let lower = fold_lowercase(text);
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reject blank required arguments.
pub fn require<'a>(value: &'a str, what: &str) -> Result<&'a str, ToolError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ToolError::missing_argument(what))
    } else {
        Ok(trimmed)
    }
}

/// Require a city argument and return its canonical form.
pub fn require_city(value: &str, what: &str) -> Result<String, ToolError> {
    require(value, what).map(normalize_city)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(argument: &str, value: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ToolError::invalid_date(argument, value))
}

/// Format a duration in minutes as `Hh MMm`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

/// Format a wall-clock time, wrapping past midnight.
pub fn format_clock(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour % 24, minute % 60)
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
