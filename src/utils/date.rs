// Date normalization for tag values
//
// Tag dates are naive local-calendar dates. A date written without a year is
// resolved to whichever of this/next/previous year lies closest to today.

use chrono::{Datelike, Local, NaiveDate};
use anyhow::Result;
use crate::error::EntryError;

/// Display format used for dates in entry blocks and calendar keys
pub const DISPLAY_FORMAT: &str = "%m/%d/%Y";

/// Parse a tag date value (`MM/DD` or `MM/DD/YYYY`) into a calendar date
///
/// `today` is the reference date of the current run; it is only consulted
/// when the year is omitted.
pub fn parse_tag_date(value: &str, today: NaiveDate) -> Result<NaiveDate, EntryError> {
    let parts: Vec<&str> = value.split('/').collect();
    match parts.as_slice() {
        [month, day] => {
            let month = parse_component(month).ok_or_else(|| EntryError::invalid_date(Some(value)))?;
            let day = parse_component(day).ok_or_else(|| EntryError::invalid_date(Some(value)))?;
            smart_year(month, day, today).ok_or_else(|| EntryError::invalid_date(Some(value)))
        }
        [month, day, year] => {
            let month = parse_component(month).ok_or_else(|| EntryError::invalid_date(Some(value)))?;
            let day = parse_component(day).ok_or_else(|| EntryError::invalid_date(Some(value)))?;
            let year = parse_year(year).ok_or_else(|| EntryError::invalid_date(Some(value)))?;
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| EntryError::invalid_date(Some(value)))
        }
        _ => Err(EntryError::invalid_date(Some(value))),
    }
}

/// Year number: exactly four ASCII digits
fn parse_year(s: &str) -> Option<i32> {
    if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Month or day number: one or two ASCII digits
fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Pick the year for a month/day so the result is closest to `today`
///
/// Candidates are tried in the order this year, next year, previous year and
/// the first one at minimal distance wins. Candidates that do not exist in
/// their year (Feb 29 outside leap years) are skipped.
pub fn smart_year(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let year = today.year();
    [year, year + 1, year - 1]
        .into_iter()
        .filter_map(|y| NaiveDate::from_ymd_opt(y, month, day))
        .min_by_key(|candidate| (*candidate - today).num_days().abs())
}

/// Format a date for display (MM/DD/YYYY)
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse the reference-date override given on the command line
///
/// Accepts `YYYY-MM-DD`, `today`, `tomorrow` and `yesterday`.
pub fn parse_reference_date(expr: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(date);
    }

    let today = Local::now().date_naive();
    match expr {
        "today" => Ok(today),
        "tomorrow" => Ok(today + chrono::Duration::days(1)),
        "yesterday" => Ok(today - chrono::Duration::days(1)),
        _ => anyhow::bail!("Invalid date: '{}'. Expected YYYY-MM-DD, today, tomorrow or yesterday.", expr),
    }
}
