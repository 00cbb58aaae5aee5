//! Tag parser for a single task line
//!
//! # Grammar
//!
//! ```text
//! line  := title ("@" tag)*
//! tag   := key | key ":" value
//! ```
//!
//! Keys are case-sensitive and each has a single-letter alias:
//!
//! ```text
//! start (s)      value: MM/DD or MM/DD/YYYY
//! due (d)        value: MM/DD or MM/DD/YYYY
//! cost (c)       value: whole days
//! important (i)  flag
//! easy (e)       flag
//! wait (w)       flag
//! today (t)      flag, due = today
//! ```
//!
//! Tags are applied left to right, so a later `due`/`today` overrides an
//! earlier one. Unknown keys are ignored.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use nextup::parser::parse_line;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
//! let entry = parse_line(1, "Pay rent @due:12/25 @cost:2 @i", today).unwrap();
//! assert_eq!(entry.title, "Pay rent");
//! assert_eq!(entry.due, NaiveDate::from_ymd_opt(2024, 12, 25));
//! assert_eq!(entry.cost, 2);
//! assert!(entry.important);
//! ```

use chrono::NaiveDate;
use crate::error::EntryError;
use crate::models::Entry;
use crate::utils::parse_tag_date;

/// Marker separating the title from tags and tags from each other
pub const TAG_MARKER: char = '@';

/// Recognized tag keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    Start,
    Due,
    Cost,
    Important,
    Easy,
    Wait,
    Today,
}

impl TagKey {
    /// Resolve a long key or its single-letter alias
    pub fn from_str(key: &str) -> Option<Self> {
        match key {
            "start" | "s" => Some(TagKey::Start),
            "due" | "d" => Some(TagKey::Due),
            "cost" | "c" => Some(TagKey::Cost),
            "important" | "i" => Some(TagKey::Important),
            "easy" | "e" => Some(TagKey::Easy),
            "wait" | "w" => Some(TagKey::Wait),
            "today" | "t" => Some(TagKey::Today),
            _ => None,
        }
    }
}

/// Split a tag segment into key and optional value at the first `:`
pub fn split_tag(segment: &str) -> (&str, Option<&str>) {
    let segment = segment.trim();
    match segment.split_once(':') {
        Some((key, value)) => (key.trim(), Some(value.trim())),
        None => (segment, None),
    }
}

/// Parse one non-blank, non-comment line into an unscored entry
pub fn parse_line(line_no: usize, line: &str, today: NaiveDate) -> Result<Entry, EntryError> {
    let mut segments = line.split(TAG_MARKER);
    let title = segments.next().unwrap_or_default().trim();
    let mut entry = Entry::new(line_no, title);

    for segment in segments {
        let (key, value) = split_tag(segment);
        let Some(tag) = TagKey::from_str(key) else {
            continue;
        };
        apply_tag(&mut entry, tag, value, today)?;
    }

    Ok(entry)
}

fn apply_tag(entry: &mut Entry, tag: TagKey, value: Option<&str>, today: NaiveDate) -> Result<(), EntryError> {
    match tag {
        TagKey::Start => entry.start = Some(parse_date_value(value, today)?),
        TagKey::Due => entry.due = Some(parse_date_value(value, today)?),
        TagKey::Cost => {
            entry.cost = value
                .and_then(|v| v.parse::<u32>().ok())
                .ok_or_else(|| EntryError::invalid_cost(value))?;
        }
        TagKey::Important => entry.important = true,
        TagKey::Easy => entry.easy = true,
        TagKey::Wait => entry.wait = true,
        TagKey::Today => entry.due = Some(today),
    }
    Ok(())
}

fn parse_date_value(value: Option<&str>, today: NaiveDate) -> Result<NaiveDate, EntryError> {
    match value {
        Some(v) => parse_tag_date(v, today),
        None => Err(EntryError::invalid_date(None)),
    }
}
