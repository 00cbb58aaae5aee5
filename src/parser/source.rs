// Source-level parsing: lines of a task file into entries

use chrono::NaiveDate;
use crate::error::LineError;
use crate::models::Entry;
use crate::parser::line::parse_line;

/// Marker that starts a comment line
pub const COMMENT_MARKER: char = '#';

/// How malformed lines are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// First malformed line fails the whole source
    #[default]
    Strict,
    /// Malformed lines are skipped and collected in the report
    Lenient,
}

/// Result of parsing a whole source
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Entries in source order
    pub entries: Vec<Entry>,
    /// Lines skipped in lenient mode
    pub skipped: Vec<LineError>,
}

/// Check whether a raw line holds an entry (not blank, not a comment)
pub fn is_entry_line(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with(COMMENT_MARKER)
}

/// Parse every entry line of a source
///
/// Line numbers are 1-based and count blank and comment lines, so they match
/// what an editor shows.
pub fn parse_source<'a, I>(lines: I, today: NaiveDate, mode: ParseMode) -> Result<ParseReport, LineError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = ParseReport::default();

    for (idx, raw) in lines.into_iter().enumerate() {
        if !is_entry_line(raw) {
            continue;
        }
        let text = raw.trim();
        let line_no = idx + 1;

        match parse_line(line_no, text, today) {
            Ok(entry) => report.entries.push(entry),
            Err(source) => {
                let err = LineError {
                    line: line_no,
                    text: text.to_string(),
                    source,
                };
                match mode {
                    ParseMode::Strict => return Err(err),
                    ParseMode::Lenient => {
                        log::warn!("Skipping malformed {}", err);
                        report.skipped.push(err);
                    }
                }
            }
        }
    }

    log::debug!(
        "Parsed {} entries ({} skipped)",
        report.entries.len(),
        report.skipped.len()
    );
    Ok(report)
}
