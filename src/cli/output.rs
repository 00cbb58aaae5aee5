// Output formatting utilities

use serde::Serialize;
use std::io::IsTerminal;
use anyhow::{Context, Result};
use crate::models::Entry;
use crate::utils::format_date;
use crate::view::{ActionView, DueGroup};

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_MAGENTA: &str = "\x1b[35m";

/// Rendering switches for entry blocks
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Emit ANSI colors and bold titles
    pub color: bool,
    /// Append the source line number to titles
    pub show_line: bool,
}

/// Warning shown under an entry title, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    AlreadyOverdue,
    DueToday,
    HighRisk,
}

impl Warning {
    /// Pick the single warning to show for an entry
    pub fn for_entry(entry: &Entry) -> Option<Self> {
        if entry.already_overdue {
            Some(Warning::AlreadyOverdue)
        } else if entry.due_today {
            Some(Warning::DueToday)
        } else if entry.risk_of_overdue {
            Some(Warning::HighRisk)
        } else {
            None
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Warning::AlreadyOverdue => "!!!!! Already Overdue !!!!!",
            Warning::DueToday => "Due Today",
            Warning::HighRisk => "High Risk",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Warning::AlreadyOverdue => ANSI_FG_RED,
            Warning::DueToday => ANSI_FG_MAGENTA,
            Warning::HighRisk => ANSI_FG_YELLOW,
        }
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// COLUMNS environment variable.
pub fn get_terminal_width() -> Option<usize> {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return Some(w as usize);
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 { // Sanity check
                return Some(width);
            }
        }
    }

    None
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", code, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Format the date/cost summary line (without the `[Date]` label)
pub fn format_date_summary(entry: &Entry) -> String {
    let mut parts = Vec::new();
    if let Some(start) = entry.start {
        parts.push(format!("Start {}", format_date(start)));
    }
    if let Some(due) = entry.due {
        parts.push(format!("Due {}", format_date(due)));
    }
    let unit = if entry.cost == 1 { "day" } else { "days" };
    parts.push(format!("Cost {} {}", entry.cost, unit));
    parts.join(" ")
}

/// Format the display title, optionally tagged with its source line
pub fn format_title(entry: &Entry, show_line: bool) -> String {
    if show_line {
        format!("{} (#{})", entry.title, entry.line)
    } else {
        entry.title.clone()
    }
}

/// Format one entry as a multi-line block
///
/// ```text
/// [Title]  Pay rent
/// [Warn]   High Risk
/// [Date]   Due 01/01/2025 Cost 2 days
/// [Tag]    [Important]
/// ```
pub fn format_entry(entry: &Entry, opts: &FormatOptions) -> String {
    let mut lines = Vec::new();

    let title = format_title(entry, opts.show_line);
    lines.push(format!("[Title]\t{}", paint(&title, ANSI_BOLD, opts.color)));

    if let Some(warning) = Warning::for_entry(entry) {
        lines.push(format!("[Warn]\t{}", paint(warning.text(), warning.color(), opts.color)));
    }

    lines.push(format!("[Date]\t{}", format_date_summary(entry)));

    let badges = entry.badges();
    if !badges.is_empty() {
        let badges: String = badges.iter().map(|b| format!("[{}]", b.label())).collect();
        lines.push(format!("[Tag]\t{}", badges));
    }

    lines.join("\n")
}

/// Render the top-N view as output blocks
pub fn format_action_view(view: &ActionView, width: usize, opts: &FormatOptions) -> Vec<String> {
    let mut out = vec![rule('*', width)];

    for entry in &view.actions {
        out.push(format_entry(entry, opts));
        out.push(rule('-', width));
    }
    out.push(rule('=', width));

    out.push(rule('-', width));
    let noun = if view.waiting.len() == 1 { "Entry" } else { "Entries" };
    out.push(format!(">>>>>>>>>> {} Waiting {} >>>>>>>>>>", view.waiting.len(), noun));
    for entry in &view.waiting {
        out.push(format_entry(entry, opts));
        out.push(rule('-', width));
    }

    out.push(rule('*', width));
    out
}

/// Render the due-date calendar as output blocks
pub fn format_due_calendar(groups: &[DueGroup], width: usize, opts: &FormatOptions) -> Vec<String> {
    let mut out = vec![rule('*', width)];

    for group in groups {
        let mut block = vec![format!("[Date]\t{}", format_date(group.due))];
        for entry in &group.entries {
            block.push(format!("\t\t{}", format_title(entry, opts.show_line)));
        }
        out.push(block.join("\n"));
        out.push(rule('-', width));
    }

    out.push(rule('*', width));
    out
}

/// Serialize a view as pretty JSON
pub fn format_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}
