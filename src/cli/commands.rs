use clap::Parser;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use anyhow::{Context, Result};
use crate::cli::error::{user_error, warn_skipped};
use crate::cli::output::{format_action_view, format_due_calendar, format_json, get_terminal_width, is_tty, FormatOptions};
use crate::config::{Config, DEFAULT_WIDTH};
use crate::models::Entry;
use crate::parser::{parse_source, ParseMode};
use crate::scoring::{Scorer, ScoringConfig};
use crate::utils::parse_reference_date;
use crate::view::{build_action_view, build_due_calendar};

#[derive(Parser, Debug)]
#[command(name = "nextup")]
#[command(about = "Next Up - pick the most urgent next actions from a tagged plain-text task list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Tags: @start:MM/DD[/YYYY] @due:MM/DD[/YYYY] @cost:DAYS @important @easy @wait @today\n\
Short forms: @s @d @c @i @e @w @t")]
pub struct Cli {
    /// Task file to read (default: data.location from ~/.nextup/rc, else ./nextup.txt)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
    /// Number of next actions to show
    #[arg(short = 'n', long = "num-next-actions", value_name = "N")]
    pub num_next_actions: Option<usize>,
    /// Width of separator rules
    #[arg(long, visible_alias = "screen-width", value_name = "COLUMNS")]
    pub width: Option<usize>,
    /// Day horizon for the due-date calendar
    #[arg(short, long, value_name = "DAYS")]
    pub days: Option<u32>,
    /// Show entries grouped by due date instead of the next actions
    #[arg(long = "by-due", visible_alias = "print-by-due")]
    pub by_due: bool,
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
    /// Skip malformed lines instead of failing
    #[arg(long)]
    pub lenient: bool,
    /// Append source line numbers to titles
    #[arg(long)]
    pub show_line: bool,
    /// Reference date instead of the current date (YYYY-MM-DD, today, tomorrow, yesterday)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
}

/// Which view to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    NextActions,
    DueCalendar,
}

/// Effective settings for one run (flags over rc over defaults)
#[derive(Debug, Clone)]
pub struct Settings {
    pub today: NaiveDate,
    pub input: PathBuf,
    pub mode: Mode,
    pub actions: usize,
    pub width: usize,
    pub days: u32,
    pub parse_mode: ParseMode,
    pub scoring: ScoringConfig,
    pub json: bool,
    pub color: bool,
    pub show_line: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config, today: NaiveDate) -> Self {
        let parse_mode = if cli.lenient {
            ParseMode::Lenient
        } else {
            config.parse_mode
        };
        let mode = if cli.by_due {
            Mode::DueCalendar
        } else {
            Mode::NextActions
        };

        Self {
            today,
            input: cli.input.clone().unwrap_or(config.input),
            mode,
            actions: cli.num_next_actions.unwrap_or(config.actions),
            width: cli.width.or(config.width).unwrap_or_else(default_width),
            days: cli.days.unwrap_or(config.days),
            parse_mode,
            scoring: config.scoring,
            json: cli.json,
            color: !cli.json && is_tty(),
            show_line: cli.show_line,
        }
    }
}

/// Terminal width capped at the default on a TTY, else the default
fn default_width() -> usize {
    if is_tty() {
        get_terminal_width().map_or(DEFAULT_WIDTH, |w| w.min(DEFAULT_WIDTH))
    } else {
        DEFAULT_WIDTH
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Captured once so every comparison in this run agrees
    let today = match &cli.today {
        Some(expr) => parse_reference_date(expr).unwrap_or_else(|e| user_error(&e.to_string())),
        None => Local::now().date_naive(),
    };

    let config = Config::load().unwrap_or_else(|e| user_error(&format!("{:#}", e)));
    let settings = Settings::resolve(&cli, config, today);
    log::debug!("Reference date {}, input {}", settings.today, settings.input.display());

    let entries = load_entries(&settings)?;
    for line in render(&entries, &settings)? {
        println!("{}", line);
    }
    Ok(())
}

/// Read, parse and score the task file
pub fn load_entries(settings: &Settings) -> Result<Vec<Entry>> {
    if !settings.input.is_file() {
        user_error(&format!("Input file not found: {}", settings.input.display()));
    }
    let content = std::fs::read_to_string(&settings.input)
        .with_context(|| format!("Failed to read input file: {}", settings.input.display()))?;

    let report = match parse_source(content.lines(), settings.today, settings.parse_mode) {
        Ok(report) => report,
        Err(e) => user_error(&format!("{} {}\n  {}", settings.input.display(), e, e.text)),
    };
    warn_skipped(&report.skipped);

    let mut entries = report.entries;
    Scorer::new(settings.scoring.clone()).score_all(&mut entries, settings.today);
    Ok(entries)
}

/// Render the selected view as output blocks
pub fn render(entries: &[Entry], settings: &Settings) -> Result<Vec<String>> {
    let opts = FormatOptions {
        color: settings.color,
        show_line: settings.show_line,
    };

    let out = match settings.mode {
        Mode::NextActions => {
            let view = build_action_view(entries, settings.actions);
            if settings.json {
                vec![format_json(&view)?]
            } else {
                format_action_view(&view, settings.width, &opts)
            }
        }
        Mode::DueCalendar => {
            let groups = build_due_calendar(entries, settings.today, settings.days);
            if settings.json {
                vec![format_json(&groups)?]
            } else {
                format_due_calendar(&groups, settings.width, &opts)
            }
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn settings(mode: Mode) -> Settings {
        Settings {
            today: ymd(2024, 6, 1),
            input: PathBuf::from("unused.txt"),
            mode,
            actions: 2,
            width: 10,
            days: 60,
            parse_mode: ParseMode::Strict,
            scoring: ScoringConfig::default(),
            json: false,
            color: false,
            show_line: false,
        }
    }

    fn scored(lines: &[&str], today: NaiveDate) -> Vec<Entry> {
        let mut entries: Vec<Entry> = lines
            .iter()
            .enumerate()
            .map(|(i, l)| parse_line(i + 1, l, today).unwrap())
            .collect();
        Scorer::default().score_all(&mut entries, today);
        entries
    }

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from(["nextup", "-n", "5", "--width", "40", "--by-due", "--lenient"]);
        let config = Config {
            actions: 3,
            width: Some(100),
            days: 7,
            ..Config::default()
        };
        let settings = Settings::resolve(&cli, config, ymd(2024, 6, 1));
        assert_eq!(settings.actions, 5);
        assert_eq!(settings.width, 40);
        assert_eq!(settings.days, 7);
        assert_eq!(settings.mode, Mode::DueCalendar);
        assert_eq!(settings.parse_mode, ParseMode::Lenient);
        assert_eq!(settings.input, PathBuf::from("nextup.txt"));
    }

    #[test]
    fn test_print_by_due_alias() {
        let cli = Cli::parse_from(["nextup", "--print-by-due", "-i", "todo.txt", "-d", "10"]);
        assert!(cli.by_due);
        assert_eq!(cli.input, Some(PathBuf::from("todo.txt")));
        assert_eq!(cli.days, Some(10));
    }

    #[test]
    fn test_render_next_actions() {
        let s = settings(Mode::NextActions);
        let entries = scored(&["Later", "Rent @due:06/02", "Call @i"], s.today);
        let out = render(&entries, &s).unwrap();
        assert!(out[1].starts_with("[Title]\tRent"));
        assert!(out[3].starts_with("[Title]\tCall"));
        assert!(!out.iter().any(|block| block.contains("Later")));
    }

    #[test]
    fn test_render_calendar_json() {
        let mut s = settings(Mode::DueCalendar);
        s.json = true;
        let entries = scored(&["Rent @due:06/02", "Taxes @due:06/02"], s.today);
        let out = render(&entries, &s).unwrap();
        assert_eq!(out.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&out[0]).unwrap();
        assert_eq!(value[0]["due"], "2024-06-02");
        assert_eq!(value[0]["entries"][1]["title"], "Taxes");
    }
}
