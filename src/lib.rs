//! Next Up - pick the most urgent next actions from a tagged plain-text task list
//!
//! This library provides the core functionality for nextup, including:
//! - Tag parsing for task lines (`@due:12/25 @cost:2 @important`)
//! - Date normalization with year inference for `MM/DD` dates
//! - Configurable urgency scoring with overdue-risk detection
//! - Next-action and due-date calendar views
//! - CLI command parsing and execution
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use nextup::parser::{parse_source, ParseMode};
//! use nextup::scoring::Scorer;
//! use nextup::view::build_action_view;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
//! let source = "# chores\nPay rent @due:01/01 @cost:2\nWater plants\n";
//!
//! let mut entries = parse_source(source.lines(), today, ParseMode::Strict).unwrap().entries;
//! Scorer::default().score_all(&mut entries, today);
//!
//! let view = build_action_view(&entries, 1);
//! assert_eq!(view.actions[0].title, "Pay rent");
//! ```

pub mod error;
pub mod models;
pub mod parser;
pub mod scoring;
pub mod view;
pub mod config;
pub mod cli;
pub mod utils;
