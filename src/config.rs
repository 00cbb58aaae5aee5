// Configuration file handling
//
// The rc file lives at ~/.nextup/rc and holds `key=value` lines. Command-line
// flags take precedence over rc values, which take precedence over defaults.

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use crate::error::ConfigError;
use crate::parser::ParseMode;
use crate::scoring::{ImportanceMode, ScoringConfig};

pub const DEFAULT_INPUT: &str = "nextup.txt";
pub const DEFAULT_ACTIONS: usize = 2;
pub const DEFAULT_WIDTH: usize = 72;
pub const DEFAULT_DAYS: u32 = 60;

/// Settings resolved from the rc file
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub actions: usize,
    /// None means "fit the terminal"
    pub width: Option<usize>,
    pub days: u32,
    pub parse_mode: ParseMode,
    pub scoring: ScoringConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            actions: DEFAULT_ACTIONS,
            width: None,
            days: DEFAULT_DAYS,
            parse_mode: ParseMode::Strict,
            scoring: ScoringConfig::default(),
        }
    }
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".nextup").join("rc"))
    }

    /// Load the rc file, or defaults if there is none
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            log::debug!("No home directory, using default configuration");
            return Ok(Self::default());
        };
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        log::debug!("Reading config file {}", path.display());
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content, path.parent())
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Parse rc content
    ///
    /// Relative `data.location` paths resolve against `base_dir` when given.
    pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                log::debug!("Ignoring config line without '=': {}", line);
                continue;
            };
            config.apply(key.trim(), value.trim(), base_dir)?;
        }

        Ok(config)
    }

    fn apply(&mut self, key: &str, value: &str, base_dir: Option<&Path>) -> Result<(), ConfigError> {
        let weights = &mut self.scoring.weights;
        match key {
            "data.location" => {
                let path = PathBuf::from(value);
                self.input = match base_dir {
                    Some(dir) if path.is_relative() => dir.join(path),
                    _ => path,
                };
            }
            "actions.count" => self.actions = parse_value(key, value, "a whole number")?,
            "display.width" => self.width = Some(parse_value(key, value, "a whole number")?),
            "calendar.days" => self.days = parse_value(key, value, "a whole number of days")?,
            "parse.lenient" => {
                self.parse_mode = if parse_bool(key, value)? {
                    ParseMode::Lenient
                } else {
                    ParseMode::Strict
                };
            }
            "scoring.importance" => {
                self.scoring.importance_mode = ImportanceMode::from_str(value)
                    .ok_or_else(|| invalid(key, value, "additive or multiplicative"))?;
            }
            "scoring.importance_multiplier" => {
                self.scoring.importance_multiplier = parse_value(key, value, "a number")?;
            }
            "scoring.easy" => self.scoring.easy_tag_enabled = parse_bool(key, value)?,
            "weight.start" => weights.start = parse_value(key, value, "a number")?,
            "weight.important" => weights.important = parse_value(key, value, "a number")?,
            "weight.easy" => weights.easy = parse_value(key, value, "a number")?,
            "weight.three_day" => weights.three_day = parse_value(key, value, "a number")?,
            "weight.two_day" => weights.two_day = parse_value(key, value, "a number")?,
            "weight.one_day" => weights.one_day = parse_value(key, value, "a number")?,
            "weight.due_today" => weights.due_today = parse_value(key, value, "a number")?,
            "weight.overdue" => weights.overdue = parse_value(key, value, "a number")?,
            _ => log::debug!("Ignoring unknown config key: {}", key),
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str, expected: &'static str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| invalid(key, value, expected))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value, "true or false")),
    }
}
