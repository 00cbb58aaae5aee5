// Urgency calculation for parsed entries

use chrono::{Duration, NaiveDate};
use crate::models::Entry;
use crate::scoring::weights::{ImportanceMode, ScoringConfig, Weights};

/// Slack between expected completion and the due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    /// Three or more days to spare
    ThreeDays,
    TwoDays,
    OneDay,
    /// Finishes exactly on the due date
    DueToday,
    /// Expected completion is past the due date
    Overdue,
}

impl DueBucket {
    /// Classify the tightest bucket whose boundary `due - N days` is not exceeded
    ///
    /// A completion date past the representable calendar is later than any
    /// due date, so it lands in `Overdue`.
    pub fn classify(today: NaiveDate, cost_days: u32, due: NaiveDate) -> Self {
        let Some(expected) = today.checked_add_signed(Duration::days(i64::from(cost_days))) else {
            return DueBucket::Overdue;
        };
        if expected <= due - Duration::days(3) {
            DueBucket::ThreeDays
        } else if expected <= due - Duration::days(2) {
            DueBucket::TwoDays
        } else if expected <= due - Duration::days(1) {
            DueBucket::OneDay
        } else if expected <= due {
            DueBucket::DueToday
        } else {
            DueBucket::Overdue
        }
    }

    pub fn weight(&self, weights: &Weights) -> f64 {
        match self {
            DueBucket::ThreeDays => weights.three_day,
            DueBucket::TwoDays => weights.two_day,
            DueBucket::OneDay => weights.one_day,
            DueBucket::DueToday => weights.due_today,
            DueBucket::Overdue => weights.overdue,
        }
    }
}

/// Start date used for scoring
///
/// An explicit start wins. Without one, entries that are due or important
/// count as started today; everything else has no effective start.
pub fn effective_start(entry: &Entry, today: NaiveDate) -> Option<NaiveDate> {
    match entry.start {
        Some(start) => Some(start),
        None if entry.due.is_some() || entry.important => Some(today),
        None => None,
    }
}

/// Scores entries against a fixed reference date
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Compute urgency and warning flags for one entry
    ///
    /// Overwrites every derived field of `entry` and returns the new urgency
    /// (higher = more urgent).
    pub fn score(&self, entry: &mut Entry, today: NaiveDate) -> f64 {
        let weights = &self.config.weights;
        entry.clear_derived();

        let mut urgency = 0.0;

        if effective_start(entry, today).map_or(false, |start| start <= today) {
            urgency += weights.start;
        }

        if entry.important {
            urgency += weights.important;
            if self.config.importance_mode == ImportanceMode::Multiplicative {
                urgency *= self.config.importance_multiplier;
            }
        }

        if entry.easy && self.config.easy_tag_enabled {
            urgency += weights.easy;
        }

        if let Some(due) = entry.due {
            let bucket = DueBucket::classify(today, entry.cost, due);
            urgency += bucket.weight(weights);
            entry.risk_of_overdue = bucket == DueBucket::Overdue;

            // Plain calendar comparison, cost not considered
            entry.already_overdue = today > due;
            entry.due_today = today == due;
        }

        entry.urgency = urgency;
        urgency
    }

    /// Score every entry in place
    pub fn score_all(&self, entries: &mut [Entry], today: NaiveDate) {
        for entry in entries.iter_mut() {
            self.score(entry, today);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scored(line: &str, today: NaiveDate, config: ScoringConfig) -> Entry {
        let mut entry = parse_line(1, line, today).unwrap();
        Scorer::new(config).score(&mut entry, today);
        entry
    }

    #[test]
    fn test_untagged_entry_scores_zero() {
        let entry = scored("Simple task", ymd(2024, 6, 1), ScoringConfig::default());
        assert_eq!(entry.urgency, 0.0);
        assert!(!entry.already_overdue && !entry.risk_of_overdue && !entry.due_today);
    }

    #[test]
    fn test_easy_is_only_baseline_contribution() {
        let today = ymd(2024, 6, 1);
        let entry = scored("Task @easy", today, ScoringConfig::default());
        assert_eq!(entry.urgency, 1.0);

        let config = ScoringConfig {
            easy_tag_enabled: false,
            ..ScoringConfig::default()
        };
        let entry = scored("Task @easy", today, config);
        assert_eq!(entry.urgency, 0.0);
        assert!(entry.easy);
    }

    #[test]
    fn test_explicit_start() {
        let today = ymd(2024, 6, 10);
        let started = scored("Task @start:06/01", today, ScoringConfig::default());
        assert_eq!(started.urgency, 1.0);

        let starts_today = scored("Task @start:06/10", today, ScoringConfig::default());
        assert_eq!(starts_today.urgency, 1.0);

        let future = scored("Task @start:06/20", today, ScoringConfig::default());
        assert_eq!(future.urgency, 0.0);
    }

    #[test]
    fn test_important_additive_and_multiplicative() {
        let today = ymd(2024, 6, 1);
        let additive = scored("Task @i", today, ScoringConfig::default());
        assert_eq!(additive.urgency, 11.0);

        let config = ScoringConfig {
            importance_mode: ImportanceMode::Multiplicative,
            ..ScoringConfig::default()
        };
        // (start + important) * 2, easy stays flat
        let multiplied = scored("Task @i @e", today, config);
        assert_eq!(multiplied.urgency, 23.0);
    }

    #[test]
    fn test_due_buckets() {
        let today = ymd(2024, 6, 1);
        let due = ymd(2024, 6, 10);
        assert_eq!(DueBucket::classify(today, 0, due), DueBucket::ThreeDays);
        assert_eq!(DueBucket::classify(today, 6, due), DueBucket::ThreeDays);
        assert_eq!(DueBucket::classify(today, 7, due), DueBucket::TwoDays);
        assert_eq!(DueBucket::classify(today, 8, due), DueBucket::OneDay);
        assert_eq!(DueBucket::classify(today, 9, due), DueBucket::DueToday);
        assert_eq!(DueBucket::classify(today, 10, due), DueBucket::Overdue);
    }

    #[test]
    fn test_huge_cost_is_overdue() {
        let today = ymd(2024, 6, 1);
        assert_eq!(DueBucket::classify(today, u32::MAX, ymd(2024, 6, 10)), DueBucket::Overdue);

        let entry = scored("Task @due:06/10 @cost:100000000", today, ScoringConfig::default());
        assert!(entry.risk_of_overdue);
        assert!(!entry.already_overdue);
        assert_eq!(entry.urgency, 1.0 + 10000.0);
    }

    #[test]
    fn test_due_today_without_cost() {
        let today = ymd(2024, 6, 1);
        let entry = scored("Task @today", today, ScoringConfig::default());
        assert!(entry.due_today);
        assert!(!entry.already_overdue);
        assert!(!entry.risk_of_overdue);
        assert_eq!(entry.urgency, 1.0 + 5000.0);
    }

    #[test]
    fn test_already_overdue_regardless_of_cost() {
        let today = ymd(2024, 6, 10);
        for line in ["Task @due:06/09", "Task @due:06/01 @cost:5"] {
            let entry = scored(line, today, ScoringConfig::default());
            assert!(entry.already_overdue, "{}", line);
            assert!(entry.risk_of_overdue, "{}", line);
            assert!(!entry.due_today, "{}", line);
            assert_eq!(entry.urgency, 1.0 + 10000.0);
        }
    }

    #[test]
    fn test_risk_of_overdue_from_cost() {
        let today = ymd(2024, 6, 1);
        let entry = scored("Task @due:06/03 @cost:4", today, ScoringConfig::default());
        assert!(entry.risk_of_overdue);
        assert!(!entry.already_overdue);
        assert!(!entry.due_today);
    }

    #[test]
    fn test_year_boundary_scenario() {
        // Due Jan 1 next year, two days of work from Dec 28
        let today = ymd(2024, 12, 28);
        let entry = scored("Pay rent @due:01/01 @cost:2", today, ScoringConfig::default());
        assert_eq!(entry.due, Some(ymd(2025, 1, 1)));
        assert_eq!(DueBucket::classify(today, 2, ymd(2025, 1, 1)), DueBucket::TwoDays);
        assert_eq!(entry.urgency, 1.0 + 100.0);
    }

    #[test]
    fn test_rescoring_resets_derived_fields() {
        let mut entry = parse_line(1, "Task @due:06/01", ymd(2024, 6, 1)).unwrap();
        let scorer = Scorer::default();
        scorer.score(&mut entry, ymd(2024, 6, 5));
        assert!(entry.already_overdue);

        let urgency = scorer.score(&mut entry, ymd(2024, 5, 1));
        assert!(!entry.already_overdue);
        assert!(!entry.risk_of_overdue);
        assert_eq!(urgency, entry.urgency);
        assert_eq!(urgency, 1.0 + 50.0);
    }

    #[test]
    fn test_custom_weights() {
        let config = ScoringConfig {
            weights: Weights {
                start: 5.0,
                ..Weights::default()
            },
            ..ScoringConfig::default()
        };
        let entry = scored("Task @due:06/30", ymd(2024, 6, 1), config);
        assert_eq!(entry.urgency, 5.0 + 50.0);
    }
}
