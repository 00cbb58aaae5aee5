use chrono::NaiveDate;
use serde::Serialize;

/// One task line from the source file
///
/// Tag fields are filled by the line parser and do not change afterwards.
/// The derived fields (`urgency` and the three warning flags) are owned by
/// the scorer and are reset every time the entry is scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// 1-based line number in the source (display-only identity)
    pub line: usize,
    pub title: String,
    pub start: Option<NaiveDate>,
    pub due: Option<NaiveDate>,
    /// Estimated effort in days
    pub cost: u32,
    pub important: bool,
    pub easy: bool,
    pub wait: bool,

    // Derived by the scorer
    pub urgency: f64,
    pub already_overdue: bool,
    pub risk_of_overdue: bool,
    pub due_today: bool,
}

/// Tag badges in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Important,
    Easy,
    Wait,
}

impl Badge {
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Important => "Important",
            Badge::Easy => "Easy",
            Badge::Wait => "Wait",
        }
    }
}

impl Entry {
    /// Create an untagged entry
    pub fn new(line: usize, title: impl Into<String>) -> Self {
        Self {
            line,
            title: title.into(),
            start: None,
            due: None,
            cost: 0,
            important: false,
            easy: false,
            wait: false,
            urgency: 0.0,
            already_overdue: false,
            risk_of_overdue: false,
            due_today: false,
        }
    }

    /// Badges for every boolean tag that is set, in fixed order
    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::new();
        if self.important {
            badges.push(Badge::Important);
        }
        if self.easy {
            badges.push(Badge::Easy);
        }
        if self.wait {
            badges.push(Badge::Wait);
        }
        badges
    }

    /// Entry can be worked on now (not waiting)
    pub fn is_actionable(&self) -> bool {
        !self.wait
    }

    /// Due date falls on or before `limit`
    pub fn is_due_by(&self, limit: NaiveDate) -> bool {
        self.due.map_or(false, |due| due <= limit)
    }

    pub(crate) fn clear_derived(&mut self) {
        self.urgency = 0.0;
        self.already_overdue = false;
        self.risk_of_overdue = false;
        self.due_today = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new(3, "Simple task");
        assert_eq!(entry.line, 3);
        assert_eq!(entry.title, "Simple task");
        assert_eq!(entry.cost, 0);
        assert!(entry.start.is_none());
        assert!(entry.due.is_none());
        assert!(entry.is_actionable());
        assert!(entry.badges().is_empty());
    }

    #[test]
    fn test_badges_order() {
        let mut entry = Entry::new(1, "Test");
        entry.wait = true;
        entry.important = true;
        assert_eq!(entry.badges(), vec![Badge::Important, Badge::Wait]);

        entry.easy = true;
        let labels: Vec<&str> = entry.badges().iter().map(Badge::label).collect();
        assert_eq!(labels, vec!["Important", "Easy", "Wait"]);
        assert!(!entry.is_actionable());
    }

    #[test]
    fn test_is_due_by() {
        let limit = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut entry = Entry::new(1, "Test");
        assert!(!entry.is_due_by(limit));

        entry.due = NaiveDate::from_ymd_opt(2024, 3, 1);
        assert!(entry.is_due_by(limit));

        entry.due = NaiveDate::from_ymd_opt(2024, 3, 2);
        assert!(!entry.is_due_by(limit));
    }
}
