// Weight table and scoring policy

/// Named urgency weights
///
/// The due-date weights escalate as the slack between expected completion and
/// the deadline shrinks; `overdue` dominates every other weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Entry has (effectively) started
    pub start: f64,
    pub important: f64,
    /// Flat bonus, never scaled by importance
    pub easy: f64,
    /// Finishes at least three days before due
    pub three_day: f64,
    /// Finishes exactly two days before due
    pub two_day: f64,
    /// Finishes exactly one day before due
    pub one_day: f64,
    /// Finishes on the due date
    pub due_today: f64,
    /// Finishes after the due date
    pub overdue: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            start: 1.0,
            important: 10.0,
            easy: 1.0,
            three_day: 50.0,
            two_day: 100.0,
            one_day: 1000.0,
            due_today: 5000.0,
            overdue: 10000.0,
        }
    }
}

/// How the importance bonus combines with the running score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportanceMode {
    /// Important weight is added
    #[default]
    Additive,
    /// Important weight is added, then the running score is scaled by the multiplier
    Multiplicative,
}

impl ImportanceMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "additive" => Some(ImportanceMode::Additive),
            "multiplicative" => Some(ImportanceMode::Multiplicative),
            _ => None,
        }
    }
}

/// Full scoring policy handed to the scorer
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub weights: Weights,
    pub importance_mode: ImportanceMode,
    /// Scale applied in multiplicative mode
    pub importance_multiplier: f64,
    /// Whether `@easy` contributes to the score
    pub easy_tag_enabled: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            importance_mode: ImportanceMode::Additive,
            importance_multiplier: 2.0,
            easy_tag_enabled: true,
        }
    }
}
