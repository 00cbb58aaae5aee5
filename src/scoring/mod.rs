//! Urgency scoring
//!
//! The scorer is a pure function of an entry, the reference date and a
//! [`ScoringConfig`]. It runs once per entry after parsing has finished.

pub mod scorer;
pub mod weights;

pub use scorer::*;
pub use weights::*;
