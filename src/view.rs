// View building: selection, ordering and grouping of scored entries

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::cmp::Ordering;
use crate::models::Entry;

/// Top-N actionable entries plus everything that is waiting
#[derive(Debug, Serialize)]
pub struct ActionView<'a> {
    pub actions: Vec<&'a Entry>,
    pub waiting: Vec<&'a Entry>,
}

/// Entries sharing one due date
#[derive(Debug, Serialize)]
pub struct DueGroup<'a> {
    pub due: NaiveDate,
    pub entries: Vec<&'a Entry>,
}

/// Sort by urgency, most urgent first
///
/// The sort is stable: entries with equal urgency keep source order.
pub fn sort_by_urgency(entries: &mut [&Entry]) {
    entries.sort_by(|a, b| b.urgency.partial_cmp(&a.urgency).unwrap_or(Ordering::Equal));
}

/// Build the top-N view from scored entries
pub fn build_action_view(entries: &[Entry], limit: usize) -> ActionView<'_> {
    let (mut actions, mut waiting): (Vec<&Entry>, Vec<&Entry>) =
        entries.iter().partition(|e| e.is_actionable());

    sort_by_urgency(&mut actions);
    actions.truncate(limit);
    sort_by_urgency(&mut waiting);

    ActionView { actions, waiting }
}

/// Build the due-date calendar
///
/// Includes every entry due on or before `today + horizon_days` (overdue
/// entries too), grouped by due date in ascending order. Within a group,
/// entries keep source order. A horizon reaching past the representable
/// calendar has no upper limit.
pub fn build_due_calendar(entries: &[Entry], today: NaiveDate, horizon_days: u32) -> Vec<DueGroup<'_>> {
    let limit = today
        .checked_add_signed(Duration::days(i64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX);
    let mut due: Vec<&Entry> = entries.iter().filter(|e| e.is_due_by(limit)).collect();
    due.sort_by_key(|e| e.due);

    let mut groups: Vec<DueGroup> = Vec::new();
    for entry in due {
        let Some(date) = entry.due else { continue };
        match groups.last_mut() {
            Some(group) if group.due == date => group.entries.push(entry),
            _ => groups.push(DueGroup {
                due: date,
                entries: vec![entry],
            }),
        }
    }
    groups
}
