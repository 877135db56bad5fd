//! Expansion of weekly-recurring work-block templates.
//!
//! A block saved with `constant = true` is a template for the rest of its
//! month: one occurrence is created for every later day in the month that
//! falls on the template's weekday. Expansion runs exactly once, at the
//! moment the template is created; re-saving an existing constant block
//! never re-triggers it.
//!
//! Each occurrence is an independent aggregate root. It receives a fresh id
//! and its own copies of the template's assignments, so later edits to one
//! occurrence never propagate to siblings or back to the template.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Assignment, WorkBlock};

/// The fields that identify an already-expanded occurrence.
///
/// The store answers "does a block matching these exact fields exist";
/// a match means the occurrence was created by an earlier expansion and
/// must be skipped, which keeps re-expansion idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct OccurrenceKey<'a> {
    /// The template's name.
    pub name: &'a str,
    /// The template's location.
    pub location: &'a str,
    /// The template's client, if any.
    pub client_id: Option<&'a str>,
    /// The candidate day of the month.
    pub day_of_month: u32,
    /// The template's month.
    pub month: u32,
    /// The template's year.
    pub year: i32,
    /// The template's start time.
    pub start_time: NaiveTime,
    /// The template's end time.
    pub end_time: NaiveTime,
}

/// The store-side existence check consumed by [`expand`].
///
/// Creation of the template and its occurrences must be atomic with
/// respect to concurrent saves of an equivalent template; the store
/// serializes expansion (unique constraint or short-lived lock) and
/// treats a conflict as a skip.
pub trait OccurrenceLookup {
    /// Returns true when a constant block matching the key already exists.
    fn occurrence_exists(&self, key: &OccurrenceKey<'_>) -> bool;
}

impl OccurrenceLookup for [WorkBlock] {
    fn occurrence_exists(&self, key: &OccurrenceKey<'_>) -> bool {
        self.iter().any(|b| {
            b.constant
                && b.name == key.name
                && b.location == key.location
                && b.client_id.as_deref() == key.client_id
                && b.day_of_month == key.day_of_month
                && b.month == key.month
                && b.year == key.year
                && b.start_time == key.start_time
                && b.end_time == key.end_time
        })
    }
}

/// One occurrence produced by [`expand`]: the new block and its cloned
/// assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedOccurrence {
    /// The newly created work block.
    pub block: WorkBlock,
    /// The assignments cloned from the template onto the new block.
    pub assignments: Vec<Assignment>,
}

/// Expands a constant work-block template into the remaining occurrences
/// of its month.
///
/// Walks `day_of_month + 7, + 14, …` up to the last day of the month. The
/// same-weekday check is redundant with a pure 7-day step but is kept as a
/// defensive invariant against month-length edge effects. Days for which
/// `lookup` reports an existing matching occurrence are skipped.
///
/// Every occurrence clones all template fields except `day_of_month`, and
/// every template assignment is cloned onto it with the same employee,
/// duration, payment flag and rate override. Completion state is not
/// cloned; a new occurrence starts unworked. `now` stamps the cloned
/// assignments' creation time.
///
/// Non-constant templates expand to nothing.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidWorkBlock`] when the
/// template fails validation.
pub fn expand(
    template: &WorkBlock,
    template_assignments: &[Assignment],
    lookup: &(impl OccurrenceLookup + ?Sized),
    now: DateTime<Utc>,
) -> EngineResult<Vec<ExpandedOccurrence>> {
    template.validate()?;

    if !template.constant {
        return Ok(Vec::new());
    }

    // validate() guarantees the date resolves.
    let template_date = template
        .date()
        .expect("validated template has a resolvable date");
    let weekday = template_date.weekday();
    let last_day = last_day_of_month(template.year, template.month);

    let mut occurrences = Vec::new();

    let mut day = template.day_of_month + 7;
    while day <= last_day {
        let Some(date) = NaiveDate::from_ymd_opt(template.year, template.month, day) else {
            day += 7;
            continue;
        };
        if date.weekday() != weekday {
            day += 7;
            continue;
        }

        let key = OccurrenceKey {
            name: &template.name,
            location: &template.location,
            client_id: template.client_id.as_deref(),
            day_of_month: day,
            month: template.month,
            year: template.year,
            start_time: template.start_time,
            end_time: template.end_time,
        };
        if lookup.occurrence_exists(&key) {
            day += 7;
            continue;
        }

        let block = WorkBlock {
            id: Uuid::new_v4().to_string(),
            day_of_month: day,
            ..template.clone()
        };
        let assignments = template_assignments
            .iter()
            .map(|a| Assignment {
                id: Uuid::new_v4().to_string(),
                employee_id: a.employee_id.clone(),
                work_block_id: block.id.clone(),
                duration_hours: a.duration_hours,
                is_completed: false,
                completed_at: None,
                receives_payment: a.receives_payment,
                hourly_rate_override: a.hourly_rate_override,
                assigned_at: now,
            })
            .collect();

        occurrences.push(ExpandedOccurrence { block, assignments });
        day += 7;
    }

    Ok(occurrences)
}

/// The last valid day of the given month.
fn last_day_of_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}
