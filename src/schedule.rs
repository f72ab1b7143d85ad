//! Calendar mapping for planned weeks.
//!
//! The engine works in day offsets (0 = Monday .. 6 = Sunday); this module
//! turns them into dates and stored plan entries.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{MealAssignment, PlanEntry, Recipe, RecipeId};
use crate::planner::constants::{weekday_name, DAYS_PER_WEEK, ENTRY_PORTIONS};

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date - Days::new(offset)
}

/// Monday of the week after the one containing `today`.
pub fn next_week_start(today: NaiveDate) -> NaiveDate {
    week_start(today) + Days::new(u64::from(DAYS_PER_WEEK))
}

/// Inclusive `(monday, sunday)` range of the week starting at `start`.
pub fn week_range(start: NaiveDate) -> (NaiveDate, NaiveDate) {
    (start, start + Days::new(u64::from(DAYS_PER_WEEK) - 1))
}

/// Inclusive range of the week before the one starting at `start`.
pub fn previous_week(start: NaiveDate) -> (NaiveDate, NaiveDate) {
    week_range(start - Days::new(u64::from(DAYS_PER_WEEK)))
}

pub fn date_for_day(start: NaiveDate, day: u8) -> NaiveDate {
    start + Days::new(u64::from(day))
}

/// Turn assignments into dated store rows.
///
/// Each row carries its recipe's declared portions. Synthetic consumers are
/// stored without a family member.
pub fn to_plan_entries(
    start: NaiveDate,
    assignments: &[MealAssignment],
    recipes: &[Recipe],
) -> Vec<PlanEntry> {
    let portions: HashMap<RecipeId, f64> = recipes
        .iter()
        .map(|r| (r.id, r.entry_portions()))
        .collect();

    assignments
        .iter()
        .map(|a| PlanEntry {
            date: date_for_day(start, a.day),
            day_of_week: weekday_name(a.day).to_string(),
            meal_type: a.slot_type,
            recipe_id: a.recipe_id,
            portions: portions.get(&a.recipe_id).copied().unwrap_or(ENTRY_PORTIONS),
            family_member_id: a.consumer_id.member_id(),
        })
        .collect()
}

/// Weekday name for an arbitrary date.
pub fn weekday_name_of(date: NaiveDate) -> &'static str {
    // num_days_from_monday is always < 7
    weekday_name(date.weekday().num_days_from_monday() as u8)
}
