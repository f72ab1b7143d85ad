use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PlannerError, Result};
use crate::models::{Category, Recipe, RecipeId, SlotType};
use crate::planner::constants::{AFTERNOON_SNACK_UNTIL_HOUR, BREAKFAST_UNTIL_HOUR, LUNCH_UNTIL_HOUR};

/// Meal slot that a snack eaten at `hour` (0..=23) belongs to.
pub fn slot_for_hour(hour: u32) -> SlotType {
    match hour {
        h if h < BREAKFAST_UNTIL_HOUR => SlotType::Breakfast,
        h if h < LUNCH_UNTIL_HOUR => SlotType::Lunch,
        h if h < AFTERNOON_SNACK_UNTIL_HOUR => SlotType::AfternoonSnack,
        _ => SlotType::Dinner,
    }
}

/// A snack picked for right now.
#[derive(Debug, Clone)]
pub struct SnackSuggestion<'a> {
    pub slot: SlotType,
    pub recipe: &'a Recipe,
}

/// Pick a random visible snack recipe for the slot matching `hour`.
pub fn suggest_snack<'a, R: Rng + ?Sized>(
    recipes: &'a [Recipe],
    hidden: &HashSet<RecipeId>,
    hour: u32,
    rng: &mut R,
) -> Result<SnackSuggestion<'a>> {
    let snacks: Vec<&Recipe> = recipes
        .iter()
        .filter(|r| r.category == Category::Snack && !hidden.contains(&r.id))
        .collect();

    let recipe = snacks.choose(rng).copied().ok_or(PlannerError::NoSnackRecipes)?;

    Ok(SnackSuggestion {
        slot: slot_for_hour(hour),
        recipe,
    })
}
