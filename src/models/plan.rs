use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::consumer::ConsumerId;
use crate::models::recipe::RecipeId;

/// Meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    Breakfast,
    Lunch,
    AfternoonSnack,
    Dinner,
    Snack,
}

impl SlotType {
    /// Slots the weekly distribution fills, in display order.
    pub const DISTRIBUTED: [SlotType; 3] = [SlotType::Breakfast, SlotType::Lunch, SlotType::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            SlotType::Breakfast => "breakfast",
            SlotType::Lunch => "lunch",
            SlotType::AfternoonSnack => "afternoon_snack",
            SlotType::Dinner => "dinner",
            SlotType::Snack => "snack",
        }
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prior week's assignment, used to seed breakfast habits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub recipe_id: RecipeId,

    /// `None` for entries not tied to a family member.
    #[serde(default)]
    pub consumer_id: Option<ConsumerId>,

    pub slot_type: SlotType,
}

impl HistoryRecord {
    pub fn new(recipe_id: RecipeId, consumer_id: ConsumerId, slot_type: SlotType) -> Self {
        Self {
            recipe_id,
            consumer_id: Some(consumer_id),
            slot_type,
        }
    }
}

/// One recipe assigned to one consumer for one slot of the coming week.
///
/// `day` is an offset from the week start: 0 = Monday .. 6 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MealAssignment {
    pub day: u8,
    pub slot_type: SlotType,
    pub recipe_id: RecipeId,
    pub consumer_id: ConsumerId,
}

impl MealAssignment {
    pub fn new(day: u8, slot_type: SlotType, recipe_id: RecipeId, consumer_id: ConsumerId) -> Self {
        Self {
            day,
            slot_type,
            recipe_id,
            consumer_id,
        }
    }
}

/// A dated row in the plan store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub meal_type: SlotType,
    pub recipe_id: RecipeId,

    #[serde(default = "default_entry_portions")]
    pub portions: f64,

    #[serde(default)]
    pub family_member_id: Option<u32>,
}

fn default_entry_portions() -> f64 {
    1.0
}

impl PlanEntry {
    /// Convert back into a history record for the next run.
    pub fn to_history(&self) -> HistoryRecord {
        HistoryRecord {
            recipe_id: self.recipe_id,
            consumer_id: self.family_member_id.map(ConsumerId::Member),
            slot_type: self.meal_type,
        }
    }
}
