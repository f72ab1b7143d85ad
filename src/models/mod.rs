pub mod consumer;
pub mod plan;
pub mod recipe;

pub use consumer::{Consumer, ConsumerId, FamilyMember};
pub use plan::{HistoryRecord, MealAssignment, PlanEntry, SlotType};
pub use recipe::{Category, Recipe, RecipeId};
