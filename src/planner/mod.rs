pub mod breakfast;
pub mod config;
pub mod constants;
pub mod consumers;
pub mod emitter;
pub mod engine;
pub mod history;
pub mod lunch_dinner;
pub mod selection;
pub mod snack;

pub use breakfast::allocate_breakfasts;
pub use config::PlannerConfig;
pub use constants::*;
pub use consumers::resolve_consumers;
pub use emitter::emit_assignments;
pub use engine::{distribute_week, DistributionInput, WeeklyDistribution};
pub use history::{analyze_history, breakfast_habits, HabitCount};
pub use lunch_dinner::{allocate_lunch_dinner, lunch_dinner_slots, Batch, LunchDinnerPlan};
pub use selection::{
    select_any, select_batch, select_fresh, select_fresh_with_portions, select_with_portions,
    weighted_pick, BatchContext, Candidate, SelectionTier,
};
pub use snack::{slot_for_hour, suggest_snack, SnackSuggestion};
