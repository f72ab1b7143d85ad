pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod schedule;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{Consumer, MealAssignment, Recipe};
pub use planner::{distribute_week, DistributionInput, PlannerConfig, WeeklyDistribution};
