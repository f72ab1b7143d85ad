use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use crate::models::{Category, Consumer, FamilyMember, HistoryRecord, MealAssignment, Recipe, RecipeId};
use crate::planner::breakfast::allocate_breakfasts;
use crate::planner::config::PlannerConfig;
use crate::planner::consumers::resolve_consumers;
use crate::planner::emitter::emit_assignments;
use crate::planner::history::analyze_history;
use crate::planner::lunch_dinner::{allocate_lunch_dinner, Batch};
use crate::planner::selection::Candidate;
use crate::state::{ConsumptionSet, PortionLedger};

/// Pre-fetched inputs for one distribution run.
#[derive(Debug, Clone, Default)]
pub struct DistributionInput {
    pub recipes: Vec<Recipe>,
    pub family: Vec<FamilyMember>,
    /// Prior-week plan; an empty list when it could not be fetched.
    pub history: Vec<HistoryRecord>,
    /// Batch sizes that replace a recipe's declared `portions`.
    pub portion_overrides: HashMap<RecipeId, f64>,
    /// Recipes excluded from planning.
    pub hidden: HashSet<RecipeId>,
}

impl DistributionInput {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            ..Default::default()
        }
    }

    /// Resolved batch size: override, then declared portions, then the default.
    pub fn target_portions(&self, recipe: &Recipe, config: &PlannerConfig) -> f64 {
        self.portion_overrides
            .get(&recipe.id)
            .copied()
            .or(recipe.portions)
            .unwrap_or(config.default_portions)
    }

    /// Recipes that are not hidden.
    pub fn visible_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(|r| !self.hidden.contains(&r.id))
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct WeeklyDistribution {
    pub consumers: Vec<Consumer>,
    pub assignments: Vec<MealAssignment>,
    /// Lunch/dinner pots in cooking order.
    pub batches: Vec<Batch>,
    /// Final portion balances.
    pub ledger: PortionLedger,
}

impl WeeklyDistribution {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Distribute recipes over every (day, meal, consumer) of the coming week.
///
/// Pure computation: all state lives for this call only, and the sole
/// source of variation is `rng`. Degenerate inputs produce partial or empty
/// plans rather than errors.
pub fn distribute_week<R: Rng + ?Sized>(
    input: &DistributionInput,
    config: &PlannerConfig,
    rng: &mut R,
) -> WeeklyDistribution {
    let consumers = resolve_consumers(&input.family, config.eaters);
    if consumers.is_empty() {
        warn!("no consumers to plan for");
    }

    let habits = analyze_history(&input.history, &consumers);

    let visible: Vec<&Recipe> = input.visible_recipes().collect();
    let mut ledger = PortionLedger::from_targets(
        visible
            .iter()
            .map(|r| (r.id, input.target_portions(r, config))),
    );
    let mut consumption = ConsumptionSet::new();

    let mut breakfast_pool: Vec<&Recipe> = visible
        .iter()
        .copied()
        .filter(|r| r.category == Category::Breakfast)
        .collect();
    breakfast_pool.shuffle(rng);

    let breakfasts = allocate_breakfasts(
        &consumers,
        &habits,
        &breakfast_pool,
        &mut ledger,
        &mut consumption,
        config.breakfast_attempt_cap,
        rng,
    );

    let candidates: Vec<Candidate> = visible
        .iter()
        .filter(|r| r.category.is_lunch_dinner())
        .map(|r| Candidate::new(*r, input.target_portions(r, config)))
        .collect();

    let lunch_dinner = allocate_lunch_dinner(&consumers, &candidates, &mut ledger, &mut consumption, rng);

    let assignments = emit_assignments(breakfasts, lunch_dinner.assignments);

    info!(
        consumers = consumers.len(),
        assignments = assignments.len(),
        batches = lunch_dinner.batches.len(),
        "weekly distribution complete"
    );
    for (id, balance) in ledger.overdrawn() {
        info!(recipe_id = id, balance, "recipe planned beyond its batch size");
    }

    WeeklyDistribution {
        consumers,
        assignments,
        batches: lunch_dinner.batches,
        ledger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Vec<Recipe> {
        vec![
            Recipe::new(1, Category::Breakfast, 4.0, 10.0),
            Recipe::new(2, Category::Soup, 5.0, 6.0),
            Recipe::new(3, Category::Main, 3.0, 4.0),
            Recipe::new(4, Category::Side, 5.0, 4.0),
            Recipe::new(5, Category::Snack, 5.0, 4.0),
        ]
    }

    #[test]
    fn test_target_portions_resolution() {
        let mut input = DistributionInput::new(catalog());
        input.portion_overrides.insert(2, 12.0);
        let config = PlannerConfig::default();

        assert_eq!(input.target_portions(&input.recipes[1], &config), 12.0);
        assert_eq!(input.target_portions(&input.recipes[2], &config), 4.0);

        let no_portions = Recipe {
            portions: None,
            ..Recipe::new(9, Category::Main, 1.0, 0.0)
        };
        assert_eq!(input.target_portions(&no_portions, &config), config.default_portions);
    }

    #[test]
    fn test_hidden_recipes_are_never_planned() {
        let mut input = DistributionInput::new(catalog());
        input.hidden.insert(2);
        let mut rng = StdRng::seed_from_u64(21);

        let week = distribute_week(&input, &PlannerConfig::default(), &mut rng);

        assert!(week.assignments.iter().all(|a| a.recipe_id != 2));
        assert!(!week.ledger.is_tracked(2));
    }

    #[test]
    fn test_sides_and_snacks_are_not_distributed() {
        let input = DistributionInput::new(catalog());
        let mut rng = StdRng::seed_from_u64(21);

        let week = distribute_week(&input, &PlannerConfig::default(), &mut rng);

        assert!(week.assignments.iter().all(|a| a.recipe_id != 4 && a.recipe_id != 5));
        let lunches = week
            .assignments
            .iter()
            .filter(|a| a.slot_type == SlotType::Lunch)
            .count();
        assert_eq!(lunches, 7);
    }

    #[test]
    fn test_zero_consumers_plan_nothing() {
        let input = DistributionInput::new(catalog());
        let config = PlannerConfig {
            eaters: 0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(21);

        let week = distribute_week(&input, &config, &mut rng);
        assert!(week.is_empty());
    }
}
