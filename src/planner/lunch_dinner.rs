use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, warn};

use crate::models::{Consumer, MealAssignment, RecipeId, SlotType};
use crate::planner::constants::{DAYS_PER_WEEK, LUNCH_DINNER_SLOTS};
use crate::planner::selection::{select_batch, BatchContext, Candidate, SelectionTier};
use crate::state::{ConsumptionSet, PortionLedger};

/// One cooked pot and how long it lasted.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub recipe_id: RecipeId,
    pub tier: SelectionTier,
    /// Index into the 14 ordered lunch/dinner slots where the batch was cooked.
    pub first_slot: usize,
    /// Servings the pot held when it was cooked.
    pub portions: i64,
    pub slots_served: usize,
}

/// Result of the lunch/dinner pass.
#[derive(Debug, Clone, Default)]
pub struct LunchDinnerPlan {
    pub assignments: Vec<MealAssignment>,
    pub batches: Vec<Batch>,
}

/// The communal slots in serving order: Monday lunch, Monday dinner, ...
pub fn lunch_dinner_slots() -> impl Iterator<Item = (u8, SlotType)> {
    (0..DAYS_PER_WEEK)
        .flat_map(|day| [(day, SlotType::Lunch), (day, SlotType::Dinner)])
        .take(LUNCH_DINNER_SLOTS)
}

/// Fill lunches and dinners with shared pots.
///
/// A pot is served to every consumer at once and stays on the stove for the
/// following slots until fewer portions remain in it than there are
/// consumers; then a new batch is cooked via [`select_batch`]. Every cook
/// fills the pot with the recipe's full batch size, even when the same
/// recipe comes round again. The run ledger only ever decreases and feeds
/// the portion tiers of the next selection.
///
/// A batch smaller than the consumer count is still served once before it
/// is replaced.
pub fn allocate_lunch_dinner<R: Rng + ?Sized>(
    consumers: &[Consumer],
    candidates: &[Candidate],
    ledger: &mut PortionLedger,
    consumption: &mut ConsumptionSet,
    rng: &mut R,
) -> LunchDinnerPlan {
    let mut plan = LunchDinnerPlan::default();
    if candidates.is_empty() {
        warn!("no soup or main recipes available, lunch and dinner slots stay empty");
        return plan;
    }

    let needed = consumers.len() as i64;
    let mut used: HashSet<RecipeId> = HashSet::new();
    let mut current: Option<usize> = None;
    let mut pot_left: i64 = 0;

    for (slot_idx, (day, slot)) in lunch_dinner_slots().enumerate() {
        if current.is_none() || pot_left < needed {
            let ctx = BatchContext {
                ledger,
                used: &used,
                needed,
            };
            current = match select_batch(candidates, &ctx, rng) {
                Some((pick, tier)) => {
                    ledger.seed_if_untracked(pick.id(), pick.target);
                    used.insert(pick.id());
                    pot_left = pick.batch_size();
                    debug!(
                        recipe_id = pick.id(),
                        ?tier,
                        slot_idx,
                        portions = pot_left,
                        "cooking new batch"
                    );
                    plan.batches.push(Batch {
                        recipe_id: pick.id(),
                        tier,
                        first_slot: slot_idx,
                        portions: pot_left,
                        slots_served: 0,
                    });
                    Some(plan.batches.len() - 1)
                }
                None => None,
            };
        }

        let Some(b) = current else {
            continue;
        };
        let batch = &mut plan.batches[b];
        for consumer in consumers {
            consumption.mark(day, slot, consumer.id);
            plan.assignments
                .push(MealAssignment::new(day, slot, batch.recipe_id, consumer.id));
        }
        ledger.draw(batch.recipe_id, needed);
        pot_left -= needed;
        batch.slots_served += 1;
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Recipe};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(consumers: &[Consumer], recipes: &[Recipe], ledger: &mut PortionLedger) -> LunchDinnerPlan {
        let candidates: Vec<Candidate> = recipes
            .iter()
            .map(|r| Candidate::new(r, r.portions.unwrap_or(1.0)))
            .collect();
        let mut consumption = ConsumptionSet::new();
        let mut rng = StdRng::seed_from_u64(99);
        allocate_lunch_dinner(consumers, &candidates, ledger, &mut consumption, &mut rng)
    }

    #[test]
    fn test_slot_order() {
        let slots: Vec<(u8, SlotType)> = lunch_dinner_slots().collect();
        assert_eq!(slots.len(), LUNCH_DINNER_SLOTS);
        assert_eq!(slots[0], (0, SlotType::Lunch));
        assert_eq!(slots[1], (0, SlotType::Dinner));
        assert_eq!(slots[13], (6, SlotType::Dinner));
    }

    #[test]
    fn test_pot_lasts_floor_p_over_c_slots() {
        let consumers = vec![Consumer::synthetic(1), Consumer::synthetic(2), Consumer::synthetic(3)];
        let recipes = vec![Recipe::new(1, Category::Soup, 4.0, 10.0)];
        let mut ledger = PortionLedger::new();

        let plan = run(&consumers, &recipes, &mut ledger);

        assert_eq!(plan.batches[0].tier, SelectionTier::FreshWithPortions);
        assert_eq!(plan.batches[1].first_slot, 3);
        assert_eq!(plan.batches[1].tier, SelectionTier::Any);
        let served: Vec<usize> = plan.batches.iter().map(|b| b.slots_served).collect();
        assert_eq!(served, vec![3, 3, 3, 3, 2]);
        assert!(plan.batches.iter().all(|b| b.portions == 10));
        assert_eq!(plan.assignments.len(), 14 * 3);
        assert_eq!(ledger.remaining(1), 0);
    }

    #[test]
    fn test_recooked_recipe_gets_a_full_pot() {
        let consumers = vec![Consumer::synthetic(1), Consumer::synthetic(2)];
        let recipes = vec![
            Recipe::new(1, Category::Soup, 4.0, 4.0),
            Recipe::new(2, Category::Main, 4.0, 4.0),
        ];
        let mut ledger = PortionLedger::new();

        let plan = run(&consumers, &recipes, &mut ledger);

        assert_eq!(plan.batches.len(), 7);
        assert!(plan.batches.iter().all(|b| b.slots_served == 2));
        assert!(ledger.overdrawn().is_empty());
    }

    #[test]
    fn test_everyone_shares_the_pot() {
        let consumers = vec![Consumer::synthetic(1), Consumer::synthetic(2)];
        let recipes = vec![
            Recipe::new(1, Category::Soup, 4.0, 6.0),
            Recipe::new(2, Category::Main, 2.0, 6.0),
        ];
        let mut ledger = PortionLedger::new();

        let plan = run(&consumers, &recipes, &mut ledger);

        for (day, slot) in lunch_dinner_slots() {
            let served: Vec<&MealAssignment> = plan
                .assignments
                .iter()
                .filter(|a| a.day == day && a.slot_type == slot)
                .collect();
            assert_eq!(served.len(), 2);
            assert_eq!(served[0].recipe_id, served[1].recipe_id);
        }
    }

    #[test]
    fn test_prefers_uncooked_recipes() {
        let consumers = vec![Consumer::synthetic(1)];
        let recipes = vec![
            Recipe::new(1, Category::Soup, 5.0, 2.0),
            Recipe::new(2, Category::Main, 0.0, 2.0),
            Recipe::new(3, Category::Main, 1.0, 2.0),
        ];
        let mut ledger = PortionLedger::new();

        let plan = run(&consumers, &recipes, &mut ledger);

        let first_three: HashSet<RecipeId> = plan.batches[..3].iter().map(|b| b.recipe_id).collect();
        assert_eq!(first_three.len(), 3);
        assert!(plan.batches[..3].iter().all(|b| b.slots_served == 2));
    }

    #[test]
    fn test_zero_portions_forces_new_batch_each_slot() {
        let consumers = vec![Consumer::synthetic(1)];
        let recipes = vec![Recipe::new(1, Category::Main, 3.0, 0.0)];
        let mut ledger = PortionLedger::new();

        let plan = run(&consumers, &recipes, &mut ledger);

        assert_eq!(plan.batches.len(), 14);
        assert!(plan.batches.iter().all(|b| b.slots_served == 1));
        assert_eq!(ledger.remaining(1), 0);
    }

    #[test]
    fn test_empty_candidates_leave_slots_empty() {
        let consumers = vec![Consumer::synthetic(1)];
        let mut ledger = PortionLedger::new();
        let plan = run(&consumers, &[], &mut ledger);
        assert!(plan.assignments.is_empty());
        assert!(plan.batches.is_empty());
    }
}
