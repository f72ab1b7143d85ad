use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::models::{Consumer, ConsumerId, MealAssignment, Recipe, RecipeId, SlotType};
use crate::planner::constants::DAYS_PER_WEEK;
use crate::planner::history::HabitCount;
use crate::state::{ConsumptionSet, PortionLedger};

/// Fill up to seven breakfasts per consumer.
///
/// Phase A replays each consumer's prior-week habits, most frequent first.
/// Phase B fills the remaining days from `pool`, preferring recipes with
/// portions left and otherwise rotating through the pool. Phase B makes at
/// most `attempt_cap` picks per consumer.
///
/// Both phases take one portion per breakfast and may drive the ledger
/// negative: a breakfast habit is kept even after the modelled batch is
/// used up.
pub fn allocate_breakfasts<R: Rng + ?Sized>(
    consumers: &[Consumer],
    habits: &HashMap<ConsumerId, Vec<HabitCount>>,
    pool: &[&Recipe],
    ledger: &mut PortionLedger,
    consumption: &mut ConsumptionSet,
    attempt_cap: usize,
    rng: &mut R,
) -> Vec<MealAssignment> {
    if pool.is_empty() {
        warn!("no breakfast recipes available, breakfast slots stay empty");
        return Vec::new();
    }

    let mut assignments = Vec::new();
    for consumer in consumers {
        let queue = habits.get(&consumer.id).map(Vec::as_slice).unwrap_or(&[]);
        replay_habits(consumer.id, queue, pool, ledger, consumption, &mut assignments);
        fill_remaining(consumer.id, pool, ledger, consumption, attempt_cap, rng, &mut assignments);
    }
    assignments
}

/// Phase A: assign each habit recipe to up to `count` open days.
fn replay_habits(
    consumer: ConsumerId,
    queue: &[HabitCount],
    pool: &[&Recipe],
    ledger: &mut PortionLedger,
    consumption: &mut ConsumptionSet,
    out: &mut Vec<MealAssignment>,
) {
    let mut cursor = 0;

    for habit in queue {
        if !pool.iter().any(|r| r.id == habit.recipe_id) {
            continue;
        }

        for _ in 0..habit.count {
            let Some(day) = consumption.next_open_day(cursor, SlotType::Breakfast, consumer) else {
                return;
            };
            cursor = day;
            serve(consumer, day, habit.recipe_id, ledger, consumption, out);
        }
    }
}

/// Phase B: fill whatever days are still open.
fn fill_remaining<R: Rng + ?Sized>(
    consumer: ConsumerId,
    pool: &[&Recipe],
    ledger: &mut PortionLedger,
    consumption: &mut ConsumptionSet,
    attempt_cap: usize,
    rng: &mut R,
    out: &mut Vec<MealAssignment>,
) {
    let mut rotation = 0;

    for _ in 0..attempt_cap {
        let Some(day) = consumption.next_open_day(0, SlotType::Breakfast, consumer) else {
            break;
        };

        let mut options: Vec<&Recipe> = pool.to_vec();
        options.shuffle(rng);

        let recipe_id = match options.iter().find(|r| ledger.remaining(r.id) > 0) {
            Some(r) => r.id,
            None => {
                let r = pool[rotation % pool.len()];
                rotation += 1;
                r.id
            }
        };

        debug!(%consumer, day, recipe_id, "breakfast fallback pick");
        serve(consumer, day, recipe_id, ledger, consumption, out);
    }
}

fn serve(
    consumer: ConsumerId,
    day: u8,
    recipe_id: RecipeId,
    ledger: &mut PortionLedger,
    consumption: &mut ConsumptionSet,
    out: &mut Vec<MealAssignment>,
) {
    debug_assert!(day < DAYS_PER_WEEK);
    consumption.mark(day, SlotType::Breakfast, consumer);
    ledger.consume(recipe_id, 1);
    out.push(MealAssignment::new(day, SlotType::Breakfast, recipe_id, consumer));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::planner::constants::BREAKFAST_ATTEMPT_CAP;
    use crate::planner::history::breakfast_habits;
    use crate::models::HistoryRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(
        consumers: &[Consumer],
        history: &[HistoryRecord],
        recipes: &[Recipe],
        ledger: &mut PortionLedger,
    ) -> Vec<MealAssignment> {
        let habits: HashMap<ConsumerId, Vec<HabitCount>> = consumers
            .iter()
            .map(|c| (c.id, breakfast_habits(history, c.id)))
            .collect();
        let pool: Vec<&Recipe> = recipes.iter().collect();
        let mut consumption = ConsumptionSet::new();
        let mut rng = StdRng::seed_from_u64(11);
        allocate_breakfasts(
            consumers,
            &habits,
            &pool,
            ledger,
            &mut consumption,
            BREAKFAST_ATTEMPT_CAP,
            &mut rng,
        )
    }

    #[test]
    fn test_habits_fill_days_in_order() {
        let consumer = Consumer::synthetic(1);
        let recipes = vec![
            Recipe::new(1, Category::Breakfast, 4.0, 20.0),
            Recipe::new(2, Category::Breakfast, 4.0, 20.0),
            Recipe::new(3, Category::Breakfast, 4.0, 20.0),
        ];
        let history: Vec<HistoryRecord> = [2, 1, 1, 2, 1]
            .into_iter()
            .map(|id| HistoryRecord::new(id, consumer.id, SlotType::Breakfast))
            .collect();
        let mut ledger = PortionLedger::from_targets(recipes.iter().map(|r| (r.id, 20.0)));

        let plan = run(&[consumer], &history, &recipes, &mut ledger);

        assert_eq!(plan.len(), 7);
        let first_five: Vec<u32> = plan[..5].iter().map(|a| a.recipe_id).collect();
        assert_eq!(first_five, vec![1, 1, 1, 2, 2]);
        let days: Vec<u8> = plan.iter().map(|a| a.day).collect();
        assert_eq!(days, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_habit_replay_overdraws_ledger() {
        let consumer = Consumer::synthetic(1);
        let recipes = vec![Recipe::new(1, Category::Breakfast, 4.0, 2.0)];
        let history: Vec<HistoryRecord> = (0..7)
            .map(|_| HistoryRecord::new(1, consumer.id, SlotType::Breakfast))
            .collect();
        let mut ledger = PortionLedger::from_targets([(1, 2.0)]);

        let plan = run(&[consumer], &history, &recipes, &mut ledger);

        assert_eq!(plan.len(), 7);
        assert_eq!(ledger.remaining(1), -5);
    }

    #[test]
    fn test_unknown_habit_recipe_is_skipped() {
        let consumer = Consumer::synthetic(1);
        let recipes = vec![Recipe::new(1, Category::Breakfast, 4.0, 10.0)];
        let history = vec![HistoryRecord::new(42, consumer.id, SlotType::Breakfast)];
        let mut ledger = PortionLedger::from_targets([(1, 10.0)]);

        let plan = run(&[consumer], &history, &recipes, &mut ledger);

        assert_eq!(plan.len(), 7);
        assert!(plan.iter().all(|a| a.recipe_id == 1));
    }

    #[test]
    fn test_fallback_prefers_recipes_with_portions() {
        let consumer = Consumer::synthetic(1);
        let recipes = vec![
            Recipe::new(1, Category::Breakfast, 4.0, 0.0),
            Recipe::new(2, Category::Breakfast, 4.0, 7.0),
        ];
        let mut ledger = PortionLedger::from_targets([(1, 0.0), (2, 7.0)]);

        let plan = run(&[consumer], &[], &recipes, &mut ledger);

        assert_eq!(plan.len(), 7);
        assert!(plan.iter().all(|a| a.recipe_id == 2));
        assert_eq!(ledger.remaining(2), 0);
    }

    #[test]
    fn test_fallback_rotates_when_everything_is_out() {
        let consumer = Consumer::synthetic(1);
        let recipes = vec![
            Recipe::new(1, Category::Breakfast, 4.0, 0.0),
            Recipe::new(2, Category::Breakfast, 4.0, 0.0),
        ];
        let mut ledger = PortionLedger::from_targets([(1, 0.0), (2, 0.0)]);

        let plan = run(&[consumer], &[], &recipes, &mut ledger);

        let ids: Vec<u32> = plan.iter().map(|a| a.recipe_id).collect();
        assert_eq!(ids, vec![1, 2, 1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_empty_pool_terminates() {
        let consumers = vec![Consumer::synthetic(1), Consumer::synthetic(2)];
        let mut ledger = PortionLedger::new();
        let plan = run(&consumers, &[], &[], &mut ledger);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_attempt_cap_limits_fallback() {
        let consumer = Consumer::synthetic(1);
        let recipes = vec![Recipe::new(1, Category::Breakfast, 4.0, 10.0)];
        let pool: Vec<&Recipe> = recipes.iter().collect();
        let mut ledger = PortionLedger::from_targets([(1, 10.0)]);
        let mut consumption = ConsumptionSet::new();
        let mut rng = StdRng::seed_from_u64(5);

        let plan = allocate_breakfasts(
            &[consumer],
            &HashMap::new(),
            &pool,
            &mut ledger,
            &mut consumption,
            3,
            &mut rng,
        );
        assert_eq!(plan.len(), 3);
    }
}
