use std::collections::HashMap;

use crate::models::{Consumer, ConsumerId, HistoryRecord, RecipeId, SlotType};

/// One entry of a consumer's breakfast rotation queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitCount {
    pub recipe_id: RecipeId,
    pub count: usize,
}

/// Rank a consumer's prior-week breakfasts by how often they were eaten.
///
/// Most frequent first; ties keep the order in which recipes first appear
/// in `history`.
pub fn breakfast_habits(history: &[HistoryRecord], consumer: ConsumerId) -> Vec<HabitCount> {
    let mut habits: Vec<HabitCount> = Vec::new();

    for record in history {
        if record.slot_type != SlotType::Breakfast || record.consumer_id != Some(consumer) {
            continue;
        }
        match habits.iter_mut().find(|h| h.recipe_id == record.recipe_id) {
            Some(habit) => habit.count += 1,
            None => habits.push(HabitCount {
                recipe_id: record.recipe_id,
                count: 1,
            }),
        }
    }

    // stable sort keeps first-appearance order among equal counts
    habits.sort_by(|a, b| b.count.cmp(&a.count));
    habits
}

/// Rotation queues for every consumer.
pub fn analyze_history(
    history: &[HistoryRecord],
    consumers: &[Consumer],
) -> HashMap<ConsumerId, Vec<HabitCount>> {
    consumers
        .iter()
        .map(|c| (c.id, breakfast_habits(history, c.id)))
        .collect()
}
