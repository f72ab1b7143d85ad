use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{MealAssignment, Recipe, RecipeId, SlotType};
use crate::planner::constants::{DAYS_PER_WEEK, WEEKDAY_SHORT};
use crate::planner::WeeklyDistribution;
use crate::schedule::date_for_day;

fn recipe_label(recipes: &HashMap<RecipeId, &Recipe>, id: RecipeId) -> String {
    recipes
        .get(&id)
        .map(|r| r.label())
        .unwrap_or_else(|| format!("#{}", id))
}

/// Display a distributed week as one block per day.
pub fn display_week(week: &WeeklyDistribution, recipes: &[Recipe], start: NaiveDate) {
    if week.is_empty() {
        println!("No meals planned (no consumers or no suitable recipes).");
        return;
    }

    let by_id: HashMap<RecipeId, &Recipe> = recipes.iter().map(|r| (r.id, r)).collect();
    let name_width = week
        .consumers
        .iter()
        .map(|c| c.display_name.len())
        .max()
        .unwrap_or(8);

    println!();
    println!("=== Week of {} ===", start);

    for day in 0..DAYS_PER_WEEK {
        println!();
        println!("{} {}", WEEKDAY_SHORT[usize::from(day)], date_for_day(start, day));

        for slot in SlotType::DISTRIBUTED {
            let served: Vec<&MealAssignment> = week
                .assignments
                .iter()
                .filter(|a| a.day == day && a.slot_type == slot)
                .collect();

            if served.is_empty() {
                println!("  {:<10} (empty)", slot.as_str());
                continue;
            }

            // A shared pot prints once for the whole table
            let shared = served.windows(2).all(|w| w[0].recipe_id == w[1].recipe_id);
            if shared && slot != SlotType::Breakfast {
                println!(
                    "  {:<10} {} (x{})",
                    slot.as_str(),
                    recipe_label(&by_id, served[0].recipe_id),
                    served.len()
                );
                continue;
            }

            println!("  {}", slot.as_str());
            for a in served {
                let name = week
                    .consumers
                    .iter()
                    .find(|c| c.id == a.consumer_id)
                    .map(|c| c.display_name.as_str())
                    .unwrap_or("?");
                println!(
                    "    {:<width$}  {}",
                    name,
                    recipe_label(&by_id, a.recipe_id),
                    width = name_width
                );
            }
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Consumers: {}", week.consumers.len());
    println!("Assignments: {}", week.assignments.len());
    println!("Batches cooked: {}", week.batches.len());
    for batch in &week.batches {
        println!(
            "  {} - {} portions, {} slot(s)",
            recipe_label(&by_id, batch.recipe_id),
            batch.portions,
            batch.slots_served
        );
    }
    let overdrawn = week.ledger.overdrawn();
    if !overdrawn.is_empty() {
        println!("Planned beyond batch size:");
        for (id, balance) in overdrawn {
            println!("  {} ({})", recipe_label(&by_id, id), balance);
        }
    }
    println!();
}
