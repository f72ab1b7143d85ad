use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::models::{PlanEntry, Recipe, RecipeId};

/// Write plan entries to a CSV file, one row per entry.
pub fn write_plan_csv(entries: &[&PlanEntry], recipes: &[Recipe], path: &Path) -> Result<()> {
    let titles: HashMap<RecipeId, &str> = recipes.iter().map(|r| (r.id, r.title.as_str())).collect();
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date",
        "day_of_week",
        "meal_type",
        "recipe_id",
        "recipe_title",
        "family_member_id",
        "portions",
    ])?;

    for entry in entries {
        wtr.write_record([
            entry.date.to_string(),
            entry.day_of_week.clone(),
            entry.meal_type.to_string(),
            entry.recipe_id.to_string(),
            titles.get(&entry.recipe_id).copied().unwrap_or("").to_string(),
            entry
                .family_member_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            format!("{}", entry.portions),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
