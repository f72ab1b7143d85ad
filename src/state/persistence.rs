use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::{FamilyMember, Recipe, RecipeId};

fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load the recipe catalog from a JSON file.
///
/// Deduplicates by id (last occurrence wins) and keeps first-seen order.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> = read_json(path)?;

    let mut order: Vec<RecipeId> = Vec::new();
    let mut seen: HashMap<RecipeId, Recipe> = HashMap::new();
    for recipe in recipes {
        if !seen.contains_key(&recipe.id) {
            order.push(recipe.id);
        }
        seen.insert(recipe.id, recipe);
    }

    Ok(order
        .into_iter()
        .filter_map(|id| seen.remove(&id))
        .collect())
}

/// Load the family registry. A missing file means no family members.
pub fn load_family<P: AsRef<Path>>(path: P) -> Result<Vec<FamilyMember>> {
    if !path.as_ref().exists() {
        return Ok(Vec::new());
    }
    read_json(path)
}

/// Load per-recipe portion overrides, e.g. `{"3": 8, "5": 4.5}`.
pub fn load_portion_overrides<P: AsRef<Path>>(path: P) -> Result<HashMap<RecipeId, f64>> {
    read_json(path)
}

/// Load the list of hidden recipe ids.
pub fn load_hidden<P: AsRef<Path>>(path: P) -> Result<Vec<RecipeId>> {
    read_json(path)
}
