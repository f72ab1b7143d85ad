use serde::{Deserialize, Serialize};

use crate::planner::constants::{ENTRY_PORTIONS, MAX_RATING, MIN_RATING};

/// Identifier of a recipe in the catalog.
pub type RecipeId = u32;

/// Recipe category as stored in the catalog.
///
/// Unknown category names deserialize as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Breakfast,
    Soup,
    Main,
    Side,
    Snack,
    Yummy,
    Drink,
    #[serde(other)]
    Other,
}

impl Category {
    /// Whether a recipe of this category can be cooked as a lunch/dinner pot.
    pub fn is_lunch_dinner(self) -> bool {
        matches!(self, Category::Soup | Category::Main)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Soup => "soup",
            Category::Main => "main",
            Category::Side => "side",
            Category::Snack => "snack",
            Category::Yummy => "yummy",
            Category::Drink => "drink",
            Category::Other => "other",
        }
    }
}

/// A recipe from the catalog. Read-only for the duration of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,

    #[serde(default)]
    pub title: String,

    pub category: Category,

    /// User rating on a 0..=5 scale; missing means unrated.
    #[serde(default)]
    pub rating: Option<f64>,

    /// Declared batch size; missing means the configured default.
    #[serde(default)]
    pub portions: Option<f64>,
}

impl Recipe {
    pub fn new(id: RecipeId, category: Category, rating: f64, portions: f64) -> Self {
        Self {
            id,
            title: format!("Recipe {}", id),
            category,
            rating: Some(rating),
            portions: Some(portions),
        }
    }

    /// Rating clamped to the valid range, unrated counted as the minimum.
    #[inline]
    pub fn effective_rating(&self) -> f64 {
        self.rating
            .filter(|r| r.is_finite())
            .unwrap_or(MIN_RATING)
            .clamp(MIN_RATING, MAX_RATING)
    }

    /// Selection weight for the lunch/dinner roulette: `(rating + 1)^2`.
    ///
    /// Always >= 1, so unrated recipes still get picked now and then.
    #[inline]
    pub fn selection_weight(&self) -> f64 {
        let r = self.effective_rating() + 1.0;
        r * r
    }

    /// Portions written to a stored plan entry: the declared batch size, or
    /// one when it is missing or not positive.
    pub fn entry_portions(&self) -> f64 {
        self.portions
            .filter(|p| p.is_finite() && *p > 0.0)
            .unwrap_or(ENTRY_PORTIONS)
    }

    /// Display label, falling back to the id for untitled recipes.
    pub fn label(&self) -> String {
        if self.title.is_empty() {
            format!("#{}", self.id)
        } else {
            self.title.clone()
        }
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Recipe {}

impl std::hash::Hash for Recipe {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_weight() {
        let unrated = Recipe {
            rating: None,
            ..Recipe::new(1, Category::Main, 0.0, 4.0)
        };
        assert_eq!(unrated.selection_weight(), 1.0);

        let top = Recipe::new(2, Category::Soup, 5.0, 4.0);
        assert_eq!(top.selection_weight(), 36.0);

        let out_of_range = Recipe::new(3, Category::Soup, 9.0, 4.0);
        assert_eq!(out_of_range.selection_weight(), 36.0);
    }

    #[test]
    fn test_unknown_category_is_other() {
        let json = r#"{"id": 7, "title": "Kompot", "category": "dessert", "rating": 3}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.category, Category::Other);
        assert_eq!(recipe.portions, None);
    }

    #[test]
    fn test_lunch_dinner_categories() {
        assert!(Category::Soup.is_lunch_dinner());
        assert!(Category::Main.is_lunch_dinner());
        assert!(!Category::Side.is_lunch_dinner());
        assert!(!Category::Breakfast.is_lunch_dinner());
    }

    #[test]
    fn test_entry_portions_fall_back_to_one() {
        assert_eq!(Recipe::new(1, Category::Soup, 4.0, 8.0).entry_portions(), 8.0);
        assert_eq!(Recipe::new(2, Category::Soup, 4.0, 0.0).entry_portions(), 1.0);
        let undeclared = Recipe {
            portions: None,
            ..Recipe::new(3, Category::Main, 4.0, 8.0)
        };
        assert_eq!(undeclared.entry_portions(), 1.0);
    }

    #[test]
    fn test_equality_by_id() {
        let a = Recipe::new(1, Category::Main, 2.0, 4.0);
        let b = Recipe::new(1, Category::Soup, 5.0, 8.0);
        assert_eq!(a, b);
    }
}
