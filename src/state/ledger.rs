use std::collections::HashMap;

use crate::models::RecipeId;

/// Remaining servings per recipe for one allocation run.
///
/// Balances only move down within a run. Only breakfast allocation drives
/// them negative: it deliberately keeps feeding a consumer's habit after the
/// batch runs out. Lunch/dinner draws stop at zero; the pot being served is
/// tracked separately by the allocator.
#[derive(Debug, Clone, Default)]
pub struct PortionLedger {
    remaining: HashMap<RecipeId, i64>,
}

impl PortionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from `(recipe, target portions)` pairs.
    ///
    /// Targets are rounded to whole servings.
    pub fn from_targets<I>(targets: I) -> Self
    where
        I: IntoIterator<Item = (RecipeId, f64)>,
    {
        let mut ledger = Self::new();
        for (id, target) in targets {
            ledger.seed(id, target);
        }
        ledger
    }

    /// Set a recipe's balance to its rounded target, replacing any balance.
    pub fn seed(&mut self, id: RecipeId, target: f64) {
        self.remaining.insert(id, round_portions(target));
    }

    /// Seed a recipe only if the ledger does not know it yet.
    ///
    /// Returns true when a new batch was seeded.
    pub fn seed_if_untracked(&mut self, id: RecipeId, target: f64) -> bool {
        if self.is_tracked(id) {
            return false;
        }
        self.seed(id, target);
        true
    }

    pub fn is_tracked(&self, id: RecipeId) -> bool {
        self.remaining.contains_key(&id)
    }

    /// Current balance; untracked recipes count as zero.
    pub fn remaining(&self, id: RecipeId) -> i64 {
        self.remaining.get(&id).copied().unwrap_or(0)
    }

    /// Balance if tracked, otherwise what a fresh batch of `target` would hold.
    pub fn projected(&self, id: RecipeId, target: f64) -> i64 {
        match self.remaining.get(&id) {
            Some(balance) => *balance,
            None => round_portions(target),
        }
    }

    /// Take `portions` servings. No floor: the balance may go negative.
    pub fn consume(&mut self, id: RecipeId, portions: i64) -> i64 {
        let balance = self.remaining.entry(id).or_insert(0);
        *balance -= portions;
        *balance
    }

    /// Take up to `portions` servings without going below zero.
    ///
    /// Returns the servings actually taken.
    pub fn draw(&mut self, id: RecipeId, portions: i64) -> i64 {
        let balance = self.remaining.entry(id).or_insert(0);
        let taken = portions.min(*balance).max(0);
        *balance -= taken;
        taken
    }

    /// Recipes whose balance is below zero.
    pub fn overdrawn(&self) -> Vec<(RecipeId, i64)> {
        let mut out: Vec<(RecipeId, i64)> = self
            .remaining
            .iter()
            .filter(|(_, b)| **b < 0)
            .map(|(id, b)| (*id, *b))
            .collect();
        out.sort_unstable();
        out
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Round a target batch size to whole servings, half away from zero.
pub fn round_portions(target: f64) -> i64 {
    if target.is_finite() {
        target.round() as i64
    } else {
        0
    }
}
