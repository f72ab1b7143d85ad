use std::collections::HashSet;

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Recipe, RecipeId};
use crate::state::{round_portions, PortionLedger};

/// A recipe eligible for a lunch/dinner pot, with its resolved batch size.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub recipe: &'a Recipe,
    pub target: f64,
}

impl<'a> Candidate<'a> {
    pub fn new(recipe: &'a Recipe, target: f64) -> Self {
        Self { recipe, target }
    }

    #[inline]
    pub fn id(&self) -> RecipeId {
        self.recipe.id
    }

    /// Servings one fresh cook of this recipe yields.
    pub fn batch_size(&self) -> i64 {
        round_portions(self.target)
    }
}

/// Which fallback tier produced a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTier {
    /// Not yet cooked this run, and enough portions for everyone.
    FreshWithPortions,
    /// Enough portions for everyone, possibly already cooked this run.
    WithPortions,
    /// Not yet cooked this run, portions ignored.
    Fresh,
    /// Anything in the pool.
    Any,
}

/// State the tiers filter against.
#[derive(Debug, Clone, Copy)]
pub struct BatchContext<'a> {
    pub ledger: &'a PortionLedger,
    pub used: &'a HashSet<RecipeId>,
    /// Servings one slot takes (the consumer count).
    pub needed: i64,
}

impl BatchContext<'_> {
    fn is_fresh(&self, candidate: &Candidate) -> bool {
        !self.used.contains(&candidate.id())
    }

    fn has_portions(&self, candidate: &Candidate) -> bool {
        self.ledger.projected(candidate.id(), candidate.target) >= self.needed
    }
}

/// Roulette draw weighted by `(rating + 1)^2`.
pub fn weighted_pick<'a, R: Rng + ?Sized>(
    pool: &[Candidate<'a>],
    rng: &mut R,
) -> Option<Candidate<'a>> {
    if pool.is_empty() {
        return None;
    }
    match WeightedIndex::new(pool.iter().map(|c| c.recipe.selection_weight())) {
        Ok(dist) => Some(pool[dist.sample(rng)]),
        Err(_) => pool.choose(rng).copied(),
    }
}

fn pick_where<'a, R, F>(candidates: &[Candidate<'a>], rng: &mut R, keep: F) -> Option<Candidate<'a>>
where
    R: Rng + ?Sized,
    F: Fn(&Candidate) -> bool,
{
    let pool: Vec<Candidate<'a>> = candidates.iter().filter(|c| keep(*c)).copied().collect();
    weighted_pick(&pool, rng)
}

pub fn select_fresh_with_portions<'a, R: Rng + ?Sized>(
    candidates: &[Candidate<'a>],
    ctx: &BatchContext,
    rng: &mut R,
) -> Option<Candidate<'a>> {
    pick_where(candidates, rng, |c| ctx.is_fresh(c) && ctx.has_portions(c))
}

pub fn select_with_portions<'a, R: Rng + ?Sized>(
    candidates: &[Candidate<'a>],
    ctx: &BatchContext,
    rng: &mut R,
) -> Option<Candidate<'a>> {
    pick_where(candidates, rng, |c| ctx.has_portions(c))
}

pub fn select_fresh<'a, R: Rng + ?Sized>(
    candidates: &[Candidate<'a>],
    ctx: &BatchContext,
    rng: &mut R,
) -> Option<Candidate<'a>> {
    pick_where(candidates, rng, |c| ctx.is_fresh(c))
}

pub fn select_any<'a, R: Rng + ?Sized>(
    candidates: &[Candidate<'a>],
    rng: &mut R,
) -> Option<Candidate<'a>> {
    weighted_pick(candidates, rng)
}

/// Choose the recipe for a new batch, relaxing constraints tier by tier.
///
/// Returns `None` only when `candidates` is empty.
pub fn select_batch<'a, R: Rng + ?Sized>(
    candidates: &[Candidate<'a>],
    ctx: &BatchContext,
    rng: &mut R,
) -> Option<(Candidate<'a>, SelectionTier)> {
    if let Some(c) = select_fresh_with_portions(candidates, ctx, rng) {
        return Some((c, SelectionTier::FreshWithPortions));
    }
    if let Some(c) = select_with_portions(candidates, ctx, rng) {
        return Some((c, SelectionTier::WithPortions));
    }
    if let Some(c) = select_fresh(candidates, ctx, rng) {
        return Some((c, SelectionTier::Fresh));
    }
    select_any(candidates, rng).map(|c| (c, SelectionTier::Any))
}
