use std::collections::{HashMap, HashSet};

use crate::models::{ConsumerId, SlotType};
use crate::planner::constants::DAYS_PER_WEEK;

/// Who has already been fed in each `(day, slot)` of the week.
#[derive(Debug, Clone, Default)]
pub struct ConsumptionSet {
    fed: HashMap<(u8, SlotType), HashSet<ConsumerId>>,
}

impl ConsumptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fed(&self, day: u8, slot: SlotType, consumer: ConsumerId) -> bool {
        self.fed
            .get(&(day, slot))
            .is_some_and(|set| set.contains(&consumer))
    }

    /// Record a consumer as fed. Returns false if they already were.
    pub fn mark(&mut self, day: u8, slot: SlotType, consumer: ConsumerId) -> bool {
        self.fed.entry((day, slot)).or_default().insert(consumer)
    }

    /// First day at or after `from` on which `consumer` is still unfed for `slot`.
    pub fn next_open_day(&self, from: u8, slot: SlotType, consumer: ConsumerId) -> Option<u8> {
        (from..DAYS_PER_WEEK).find(|&day| !self.is_fed(day, slot, consumer))
    }
}
