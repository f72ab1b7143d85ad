use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{HistoryRecord, PlanEntry};

/// Date-keyed plan storage backed by a JSON file.
///
/// Writes replace whole date ranges rather than merging into them.
#[derive(Debug, Clone, Default)]
pub struct PlanStore {
    entries: Vec<PlanEntry>,
}

impl PlanStore {
    pub fn new(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    /// Load the store. A missing file is an empty plan.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let entries: Vec<PlanEntry> = serde_json::from_str(&content)?;
        Ok(Self::new(entries))
    }

    /// Save the store, ordered by date then meal.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut sorted: Vec<&PlanEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(a.meal_type.cmp(&b.meal_type))
                .then(a.family_member_id.cmp(&b.family_member_id))
        });
        let json = serde_json::to_string_pretty(&sorted)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Entries dated within `start..=end`.
    pub fn entries_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&PlanEntry> {
        self.entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect()
    }

    /// History records for `start..=end`, in stored order.
    pub fn history_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<HistoryRecord> {
        self.entries_between(start, end)
            .into_iter()
            .map(PlanEntry::to_history)
            .collect()
    }

    /// Remove every entry in `start..=end`. Returns how many were removed.
    pub fn clear_range(&mut self, start: NaiveDate, end: NaiveDate) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.date < start || e.date > end);
        before - self.entries.len()
    }

    /// Clear `start..=end`, then insert `entries`. Returns how many were removed.
    pub fn replace_range(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        entries: Vec<PlanEntry>,
    ) -> usize {
        let removed = self.clear_range(start, end);
        self.entries.extend(entries);
        removed
    }

    pub fn push(&mut self, entry: PlanEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
