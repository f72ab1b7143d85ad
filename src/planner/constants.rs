/// Days in a planning week (0 = Monday .. 6 = Sunday).
pub const DAYS_PER_WEEK: u8 = 7;

/// Communal slots filled by the lunch/dinner allocator (7 days x lunch, dinner).
pub const LUNCH_DINNER_SLOTS: usize = 14;

/// Upper bound on breakfast fallback picks per consumer.
///
/// Guarantees termination when the breakfast pool is empty or every day is
/// already taken.
pub const BREAKFAST_ATTEMPT_CAP: usize = 100;

/// Batch size assumed for recipes without a declared `portions` value.
pub const DEFAULT_PORTIONS: f64 = 1.0;

/// Eater count used when no family members are registered.
pub const DEFAULT_EATERS: u32 = 1;

/// Rating bounds.
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Portions recorded on a stored plan entry whose recipe declares none.
pub const ENTRY_PORTIONS: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Snack suggestion: hour-of-day boundaries (exclusive upper bounds)
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_UNTIL_HOUR: u32 = 11;
pub const LUNCH_UNTIL_HOUR: u32 = 14;
pub const AFTERNOON_SNACK_UNTIL_HOUR: u32 = 18;

/// Minimum Jaro-Winkler similarity for a fuzzy family-member match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Weekday names indexed by day offset.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Short weekday names for the grid header.
pub const WEEKDAY_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Get the weekday name for a day offset; out-of-range offsets wrap.
pub fn weekday_name(day: u8) -> &'static str {
    WEEKDAY_NAMES[usize::from(day) % WEEKDAY_NAMES.len()]
}
