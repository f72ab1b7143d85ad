use crate::models::{Consumer, FamilyMember};

/// Build the list of people to feed.
///
/// Registered family members are used verbatim. Without any, `eaters`
/// placeholders `mock-1..mock-n` stand in. The caller clamps `eaters`; zero
/// yields no consumers at all.
pub fn resolve_consumers(family: &[FamilyMember], eaters: u32) -> Vec<Consumer> {
    if !family.is_empty() {
        return family.iter().map(Consumer::from).collect();
    }
    (1..=eaters).map(Consumer::synthetic).collect()
}
