use crate::models::MealAssignment;

/// Flatten allocator output into the run's assignment list.
///
/// Breakfasts come first, then lunches and dinners. No validation happens
/// here; dating and storage belong to the caller.
pub fn emit_assignments(
    breakfasts: Vec<MealAssignment>,
    lunch_dinner: Vec<MealAssignment>,
) -> Vec<MealAssignment> {
    let mut out = breakfasts;
    out.extend(lunch_dinner);
    out
}
