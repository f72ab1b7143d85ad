use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::FamilyMember;
use crate::planner::constants::FUZZY_MATCH_THRESHOLD;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Family members ranked by name similarity to `input`, best first.
pub fn fuzzy_member_matches<'a>(family: &'a [FamilyMember], input: &str) -> Vec<&'a FamilyMember> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&FamilyMember, f64)> = family
        .iter()
        .map(|m| (m, jaro_winkler(&m.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(m, _)| m).collect()
}

/// Resolve a typed name to a family member.
///
/// Exact (case-insensitive) matches are taken directly; otherwise the user
/// confirms or picks from fuzzy matches.
pub fn resolve_member<'a>(family: &'a [FamilyMember], input: &str) -> Result<&'a FamilyMember> {
    let not_found = || PlannerError::ConsumerNotFound(input.to_string());

    let wanted = input.trim().to_lowercase();
    if let Some(member) = family.iter().find(|m| m.name.to_lowercase() == wanted) {
        return Ok(member);
    }

    let candidates = fuzzy_member_matches(family, input);
    match candidates.as_slice() {
        [] => Err(not_found()),
        [only] => {
            if prompt_yes_no(&format!("Did you mean '{}'?", only.name), true)? {
                Ok(*only)
            } else {
                Err(not_found())
            }
        }
        many => {
            let mut options: Vec<String> = many.iter().take(5).map(|m| m.name.clone()).collect();
            let shown = options.len();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            if selection < shown {
                Ok(many[selection])
            } else {
                Err(not_found())
            }
        }
    }
}
