pub mod prompts;
pub mod render;

pub use prompts::{fuzzy_member_matches, prompt_yes_no, resolve_member};
pub use render::display_week;
