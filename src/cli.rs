use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Meal planner: distributes recipes across the coming week for the whole household.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

/// Inputs shared by commands that read the catalog and plan store.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Path to the recipe catalog JSON file.
    #[arg(long, default_value = "recipes.json")]
    pub catalog: PathBuf,

    /// Path to the plan store JSON file.
    #[arg(long, default_value = "plan.json")]
    pub plan: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct DistributeArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Path to the family registry JSON file.
    #[arg(long, default_value = "family.json")]
    pub family: PathBuf,

    /// Per-recipe portion overrides (JSON object of id -> portions).
    #[arg(long)]
    pub portions: Option<PathBuf>,

    /// Hidden recipe ids (JSON array).
    #[arg(long)]
    pub hidden: Option<PathBuf>,

    /// Planner settings JSON file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of eaters when no family members are registered.
    #[arg(long)]
    pub eaters: Option<u32>,

    /// Random seed for a reproducible plan.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Any date in the week to plan (defaults to next week).
    #[arg(long)]
    pub week_of: Option<NaiveDate>,

    /// Overwrite an existing plan without asking.
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Auto-distribute recipes over next week's breakfasts, lunches and dinners.
    Distribute(DistributeArgs),

    /// Add one random snack for right now.
    Snack {
        #[command(flatten)]
        store: StoreArgs,

        /// Path to the family registry JSON file.
        #[arg(long, default_value = "family.json")]
        family: PathBuf,

        /// Family member the snack is for (fuzzy matched).
        #[arg(long)]
        member: Option<String>,

        /// Hidden recipe ids (JSON array).
        #[arg(long)]
        hidden: Option<PathBuf>,

        /// Random seed.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Export a stored week to CSV.
    Export {
        #[command(flatten)]
        store: StoreArgs,

        /// Any date in the week to export (defaults to the current week).
        #[arg(long)]
        week_of: Option<NaiveDate>,

        /// Output CSV path.
        #[arg(long, default_value = "plan_export.csv")]
        out: PathBuf,
    },

    /// Remove every stored entry of a week.
    Clear {
        /// Path to the plan store JSON file.
        #[arg(long, default_value = "plan.json")]
        plan: PathBuf,

        /// Any date in the week to clear (defaults to next week).
        #[arg(long)]
        week_of: Option<NaiveDate>,
    },
}

impl Default for StoreArgs {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("recipes.json"),
            plan: PathBuf::from("plan.json"),
        }
    }
}

impl Default for DistributeArgs {
    fn default() -> Self {
        Self {
            store: StoreArgs::default(),
            family: PathBuf::from("family.json"),
            portions: None,
            hidden: None,
            config: None,
            eaters: None,
            seed: None,
            week_of: None,
            yes: false,
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Distribute(DistributeArgs::default())
    }
}
