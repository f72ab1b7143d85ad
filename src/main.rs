use std::collections::HashSet;
use std::path::Path;

use chrono::{Local, NaiveDate, Timelike};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use family_meal_planner_rs::cli::{Cli, Command, DistributeArgs, StoreArgs};
use family_meal_planner_rs::error::Result;
use family_meal_planner_rs::interface::{display_week, prompt_yes_no, resolve_member};
use family_meal_planner_rs::models::{PlanEntry, RecipeId};
use family_meal_planner_rs::planner::{distribute_week, suggest_snack, DistributionInput, PlannerConfig};
use family_meal_planner_rs::schedule::{
    next_week_start, previous_week, to_plan_entries, week_range, week_start, weekday_name_of,
};
use family_meal_planner_rs::state::{
    load_family, load_hidden, load_portion_overrides, load_recipes, write_plan_csv, PlanStore,
};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG wins over the flag.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Distribute(args) => cmd_distribute(args),
        Command::Snack {
            store,
            family,
            member,
            hidden,
            seed,
        } => cmd_snack(&store, &family, member.as_deref(), hidden.as_deref(), seed),
        Command::Export {
            store,
            week_of,
            out,
        } => cmd_export(&store, week_of, &out),
        Command::Clear { plan, week_of } => cmd_clear(&plan, week_of),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Plan next week's meals and store them.
fn cmd_distribute(args: DistributeArgs) -> Result<()> {
    let catalog = &args.store.catalog;
    if !catalog.exists() {
        eprintln!("Recipe catalog not found: {}", catalog.display());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    }
    .with_eaters(args.eaters);

    let mut input = DistributionInput::new(load_recipes(catalog)?);
    input.family = load_family(&args.family)?;
    if let Some(path) = &args.portions {
        input.portion_overrides = load_portion_overrides(path)?;
    }
    if let Some(path) = &args.hidden {
        input.hidden = load_hidden(path)?.into_iter().collect::<HashSet<_>>();
    }

    let start = args.week_of.map(week_start).unwrap_or_else(|| next_week_start(today()));
    let (_, end) = week_range(start);

    let loaded = PlanStore::load(&args.store.plan);
    input.history = match &loaded {
        Ok(store) => {
            let (from, to) = previous_week(start);
            store.history_between(from, to)
        }
        Err(e) => {
            warn!(error = %e, "could not read last week's plan, planning without history");
            Vec::new()
        }
    };

    println!(
        "Loaded {} recipes, {} family members, {} history records",
        input.recipes.len(),
        input.family.len(),
        input.history.len()
    );

    let mut rng = make_rng(args.seed);
    let week = distribute_week(&input, &config, &mut rng);

    display_week(&week, &input.recipes, start);

    if week.is_empty() {
        return Ok(());
    }

    let mut store = loaded?;
    if !store.entries_between(start, end).is_empty() && !args.yes {
        let overwrite = prompt_yes_no(
            &format!("A plan for the week of {} already exists. Overwrite it?", start),
            false,
        )?;
        if !overwrite {
            println!("Plan not saved.");
            return Ok(());
        }
    }

    let entries = to_plan_entries(start, &week.assignments, &input.recipes);
    let saved = entries.len();
    let removed = store.replace_range(start, end, entries);
    store.save(&args.store.plan)?;

    info!(removed, saved, "plan store updated");
    println!("Saved {} entries for the week of {}.", saved, start);
    Ok(())
}

/// Add a single snack for the current time of day.
fn cmd_snack(
    store_args: &StoreArgs,
    family_path: &Path,
    member: Option<&str>,
    hidden_path: Option<&Path>,
    seed: Option<u64>,
) -> Result<()> {
    let recipes = load_recipes(&store_args.catalog)?;
    let family = load_family(family_path)?;
    let hidden: HashSet<RecipeId> = match hidden_path {
        Some(path) => load_hidden(path)?.into_iter().collect(),
        None => HashSet::new(),
    };

    let member_id = match member {
        Some(name) => Some(resolve_member(&family, name)?.id),
        None => None,
    };

    let now = Local::now();
    let mut rng = make_rng(seed);
    let suggestion = suggest_snack(&recipes, &hidden, now.hour(), &mut rng)?;

    let date = now.date_naive();
    let mut store = PlanStore::load(&store_args.plan)?;
    store.push(PlanEntry {
        date,
        day_of_week: weekday_name_of(date).to_string(),
        meal_type: suggestion.slot,
        recipe_id: suggestion.recipe.id,
        portions: suggestion.recipe.entry_portions(),
        family_member_id: member_id,
    });
    store.save(&store_args.plan)?;

    println!(
        "Added {} ({}, {})",
        suggestion.recipe.label(),
        weekday_name_of(date),
        suggestion.slot
    );
    Ok(())
}

/// Export a stored week to CSV.
fn cmd_export(
    store_args: &StoreArgs,
    week_of: Option<NaiveDate>,
    out: &Path,
) -> Result<()> {
    let recipes = load_recipes(&store_args.catalog)?;
    let store = PlanStore::load(&store_args.plan)?;

    let (start, end) = week_range(week_start(week_of.unwrap_or_else(today)));
    let entries = store.entries_between(start, end);
    if entries.is_empty() {
        println!("No plan stored for the week of {}.", start);
        return Ok(());
    }

    write_plan_csv(&entries, &recipes, out)?;
    println!("Exported {} entries to {}", entries.len(), out.display());
    Ok(())
}

/// Remove a stored week.
fn cmd_clear(plan: &Path, week_of: Option<NaiveDate>) -> Result<()> {
    let start = week_of.map(week_start).unwrap_or_else(|| next_week_start(today()));
    let (start, end) = week_range(start);

    let mut store = PlanStore::load(plan)?;
    let removed = store.clear_range(start, end);
    store.save(plan)?;

    println!("Removed {} entries for the week of {}.", removed, start);
    Ok(())
}
