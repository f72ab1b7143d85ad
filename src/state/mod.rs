mod consumption;
mod export;
mod ledger;
mod persistence;
mod plan_store;

pub use consumption::ConsumptionSet;
pub use export::write_plan_csv;
pub use ledger::{round_portions, PortionLedger};
pub use persistence::{load_family, load_hidden, load_portion_overrides, load_recipes};
pub use plan_store::PlanStore;
