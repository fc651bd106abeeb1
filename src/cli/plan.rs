use std::path::PathBuf;

use anyhow::Context;
use grubmaster_mealplan::{MenuSlot, TripConfig};
use grubmaster_recipe::seed_catalog;

use crate::cli::{emit_json, read_catalog, read_json_or_default};
use crate::config::Config;
use crate::planner::{Plan, Snapshot, plan};

#[derive(Debug, Default, Clone)]
pub struct PlanArgs {
    pub catalog: Option<PathBuf>,
    pub trip: Option<PathBuf>,
    pub menu: Option<PathBuf>,
    pub favorites: Option<PathBuf>,
    pub out: Option<PathBuf>,
}

/// Assembles the snapshot from files and configuration.
///
/// Without a catalog file the seed catalog is used; without a trip file the
/// configured trip is.
pub fn load_snapshot(config: &Config, args: &PlanArgs) -> anyhow::Result<Snapshot> {
    let catalog = match &args.catalog {
        Some(path) => read_catalog(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?,
        None => seed_catalog(),
    };

    let trip = match &args.trip {
        Some(path) => read_json_or_default::<TripConfig>(Some(path.as_path()))
            .with_context(|| format!("failed to read trip {}", path.display()))?,
        None => config.trip.to_trip_config(),
    };

    let menu = read_json_or_default::<Vec<MenuSlot>>(args.menu.as_deref())
        .context("failed to read menu")?;
    let favorites = read_json_or_default::<Vec<String>>(args.favorites.as_deref())
        .context("failed to read favorites")?;

    Ok(Snapshot {
        catalog,
        trip,
        menu,
        favorites,
        roster: config.roster.names.to_vec(),
        roster_policy: config.roster.policy()?,
    })
}

pub fn plan_command(config: &Config, args: PlanArgs) -> anyhow::Result<Plan> {
    let snapshot = load_snapshot(config, &args)?;
    let plan = plan(&snapshot);

    if !plan.unresolved.is_empty() {
        tracing::warn!(
            unresolved = plan.unresolved.len(),
            "some slots have no matching recipe"
        );
    }

    emit_json(&plan, args.out.as_deref()).context("failed to write plan")?;

    Ok(plan)
}
