use grubmaster_duty::{DutyAssignment, RosterPolicy, prepare_roster, schedule};
use grubmaster_mealplan::{
    DayMenu, MenuSlot, Slot, TripConfig, allocate, build_slots, clear_recipe, day_count,
    group_by_day, set_slot_recipe, unresolved,
};
use grubmaster_recipe::{Recipe, favorite_set, filter, find, remove, toggle_favorite};
use grubmaster_shared::bail;
use grubmaster_shopping::{ShoppingItem, aggregate};
use serde::{Deserialize, Serialize};

/// Everything the planning pipeline reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub catalog: Vec<Recipe>,
    pub trip: TripConfig,
    pub menu: Vec<MenuSlot>,
    pub favorites: Vec<String>,
    pub roster: Vec<String>,
    #[serde(skip)]
    pub roster_policy: RosterPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Number of catalog recipes usable on this trip.
    pub filtered: usize,
    pub day_count: u32,
    pub slots: Vec<Slot>,
    pub menu: Vec<MenuSlot>,
    pub days: Vec<DayMenu>,
    pub shopping: Vec<ShoppingItem>,
    pub duty: Vec<DutyAssignment>,
    pub unresolved: Vec<usize>,
}

/// Runs the whole pipeline over one snapshot: filter, grid, allocation,
/// shopping list and duty roster. Headcount is clamped to at least one.
pub fn plan(snapshot: &Snapshot) -> Plan {
    let trip = snapshot.trip.clamped();
    let usable = filter(&snapshot.catalog, &trip);
    let favorites = favorite_set(&snapshot.favorites);

    let slots = build_slots(&trip);
    let menu = allocate(&slots, &snapshot.menu, &usable, &favorites);

    // Shopping reads the full catalog so manual picks outside the filter still count.
    let shopping = aggregate(&menu, &snapshot.catalog, trip.headcount);
    let roster = prepare_roster(snapshot.roster.as_slice(), snapshot.roster_policy);
    let duty = schedule(&menu, &roster);
    let day_count = day_count(&trip);

    tracing::debug!(
        filtered = usable.len(),
        slots = slots.len(),
        shopping = shopping.len(),
        "plan computed"
    );

    Plan {
        filtered: usable.len(),
        day_count,
        days: group_by_day(&menu, day_count),
        unresolved: unresolved(&menu),
        slots,
        menu,
        shopping,
        duty,
    }
}

/// Ticket handed out for each recompute. Only the newest one may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Revision(u64);

/// The one stateful piece: holds the current snapshot and the last accepted plan.
///
/// Every change to the snapshot issues a new [`Revision`]. A plan computed
/// from an older revision is dropped on [`Planner::commit`], so the most
/// recent edit always wins and results are never merged.
#[derive(Debug, Default)]
pub struct Planner {
    snapshot: Snapshot,
    revision: u64,
    plan: Option<Plan>,
}

impl Planner {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            revision: 0,
            plan: None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn revision(&self) -> Revision {
        Revision(self.revision)
    }

    /// Applies a change and returns the ticket for the recompute it triggers.
    pub fn update(&mut self, change: impl FnOnce(&mut Snapshot)) -> Revision {
        change(&mut self.snapshot);
        self.revision += 1;
        Revision(self.revision)
    }

    /// Hands out the current revision with a copy of the snapshot to plan from.
    pub fn begin(&self) -> (Revision, Snapshot) {
        (self.revision(), self.snapshot.clone())
    }

    /// Stores `plan` when `revision` is still the newest. The allocated menu
    /// becomes the prior menu of the next run.
    pub fn commit(&mut self, revision: Revision, plan: Plan) -> bool {
        if revision != self.revision() {
            tracing::debug!(
                revision = revision.0,
                latest = self.revision,
                "dropping stale plan"
            );
            return false;
        }

        self.snapshot.menu = plan.menu.clone();
        self.plan = Some(plan);
        true
    }

    /// Plans the current snapshot synchronously and commits the result.
    pub fn refresh(&mut self) -> &Plan {
        let plan = plan(&self.snapshot);
        self.snapshot.menu = plan.menu.clone();

        self.plan.insert(plan)
    }

    pub fn set_trip(&mut self, trip: TripConfig) -> Revision {
        self.update(|snapshot| snapshot.trip = trip)
    }

    /// Manually picks a recipe for a menu slot.
    pub fn set_slot_recipe(
        &mut self,
        index: usize,
        recipe_id: &str,
    ) -> grubmaster_shared::Result<Revision> {
        if find(&self.snapshot.catalog, recipe_id).is_none() {
            bail!("unknown recipe {recipe_id}");
        }

        if index >= self.snapshot.menu.len() {
            bail!("menu has no slot {index}");
        }

        Ok(self.update(|snapshot| {
            set_slot_recipe(&mut snapshot.menu, index, recipe_id);
        }))
    }

    pub fn toggle_favorite(&mut self, recipe_id: &str) -> Revision {
        self.update(|snapshot| {
            toggle_favorite(&mut snapshot.favorites, recipe_id);
        })
    }

    /// Removes a recipe everywhere it is referenced: catalog, menu and favorites.
    pub fn delete_recipe(&mut self, recipe_id: &str) -> Option<(Recipe, Revision)> {
        let mut removed = None;

        let revision = self.update(|snapshot| {
            removed = remove(&mut snapshot.catalog, recipe_id);
            let cleared = clear_recipe(&mut snapshot.menu, recipe_id);
            snapshot.favorites.retain(|id| id != recipe_id);

            tracing::debug!(recipe.id = %recipe_id, cleared, "recipe deleted");
        });

        removed.map(|recipe| (recipe, revision))
    }
}
