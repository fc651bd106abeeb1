use std::cmp::Ordering;
use std::collections::HashSet;

use grubmaster_shared::mealplan::{MenuSlot, Slot};
use grubmaster_shared::recipe::{Course, Recipe};

/// Assigns a recipe to every slot of the grid.
///
/// # Business Rules
/// - **Edit preservation**: a prior entry at the same position is kept as is
///   when it has the same meal and course and a recipe.
/// - **Candidates**: recipes matching the slot's meal and course; an empty
///   pool falls back to the meal's mains, except for dessert.
/// - **Favorite bias**: favorites sort first, catalog order breaks ties.
/// - **Unresolved**: a slot with no candidate gets an empty recipe id.
///
/// Running it again over its own output returns the same menu.
pub fn allocate(
    slots: &[Slot],
    prior_menu: &[MenuSlot],
    catalog: &[Recipe],
    favorites: &HashSet<String>,
) -> Vec<MenuSlot> {
    slots
        .iter()
        .enumerate()
        .map(|(pos, slot)| {
            if let Some(prior) = prior_menu.get(pos).filter(|prior| keeps(prior, slot)) {
                return prior.clone();
            }

            let recipe_id = pick(slot, catalog, favorites)
                .map(|recipe| recipe.id.to_owned())
                .unwrap_or_default();

            if recipe_id.is_empty() {
                tracing::debug!(slot = %slot.id(), "no recipe for slot");
            } else {
                tracing::trace!(slot = %slot.id(), recipe.id = %recipe_id, "slot allocated");
            }

            MenuSlot::new(*slot, recipe_id)
        })
        .collect()
}

/// Recipes eligible for a slot, favorites first.
pub fn candidates<'a>(
    slot: &Slot,
    catalog: &'a [Recipe],
    favorites: &HashSet<String>,
) -> Vec<&'a Recipe> {
    let mut pool = catalog
        .iter()
        .filter(|recipe| recipe.is(slot.meal_type, slot.course))
        .collect::<Vec<_>>();

    if pool.is_empty() && slot.course != Course::Dessert {
        pool = catalog
            .iter()
            .filter(|recipe| recipe.is(slot.meal_type, Course::Main))
            .collect();
    }

    pool.sort_by(|a, b| by_favorite(a, b, favorites));
    pool
}

fn pick<'a>(slot: &Slot, catalog: &'a [Recipe], favorites: &HashSet<String>) -> Option<&'a Recipe> {
    candidates(slot, catalog, favorites).into_iter().next()
}

fn keeps(prior: &MenuSlot, slot: &Slot) -> bool {
    prior.meal_type == slot.meal_type && prior.course == slot.course && prior.is_resolved()
}

// Stable sort keeps catalog order between recipes of equal standing.
fn by_favorite(a: &Recipe, b: &Recipe, favorites: &HashSet<String>) -> Ordering {
    match (favorites.contains(&a.id), favorites.contains(&b.id)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
