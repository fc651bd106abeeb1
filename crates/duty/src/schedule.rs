use std::collections::BTreeMap;

use grubmaster_shared::duty::{DutyAssignment, Role};
use grubmaster_shared::mealplan::MenuSlot;
use grubmaster_shared::recipe::Course;
use strum::VariantArray;

use crate::roster::placeholder;

/// Rotates the camp roles across the roster, one assignment per main course.
///
/// The `i`-th main of the menu gives role `r` to `names[(i + r) % names.len()]`,
/// so every scout moves one role along per meal. An empty roster yields
/// `Scout 1` through `Scout 5` placeholders.
pub fn schedule<S: AsRef<str>>(menu: &[MenuSlot], names: &[S]) -> Vec<DutyAssignment> {
    if names.is_empty() {
        tracing::debug!("empty roster, using placeholders");
    }

    menu.iter()
        .filter(|slot| slot.course == Course::Main)
        .enumerate()
        .map(|(i, slot)| DutyAssignment {
            day_index: slot.day_index,
            meal_type: slot.meal_type,
            recipe_id: slot.recipe_id.to_owned(),
            assignment: assign(i, names),
        })
        .collect()
}

fn assign<S: AsRef<str>>(meal: usize, names: &[S]) -> BTreeMap<Role, String> {
    Role::VARIANTS
        .iter()
        .enumerate()
        .map(|(r, role)| {
            let name = if names.is_empty() {
                placeholder(r)
            } else {
                names[(meal + r) % names.len()].as_ref().to_owned()
            };

            (*role, name)
        })
        .collect()
}
