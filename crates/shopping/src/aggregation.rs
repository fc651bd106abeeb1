use std::collections::HashMap;

use grubmaster_shared::mealplan::MenuSlot;
use grubmaster_shared::recipe::Recipe;
use grubmaster_shared::shopping::ShoppingItem;

use crate::staples::staples;

/// Sums quantities per case-insensitive (item, unit), keeping the casing seen first.
#[derive(Debug, Default)]
pub struct Tally {
    positions: HashMap<(String, String), usize>,
    items: Vec<ShoppingItem>,
}

impl Tally {
    pub fn add(&mut self, item: &str, unit: &str, qty: f64) {
        let key = ShoppingItem::key(item, unit);

        if let Some(pos) = self.positions.get(&key) {
            self.items[*pos].qty += qty;
            return;
        }

        self.positions.insert(key, self.items.len());
        self.items.push(ShoppingItem {
            item: item.to_owned(),
            unit: unit.to_owned(),
            qty,
        });
    }

    /// Lines sorted by item (case-insensitive first), then unit.
    pub fn into_sorted(mut self) -> Vec<ShoppingItem> {
        self.items.sort_by(|a, b| {
            a.item
                .to_lowercase()
                .cmp(&b.item.to_lowercase())
                .then_with(|| a.item.cmp(&b.item))
                .then_with(|| a.unit.cmp(&b.unit))
        });

        self.items
    }
}

/// Builds the trip shopping list from the resolved menu.
///
/// # Business Rules
/// - Each resolved slot adds `qtyPerPerson × headcount` for every ingredient
///   of its recipe. Slots pointing at a missing recipe contribute nothing.
/// - Lines merge on lowercase (item, unit); different units stay separate.
/// - Paper towels and trash bags are added through the same merge.
pub fn aggregate(menu: &[MenuSlot], catalog: &[Recipe], headcount: u32) -> Vec<ShoppingItem> {
    let by_id = catalog
        .iter()
        .map(|recipe| (recipe.id.as_str(), recipe))
        .collect::<HashMap<_, _>>();

    let mut tally = Tally::default();
    let people = headcount as f64;

    for slot in menu.iter().filter(|slot| slot.is_resolved()) {
        let Some(recipe) = by_id.get(slot.recipe_id.as_str()) else {
            tracing::debug!(slot = %slot.id, recipe.id = %slot.recipe_id, "recipe missing from catalog");
            continue;
        };

        for ingredient in &recipe.ingredients {
            tally.add(
                &ingredient.item,
                &ingredient.unit,
                ingredient.qty_per_person * people,
            );
        }
    }

    for staple in staples(headcount) {
        tally.add(&staple.item, &staple.unit, staple.qty);
    }

    tally.into_sorted()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_merges_case_insensitively_and_keeps_first_casing() {
        let mut tally = Tally::default();
        tally.add("Egg", "EA", 2.0);
        tally.add("egg", "ea", 3.0);
        tally.add("egg", "dozen", 1.0);

        let items = tally.into_sorted();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item, "Egg");
        assert_eq!(items[0].unit, "EA");
        assert_eq!(items[0].qty, 5.0);
        assert_eq!(items[1].unit, "dozen");
    }

    #[test]
    fn sort_is_case_insensitive_first() {
        let mut tally = Tally::default();
        tally.add("bacon", "lb", 1.0);
        tally.add("Apple", "ea", 1.0);
        tally.add("apple", "ea", 1.0);
        tally.add("apple", "bag", 1.0);

        let items = tally
            .into_sorted()
            .into_iter()
            .map(|i| (i.item, i.unit))
            .collect::<Vec<_>>();

        assert_eq!(
            items,
            vec![
                ("Apple".to_owned(), "ea".to_owned()),
                ("apple".to_owned(), "bag".to_owned()),
                ("bacon".to_owned(), "lb".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_menu_still_lists_staples() {
        let items = aggregate(&[], &[], 3);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item, "paper towels");
        assert_eq!(items[1].item, "trash bags");
    }
}
