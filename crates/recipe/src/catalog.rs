use grubmaster_shared::recipe::Recipe;
use serde_json::Value;

use crate::normalize::normalize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub replaced: usize,
}

pub fn find<'a>(catalog: &'a [Recipe], id: &str) -> Option<&'a Recipe> {
    catalog.iter().find(|r| r.id == id)
}

/// Replaces the recipe with the same id in place, or appends it.
///
/// Returns `true` when an existing recipe was replaced.
pub fn upsert(catalog: &mut Vec<Recipe>, recipe: Recipe) -> bool {
    match catalog.iter_mut().find(|r| r.id == recipe.id) {
        Some(existing) => {
            *existing = recipe;
            true
        }
        None => {
            catalog.push(recipe);
            false
        }
    }
}

/// Normalizes a user-entered record under a fresh id and puts it first.
pub fn add_new(catalog: &mut Vec<Recipe>, raw: &Value) -> String {
    let mut raw = raw.clone();
    if let Some(fields) = raw.as_object_mut() {
        fields.remove("id");
    }

    let recipe = normalize(&raw);
    let id = recipe.id.to_owned();
    catalog.insert(0, recipe);

    tracing::debug!(recipe.id = %id, "recipe added");

    id
}

/// Normalizes an edited record and stores it under its existing id.
pub fn save_edited(catalog: &mut Vec<Recipe>, raw: &Value) -> Recipe {
    let recipe = normalize(raw);
    upsert(catalog, recipe.clone());

    recipe
}

pub fn remove(catalog: &mut Vec<Recipe>, id: &str) -> Option<Recipe> {
    let pos = catalog.iter().position(|r| r.id == id)?;

    Some(catalog.remove(pos))
}

/// Merges incoming recipes by id: known ids are overwritten in place, new ones appended.
pub fn merge(catalog: &mut Vec<Recipe>, incoming: impl IntoIterator<Item = Recipe>) -> MergeStats {
    let mut stats = MergeStats::default();

    for recipe in incoming {
        if upsert(catalog, recipe) {
            stats.replaced += 1;
        } else {
            stats.added += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<Recipe> {
        vec![
            normalize(&json!({ "id": "a", "name": "Oatmeal", "mealType": "breakfast" })),
            normalize(&json!({ "id": "b", "name": "Chili" })),
        ]
    }

    #[test]
    fn add_new_assigns_a_fresh_id_and_prepends() {
        let mut recipes = catalog();
        let id = add_new(&mut recipes, &json!({ "id": "a", "name": "Pancakes" }));

        assert_ne!(id, "a");
        assert_eq!(recipes[0].id, id);
        assert_eq!(recipes.len(), 3);
    }

    #[test]
    fn save_edited_keeps_id_and_position() {
        let mut recipes = catalog();
        let saved = save_edited(&mut recipes, &json!({ "id": "a", "name": "Steel-cut Oats" }));

        assert_eq!(saved.id, "a");
        assert_eq!(recipes[0].name, "Steel-cut Oats");
        assert_eq!(recipes.len(), 2);
    }

    #[test]
    fn merge_overwrites_existing_ids() {
        let mut recipes = catalog();
        let stats = merge(
            &mut recipes,
            vec![
                normalize(&json!({ "id": "b", "name": "White Chili" })),
                normalize(&json!({ "id": "c", "name": "Tacos" })),
            ],
        );

        assert_eq!(stats, MergeStats { added: 1, replaced: 1 });
        assert_eq!(recipes.len(), 3);
        assert_eq!(find(&recipes, "b").map(|r| r.name.as_str()), Some("White Chili"));
    }

    #[test]
    fn remove_returns_the_deleted_recipe() {
        let mut recipes = catalog();

        assert_eq!(remove(&mut recipes, "a").map(|r| r.id), Some("a".to_owned()));
        assert!(remove(&mut recipes, "a").is_none());
        assert_eq!(recipes.len(), 1);
    }
}
