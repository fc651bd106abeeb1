use std::collections::HashSet;

/// Flips a recipe's favorite status. New favorites go to the front of the list.
///
/// Returns `true` when the recipe is a favorite afterwards.
pub fn toggle_favorite(favorites: &mut Vec<String>, id: &str) -> bool {
    if let Some(pos) = favorites.iter().position(|f| f == id) {
        favorites.remove(pos);
        return false;
    }

    favorites.insert(0, id.to_owned());
    true
}

pub fn favorite_set<'a>(favorites: impl IntoIterator<Item = &'a String>) -> HashSet<String> {
    favorites.into_iter().cloned().collect()
}
