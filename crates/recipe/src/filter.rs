use grubmaster_shared::mealplan::{CampType, TripConfig};
use grubmaster_shared::recipe::Recipe;

/// Reduces the catalog to the recipes usable on the given trip, keeping catalog order.
///
/// # Business Rules
/// - **Camp type**: backpacking needs a backpacking tag; canoe accepts canoe, car or
///   backpacking; car accepts any camp tag and also recipes carrying no tag at all.
/// - **Dutch oven**: excluded unless the trip brings one.
/// - **AND Logic**: every active diet filter must be set on the recipe.
pub fn filter(catalog: &[Recipe], cfg: &TripConfig) -> Vec<Recipe> {
    catalog
        .iter()
        .filter(|recipe| is_usable(recipe, cfg))
        .cloned()
        .collect()
}

fn is_usable(recipe: &Recipe, cfg: &TripConfig) -> bool {
    fits_camp_type(recipe, cfg.camp_type)
        && (cfg.include_dutch_oven || !recipe.tags.dutch_oven)
        && satisfies_all_diets(recipe, cfg)
}

fn fits_camp_type(recipe: &Recipe, camp_type: CampType) -> bool {
    let tags = &recipe.tags;

    match camp_type {
        CampType::Backpacking => tags.backpacking,
        CampType::Car => tags.car || tags.backpacking || tags.canoe || tags.is_untagged(),
        CampType::Canoe => tags.canoe || tags.car || tags.backpacking,
    }
}

fn satisfies_all_diets(recipe: &Recipe, cfg: &TripConfig) -> bool {
    cfg.diet_filters
        .active()
        .all(|diet| recipe.diet.get(diet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grubmaster_shared::recipe::{CampTags, Diet, DietFlags};

    fn recipe(id: &str, tags: CampTags, diet: DietFlags) -> Recipe {
        Recipe {
            id: id.to_owned(),
            name: format!("Recipe {id}"),
            meal_type: Default::default(),
            course: Default::default(),
            serves: 8,
            tags,
            diet,
            ingredients: vec![],
            steps: vec![],
        }
    }

    fn trip(camp_type: CampType) -> TripConfig {
        TripConfig {
            camp_type,
            ..Default::default()
        }
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn backpacking_requires_backpacking_tag() {
        let catalog = vec![
            recipe("bp", CampTags { backpacking: true, ..Default::default() }, DietFlags::default()),
            recipe("car", CampTags { car: true, ..Default::default() }, DietFlags::default()),
            recipe("none", CampTags::default(), DietFlags::default()),
        ];

        assert_eq!(ids(&filter(&catalog, &trip(CampType::Backpacking))), vec!["bp"]);
    }

    #[test]
    fn car_camping_accepts_untagged_recipes() {
        let catalog = vec![
            recipe("none", CampTags::default(), DietFlags::default()),
            recipe("canoe", CampTags { canoe: true, ..Default::default() }, DietFlags::default()),
        ];

        assert_eq!(ids(&filter(&catalog, &trip(CampType::Car))), vec!["none", "canoe"]);
    }

    #[test]
    fn car_camping_rejects_dutch_oven_only_recipes_even_with_an_oven() {
        let oven_only = recipe(
            "do",
            CampTags { dutch_oven: true, ..Default::default() },
            DietFlags::default(),
        );
        let cfg = TripConfig {
            include_dutch_oven: true,
            ..trip(CampType::Car)
        };

        assert!(!is_usable(&oven_only, &cfg));
    }

    #[test]
    fn canoe_rejects_untagged_recipes() {
        let catalog = vec![
            recipe("none", CampTags::default(), DietFlags::default()),
            recipe("bp", CampTags { backpacking: true, ..Default::default() }, DietFlags::default()),
        ];

        assert_eq!(ids(&filter(&catalog, &trip(CampType::Canoe))), vec!["bp"]);
    }

    #[test]
    fn dutch_oven_recipes_need_an_oven() {
        let catalog = vec![recipe(
            "cobbler",
            CampTags { car: true, dutch_oven: true, ..Default::default() },
            DietFlags::default(),
        )];

        assert!(filter(&catalog, &trip(CampType::Car)).is_empty());

        let cfg = TripConfig {
            include_dutch_oven: true,
            ..trip(CampType::Car)
        };
        assert_eq!(ids(&filter(&catalog, &cfg)), vec!["cobbler"]);
    }

    #[test]
    fn diet_filters_are_conjunctive() {
        let car = CampTags { car: true, ..Default::default() };
        let catalog = vec![
            recipe("both", car, DietFlags::default().with(Diet::Vegan).with(Diet::NutFree)),
            recipe("vegan", car, DietFlags::default().with(Diet::Vegan)),
            recipe("neither", car, DietFlags::default()),
        ];
        let cfg = TripConfig {
            diet_filters: DietFlags::default().with(Diet::Vegan).with(Diet::NutFree),
            ..trip(CampType::Car)
        };

        assert_eq!(ids(&filter(&catalog, &cfg)), vec!["both"]);
    }

    #[test]
    fn inactive_diet_filters_do_not_restrict() {
        let catalog = vec![recipe("plain", CampTags::default(), DietFlags::default())];
        assert_eq!(filter(&catalog, &trip(CampType::Car)).len(), 1);
    }
}
