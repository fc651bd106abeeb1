use std::collections::HashSet;

use grubmaster_mealplan::{
    MenuSlot, TripConfig, allocate, build_slots, set_slot_recipe, unresolved,
};
use grubmaster_recipe::{Course, MealType, Recipe, filter, normalize, seed_catalog};
use serde_json::json;

fn car_trip() -> TripConfig {
    TripConfig {
        include_dutch_oven: true,
        ..Default::default()
    }
}

fn lunch_mains() -> Vec<Recipe> {
    vec![
        normalize(&json!({ "id": "pbj", "name": "PB&J", "mealType": "lunch" })),
        normalize(&json!({ "id": "wraps", "name": "Tortilla Wraps", "mealType": "lunch" })),
        normalize(&json!({ "id": "ramen", "name": "Ramen", "mealType": "lunch" })),
    ]
}

#[test]
fn test_allocation_is_idempotent() {
    let cfg = car_trip();
    let catalog = filter(&seed_catalog(), &cfg);
    let slots = build_slots(&cfg);
    let favorites = HashSet::from(["seed-banana".to_owned()]);

    let first = allocate(&slots, &[], &catalog, &favorites);
    let second = allocate(&slots, &first, &catalog, &favorites);

    assert_eq!(first, second);
    assert!(unresolved(&first).is_empty());
}

#[test]
fn test_manual_pick_survives_reallocation() {
    let cfg = car_trip();
    let catalog = filter(&seed_catalog(), &cfg);
    let slots = build_slots(&cfg);

    let mut menu = allocate(&slots, &[], &catalog, &HashSet::new());
    let corn = menu
        .iter()
        .position(|slot| slot.meal_type == MealType::Dinner && slot.course == Course::Side)
        .expect("dinner side slot");
    assert!(set_slot_recipe(&mut menu, corn, "seed-lemonade"));

    let favorites = HashSet::from(["seed-campfire-corn".to_owned()]);
    let again = allocate(&slots, &menu, &catalog, &favorites);

    assert_eq!(again[corn].recipe_id, "seed-lemonade");
    assert_eq!(again, menu);
}

#[test]
fn test_favorite_wins_over_catalog_order() {
    let catalog = lunch_mains();
    let slots = build_slots(&TripConfig::default());
    let lunch_main = |menu: &[MenuSlot]| {
        menu.iter()
            .find(|slot| slot.meal_type == MealType::Lunch && slot.course == Course::Main)
            .map(|slot| slot.recipe_id.to_owned())
    };

    let plain = allocate(&slots, &[], &catalog, &HashSet::new());
    let biased = allocate(&slots, &[], &catalog, &HashSet::from(["ramen".to_owned()]));

    assert_eq!(lunch_main(&plain).as_deref(), Some("pbj"));
    assert_eq!(lunch_main(&biased).as_deref(), Some("ramen"));
}

#[test]
fn test_catalog_without_desserts_leaves_them_unresolved() {
    let catalog = lunch_mains();
    let slots = build_slots(&TripConfig::default());

    let menu = allocate(&slots, &[], &catalog, &HashSet::new());

    for pos in unresolved(&menu) {
        assert_ne!(menu[pos].meal_type, MealType::Lunch);
    }
    assert!(
        menu.iter()
            .filter(|slot| slot.course == Course::Dessert)
            .all(|slot| slot.recipe_id.is_empty())
    );
}

#[test]
fn test_manual_pick_survives_catalog_addition() {
    let cfg = car_trip();
    let mut catalog = filter(&seed_catalog(), &cfg);
    let slots = build_slots(&cfg);

    let mut menu = allocate(&slots, &[], &catalog, &HashSet::new());
    let lunch = menu
        .iter()
        .position(|slot| slot.meal_type == MealType::Lunch && slot.course == Course::Main)
        .expect("lunch main slot");
    assert!(set_slot_recipe(&mut menu, lunch, "seed-oatmeal"));

    catalog.push(normalize(&json!({ "id": "wraps", "name": "Tortilla Wraps", "mealType": "lunch" })));
    let favorites = HashSet::from(["wraps".to_owned()]);
    let again = allocate(&slots, &menu, &catalog, &favorites);

    assert_eq!(again[lunch], menu[lunch]);
    assert_eq!(again, menu);

    let fresh = allocate(&slots, &[], &catalog, &favorites);
    assert_eq!(fresh[lunch].recipe_id, "wraps");
}
