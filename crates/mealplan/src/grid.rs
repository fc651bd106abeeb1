use grubmaster_shared::mealplan::{Slot, TripConfig};
use grubmaster_shared::recipe::{Course, MealType};
use strum::VariantArray;

pub fn day_count(cfg: &TripConfig) -> u32 {
    cfg.meals_per_day.day_count()
}

/// Expands the trip into its ordered (day, meal, course) grid.
///
/// Days run first, then breakfast, lunch and dinner, then main, side and
/// drink. Dinner also gets a dessert. A meal appears on a day only while its
/// count exceeds the day index, so `{ breakfast: 1, lunch: 0, dinner: 1 }`
/// yields a single day of seven slots.
pub fn build_slots(cfg: &TripConfig) -> Vec<Slot> {
    let mut slots = vec![];

    for day_index in 0..day_count(cfg) {
        for meal_type in MealType::VARIANTS {
            if cfg.meals_per_day.count(*meal_type) <= day_index {
                continue;
            }

            for course in Course::BASE {
                slots.push(Slot::new(day_index, *meal_type, course));
            }

            if *meal_type == MealType::Dinner {
                slots.push(Slot::new(day_index, *meal_type, Course::Dessert));
            }
        }
    }

    slots
}
