use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::{Course, DietFlags, MealType};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CampType {
    Backpacking,
    #[default]
    Car,
    Canoe,
}

/// How many days each meal occurs on the trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealsPerDay {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
}

impl Default for MealsPerDay {
    fn default() -> Self {
        Self {
            breakfast: 2,
            lunch: 2,
            dinner: 2,
        }
    }
}

impl MealsPerDay {
    pub fn count(&self, meal_type: MealType) -> u32 {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
        }
    }

    pub fn day_count(&self) -> u32 {
        self.breakfast.max(self.lunch).max(self.dinner)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripConfig {
    pub headcount: u32,
    pub meals_per_day: MealsPerDay,
    pub camp_type: CampType,
    pub include_dutch_oven: bool,
    pub diet_filters: DietFlags,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            headcount: 10,
            meals_per_day: MealsPerDay::default(),
            camp_type: CampType::default(),
            include_dutch_oven: false,
            diet_filters: DietFlags::default(),
        }
    }
}

impl TripConfig {
    /// Copy with the headcount raised to at least one, as the engine expects.
    pub fn clamped(&self) -> Self {
        Self {
            headcount: self.headcount.max(1),
            ..self.clone()
        }
    }
}

/// One cell of the (day, meal, course) grid, before a recipe is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub day_index: u32,
    pub meal_type: MealType,
    pub course: Course,
}

impl Slot {
    pub fn new(day_index: u32, meal_type: MealType, course: Course) -> Self {
        Self {
            day_index,
            meal_type,
            course,
        }
    }

    /// Stable identifier derived from the slot triple.
    pub fn id(&self) -> String {
        format!("d{}-{}-{}", self.day_index, self.meal_type, self.course)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSlot {
    pub id: String,
    pub day_index: u32,
    pub meal_type: MealType,
    pub course: Course,
    /// Empty when no recipe could be chosen for the slot.
    #[serde(default)]
    pub recipe_id: String,
}

impl MenuSlot {
    pub fn new(slot: Slot, recipe_id: impl Into<String>) -> Self {
        Self {
            id: slot.id(),
            day_index: slot.day_index,
            meal_type: slot.meal_type,
            course: slot.course,
            recipe_id: recipe_id.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.recipe_id.is_empty()
    }

    pub fn slot(&self) -> Slot {
        Slot::new(self.day_index, self.meal_type, self.course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_config_defaults_match_a_weekend_car_camp() {
        let cfg: TripConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.headcount, 10);
        assert_eq!(cfg.meals_per_day.day_count(), 2);
        assert_eq!(cfg.camp_type, CampType::Car);
        assert!(!cfg.include_dutch_oven);
    }

    #[test]
    fn trip_config_reads_camel_case() {
        let cfg: TripConfig = serde_json::from_str(
            r#"{"headcount":0,"mealsPerDay":{"breakfast":3,"lunch":1},"campType":"canoe","dietFilters":{"vegan":true}}"#,
        )
        .unwrap();
        assert_eq!(cfg.meals_per_day.dinner, 2);
        assert_eq!(cfg.meals_per_day.day_count(), 3);
        assert_eq!(cfg.camp_type, CampType::Canoe);
        assert!(cfg.diet_filters.vegan);
        assert_eq!(cfg.clamped().headcount, 1);
    }

    #[test]
    fn slot_id_is_derived_from_its_triple() {
        let slot = Slot::new(1, MealType::Dinner, Course::Dessert);
        assert_eq!(slot.id(), "d1-dinner-dessert");
        assert!(!MenuSlot::new(slot, "").is_resolved());
    }
}
