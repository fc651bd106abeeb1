use grubmaster_shared::mealplan::MenuSlot;
use grubmaster_shared::recipe::MealType;
use serde::Serialize;

/// Manually picks a recipe for one slot. Returns `false` when `index` is out of range.
pub fn set_slot_recipe(menu: &mut [MenuSlot], index: usize, recipe_id: impl Into<String>) -> bool {
    let Some(slot) = menu.get_mut(index) else {
        return false;
    };

    slot.recipe_id = recipe_id.into();
    true
}

/// Empties every slot pointing at `recipe_id` and returns how many were cleared.
pub fn clear_recipe(menu: &mut [MenuSlot], recipe_id: &str) -> usize {
    let mut cleared = 0;

    for slot in menu.iter_mut().filter(|slot| slot.recipe_id == recipe_id) {
        slot.recipe_id.clear();
        cleared += 1;
    }

    cleared
}

pub fn unresolved(menu: &[MenuSlot]) -> Vec<usize> {
    menu.iter()
        .enumerate()
        .filter(|(_, slot)| !slot.is_resolved())
        .map(|(pos, _)| pos)
        .collect()
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DayMenu {
    pub breakfast: Vec<MenuSlot>,
    pub lunch: Vec<MenuSlot>,
    pub dinner: Vec<MenuSlot>,
}

impl DayMenu {
    pub fn meal(&self, meal_type: MealType) -> &[MenuSlot] {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    fn meal_mut(&mut self, meal_type: MealType) -> &mut Vec<MenuSlot> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }
}

/// Groups the menu per day for display, each meal ordered main, side, drink, dessert.
///
/// Slots whose day falls outside `0..day_count` are ignored.
pub fn group_by_day(menu: &[MenuSlot], day_count: u32) -> Vec<DayMenu> {
    let mut days = vec![DayMenu::default(); day_count as usize];

    for slot in menu {
        if let Some(day) = days.get_mut(slot.day_index as usize) {
            day.meal_mut(slot.meal_type).push(slot.clone());
        }
    }

    for day in days.iter_mut() {
        for meal in [&mut day.breakfast, &mut day.lunch, &mut day.dinner] {
            meal.sort_by_key(|slot| slot.course.rank());
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use grubmaster_shared::mealplan::Slot;
    use grubmaster_shared::recipe::Course;

    fn menu() -> Vec<MenuSlot> {
        vec![
            MenuSlot::new(Slot::new(0, MealType::Dinner, Course::Dessert), "cobbler"),
            MenuSlot::new(Slot::new(0, MealType::Dinner, Course::Main), "stew"),
            MenuSlot::new(Slot::new(1, MealType::Lunch, Course::Main), "stew"),
            MenuSlot::new(Slot::new(5, MealType::Lunch, Course::Main), "pbj"),
        ]
    }

    #[test]
    fn set_slot_recipe_ignores_out_of_range() {
        let mut menu = menu();

        assert!(set_slot_recipe(&mut menu, 0, "crisp"));
        assert!(!set_slot_recipe(&mut menu, 9, "crisp"));
        assert_eq!(menu[0].recipe_id, "crisp");
    }

    #[test]
    fn clear_recipe_reports_cleared_slots() {
        let mut menu = menu();

        assert_eq!(clear_recipe(&mut menu, "stew"), 2);
        assert_eq!(unresolved(&menu), vec![1, 2]);
        assert_eq!(clear_recipe(&mut menu, "stew"), 0);
    }

    #[test]
    fn group_by_day_orders_courses_and_drops_stray_days() {
        let days = group_by_day(&menu(), 2);

        assert_eq!(days.len(), 2);
        assert_eq!(
            days[0].meal(MealType::Dinner).iter().map(|s| s.course).collect::<Vec<_>>(),
            vec![Course::Main, Course::Dessert]
        );
        assert_eq!(days[1].lunch.len(), 1);
        assert!(days[1].breakfast.is_empty());
    }
}
