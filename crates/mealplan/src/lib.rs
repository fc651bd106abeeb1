mod allocate;
mod edit;
mod grid;

pub use allocate::*;
pub use edit::*;
pub use grid::*;

pub use grubmaster_shared::mealplan::*;
pub use grubmaster_shared::recipe::{Course, MealType};
