mod command;
pub mod duty;
pub mod mealplan;
pub mod recipe;
pub mod shopping;

pub use command::*;
