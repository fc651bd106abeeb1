use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub item: String,
    pub unit: String,
    pub qty: f64,
}

impl ShoppingItem {
    /// Case-insensitive identity of a shopping line.
    pub fn key(item: &str, unit: &str) -> (String, String) {
        (item.to_lowercase(), unit.to_lowercase())
    }
}
