use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::MealType;

/// Camp duties rotated across the roster, in rotation order.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum Role {
    Grubmaster,
    #[strum(serialize = "Asst. Grubmaster")]
    #[serde(rename = "Asst. Grubmaster")]
    AsstGrubmaster,
    Fireman,
    Quartermaster,
    Cleanup,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyAssignment {
    pub day_index: u32,
    pub meal_type: MealType,
    pub recipe_id: String,
    pub assignment: BTreeMap<Role, String>,
}
