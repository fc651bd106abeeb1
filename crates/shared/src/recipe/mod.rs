use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

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
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
}

/// A recipe's role within a meal. Dessert only ever belongs to dinner.
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
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Course {
    #[default]
    Main,
    Side,
    Drink,
    Dessert,
}

impl Course {
    /// Courses every meal gets, in grid order.
    pub const BASE: [Course; 3] = [Course::Main, Course::Side, Course::Drink];

    /// Display rank used when a meal's slots are grouped for presentation.
    pub fn rank(&self) -> u8 {
        match self {
            Course::Main => 0,
            Course::Side => 1,
            Course::Drink => 2,
            Course::Dessert => 3,
        }
    }
}

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
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Diet {
    AlphaGalSafe,
    Vegetarian,
    Vegan,
    GlutenFree,
    NutFree,
    DairyFree,
}

/// Camp-compatibility tags. Absent keys are resolved to `false` when a recipe is normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampTags {
    pub backpacking: bool,
    pub car: bool,
    pub canoe: bool,
    pub dutch_oven: bool,
}

impl CampTags {
    pub fn set(&mut self, key: &str, value: bool) -> bool {
        match key {
            "backpacking" => self.backpacking = value,
            "car" => self.car = value,
            "canoe" => self.canoe = value,
            "dutchOven" => self.dutch_oven = value,
            _ => return false,
        }

        true
    }

    /// True when no tag at all is set, Dutch oven included.
    pub fn is_untagged(&self) -> bool {
        !self.backpacking && !self.car && !self.canoe && !self.dutch_oven
    }
}

/// One flag per enumerated [`Diet`] code, `false` unless explicitly set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietFlags {
    pub alpha_gal_safe: bool,
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub nut_free: bool,
    pub dairy_free: bool,
}

impl DietFlags {
    pub fn get(&self, diet: Diet) -> bool {
        match diet {
            Diet::AlphaGalSafe => self.alpha_gal_safe,
            Diet::Vegetarian => self.vegetarian,
            Diet::Vegan => self.vegan,
            Diet::GlutenFree => self.gluten_free,
            Diet::NutFree => self.nut_free,
            Diet::DairyFree => self.dairy_free,
        }
    }

    pub fn set(&mut self, diet: Diet, value: bool) {
        let flag = match diet {
            Diet::AlphaGalSafe => &mut self.alpha_gal_safe,
            Diet::Vegetarian => &mut self.vegetarian,
            Diet::Vegan => &mut self.vegan,
            Diet::GlutenFree => &mut self.gluten_free,
            Diet::NutFree => &mut self.nut_free,
            Diet::DairyFree => &mut self.dairy_free,
        };
        *flag = value;
    }

    pub fn with(mut self, diet: Diet) -> Self {
        self.set(diet, true);
        self
    }

    /// Diets whose flag is set, in declaration order.
    pub fn active(&self) -> impl Iterator<Item = Diet> + '_ {
        Diet::VARIANTS.iter().copied().filter(|d| self.get(*d))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub item: String,
    pub qty_per_person: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, qty_per_person: f64, unit: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            qty_per_person,
            unit: unit.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub meal_type: MealType,
    pub course: Course,
    pub serves: u32,
    pub tags: CampTags,
    pub diet: DietFlags,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
}

impl Recipe {
    pub const DEFAULT_SERVES: u32 = 8;

    pub fn is(&self, meal_type: MealType, course: Course) -> bool {
        self.meal_type == meal_type && self.course == course
    }
}
