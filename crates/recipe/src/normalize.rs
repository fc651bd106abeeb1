use std::str::FromStr;

use grubmaster_shared::recipe::{CampTags, Course, Diet, DietFlags, Ingredient, MealType, Recipe};
use serde_json::{Map, Value};
use ulid::Ulid;

/// Coerces a raw recipe record into its canonical shape.
///
/// Never fails: absent or unusable fields fall back to defaults (`dinner`,
/// `main`, serves 8, empty lists) and a fresh id is assigned when none is
/// present. A raw meal type of `dessert` becomes a dinner dessert, and a
/// dessert course always belongs to dinner.
///
/// Idempotent: normalizing the serialized output yields the same recipe.
pub fn normalize(raw: &Value) -> Recipe {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    let id = fields
        .get("id")
        .and_then(text)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Ulid::new().to_string());

    let name = fields
        .get("name")
        .and_then(text)
        .map(|name| name.trim().to_owned())
        .unwrap_or_default();

    let (meal_type, course) = meal_and_course(
        &lowered(fields.get("mealType")),
        &lowered(fields.get("course")),
    );

    let serves = fields
        .get("serves")
        .and_then(number)
        .map(f64::round)
        .filter(|serves| *serves >= 1.0)
        .map(|serves| serves.min(u32::MAX as f64) as u32)
        .unwrap_or(Recipe::DEFAULT_SERVES);

    Recipe {
        id,
        name,
        meal_type,
        course,
        serves,
        tags: tags(fields.get("tags")),
        diet: diet(fields.get("diet")),
        ingredients: ingredients(fields.get("ingredients")),
        steps: steps(fields.get("steps")),
    }
}

/// Runs an already typed recipe back through [`normalize`].
pub fn renormalize(recipe: &Recipe) -> Recipe {
    match serde_json::to_value(recipe) {
        Ok(value) => normalize(&value),
        Err(_) => recipe.clone(),
    }
}

fn meal_and_course(raw_meal: &str, raw_course: &str) -> (MealType, Course) {
    let mut course = Course::from_str(raw_course).unwrap_or_default();

    let meal_type = if raw_meal == "dessert" {
        course = Course::Dessert;
        MealType::Dinner
    } else {
        MealType::from_str(raw_meal).unwrap_or_default()
    };

    if course == Course::Dessert {
        return (MealType::Dinner, course);
    }

    (meal_type, course)
}

fn lowered(value: Option<&Value>) -> String {
    value
        .and_then(text)
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default()
}

fn tags(value: Option<&Value>) -> CampTags {
    let mut tags = CampTags::default();

    if let Some(Value::Object(entries)) = value {
        for (key, flag_value) in entries {
            tags.set(key, flag(flag_value));
        }
    }

    tags
}

fn diet(value: Option<&Value>) -> DietFlags {
    let mut diet = DietFlags::default();

    if let Some(Value::Object(entries)) = value {
        for (key, flag_value) in entries {
            if let Ok(code) = Diet::from_str(key) {
                diet.set(code, flag(flag_value));
            }
        }
    }

    diet
}

fn ingredients(value: Option<&Value>) -> Vec<Ingredient> {
    let Some(Value::Array(entries)) = value else {
        return vec![];
    };

    entries
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| Ingredient {
            item: entry
                .get("item")
                .and_then(text)
                .map(|s| s.trim().to_owned())
                .unwrap_or_default(),
            qty_per_person: entry
                .get("qtyPerPerson")
                .and_then(number)
                .filter(|qty| qty.is_finite() && *qty >= 0.0)
                .unwrap_or(0.0),
            unit: entry
                .get("unit")
                .and_then(text)
                .map(|s| s.trim().to_owned())
                .unwrap_or_default(),
        })
        .collect()
}

fn steps(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(entries)) = value else {
        return vec![];
    };

    entries
        .iter()
        .filter_map(|step| match step {
            Value::String(s) => Some(s.to_owned()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect()
}

pub(crate) fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    }
}
