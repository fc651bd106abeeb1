use grubmaster_shared::recipe::Recipe;
use serde::Serialize;
use serde_json::Value;

use crate::catalog::{MergeStats, merge};
use crate::error::{ImportError, ImportResult};
use crate::normalize::{normalize, number, text};
use crate::tagging::CourseInferenceService;

#[derive(Debug, Default, Clone, Copy)]
pub struct ImportOptions {
    /// Suggest a course from the recipe name when a record has none.
    pub infer_course: bool,
}

/// A record that was skipped, with whatever identified it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejected {
    pub index: usize,
    pub id: Option<String>,
    pub name: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    pub recipes: Vec<Recipe>,
    pub rejected: Vec<Rejected>,
    pub total_attempted: usize,
    #[serde(skip)]
    pub merged: MergeStats,
}

impl ImportReport {
    pub fn summary(&self) -> String {
        let mut summary = format!("Imported {} recipe(s).", self.recipes.len());

        if !self.rejected.is_empty() {
            summary.push_str(&format!(" Skipped {}:", self.rejected.len()));
            for rejected in &self.rejected {
                let label = rejected
                    .name
                    .as_deref()
                    .filter(|n| !n.is_empty())
                    .or(rejected.id.as_deref())
                    .map(|l| format!("\"{l}\""))
                    .unwrap_or_else(|| format!("#{}", rejected.index + 1));
                summary.push_str(&format!(" {label} ({})", rejected.reason));
                summary.push(';');
            }
            summary.pop();
        }

        summary
    }
}

/// Parses an export envelope or a bare array of recipe records.
///
/// The whole import fails only when the input is not JSON or has neither shape.
/// Individual records that cannot be used are skipped and listed in
/// [`ImportReport::rejected`]; every other record is normalized.
pub fn parse_import(input: &str, options: ImportOptions) -> ImportResult<ImportReport> {
    let value: Value = serde_json::from_str(input)?;
    let records = records(&value)?;

    let mut report = ImportReport {
        total_attempted: records.len(),
        ..Default::default()
    };

    for (index, raw) in records.iter().enumerate() {
        if let Err(reason) = check_record(raw) {
            tracing::debug!(index, reason = %reason, "skipping recipe record");
            report.rejected.push(Rejected {
                index,
                id: raw.get("id").and_then(text),
                name: raw.get("name").and_then(text),
                reason,
            });
            continue;
        }

        let recipe = if options.infer_course {
            normalize(&with_suggested_course(raw))
        } else {
            normalize(raw)
        };

        report.recipes.push(recipe);
    }

    Ok(report)
}

/// Parses `input` and merges the accepted recipes into `catalog` by id.
///
/// On a fatal error the catalog is left untouched.
pub fn import_into(
    catalog: &mut Vec<Recipe>,
    input: &str,
    options: ImportOptions,
) -> ImportResult<ImportReport> {
    let mut report = parse_import(input, options)?;
    report.merged = merge(catalog, report.recipes.iter().cloned());

    tracing::info!(
        imported = report.recipes.len(),
        added = report.merged.added,
        replaced = report.merged.replaced,
        rejected = report.rejected.len(),
        "recipes imported"
    );

    Ok(report)
}

fn records(value: &Value) -> ImportResult<&Vec<Value>> {
    if let Some(Value::Array(recipes)) = value.get("recipes") {
        return Ok(recipes);
    }

    match value {
        Value::Array(recipes) => Ok(recipes),
        _ => Err(ImportError::UnexpectedShape),
    }
}

fn check_record(raw: &Value) -> Result<(), String> {
    let Some(fields) = raw.as_object() else {
        return Err("record is not an object".to_owned());
    };

    for key in ["ingredients", "steps"] {
        match fields.get(key) {
            None | Some(Value::Null) | Some(Value::Array(_)) => {}
            Some(_) => return Err(format!("{key} must be a list")),
        }
    }

    let ingredients = fields
        .get("ingredients")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for (pos, ingredient) in ingredients.iter().enumerate() {
        let Some(ingredient) = ingredient.as_object() else {
            return Err(format!("ingredient {} is not an object", pos + 1));
        };

        match ingredient.get("qtyPerPerson") {
            None | Some(Value::Null) => {}
            Some(qty) => match number(qty) {
                Some(qty) if qty.is_finite() && qty >= 0.0 => {}
                _ => {
                    let item = ingredient.get("item").and_then(text).unwrap_or_default();
                    return Err(format!("invalid qtyPerPerson for ingredient \"{item}\""));
                }
            },
        }
    }

    Ok(())
}

fn with_suggested_course(raw: &Value) -> Value {
    let has_course = raw
        .get("course")
        .and_then(text)
        .is_some_and(|course| !course.trim().is_empty());
    let is_dessert_meal = raw
        .get("mealType")
        .and_then(text)
        .is_some_and(|meal| meal.trim().eq_ignore_ascii_case("dessert"));

    if has_course || is_dessert_meal {
        return raw.clone();
    }

    let name = raw.get("name").and_then(text).unwrap_or_default();
    let Some(course) = CourseInferenceService::suggest(&name) else {
        return raw.clone();
    };

    let mut raw = raw.clone();
    if let Some(fields) = raw.as_object_mut() {
        fields.insert("course".to_owned(), Value::String(course.to_string()));
    }

    raw
}
