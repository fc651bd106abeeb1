use std::fs;
use std::path::Path;

use grubmaster_recipe::{
    ExportMeta, ImportOptions, ImportReport, Recipe, export_now, parse_import,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Parses a catalog file, either an export envelope or a bare array, keeping
/// the list of records that could not be read.
pub fn read_catalog_report(path: &Path) -> Result<ImportReport> {
    let text = fs::read_to_string(path)?;

    Ok(parse_import(&text, ImportOptions::default())?)
}

/// Reads a catalog file for planning or export. Unusable records are skipped with a warning.
pub fn read_catalog(path: &Path) -> Result<Vec<Recipe>> {
    let report = read_catalog_report(path)?;

    for rejected in &report.rejected {
        tracing::warn!(
            path = %path.display(),
            index = rejected.index,
            reason = %rejected.reason,
            "skipping catalog record"
        );
    }

    Ok(report.recipes)
}

pub fn write_catalog(path: &Path, recipes: &[Recipe], meta: ExportMeta) -> Result<()> {
    let envelope = export_now(recipes, meta);
    fs::write(path, envelope.to_json_pretty()?)?;

    tracing::info!(path = %path.display(), recipes = recipes.len(), "catalog written");

    Ok(())
}

/// Reads an optional JSON document, falling back to its default when no path is given.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };

    let text = fs::read_to_string(path)?;

    Ok(serde_json::from_str(&text)?)
}

/// Writes pretty JSON to `out`, or to stdout when no path is given.
pub fn emit_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    match out {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
