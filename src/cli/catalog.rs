use std::fs;
use std::path::Path;

use anyhow::Context;
use grubmaster_recipe::{
    ImportOptions, ImportReport, Recipe, export_now, import_into, seed_catalog,
};

use crate::cli::{emit_json, read_catalog, read_catalog_report, write_catalog};
use crate::config::Config;

/// Merges `file` into the catalog at `catalog` and rewrites it.
///
/// A missing catalog file starts empty. A fatal import error, or a catalog
/// holding records that cannot be read back, leaves the catalog file untouched.
pub fn import_command(
    config: &Config,
    file: &Path,
    catalog: &Path,
    options: ImportOptions,
) -> anyhow::Result<ImportReport> {
    let text =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let mut recipes = existing_catalog(catalog)?;

    let report = import_into(&mut recipes, &text, options)
        .with_context(|| format!("failed to import {}", file.display()))?;

    write_catalog(catalog, &recipes, config.export.meta())
        .with_context(|| format!("failed to write catalog {}", catalog.display()))?;

    Ok(report)
}

/// Loads the catalog about to be rewritten, refusing one with unreadable
/// records since rewriting would drop them.
fn existing_catalog(catalog: &Path) -> anyhow::Result<Vec<Recipe>> {
    if !catalog.exists() {
        return Ok(vec![]);
    }

    let report = read_catalog_report(catalog)
        .with_context(|| format!("failed to read catalog {}", catalog.display()))?;

    if !report.rejected.is_empty() {
        let reasons = report
            .rejected
            .iter()
            .map(|rejected| format!("#{} ({})", rejected.index + 1, rejected.reason))
            .collect::<Vec<_>>()
            .join("; ");

        anyhow::bail!(
            "catalog {} has {} unreadable record(s), fix them before importing: {reasons}",
            catalog.display(),
            report.rejected.len()
        );
    }

    Ok(report.recipes)
}

pub fn export_command(config: &Config, catalog: &Path, out: Option<&Path>) -> anyhow::Result<()> {
    let recipes = read_catalog(catalog)
        .with_context(|| format!("failed to read catalog {}", catalog.display()))?;

    emit_json(&export_now(&recipes, config.export.meta()), out).context("failed to write export")
}

pub fn seed_command(config: &Config, out: &Path) -> anyhow::Result<()> {
    write_catalog(out, &seed_catalog(), config.export.meta())
        .with_context(|| format!("failed to write {}", out.display()))
}
