use grubmaster_recipe::{
    Course, ExportMeta, ImportError, ImportOptions, MealType, export, import_into, normalize,
    parse_import, renormalize, seed_catalog,
};
use serde_json::json;
use time::macros::datetime;

#[test]
fn test_export_then_import_preserves_recipes() -> anyhow::Result<()> {
    let recipes = seed_catalog();
    let envelope = export(
        &recipes,
        ExportMeta::default().with("troopId", "T-42"),
        datetime!(2025-07-04 08:30:00 UTC),
    );

    let text = envelope.to_json_pretty()?;
    let report = parse_import(&text, ImportOptions::default())?;

    assert_eq!(report.recipes, recipes);
    assert!(report.rejected.is_empty());

    Ok(())
}

#[test]
fn test_round_trip_of_a_messy_record() -> anyhow::Result<()> {
    let raw = json!({
        "id": "trail-mix",
        "name": " Trail Mix ",
        "mealType": "Lunch",
        "course": "SIDE",
        "serves": "6",
        "tags": { "backpacking": 1, "canoe": "yes" },
        "diet": { "vegan": true, "nutFree": false },
        "ingredients": [{ "item": "GORP", "qtyPerPerson": "0.5", "unit": "Cup" }],
        "steps": ["Scoop"]
    });

    let normalized = normalize(&raw);
    let envelope = export(
        std::slice::from_ref(&normalized),
        ExportMeta::default(),
        datetime!(2025-07-04 08:30:00 UTC),
    );
    let exported = serde_json::to_value(&envelope.recipes[0])?;

    assert_eq!(normalize(&exported), normalized);
    assert_eq!(renormalize(&normalized), normalized);
    assert_eq!(normalized.meal_type, MealType::Lunch);
    assert_eq!(normalized.course, Course::Side);

    Ok(())
}

#[test]
fn test_import_merges_by_id_without_duplicates() -> anyhow::Result<()> {
    let mut catalog = seed_catalog();
    let text = json!({
        "$schema": "https://example.com/schemas/grubmaster/recipes-v1.json",
        "exporter": { "app": "other", "version": "1.0", "exportedAt": "2025-01-01T00:00:00Z" },
        "recipes": [
            { "id": "seed-banana", "name": "Apple", "mealType": "breakfast", "course": "side" },
            { "id": "new-1", "name": "Foil Dinner" }
        ]
    })
    .to_string();

    let report = import_into(&mut catalog, &text, ImportOptions::default())?;

    assert_eq!(report.merged.added, 1);
    assert_eq!(report.merged.replaced, 1);
    assert_eq!(catalog.len(), 11);
    assert_eq!(
        catalog.iter().filter(|r| r.id == "seed-banana").count(),
        1,
        "existing ids are overwritten, not duplicated"
    );
    assert_eq!(catalog[5].name, "Apple");
    assert_eq!(catalog[10].id, "new-1");

    Ok(())
}

#[test]
fn test_fatal_import_leaves_catalog_untouched() {
    let mut catalog = seed_catalog();

    let err = import_into(&mut catalog, r#"{"recipes": "nope"}"#, ImportOptions::default())
        .unwrap_err();

    assert!(matches!(err, ImportError::UnexpectedShape));
    assert_eq!(catalog, seed_catalog());
}

#[test]
fn test_bad_records_are_skipped_not_fatal() -> anyhow::Result<()> {
    let mut catalog = vec![];
    let text = json!([
        { "id": "ok", "name": "Chili" },
        { "id": "neg", "name": "Negative Eggs", "ingredients": [{ "item": "egg", "qtyPerPerson": -2 }] },
        { "id": "loose", "ingredients": ["egg"] },
        { "id": "steps", "steps": "stir" },
        null
    ])
    .to_string();

    let report = import_into(&mut catalog, &text, ImportOptions::default())?;

    assert_eq!(report.total_attempted, 5);
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        report
            .rejected
            .iter()
            .map(|r| (r.index, r.id.as_deref()))
            .collect::<Vec<_>>(),
        vec![(1, Some("neg")), (2, Some("loose")), (3, Some("steps")), (4, None)]
    );
    assert_eq!(
        report.rejected[0].reason,
        "invalid qtyPerPerson for ingredient \"egg\""
    );

    Ok(())
}
