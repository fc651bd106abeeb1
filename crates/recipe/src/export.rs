use grubmaster_shared::recipe::Recipe;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::OffsetDateTime;

pub const SCHEMA: &str = "https://example.com/schemas/grubmaster/recipes-v1.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exporter {
    pub app: String,
    pub version: String,
    #[serde(with = "time::serde::rfc3339")]
    pub exported_at: OffsetDateTime,
    /// Caller supplied metadata such as the troop or user id.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub exporter: Exporter,
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone)]
pub struct ExportMeta {
    pub app: String,
    pub version: String,
    pub extra: Map<String, Value>,
}

impl Default for ExportMeta {
    fn default() -> Self {
        Self {
            app: "Scouts BSA Grubmaster Planner".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            extra: Map::new(),
        }
    }
}

impl ExportMeta {
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

pub fn export(recipes: &[Recipe], meta: ExportMeta, exported_at: OffsetDateTime) -> Envelope {
    Envelope {
        schema: SCHEMA.to_owned(),
        exporter: Exporter {
            app: meta.app,
            version: meta.version,
            exported_at,
            extra: meta.extra,
        },
        recipes: recipes.to_vec(),
    }
}

pub fn export_now(recipes: &[Recipe], meta: ExportMeta) -> Envelope {
    export(recipes, meta, OffsetDateTime::now_utc())
}

impl Envelope {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
