use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use grubmaster_duty::RosterPolicy;
use grubmaster_mealplan::{CampType, MealsPerDay, TripConfig};
use grubmaster_recipe::{Diet, DietFlags, ExportMeta};
use serde::Deserialize;
use std::env;
use validator::Validate;

#[derive(Debug, Deserialize, Clone, Default, Validate)]
pub struct Config {
    #[serde(default)]
    #[validate(nested)]
    pub trip: TripSettings,
    #[serde(default)]
    #[validate(nested)]
    pub roster: RosterConfig,
    #[serde(default)]
    #[validate(nested)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Trip used by `plan` when no trip file is given.
#[derive(Debug, Deserialize, Clone, Validate)]
#[serde(default)]
pub struct TripSettings {
    #[validate(range(min = 1, message = "Must be at least 1"))]
    pub headcount: u32,
    #[validate(range(max = 30, message = "Must be at most 30"))]
    pub breakfasts: u32,
    #[validate(range(max = 30, message = "Must be at most 30"))]
    pub lunches: u32,
    #[validate(range(max = 30, message = "Must be at most 30"))]
    pub dinners: u32,
    pub camp_type: CampType,
    pub include_dutch_oven: bool,
    pub diets: Vec<Diet>,
}

impl Default for TripSettings {
    fn default() -> Self {
        let trip = TripConfig::default();

        Self {
            headcount: trip.headcount,
            breakfasts: trip.meals_per_day.breakfast,
            lunches: trip.meals_per_day.lunch,
            dinners: trip.meals_per_day.dinner,
            camp_type: trip.camp_type,
            include_dutch_oven: trip.include_dutch_oven,
            diets: vec![],
        }
    }
}

impl TripSettings {
    pub fn to_trip_config(&self) -> TripConfig {
        TripConfig {
            headcount: self.headcount,
            meals_per_day: MealsPerDay {
                breakfast: self.breakfasts,
                lunch: self.lunches,
                dinner: self.dinners,
            },
            camp_type: self.camp_type,
            include_dutch_oven: self.include_dutch_oven,
            diet_filters: self
                .diets
                .iter()
                .fold(DietFlags::default(), |flags, diet| flags.with(*diet)),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, Validate)]
pub struct RosterConfig {
    #[serde(default)]
    pub names: Vec<String>,
    /// Pad or truncate the roster to exactly this many scouts.
    #[serde(default)]
    #[validate(range(min = 1, message = "Must be at least 1"))]
    pub fixed_size: Option<usize>,
}

impl RosterConfig {
    pub fn policy(&self) -> grubmaster_shared::Result<RosterPolicy> {
        RosterPolicy::from_size(self.fixed_size)
    }
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_export_app")]
    pub app: String,
    #[serde(default = "default_export_version")]
    pub version: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            app: default_export_app(),
            version: default_export_version(),
        }
    }
}

impl ExportConfig {
    pub fn meta(&self) -> ExportMeta {
        ExportMeta {
            app: self.app.to_owned(),
            version: self.version.to_owned(),
            ..Default::default()
        }
    }
}

fn default_export_app() -> String {
    ExportMeta::default().app
}

fn default_export_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (GRUBMASTER__TRIP__HEADCOUNT, etc.)
    /// 2. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("observability.log_level", default_log_level())?
            .set_default("export.app", default_export_app())?
            .set_default("export.version", default_export_version())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("GRUBMASTER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
