use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use grubmaster::cli::{PlanArgs, export_command, import_command, plan_command, seed_command};
use grubmaster_recipe::ImportOptions;
use validator::Validate;

/// grubmaster - multi-day camping meal planner
#[derive(Parser)]
#[command(name = "grubmaster")]
#[command(about = "Plan menus, shopping lists and duty rosters for troop campouts", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate a menu and print the plan as JSON
    Plan {
        /// Recipe catalog (export envelope or array), seed catalog when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Trip JSON, overrides the configured trip
        #[arg(long)]
        trip: Option<PathBuf>,

        /// Previous menu whose picks are kept
        #[arg(long)]
        menu: Option<PathBuf>,

        /// JSON array of favorite recipe ids
        #[arg(long)]
        favorites: Option<PathBuf>,

        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Merge recipes from a file into the catalog
    Import {
        file: PathBuf,

        #[arg(long)]
        catalog: PathBuf,

        /// Suggest a course from the recipe name when none is given
        #[arg(long)]
        infer_course: bool,
    },
    /// Write the catalog as an export envelope
    Export {
        #[arg(long)]
        catalog: PathBuf,

        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the starter catalog
    Seed {
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = grubmaster::Config::load(cli.config.clone())?;
    config.validate()?;

    grubmaster::observability::init_observability(
        "grubmaster",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Plan {
            catalog,
            trip,
            menu,
            favorites,
            out,
        } => {
            plan_command(
                &config,
                PlanArgs {
                    catalog,
                    trip,
                    menu,
                    favorites,
                    out,
                },
            )?;
        }
        Commands::Import {
            file,
            catalog,
            infer_course,
        } => {
            let report = import_command(&config, &file, &catalog, ImportOptions { infer_course })?;
            println!("{}", report.summary());
        }
        Commands::Export { catalog, out } => export_command(&config, &catalog, out.as_deref())?,
        Commands::Seed { out } => seed_command(&config, &out)?,
    }

    Ok(())
}
