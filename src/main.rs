use anyhow::Result;
use clap::{Parser, Subcommand};

use alimento::cli::{PlanArgs, RecipesCommand, SessionArgs, SwapsArgs};

/// alimento - Weekly meal planning
#[derive(Parser)]
#[command(name = "alimento")]
#[command(about = "Generate and edit meal plans from a recipe catalog", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a meal plan and print it
    Plan(PlanArgs),
    /// Browse the recipe catalog
    Recipes {
        #[command(subcommand)]
        command: RecipesCommand,
    },
    /// Allergy-friendly alternatives for catalog foods
    Swaps(SwapsArgs),
    /// Edit a meal plan interactively
    Session(SessionArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = alimento::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    alimento::observability::init_observability(
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let catalog = alimento::cli::load_catalog(&config)?;

    match cli.command {
        Commands::Plan(args) => print!("{}", alimento::cli::plan(&config, &catalog, args)?),
        Commands::Recipes { command } => {
            print!("{}", alimento::cli::recipes(&catalog, command)?)
        }
        Commands::Swaps(args) => print!("{}", alimento::cli::swaps(&catalog, args)),
        Commands::Session(args) => alimento::cli::session(&config, catalog, args)?,
    }

    Ok(())
}
