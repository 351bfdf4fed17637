use alimento_mealplan::{Day, Generate, Preferences, RandomSource, clamp_days, generate};
use alimento_recipe::Catalog;
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::render;

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// First day of the plan, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub start: Option<Day>,

    /// Number of days, clamped to 1..=14 (overrides config file)
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Comma-separated dietary preferences (overrides config file)
    #[arg(long)]
    pub preferences: Option<String>,

    /// Seed for reproducible plans
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Seeded generator when `seed` is given, the thread RNG otherwise.
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}

#[tracing::instrument(skip_all)]
pub fn plan(config: &Config, catalog: &Catalog, args: PlanArgs) -> anyhow::Result<String> {
    let start = args.start.unwrap_or_else(Day::today);
    let days = args
        .days
        .map(clamp_days)
        .unwrap_or(config.planner.days);
    let preferences = args
        .preferences
        .unwrap_or_else(|| config.planner.preferences.to_owned());

    let mut rng = random_source(args.seed);
    let plan = generate(
        catalog.recipes(),
        Generate {
            start,
            days,
            preferences: &preferences,
        },
        &mut rng,
    )?;

    if args.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&plan)?));
    }

    let mut out = String::new();
    if Preferences::parse(&preferences)
        .eligible(catalog.recipes())
        .is_unmatched()
    {
        out.push_str(render::NO_MATCH_NOTICE);
    }
    out.push_str(&render::plan(&plan, catalog));

    Ok(out)
}
