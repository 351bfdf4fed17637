use alimento_mealplan::Day;
use alimento_recipe::Catalog;
use clap::Args;

use crate::config::Config;
use crate::session::Session;

#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Day selected when the session starts (defaults to today)
    #[arg(long)]
    pub date: Option<Day>,

    /// Seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn session(config: &Config, catalog: Catalog, args: SessionArgs) -> anyhow::Result<()> {
    let mut session = Session::new(
        catalog,
        args.date.unwrap_or_else(Day::today),
        config.planner.days,
        config.planner.preferences.to_owned(),
        super::random_source(args.seed),
    );

    tracing::info!(day = %session.selected(), "planner session started");

    println!("Type `help` for the list of commands.");
    session.run(std::io::stdin().lock(), std::io::stdout().lock())
}
