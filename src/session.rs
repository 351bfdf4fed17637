use std::io::{BufRead, Write};

use alimento_mealplan::{
    Day, Generate, MealPlan, MealType, Preferences, RandomSource, clamp_days, generate,
};
use alimento_recipe::Catalog;
use clap::{Parser, Subcommand};

use crate::render;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Select the working day
    Date { day: Day },
    /// Show meals for a day (defaults to the selected day)
    Show { day: Option<Day> },
    /// Show every planned day
    Week,
    /// Put a recipe into a slot of the selected day
    Add {
        meal_type: MealType,
        recipe_id: String,
        #[arg(long)]
        day: Option<Day>,
    },
    /// Empty a slot
    Remove {
        meal_type: MealType,
        #[arg(long)]
        day: Option<Day>,
    },
    /// Replace the plan with a generated one starting at the selected day
    Generate {
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,
        /// Comma-separated dietary preferences
        #[arg(trailing_var_arg = true)]
        preferences: Vec<String>,
    },
    /// Search recipes by name or tag
    Search {
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Show a recipe
    Recipe { id: String },
    /// Nutrition totals for a day
    Nutrition { day: Option<Day> },
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Interactive planner state: the catalog, the current plan and the
/// selected day.
pub struct Session<R: RandomSource> {
    catalog: Catalog,
    plan: MealPlan,
    selected: Day,
    days: u8,
    preferences: String,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new(catalog: Catalog, selected: Day, days: u8, preferences: String, rng: R) -> Self {
        Self {
            catalog,
            plan: MealPlan::new(),
            selected,
            days: clamp_days(i64::from(days)),
            preferences,
            rng,
        }
    }

    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    pub fn selected(&self) -> Day {
        self.selected
    }

    /// Runs one command line and returns what to print.
    pub fn handle(&mut self, line: &str) -> Outcome {
        let words = line.split_whitespace().collect::<Vec<_>>();
        if words.is_empty() {
            return Outcome::Continue(String::new());
        }

        let action = match Line::try_parse_from(words) {
            Ok(line) => line.action,
            Err(err) => return Outcome::Continue(err.to_string()),
        };

        if let Action::Quit = action {
            return Outcome::Quit;
        }

        match self.execute(action) {
            Ok(out) => Outcome::Continue(out),
            Err(err) => {
                tracing::error!(error = %err, "command failed");
                Outcome::Continue(format!("error: {err}\n"))
            }
        }
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        write!(output, "> ")?;
        output.flush()?;

        for line in input.lines() {
            match self.handle(&line?) {
                Outcome::Continue(out) => write!(output, "{out}")?,
                Outcome::Quit => return Ok(()),
            }

            write!(output, "> ")?;
            output.flush()?;
        }

        writeln!(output)?;

        Ok(())
    }

    fn execute(&mut self, action: Action) -> anyhow::Result<String> {
        let out = match action {
            Action::Date { day } => {
                self.selected = day;
                render::entry(&self.plan.entry_or_default(day), &self.catalog)
            }
            Action::Show { day } => {
                let day = day.unwrap_or(self.selected);
                render::entry(&self.plan.entry_or_default(day), &self.catalog)
            }
            Action::Week => render::plan(&self.plan, &self.catalog),
            Action::Add {
                meal_type,
                recipe_id,
                day,
            } => {
                let day = day.unwrap_or(self.selected);
                let Some(recipe) = self.catalog.find_recipe_by_id(Some(recipe_id.as_str())) else {
                    return Ok(format!("Recipe {recipe_id} not found.\n"));
                };
                let message = format!("Added {} to {meal_type} on {day}.\n", recipe.name);

                self.plan = self.plan.set_slot(day, meal_type, recipe_id);

                message
            }
            Action::Remove { meal_type, day } => {
                let day = day.unwrap_or(self.selected);

                if self.plan.find_entry(day).is_none() {
                    return Ok(format!("Nothing planned on {day}.\n"));
                }

                self.plan = self.plan.clear_slot(day, meal_type);

                format!("Removed {meal_type} from {day}.\n")
            }
            Action::Generate { days, preferences } => {
                let days = days.map(clamp_days).unwrap_or(self.days);
                let preferences = match preferences.is_empty() {
                    true => self.preferences.to_owned(),
                    false => preferences.join(" "),
                };

                self.plan = generate(
                    self.catalog.recipes(),
                    Generate {
                        start: self.selected,
                        days,
                        preferences: &preferences,
                    },
                    &mut self.rng,
                )?;

                let mut out = String::new();
                if Preferences::parse(&preferences)
                    .eligible(self.catalog.recipes())
                    .is_unmatched()
                {
                    out.push_str(render::NO_MATCH_NOTICE);
                }
                out.push_str(&format!(
                    "Generated a {days}-day meal plan starting from {}.\n",
                    self.selected
                ));

                out
            }
            Action::Search { query } => render::recipe_list(self.catalog.search(&query.join(" "))),
            Action::Recipe { id } => match self.catalog.find_recipe_by_id(Some(id.as_str())) {
                Some(recipe) => render::recipe_detail(recipe),
                None => format!("Recipe {id} not found.\n"),
            },
            Action::Nutrition { day } => {
                let day = day.unwrap_or(self.selected);
                render::nutrition(&self.plan.daily_nutrition(day, &self.catalog))
            }
            Action::Quit => String::new(),
        };

        Ok(out)
    }
}
