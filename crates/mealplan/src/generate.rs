use alimento_recipe::Recipe;
use alimento_shared::mealplan::MealType;
use alimento_shared::{Day, Error};

use crate::plan::{MealPlan, MealPlanEntry};
use crate::preference::Preferences;
use crate::random::RandomSource;

pub const MIN_DAYS: u8 = 1;
pub const MAX_DAYS: u8 = 14;

/// Clamps a requested day count into `MIN_DAYS..=MAX_DAYS`.
///
/// `generate` does not validate its input; callers run this first.
pub fn clamp_days(days: i64) -> u8 {
    days.clamp(MIN_DAYS as i64, MAX_DAYS as i64) as u8
}

pub struct Generate<'a> {
    pub start: Day,
    pub days: u8,
    pub preferences: &'a str,
}

/// Builds a fresh plan of `input.days` fully populated entries starting at
/// `input.start`.
///
/// Each slot of each day is an independent uniform draw, with replacement,
/// from the recipes matching the preferences (or the whole catalog when
/// nothing matches). The result replaces any previous plan.
pub fn generate<R: RandomSource + ?Sized>(
    recipes: &[Recipe],
    input: Generate<'_>,
    rng: &mut R,
) -> alimento_shared::Result<MealPlan> {
    if recipes.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let preferences = Preferences::parse(input.preferences);
    let eligible = preferences.eligible(recipes);

    if eligible.is_unmatched() {
        tracing::warn!(
            preferences = input.preferences,
            "no recipes match the preferences, using the whole catalog"
        );
    }

    let mut entries = Vec::with_capacity(input.days as usize);

    for offset in 0..input.days {
        let day = input.start.add_days(offset as i64)?;
        let mut entry = MealPlanEntry::empty(day);

        for meal_type in [MealType::Breakfast, MealType::Lunch, MealType::Dinner] {
            let recipe = eligible.recipes[rng.pick(eligible.recipes.len())];
            *entry.slot_mut(meal_type) = Some(recipe.id.to_owned());
        }

        entries.push(entry);
    }

    tracing::info!(
        start = %input.start,
        days = input.days,
        eligible = eligible.recipes.len(),
        "meal plan generated"
    );

    Ok(MealPlan::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_days() {
        assert_eq!(clamp_days(-3), 1);
        assert_eq!(clamp_days(0), 1);
        assert_eq!(clamp_days(7), 7);
        assert_eq!(clamp_days(14), 14);
        assert_eq!(clamp_days(90), 14);
    }
}
