use alimento_mealplan::{MealPlan, MealPlanEntry, MealType};
use alimento_recipe::{Catalog, Nutrition, Recipe, SmartSwap};

pub const NO_MATCH_NOTICE: &str =
    "No recipes match your preferences, using all available recipes instead.\n";

pub fn entry(entry: &MealPlanEntry, catalog: &Catalog) -> String {
    let mut out = format!("{}\n", entry.day);

    for meal_type in [MealType::Breakfast, MealType::Lunch, MealType::Dinner] {
        let name = match entry.slot(meal_type) {
            Some(id) => match catalog.find_recipe_by_id(Some(id)) {
                Some(recipe) => format!("{} ({})", recipe.name, recipe.id),
                None => format!("unknown recipe ({id})"),
            },
            None => "-".to_owned(),
        };
        out.push_str(&format!("  {:<9} {name}\n", format!("{meal_type}:")));
    }

    out
}

pub fn plan(plan: &MealPlan, catalog: &Catalog) -> String {
    if plan.is_empty() {
        return "No meals planned yet.\n".to_owned();
    }

    plan.entries_by_day()
        .into_iter()
        .map(|e| entry(e, catalog))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn nutrition(nutrition: &Nutrition) -> String {
    format!(
        "Cal: {}kcal  Protein: {}g  Carbs: {}g  Fat: {}g\n",
        nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fat
    )
}

pub fn recipe_line(recipe: &Recipe) -> String {
    format!(
        "{:>4}  {} [{} min] {}\n",
        recipe.id,
        recipe.name,
        recipe.total_time(),
        recipe.tags.join(", ")
    )
}

pub fn recipe_list<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> String {
    let out = recipes.into_iter().map(recipe_line).collect::<String>();

    if out.is_empty() {
        return "No recipes found.\n".to_owned();
    }

    out
}

pub fn recipe_detail(recipe: &Recipe) -> String {
    let mut out = format!(
        "{} ({})\nPrep {} min, cook {} min, serves {}\nTags: {}\n",
        recipe.name,
        recipe.id,
        recipe.prep_time,
        recipe.cook_time,
        recipe.servings,
        recipe.tags.join(", ")
    );
    out.push_str(&nutrition(&recipe.nutrition));

    out.push_str("\nIngredients:\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  - {} {}", ingredient.amount, ingredient.name));
        if ingredient.optional {
            out.push_str(" (optional)");
        }
        if !ingredient.substitutes.is_empty() {
            out.push_str(&format!(" [swap: {}]", ingredient.substitutes.join(", ")));
        }
        out.push('\n');
    }

    out.push_str("\nInstructions:\n");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("  {}. {instruction}\n", step + 1));
    }

    out
}

pub fn swaps(swaps: &[SmartSwap<'_>]) -> String {
    if swaps.is_empty() {
        return "No smart swaps for this profile.\n".to_owned();
    }

    let mut out = String::new();
    for swap in swaps {
        out.push_str(&format!("{} ({})", swap.food.name, swap.food.category));
        if !swap.triggered_by.is_empty() {
            out.push_str(&format!(" contains {}", swap.triggered_by.join(", ")));
        }
        out.push_str(&format!(" -> {}\n", swap.alternatives.join(", ")));
    }

    out
}
