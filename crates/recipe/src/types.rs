use alimento_shared::recipe::Nutrition;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ingredient {
    #[validate(length(min = 1))]
    pub name: String,
    pub amount: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub substitutes: Vec<String>,
}

#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipe {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub prep_time: u16,
    pub cook_time: u16,
    pub servings: u16,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[validate(nested)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Prep plus cook time in minutes.
    pub fn total_time(&self) -> u16 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// True when any tag contains `needle`, ignoring case.
    pub fn has_tag(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// Ingredients that can be swapped for something else.
    pub fn substitutions(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients
            .iter()
            .filter(|ingredient| !ingredient.substitutes.is_empty())
    }

    pub(crate) fn check(&self) -> alimento_shared::Result<()> {
        self.validate()?;

        for ingredient in &self.ingredients {
            ingredient.validate()?;
        }

        Ok(())
    }
}
