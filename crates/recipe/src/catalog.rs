use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::food::{FoodItem, SmartSwap};
use crate::types::Recipe;

const SAMPLE_CATALOG: &str = include_str!("../data/catalog.json");

/// Read-only collection of recipes and food items available for planning.
///
/// Deserializing runs the same checks as [`Catalog::new`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    recipes: Vec<Recipe>,
    foods: Vec<FoodItem>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    recipes: Vec<Recipe>,
    #[serde(default)]
    foods: Vec<FoodItem>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = alimento_shared::Error;

    fn try_from(value: RawCatalog) -> Result<Self, Self::Error> {
        Self::new(value.recipes, value.foods)
    }
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>, foods: Vec<FoodItem>) -> alimento_shared::Result<Self> {
        let catalog = Self { recipes, foods };
        catalog.check()?;

        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn sample() -> alimento_shared::Result<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn from_json(json: &str) -> alimento_shared::Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let catalog = Self::new(raw.recipes, raw.foods)?;

        tracing::debug!(
            recipes = catalog.recipes.len(),
            foods = catalog.foods.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> alimento_shared::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;

        tracing::info!(path = %path.display(), "loading catalog");

        Self::from_json(&json)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// `None` in, `None` out; otherwise the first recipe with that id.
    pub fn find_recipe_by_id(&self, id: Option<&str>) -> Option<&Recipe> {
        let id = id?;
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn find_food_by_id(&self, id: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|food| food.id == id)
    }

    /// Recipes whose name or any tag contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let query = query.trim().to_lowercase();

        self.recipes
            .iter()
            .filter(|recipe| recipe.name.to_lowercase().contains(&query) || recipe.has_tag(&query))
            .collect()
    }

    /// Swap suggestions for foods carrying any of `allergens`.
    ///
    /// With no allergens, every food that lists alternatives is returned.
    pub fn smart_swaps<S: AsRef<str>>(&self, allergens: &[S]) -> Vec<SmartSwap<'_>> {
        crate::food::smart_swaps(&self.foods, allergens)
    }

    fn check(&self) -> alimento_shared::Result<()> {
        let mut ids = HashSet::new();

        for recipe in &self.recipes {
            recipe.check()?;

            if !ids.insert(recipe.id.as_str()) {
                alimento_shared::bail!("duplicate recipe id '{}'", recipe.id);
            }
        }

        let mut ids = HashSet::new();

        for food in &self.foods {
            food.validate()?;

            if !ids.insert(food.id.as_str()) {
                alimento_shared::bail!("duplicate food id '{}'", food.id);
            }
        }

        Ok(())
    }
}
