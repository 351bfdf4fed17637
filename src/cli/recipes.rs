use alimento_recipe::Catalog;
use clap::Subcommand;

use crate::render;

#[derive(Subcommand, Debug)]
pub enum RecipesCommand {
    /// List every recipe in the catalog
    List,
    /// Show ingredients, instructions and nutrition of one recipe
    Show { id: String },
    /// Search recipes by name or tag
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

pub fn recipes(catalog: &Catalog, command: RecipesCommand) -> anyhow::Result<String> {
    let out = match command {
        RecipesCommand::List => render::recipe_list(catalog.recipes()),
        RecipesCommand::Show { id } => {
            let Some(recipe) = catalog.find_recipe_by_id(Some(id.as_str())) else {
                anyhow::bail!("recipe {id} not found");
            };

            render::recipe_detail(recipe)
        }
        RecipesCommand::Search { query } => render::recipe_list(catalog.search(&query.join(" "))),
    };

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_and_search() -> anyhow::Result<()> {
        let catalog = Catalog::sample()?;

        let all = recipes(&catalog, RecipesCommand::List)?;
        assert_eq!(all.lines().count(), 6);

        let found = recipes(
            &catalog,
            RecipesCommand::Search {
                query: vec!["stir-fry".to_owned()],
            },
        )?;
        assert_eq!(found.lines().count(), 1);
        assert!(found.contains("Shrimp Stir-Fry"));

        let none = recipes(
            &catalog,
            RecipesCommand::Search {
                query: vec!["pizza".to_owned()],
            },
        )?;
        assert_eq!(none, "No recipes found.\n");

        Ok(())
    }

    #[test]
    fn test_show_unknown_recipe() -> anyhow::Result<()> {
        let catalog = Catalog::sample()?;

        let err = recipes(&catalog, RecipesCommand::Show { id: "42".to_owned() }).unwrap_err();

        assert_eq!(err.to_string(), "recipe 42 not found");

        Ok(())
    }
}
