mod plan;
mod recipes;
mod session;
mod swaps;

pub use plan::*;
pub use recipes::*;
pub use session::*;
pub use swaps::*;

use alimento_recipe::Catalog;

use crate::config::Config;

/// Catalog from `catalog.path` when configured, the bundled sample otherwise.
pub fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let catalog = match config.catalog.path.as_deref() {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::sample()?,
    };

    tracing::debug!(
        recipes = catalog.recipes().len(),
        foods = catalog.foods().len(),
        "catalog loaded"
    );

    Ok(catalog)
}
