use alimento_recipe::Catalog;
use clap::Args;

use crate::render;

#[derive(Args, Debug, Default)]
pub struct SwapsArgs {
    /// Only foods containing this allergen (repeatable)
    #[arg(long = "allergen")]
    pub allergens: Vec<String>,
}

pub fn swaps(catalog: &Catalog, args: SwapsArgs) -> String {
    render::swaps(&catalog.smart_swaps(&args.allergens))
}
