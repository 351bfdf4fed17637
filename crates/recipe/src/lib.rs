mod catalog;
mod food;
mod types;

pub use catalog::*;
pub use food::*;
pub use types::*;

pub use alimento_shared::recipe::Nutrition;
