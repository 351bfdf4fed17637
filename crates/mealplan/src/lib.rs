mod generate;
mod plan;
mod preference;
mod random;

pub use generate::*;
pub use plan::*;
pub use preference::*;
pub use random::*;

pub use alimento_shared::Day;
pub use alimento_shared::mealplan::MealType;
