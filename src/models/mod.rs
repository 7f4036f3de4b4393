mod macros;
mod recipe;

pub use macros::MacroProfile;
pub use recipe::{Amount, IngredientEntry, Method, Recipe, Step, UnitSystem, VolumeUnit};
