pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod nutrition;
pub mod scaling;
pub mod state;
pub mod timer;

pub use error::{Result, WingError};
pub use models::{Amount, IngredientEntry, MacroProfile, Method, Recipe, Step, UnitSystem};
