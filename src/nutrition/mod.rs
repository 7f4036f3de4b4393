pub mod constants;
pub mod estimator;

pub use constants::{WING_RAW_PER_100G, macro_per_tbsp, sauce_recipe};
pub use estimator::{NutritionEstimate, estimate, sauce_macro_for_flavor, servings_from_lbs};
