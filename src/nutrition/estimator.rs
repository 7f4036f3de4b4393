use crate::models::MacroProfile;
use crate::nutrition::constants::{
    LBS_PER_SERVING, WING_RAW_PER_100G, macro_per_tbsp, sauce_recipe,
};
use crate::scaling::{CANONICAL_BATCH_LBS, GRAMS_PER_LB};

/// A per-serving nutrition estimate for a flavor and batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionEstimate {
    pub servings: u32,
    pub per_serving: MacroProfile,
}

/// One serving per 0.5 lb of raw wings, never fewer than one.
pub fn servings_from_lbs(lbs: u32) -> u32 {
    ((f64::from(lbs) / LBS_PER_SERVING).round() as u32).max(1)
}

/// Macro profile of the raw wing meat for a whole batch.
pub fn wings_macro_for_batch(lbs: u32) -> MacroProfile {
    let grams = f64::from(lbs) * GRAMS_PER_LB;
    WING_RAW_PER_100G * (grams / 100.0)
}

/// Full-batch macro profile of a flavor's sauce, before the eaten fraction.
///
/// Unknown flavors and sauce ingredients missing from the macro table
/// contribute zero; this is an estimate, and partial data beats a hard
/// failure that blocks the rest of the session.
pub fn sauce_macro_for_flavor(flavor: &str, lbs: u32) -> MacroProfile {
    let factor = f64::from(lbs) / CANONICAL_BATCH_LBS;
    sauce_recipe(flavor)
        .iter()
        .filter_map(|(ingredient, base_tbsp)| {
            macro_per_tbsp(ingredient).map(|profile| profile * (base_tbsp * factor))
        })
        .fold(MacroProfile::ZERO, |acc, m| acc + m)
}

/// Estimate per-serving macros for a flavor, batch weight, and sauce-eaten
/// percentage.
///
/// The slider scales sauce macros only; the wing-meat profile is always
/// counted in full. Intermediate values keep full precision; rounding
/// happens at display time.
pub fn estimate(flavor: &str, lbs: u32, sauce_pct: u32) -> NutritionEstimate {
    let servings = servings_from_lbs(lbs);

    let wings_batch = wings_macro_for_batch(lbs);
    let sauce_batch_full = sauce_macro_for_flavor(flavor, lbs);
    let eaten_fraction = f64::from(sauce_pct.min(100)) / 100.0;
    let sauce_batch_eaten = sauce_batch_full * eaten_fraction;

    let batch = wings_batch + sauce_batch_eaten;

    NutritionEstimate {
        servings,
        per_serving: batch / f64::from(servings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_f64_near;

    #[test]
    fn test_servings_boundaries() {
        assert_eq!(servings_from_lbs(1), 2);
        assert_eq!(servings_from_lbs(2), 4);
        for lbs in 1..=6 {
            assert!(servings_from_lbs(lbs) >= 1);
        }
    }

    #[test]
    fn test_wings_batch_scaling() {
        let batch = wings_macro_for_batch(2);
        // 907.184 g of raw wing at 173 kcal / 100 g
        assert_f64_near!(batch.kcal, 9.07184 * 173.0);
        assert_f64_near!(batch.protein_g, 9.07184 * 18.4);
        assert_f64_near!(batch.fat_g, 9.07184 * 10.6);
    }

    #[test]
    fn test_sauce_scales_with_batch_weight() {
        let at_2 = sauce_macro_for_flavor("garlicbutter", 2);
        let at_4 = sauce_macro_for_flavor("garlicbutter", 4);
        assert_f64_near!(at_4.kcal, at_2.kcal * 2.0);
    }

    #[test]
    fn test_unknown_flavor_yields_zero_sauce() {
        assert_eq!(sauce_macro_for_flavor("ghost_pepper", 2), MacroProfile::ZERO);
    }

    #[test]
    fn test_zero_sauce_pct_is_wings_only() {
        let wings = wings_macro_for_batch(3);
        let est = estimate("buffalo", 3, 0);
        let expected = wings / f64::from(est.servings);
        assert_f64_near!(est.per_serving.kcal, expected.kcal);
        assert_f64_near!(est.per_serving.fat_g, expected.fat_g);
    }

    #[test]
    fn test_estimate_is_pure() {
        let a = estimate("teriyaki", 4, 60);
        let b = estimate("teriyaki", 4, 60);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sauce_pct_clamped_above_100() {
        let full = estimate("mango", 2, 100);
        let over = estimate("mango", 2, 250);
        assert_eq!(full, over);
    }
}
