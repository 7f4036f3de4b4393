use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::MacroProfile;

/// Chicken wing, meat + skin, raw — per 100 g (typical reference values).
pub const WING_RAW_PER_100G: MacroProfile = MacroProfile::new(173.0, 18.4, 10.6);

/// Raw wing weight per serving, in pounds.
pub const LBS_PER_SERVING: f64 = 0.5;

/// Tablespoons per US cup.
pub const TBSP_PER_CUP: f64 = 16.0;

/// Tablespoons per teaspoon.
pub const TBSP_PER_TSP: f64 = 1.0 / 3.0;

/// Cups expressed in tablespoons.
pub fn cup(n: f64) -> f64 {
    n * TBSP_PER_CUP
}

/// Teaspoons expressed in tablespoons.
pub fn tsp(n: f64) -> f64 {
    n * TBSP_PER_TSP
}

/// Per-tablespoon macro profiles for sauce ingredients.
static MACROS_PER_TBSP: LazyLock<HashMap<&'static str, MacroProfile>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("butter", MacroProfile::new(102.0, 0.12, 11.5));
    m.insert("honey", MacroProfile::new(64.0, 0.0, 0.0));
    m.insert("mayo", MacroProfile::new(57.0, 0.13, 4.91));
    m.insert("soy", MacroProfile::new(8.48, 1.0, 0.01));
    m.insert("rice_vinegar", MacroProfile::new(3.0, 0.0, 0.0));
    m.insert("brown_sugar", MacroProfile::new(34.0, 0.0, 0.0));
    m.insert("mango_preserves", MacroProfile::new(45.0, 0.0, 0.0));
    m.insert("sweet_chili", MacroProfile::new(20.0, 0.0, 0.0));
    m.insert("bbq_sauce", MacroProfile::new(30.0, 0.0, 0.0));
    m.insert("dijon", MacroProfile::new(15.0, 0.0, 0.0));
    m.insert("parmesan", MacroProfile::new(27.0, 2.405, 1.7875));
    m
});

/// Per flavor, the sauce ingredients and their base tablespoon volumes for
/// the canonical 2-lb batch. Dry-rub flavors have no entry (empty sauce).
static SAUCE_RECIPES: LazyLock<HashMap<&'static str, Vec<(&'static str, f64)>>> =
    LazyLock::new(|| {
        let mut m: HashMap<&'static str, Vec<(&'static str, f64)>> = HashMap::new();
        m.insert(
            "mango",
            vec![
                ("mango_preserves", cup(0.5)),
                ("soy", 1.0),
                ("rice_vinegar", 1.0),
            ],
        );
        m.insert("lemonpepper", vec![("butter", 3.0)]);
        m.insert("buffalo", vec![("butter", 3.0)]);
        m.insert(
            "garlicparm",
            vec![("butter", 3.0), ("parmesan", cup(1.0 / 3.0))],
        );
        m.insert(
            "honeygarlic",
            vec![
                ("butter", 2.0),
                ("honey", 3.0),
                ("soy", 1.0),
                ("rice_vinegar", tsp(1.0)),
            ],
        );
        m.insert(
            "teriyaki",
            vec![("soy", 3.0), ("brown_sugar", 2.0), ("rice_vinegar", 1.0)],
        );
        m.insert("cajun", vec![]);
        m.insert("bbq", vec![("bbq_sauce", cup(0.5)), ("butter", 1.0)]);
        m.insert(
            "honeymustard",
            vec![
                ("honey", 3.0),
                ("dijon", 2.0),
                ("mayo", 1.0),
                ("rice_vinegar", tsp(1.0)),
            ],
        );
        m.insert("garlicbutter", vec![("butter", 4.0)]);
        m.insert(
            "sweetchili",
            vec![("sweet_chili", cup(0.5)), ("soy", 1.0)],
        );
        m.insert(
            "cajunhoney",
            vec![("honey", 3.0), ("butter", 2.0), ("rice_vinegar", tsp(1.0))],
        );
        m.insert("chipotlelime", vec![("butter", 2.0)]);
        m
    });

/// Look up the per-tablespoon macro profile for a sauce ingredient id.
pub fn macro_per_tbsp(ingredient: &str) -> Option<MacroProfile> {
    MACROS_PER_TBSP.get(ingredient).copied()
}

/// Look up a flavor's sauce recipe. Unknown flavors get the empty recipe.
pub fn sauce_recipe(flavor: &str) -> &'static [(&'static str, f64)] {
    SAUCE_RECIPES.get(flavor).map(Vec::as_slice).unwrap_or(&[])
}
