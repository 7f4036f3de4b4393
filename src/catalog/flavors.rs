use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Amount, IngredientEntry, Method, Recipe, Step, VolumeUnit};

/// Flavor selected at startup.
pub const DEFAULT_FLAVOR: &str = "mango";

/// Catalog order for listings and menus.
pub const FLAVOR_ORDER: [&str; 13] = [
    "mango",
    "lemonpepper",
    "buffalo",
    "garlicparm",
    "honeygarlic",
    "teriyaki",
    "bbq",
    "honeymustard",
    "garlicbutter",
    "sweetchili",
    "cajunhoney",
    "chipotlelime",
    "cajun",
];

const TIME_BAKE: &str = "~45-55 min";
const TIME_AIR: &str = "~22-28 min";
const SKILL: &str = "Beginner-friendly";

fn tbsp(qty: f64) -> Amount {
    Amount::Scalable {
        qty,
        unit: VolumeUnit::Tbsp,
    }
}

fn tsp(qty: f64) -> Amount {
    Amount::Scalable {
        qty,
        unit: VolumeUnit::Tsp,
    }
}

fn cup(qty: f64) -> Amount {
    Amount::Scalable {
        qty,
        unit: VolumeUnit::Cup,
    }
}

fn cloves(qty: f64) -> Amount {
    Amount::Scalable {
        qty,
        unit: VolumeUnit::Clove,
    }
}

fn section(label: &'static str) -> IngredientEntry {
    IngredientEntry::Section(label)
}

fn item(name: &'static str, amount: Amount) -> IngredientEntry {
    IngredientEntry::item(name, amount)
}

fn item_note(name: &'static str, amount: Amount, note: &'static str) -> IngredientEntry {
    IngredientEntry::item_note(name, amount, note)
}

fn step(text: &'static str, note: &'static str) -> Step {
    Step::with_note(text, note)
}

/// Base wing prep shared by every saucy flavor.
fn base_wing_ingredients() -> Vec<IngredientEntry> {
    vec![
        section("Base wings"),
        item("Chicken wings", Amount::BatchWeight),
        item_note(
            "Baking powder (NOT baking soda)",
            tbsp(1.0),
            "Helps crisp the skin (oven method).",
        ),
        item("Kosher salt", tsp(1.0)),
        item("Black pepper", tsp(0.5)),
        item("Garlic powder", tsp(0.75)),
        item("Paprika (optional)", tsp(0.5)),
    ]
}

fn base_wing_steps(method: Method) -> Vec<Step> {
    match method {
        Method::Bake => vec![
            step("Pat wings very dry with paper towels.", "Dry skin = crisp wings."),
            step(
                "Toss wings with baking powder, salt, pepper, garlic powder (and paprika if using).",
                "Baking powder is the crispy helper.",
            ),
            step(
                "Heat oven to 425\u{b0}F. Place wings on a rack over a sheet pan.",
                "Airflow matters. If no rack, spread on foil and flip more often.",
            ),
            step(
                "Bake 20 min, flip, bake 20 min.",
                "If they're not crisp, add 5-10 min more.",
            ),
            step(
                "Check doneness: thickest part should hit 165\u{b0}F.",
                "For crispier texture, 175-185\u{b0}F is great.",
            ),
        ],
        Method::AirFry => vec![
            step("Pat wings very dry with paper towels.", "Dry skin = crisp wings."),
            step(
                "Toss wings with salt, pepper, garlic powder (skip baking powder in many air fryers).",
                "If you do use it, use less; it can taste chalky.",
            ),
            step(
                "Preheat air fryer to 380\u{b0}F (if your model supports preheat).",
                "Preheat helps browning.",
            ),
            step(
                "Air fry 12 min, flip, 10-14 min more at 380\u{b0}F.",
                "If you want extra crisp, finish 2-4 min at 400\u{b0}F.",
            ),
            step(
                "Check doneness: thickest part should hit 165\u{b0}F.",
                "Bigger wings may need a few extra minutes.",
            ),
        ],
    }
}

fn mango_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Mango glaze"),
        item("Mango preserves or mango jam", cup(0.5)),
        item_note("Hot sauce (optional)", tbsp(1.0), "Start small, add more later."),
        item("Rice vinegar or apple cider vinegar", tbsp(1.0)),
        item("Soy sauce", tbsp(1.0)),
        item("Garlic (minced)", cloves(2.0)),
        item("Lime juice", tbsp(1.0)),
        item("Cornstarch (optional, for thicker glaze)", tsp(1.0)),
    ]);
    list
}

fn mango_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Make the mango glaze: simmer mango preserves + vinegar + soy + garlic + lime for 3-5 min.",
            "Keep it gently bubbling, not scorching.",
        ),
        step(
            "Optional: whisk cornstarch with 1 tbsp water, stir into glaze 30-60 sec to thicken.",
            "Skip if you like it thinner.",
        ),
        step(
            "Toss hot cooked wings in glaze until coated.",
            "Sauce sticks best when wings are hot.",
        ),
        step(
            "Serve immediately. Optional: top with chopped cilantro or sliced green onion.",
            "Crunchy garnish = big upgrade.",
        ),
    ]);
    steps
}

fn lemonpepper_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Lemon pepper butter"),
        item("Butter", tbsp(3.0)),
        item_note("Lemon pepper seasoning", tbsp(2.0), "Use less if yours is salty."),
        item("Fresh lemon zest", tsp(1.0)),
        item("Fresh lemon juice", tbsp(1.0)),
    ]);
    list
}

fn lemonpepper_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Melt butter in a bowl; mix in lemon pepper, zest, and lemon juice.",
            "Taste it. Adjust lemon pepper to your salt level.",
        ),
        step(
            "Toss hot cooked wings in lemon pepper butter until glossy.",
            "Add more seasoning after tossing if you want it punchier.",
        ),
        step(
            "Serve immediately. Optional: extra lemon wedges on the side.",
            "Squeeze right before eating.",
        ),
    ]);
    steps
}

fn buffalo_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Buffalo sauce"),
        item("Hot sauce (Frank's-style)", cup(0.5)),
        item("Butter", tbsp(3.0)),
        item("Garlic powder (optional)", tsp(0.5)),
        item_note(
            "Honey (optional)",
            tsp(1.0),
            "Adds balance; skip if you want pure heat.",
        ),
    ]);
    list
}

fn buffalo_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Warm hot sauce + butter in a small pot 1-2 min (don't boil hard).",
            "Whisk until smooth.",
        ),
        step("Optional: whisk in garlic powder and honey.", "Taste and adjust."),
        step(
            "Toss wings in sauce. Serve with celery + ranch/blue cheese if you like.",
            "Classic combo.",
        ),
    ]);
    steps
}

fn garlicparm_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Garlic parm butter"),
        item("Butter", tbsp(3.0)),
        item("Garlic (minced)", cloves(3.0)),
        item("Parmesan (finely grated)", cup(0.33)),
        item("Parsley (chopped, optional)", tbsp(1.0)),
        item("Black pepper", tsp(0.5)),
    ]);
    list
}

fn garlicparm_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Gently saute garlic in butter 1-2 min (low heat).",
            "Don't brown it; bitter garlic is sad garlic.",
        ),
        step(
            "Turn off heat. Stir in parmesan, pepper, and parsley.",
            "Sauce will thicken as it cools.",
        ),
        step(
            "Toss hot wings in garlic parm mixture until coated.",
            "Add extra parmesan on top if you want.",
        ),
    ]);
    steps
}

fn honeygarlic_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Honey garlic sauce"),
        item("Butter", tbsp(2.0)),
        item("Garlic (minced)", cloves(4.0)),
        item("Honey", tbsp(3.0)),
        item("Soy sauce", tbsp(1.0)),
        item("Rice vinegar or apple cider vinegar", tsp(1.0)),
        item("Red pepper flakes (optional)", tsp(0.5)),
        item("Cornstarch (optional, for thicker sauce)", tsp(1.0)),
    ]);
    list
}

fn honeygarlic_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Make honey garlic sauce: melt butter on low, add garlic 30-60 sec (don't brown).",
            "Low heat keeps garlic sweet.",
        ),
        step(
            "Stir in honey, soy sauce, and vinegar; simmer 2-3 min.",
            "Gentle simmer = glossy sauce.",
        ),
        step(
            "Optional: whisk cornstarch with 1 tbsp water, stir in 30-60 sec to thicken.",
            "Thick sauce clings better.",
        ),
        step(
            "Toss hot wings in sauce until coated.",
            "Sauce sticks best when wings are hot.",
        ),
        step("Optional: add red pepper flakes for heat.", "Start small; it ramps fast."),
    ]);
    steps
}

fn teriyaki_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Teriyaki glaze"),
        item("Soy sauce", tbsp(3.0)),
        item("Brown sugar (or honey)", tbsp(2.0)),
        item("Rice vinegar", tbsp(1.0)),
        item("Sesame oil (optional)", tsp(1.0)),
        item("Ginger (grated or powder)", tsp(1.0)),
        item("Garlic (minced)", cloves(2.0)),
        item("Cornstarch", tsp(2.0)),
        item_note(
            "Sesame seeds + sliced green onion (optional garnish)",
            Amount::Freeform("to taste"),
            "Totally worth it.",
        ),
    ]);
    list
}

fn teriyaki_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Make the glaze: whisk soy sauce, sugar, vinegar, ginger, garlic, sesame oil (optional).",
            "Taste it: more sweet or more tangy as you like.",
        ),
        step(
            "Simmer 2-3 min, then add cornstarch mixed with 2 tbsp water.",
            "Stir until thick and shiny (30-60 sec).",
        ),
        step(
            "Toss hot wings in teriyaki glaze until coated.",
            "Work quickly; glaze sets as it cools.",
        ),
        step(
            "Optional: garnish with sesame seeds + green onion.",
            "Adds crunch + freshness.",
        ),
    ]);
    steps
}

fn bbq_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("BBQ glaze"),
        item("BBQ sauce", cup(0.5)),
        item_note("Butter (optional)", tbsp(1.0), "Makes it glossy."),
        item_note(
            "Apple cider vinegar (optional)",
            tsp(1.0),
            "Brightens heavy sauces.",
        ),
        item_note("Hot sauce or cayenne (optional)", tsp(1.0), "For a kick."),
    ]);
    list
}

fn bbq_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Warm BBQ sauce (and butter if using) 2-3 min on low.",
            "Don't boil hard; sauce can scorch.",
        ),
        step(
            "Optional: stir in vinegar + heat (hot sauce/cayenne).",
            "Taste and adjust.",
        ),
        step(
            "Toss hot wings in BBQ glaze until coated.",
            "Sauce sticks best when wings are hot.",
        ),
        step(
            "Optional: return wings to oven/air fryer 2-4 min to set glaze.",
            "Helps it cling and caramelize lightly.",
        ),
    ]);
    steps
}

fn honeymustard_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Honey mustard sauce"),
        item("Honey", tbsp(3.0)),
        item("Dijon mustard", tbsp(2.0)),
        item_note(
            "Mayo (optional)",
            tbsp(1.0),
            "Creamier, like a dip-style coating.",
        ),
        item("Apple cider vinegar or lemon juice", tsp(1.0)),
        item("Black pepper", tsp(0.25)),
    ]);
    list
}

fn honeymustard_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Whisk honey + Dijon + vinegar (and mayo if using).",
            "Taste: more honey for sweet, more Dijon for sharp.",
        ),
        step("Toss hot wings in sauce until coated.", "Coats best while wings are hot."),
        step("Optional: sprinkle a pinch more pepper on top.", "Simple but nice."),
    ]);
    steps
}

fn garlicbutter_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Garlic butter"),
        item("Butter", tbsp(4.0)),
        item("Garlic (minced)", cloves(4.0)),
        item("Parsley (optional)", tbsp(1.0)),
        item_note("Lemon juice (optional)", tsp(1.0), "Brightens the butter."),
    ]);
    list
}

fn garlicbutter_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Melt butter on low. Add garlic 30-60 sec (don't brown).",
            "Low heat keeps garlic sweet.",
        ),
        step(
            "Turn off heat; stir in parsley + lemon juice (optional).",
            "Lemon makes it pop.",
        ),
        step("Toss hot wings in garlic butter until glossy.", "Serve right away."),
    ]);
    steps
}

fn sweetchili_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Sweet chili glaze"),
        item("Sweet chili sauce", cup(0.5)),
        item("Soy sauce", tbsp(1.0)),
        item("Lime juice", tbsp(1.0)),
        item("Garlic (minced)", cloves(2.0)),
        item("Cornstarch (optional)", tsp(1.0)),
    ]);
    list
}

fn sweetchili_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step("Simmer sweet chili sauce + soy + garlic 2-3 min.", "Keep it gentle."),
        step(
            "Optional: whisk cornstarch with 1 tbsp water, stir 30-60 sec to thicken.",
            "Thicker = clingier.",
        ),
        step(
            "Turn off heat; stir in lime juice.",
            "Add citrus off-heat to keep it bright.",
        ),
        step(
            "Toss hot wings in glaze until coated.",
            "Optional: garnish with sesame seeds.",
        ),
    ]);
    steps
}

fn cajunhoney_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Cajun honey glaze"),
        item("Honey", tbsp(3.0)),
        item("Butter", tbsp(2.0)),
        item_note("Cajun seasoning", tsp(2.0), "Use less if salty."),
        item("Apple cider vinegar or lemon juice", tsp(1.0)),
    ]);
    list
}

fn cajunhoney_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Warm honey + butter 1-2 min on low until loose.",
            "Low heat so honey doesn't burn.",
        ),
        step("Stir in Cajun seasoning + vinegar/lemon.", "Taste and adjust heat."),
        step(
            "Toss hot wings in Cajun honey glaze until coated.",
            "Optional: dust a pinch more Cajun on top.",
        ),
    ]);
    steps
}

fn chipotlelime_ingredients() -> Vec<IngredientEntry> {
    let mut list = base_wing_ingredients();
    list.extend([
        section("Chipotle lime sauce"),
        item("Butter", tbsp(2.0)),
        item_note(
            "Chipotle powder (or smoked paprika + cayenne)",
            tsp(2.0),
            "Adjust for heat.",
        ),
        item_note("Honey (optional)", tbsp(1.0), "Balances smoke + spice."),
        item("Lime juice", tbsp(1.0)),
        item("Garlic (minced)", cloves(2.0)),
    ]);
    list
}

fn chipotlelime_steps(method: Method) -> Vec<Step> {
    let mut steps = base_wing_steps(method);
    steps.extend([
        step(
            "Melt butter on low; stir in chipotle powder and garlic 30-60 sec.",
            "Low heat; spices bloom fast.",
        ),
        step(
            "Turn off heat; stir in lime juice (and honey if using).",
            "Citrus off-heat keeps it bright.",
        ),
        step(
            "Toss hot wings until coated.",
            "Optional: finish with extra lime zest.",
        ),
    ]);
    steps
}

// Dry rub: its own base list (rub replaces most of the shared seasoning) and
// fully method-specific steps.
fn cajun_ingredients() -> Vec<IngredientEntry> {
    vec![
        section("Base wings (Cajun style)"),
        item("Chicken wings", Amount::BatchWeight),
        item("Baking powder (oven method)", tbsp(1.0)),
        item("Kosher salt", tsp(1.0)),
        section("Cajun dry rub"),
        item("Paprika", tsp(2.0)),
        item("Garlic powder", tsp(1.0)),
        item("Onion powder", tsp(1.0)),
        item_note("Cayenne pepper", tsp(0.5), "Use less for mild."),
        item("Dried oregano", tsp(0.5)),
        item("Dried thyme", tsp(0.5)),
        item("Black pepper", tsp(0.5)),
        item_note(
            "Brown sugar (optional)",
            tsp(1.0),
            "Adds balance and browning.",
        ),
    ]
}

fn cajun_steps(method: Method) -> Vec<Step> {
    match method {
        Method::AirFry => vec![
            step("Pat wings very dry with paper towels.", "Dry skin = crisp wings."),
            step(
                "Mix Cajun rub ingredients in a bowl.",
                "It should smell bold, smoky, peppery.",
            ),
            step(
                "Toss wings with salt + Cajun rub (skip baking powder in many air fryers).",
                "If you do use it, use less to avoid chalky taste.",
            ),
            step(
                "Air fry at 380\u{b0}F for 12 min, flip, 10-14 min more.",
                "Optional: finish 2-4 min at 400\u{b0}F for extra crisp.",
            ),
            step(
                "Check doneness: 165\u{b0}F minimum at the thickest part.",
                "Bigger wings need more time.",
            ),
            step(
                "Serve as-is, or add a squeeze of lemon to brighten.",
                "Acid makes spices pop.",
            ),
        ],
        Method::Bake => vec![
            step("Pat wings very dry with paper towels.", "Dry skin = crisp wings."),
            step(
                "Mix Cajun rub ingredients + baking powder in a bowl.",
                "Baking powder boosts crispness in the oven.",
            ),
            step(
                "Toss wings with Cajun rub mixture until evenly coated.",
                "Even dusting = even flavor.",
            ),
            step(
                "Bake at 425\u{b0}F on a rack: 20 min, flip, 20 min.",
                "Add 5-10 min if you want more crisp.",
            ),
            step(
                "Check doneness: 165\u{b0}F minimum (175-185\u{b0}F is extra tender/crispy).",
                "Higher temps can be nicer for wings.",
            ),
            step(
                "Serve as-is, or add a squeeze of lemon to brighten.",
                "Acid makes spices pop.",
            ),
        ],
    }
}

static FLAVORS: LazyLock<HashMap<&'static str, Recipe>> = LazyLock::new(|| {
    let recipes = [
        Recipe {
            key: "mango",
            title: "Mango Wings",
            description: "Sweet, tangy, lightly spicy glaze.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: mango_ingredients,
            steps: mango_steps,
        },
        Recipe {
            key: "lemonpepper",
            title: "Lemon Pepper Wings",
            description: "Bright, buttery, and super crispy.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: lemonpepper_ingredients,
            steps: lemonpepper_steps,
        },
        Recipe {
            key: "buffalo",
            title: "Buffalo Wings",
            description: "Classic spicy wings with buttery heat.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: buffalo_ingredients,
            steps: buffalo_steps,
        },
        Recipe {
            key: "garlicparm",
            title: "Garlic Parmesan Wings",
            description: "Savory, cheesy, garlicky; a crowd favorite.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: garlicparm_ingredients,
            steps: garlicparm_steps,
        },
        Recipe {
            key: "honeygarlic",
            title: "Honey Garlic Wings",
            description: "Sticky-sweet honey, lots of garlic, and a savory finish.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: honeygarlic_ingredients,
            steps: honeygarlic_steps,
        },
        Recipe {
            key: "teriyaki",
            title: "Teriyaki Wings",
            description: "Sweet-savory glaze with ginger and soy. Great with sesame.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: teriyaki_ingredients,
            steps: teriyaki_steps,
        },
        Recipe {
            key: "bbq",
            title: "BBQ Wings",
            description: "Smoky, sweet, classic BBQ glaze.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: bbq_ingredients,
            steps: bbq_steps,
        },
        Recipe {
            key: "honeymustard",
            title: "Honey Mustard Wings",
            description: "Sweet, tangy, and super easy.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: honeymustard_ingredients,
            steps: honeymustard_steps,
        },
        Recipe {
            key: "garlicbutter",
            title: "Garlic Butter Wings",
            description: "Buttery, garlicky, and ridiculously good.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: garlicbutter_ingredients,
            steps: garlicbutter_steps,
        },
        Recipe {
            key: "sweetchili",
            title: "Sweet Chili Wings",
            description: "Sticky-sweet with a gentle heat (Thai-style vibe).",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: sweetchili_ingredients,
            steps: sweetchili_steps,
        },
        Recipe {
            key: "cajunhoney",
            title: "Cajun Honey Wings",
            description: "Sweet heat: Cajun spice + honey glaze.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: cajunhoney_ingredients,
            steps: cajunhoney_steps,
        },
        Recipe {
            key: "chipotlelime",
            title: "Chipotle Lime Wings",
            description: "Smoky chipotle with bright lime; bold and zesty.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: chipotlelime_ingredients,
            steps: chipotlelime_steps,
        },
        Recipe {
            key: "cajun",
            title: "Cajun Dry Rub Wings",
            description: "Bold, smoky, spicy dry rub; crispy and mess-free.",
            time_bake: TIME_BAKE,
            time_airfry: TIME_AIR,
            skill: SKILL,
            ingredients: cajun_ingredients,
            steps: cajun_steps,
        },
    ];

    recipes.into_iter().map(|r| (r.key, r)).collect()
});

/// Look up a recipe by flavor key.
pub fn get(key: &str) -> Option<&'static Recipe> {
    FLAVORS.get(key)
}

/// All recipes in catalog order.
pub fn all() -> Vec<&'static Recipe> {
    FLAVOR_ORDER
        .iter()
        .filter_map(|key| FLAVORS.get(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(all().len(), FLAVOR_ORDER.len());
        for key in FLAVOR_ORDER {
            let recipe = get(key).expect("every listed flavor has a recipe");
            assert_eq!(recipe.key, key);
            assert!(!(recipe.ingredients)().is_empty());
            assert!(!(recipe.steps)(Method::Bake).is_empty());
            assert!(!(recipe.steps)(Method::AirFry).is_empty());
        }
    }

    #[test]
    fn test_default_flavor_exists() {
        assert!(get(DEFAULT_FLAVOR).is_some());
    }

    #[test]
    fn test_unknown_flavor_misses() {
        assert!(get("ghost_pepper").is_none());
    }

    #[test]
    fn test_sauced_flavors_share_base_prep() {
        let mango = (get("mango").unwrap().ingredients)();
        assert_eq!(mango[0], IngredientEntry::Section("Base wings"));
        // Dry rub builds its own base list
        let cajun = (get("cajun").unwrap().ingredients)();
        assert_eq!(cajun[0], IngredientEntry::Section("Base wings (Cajun style)"));
    }

    #[test]
    fn test_cajun_steps_differ_by_method() {
        let recipe = get("cajun").unwrap();
        let bake = (recipe.steps)(Method::Bake);
        let air = (recipe.steps)(Method::AirFry);
        assert_ne!(bake, air);
    }
}
