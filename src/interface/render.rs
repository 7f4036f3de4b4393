use crate::error::Result;
use crate::models::Recipe;
use crate::nutrition;
use crate::scaling::{ScaledLine, lbs_to_display, scaled_lines};
use crate::state::{CheckStore, Session};
use crate::{catalog, timer};

/// Width of the step-progress bar in characters.
const PROGRESS_BAR_WIDTH: usize = 20;

/// Print the recipe card header: title, description, time and skill pills,
/// and the current batch selection.
pub fn render_recipe_header(recipe: &Recipe, session: &Session) {
    println!();
    println!("=== {} ===", recipe.title);
    println!("{}", recipe.description);
    println!(
        "[{} | {}]  Method: {}  Batch: {}  Units: {}",
        recipe.time_for(session.method()),
        recipe.skill,
        session.method().label(),
        lbs_to_display(session.batch_lbs(), session.units()),
        session.units().key(),
    );
}

/// Print the scaled ingredient list.
pub fn render_ingredients(recipe: &Recipe, session: &Session) -> Result<()> {
    let entries = (recipe.ingredients)();
    let lines = scaled_lines(&entries, session.batch_lbs(), session.units())?;

    println!();
    println!("--- Ingredients ---");
    for line in lines {
        match line {
            ScaledLine::Section(label) => println!("  [{}]", label),
            ScaledLine::Item { amount, name, note } => {
                let note = note.map(|n| format!("  ({})", n)).unwrap_or_default();
                println!("  {:<10} {}{}", amount, name, note);
            }
        }
    }
    Ok(())
}

/// Print the step list with saved check marks and a progress bar.
pub fn render_steps(recipe: &Recipe, session: &Session, store: &CheckStore) {
    let steps = (recipe.steps)(session.method());
    let key = CheckStore::key_for(
        session.flavor_key(),
        session.method(),
        session.batch_lbs(),
        session.units(),
    );

    println!();
    println!("--- Steps ({}) ---", session.method().label());
    for (idx, step) in steps.iter().enumerate() {
        let mark = if store.is_checked(&key, idx) { "x" } else { " " };
        println!("  {:>2}. [{}] {}", idx + 1, mark, step.text);
        if let Some(note) = step.note {
            println!("          {}", note);
        }
    }

    let total = steps.len();
    let done = store.done_count(&key, total);
    let pct = if total > 0 { done * 100 / total } else { 0 };
    let filled = if total > 0 {
        done * PROGRESS_BAR_WIDTH / total
    } else {
        0
    };
    println!(
        "  Progress: [{}{}] {}/{} ({}%)",
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_WIDTH - filled),
        done,
        total,
        pct
    );
}

/// Print the per-serving nutrition estimate.
pub fn render_nutrition(session: &Session) {
    let est = nutrition::estimate(
        session.flavor_key(),
        session.batch_lbs(),
        session.sauce_pct(),
    );

    println!();
    println!("--- Nutrition (est., per serving) ---");
    println!(
        "  Servings: {}   Batch: {}   Sauce eaten: {}%",
        est.servings,
        lbs_to_display(session.batch_lbs(), session.units()),
        session.sauce_pct()
    );
    println!("  Calories: {} kcal", est.per_serving.kcal.round());
    println!("  Protein:  {} g", est.per_serving.protein_g.round());
    println!("  Fat:      {} g", est.per_serving.fat_g.round());
}

/// Print the flavor catalog.
pub fn render_flavor_list() {
    println!();
    println!("=== Flavors ({}) ===", catalog::all().len());
    println!();
    for recipe in catalog::all() {
        println!("  {:<14} {} - {}", recipe.key, recipe.title, recipe.description);
    }
    println!();
}

/// Print the remaining-time readout on a single reused line.
pub fn render_timer_readout(remaining: std::time::Duration) {
    use std::io::Write;
    print!("\rTime left: {}   ", timer::format_remaining(remaining));
    let _ = std::io::stdout().flush();
}

/// Build the plain-text shopping list: a title/method/batch header block,
/// section separator lines, then one `amount  name` line per ingredient.
pub fn shopping_list_text(recipe: &Recipe, session: &Session) -> Result<String> {
    let entries = (recipe.ingredients)();
    let lines = scaled_lines(&entries, session.batch_lbs(), session.units())?;

    let mut out = Vec::new();
    out.push(format!("Wing Lab — {}", recipe.title));
    out.push(format!("Method: {}", session.method().label()));
    out.push(format!(
        "Batch: {}",
        lbs_to_display(session.batch_lbs(), session.units())
    ));
    out.push(String::new());

    for line in lines {
        match line {
            ScaledLine::Section(label) => out.push(format!("— {} —", label)),
            ScaledLine::Item { amount, name, .. } => out.push(format!("{}  {}", amount, name)),
        }
    }

    Ok(out.join("\n"))
}
