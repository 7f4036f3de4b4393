use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog;
use crate::error::{Result, WingError};
use crate::models::{Method, Recipe};
use crate::timer::{MAX_TIMER_MINUTES, MIN_TIMER_MINUTES};

/// Minimum similarity for a fuzzy flavor suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Resolve a typed flavor name against the catalog.
///
/// Tries exact key and title matches (case-insensitive) first, then fuzzy
/// matching with a confirmation prompt, the same flow the user would get
/// from a typo'd craving. Returns `Ok(None)` when the user declines every
/// suggestion.
pub fn resolve_flavor(input: &str) -> Result<Option<&'static Recipe>> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(None);
    }

    let exact = catalog::all().into_iter().find(|r| {
        r.key.to_lowercase() == needle || r.title.to_lowercase() == needle
    });
    if let Some(recipe) = exact {
        return Ok(Some(recipe));
    }

    let mut candidates: Vec<(&'static Recipe, f64)> = catalog::all()
        .into_iter()
        .map(|r| {
            let score = jaro_winkler(&r.key.to_lowercase(), &needle)
                .max(jaro_winkler(&r.title.to_lowercase(), &needle));
            (r, score)
        })
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let recipe = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", recipe.title))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(recipe));
    }

    let mut options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(r, _)| r.title.to_string())
        .collect();
    let none_idx = options.len();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < none_idx {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

/// Pick a flavor from the full catalog.
pub fn prompt_flavor() -> Result<&'static Recipe> {
    let recipes = catalog::all();
    let options: Vec<String> = recipes
        .iter()
        .map(|r| format!("{} - {}", r.title, r.description))
        .collect();

    let selection = Select::new()
        .with_prompt("Pick a flavor")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(recipes[selection])
}

/// Pick a cooking method.
pub fn prompt_method() -> Result<Method> {
    let selection = Select::new()
        .with_prompt("Cooking method")
        .items(&["Oven", "Air Fryer"])
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => Method::AirFry,
        _ => Method::Bake,
    })
}

/// Prompt for the sauce-eaten percentage (0..=100).
pub fn prompt_sauce_pct() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How much of the sauce gets eaten? (0-100%)")
        .default("100".to_string())
        .interact_text()?;

    let pct: u32 = input
        .trim()
        .parse()
        .map_err(|_| WingError::InvalidInput("Invalid number".to_string()))?;

    if pct > 100 {
        return Err(WingError::InvalidInput(
            "Sauce percentage must be 0-100".to_string(),
        ));
    }

    Ok(pct)
}

/// Prompt for timer minutes (1..=120).
pub fn prompt_minutes() -> Result<u64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Timer minutes ({}-{})",
            MIN_TIMER_MINUTES, MAX_TIMER_MINUTES
        ))
        .interact_text()?;

    let minutes: u64 = input
        .trim()
        .parse()
        .map_err(|_| WingError::InvalidInput("Invalid number".to_string()))?;

    if !(MIN_TIMER_MINUTES..=MAX_TIMER_MINUTES).contains(&minutes) {
        return Err(WingError::InvalidInput(format!(
            "Enter {}-{} minutes",
            MIN_TIMER_MINUTES, MAX_TIMER_MINUTES
        )));
    }

    Ok(minutes)
}

/// Prompt for a step number to toggle; empty input or 0 goes back.
pub fn prompt_step_toggle(total: usize) -> Result<Option<usize>> {
    let input: String = Input::new()
        .with_prompt(format!("Toggle step (1-{}, 0 to go back)", total))
        .default("0".to_string())
        .interact_text()?;

    let n: usize = input
        .trim()
        .parse()
        .map_err(|_| WingError::InvalidInput("Invalid number".to_string()))?;

    if n == 0 {
        return Ok(None);
    }
    if n > total {
        return Err(WingError::InvalidInput(format!(
            "Step must be 1-{}",
            total
        )));
    }

    Ok(Some(n - 1))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
