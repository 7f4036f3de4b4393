use std::fs;
use std::thread;
use std::time::Duration;

use clap::Parser;
use dialoguer::Select;

use wing_lab_rs::cli::{Cli, Command};
use wing_lab_rs::error::{Result, WingError};
use wing_lab_rs::catalog;
use wing_lab_rs::interface::{
    prompt_flavor, prompt_method, prompt_minutes, prompt_sauce_pct, prompt_step_toggle,
    prompt_yes_no, render_flavor_list, render_ingredients, render_nutrition, render_recipe_header,
    render_steps, render_timer_readout, resolve_flavor, shopping_list_text,
};
use wing_lab_rs::models::{Method, Recipe};
use wing_lab_rs::state::{CheckStore, DetailPanel, MAX_BATCH_LBS, MIN_BATCH_LBS, Session};
use wing_lab_rs::timer::{CookTimer, TimerStatus, format_remaining};

/// Poll interval for the countdown readout.
const TIMER_POLL: Duration = Duration::from_millis(250);

/// Timer presets offered in the interactive session, in minutes.
const TIMER_PRESETS: [u64; 4] = [20, 25, 35, 45];

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Cook => cmd_cook(&cli.file),
        Command::Show {
            flavor,
            method,
            lbs,
            metric,
        } => cmd_show(&cli.file, &flavor, &method, lbs, metric),
        Command::Flavors => {
            render_flavor_list();
            Ok(())
        }
        Command::Nutrition {
            flavor,
            lbs,
            sauce_pct,
        } => cmd_nutrition(&flavor, lbs, sauce_pct),
        Command::Export {
            flavor,
            method,
            lbs,
            metric,
            output,
        } => cmd_export(&flavor, &method, lbs, metric, output.as_deref()),
        Command::Timer { minutes } => cmd_timer(minutes),
        Command::ResetChecks => cmd_reset_checks(&cli.file),
    }
}

fn parse_method(s: &str) -> Result<Method> {
    Method::parse(s)
        .ok_or_else(|| WingError::InvalidInput(format!("Unknown method '{}': use bake or airfry", s)))
}

fn validate_lbs(lbs: u32) -> Result<u32> {
    if !(MIN_BATCH_LBS..=MAX_BATCH_LBS).contains(&lbs) {
        return Err(WingError::InvalidInput(format!(
            "Batch weight must be {}-{} lbs, got {}",
            MIN_BATCH_LBS, MAX_BATCH_LBS, lbs
        )));
    }
    Ok(lbs)
}

/// Resolve a user-typed flavor, warning on a miss.
fn lookup_flavor(name: &str) -> Result<&'static Recipe> {
    match resolve_flavor(name)? {
        Some(recipe) => Ok(recipe),
        None => {
            eprintln!("Warning: no flavor matches '{}'; try 'flavors' to list them", name);
            Err(WingError::UnknownFlavor(name.to_string()))
        }
    }
}

fn save_or_warn(store: &CheckStore) {
    if let Err(e) = store.save() {
        eprintln!("Warning: could not save step checks ({})", e);
    }
}

fn build_session(recipe: &Recipe, method: Method, lbs: u32, metric: bool) -> Result<Session> {
    let mut session = Session::new();
    session.set_flavor(recipe.key)?;
    session.set_method(method);
    session.set_lbs(validate_lbs(lbs)?);
    if metric {
        session.toggle_units();
    }
    Ok(session)
}

/// Print a full recipe card.
fn cmd_show(file: &str, flavor: &str, method: &str, lbs: u32, metric: bool) -> Result<()> {
    let recipe = lookup_flavor(flavor)?;
    let session = build_session(recipe, parse_method(method)?, lbs, metric)?;
    let store = CheckStore::load_or_default(file);

    render_recipe_header(recipe, &session);
    render_ingredients(recipe, &session)?;
    render_steps(recipe, &session, &store);
    render_nutrition(&session);
    println!();
    Ok(())
}

/// Print a per-serving nutrition estimate.
fn cmd_nutrition(flavor: &str, lbs: u32, sauce_pct: u32) -> Result<()> {
    if sauce_pct > 100 {
        return Err(WingError::InvalidInput(format!(
            "Sauce percentage must be 0-100, got {}",
            sauce_pct
        )));
    }

    let recipe = lookup_flavor(flavor)?;
    let mut session = build_session(recipe, Method::Bake, lbs, false)?;
    session.set_sauce_pct(sauce_pct);

    println!();
    println!("=== {} ===", recipe.title);
    render_nutrition(&session);
    println!();
    Ok(())
}

/// Export a shopping list to stdout or a file.
fn cmd_export(
    flavor: &str,
    method: &str,
    lbs: u32,
    metric: bool,
    output: Option<&str>,
) -> Result<()> {
    let recipe = lookup_flavor(flavor)?;
    let session = build_session(recipe, parse_method(method)?, lbs, metric)?;
    let text = shopping_list_text(recipe, &session)?;

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &text) {
                // Same degradation as a blocked clipboard: keep the list usable.
                eprintln!("Warning: could not write {} ({}); printing instead", path, e);
                println!("{}", text);
            } else {
                println!("Shopping list written to {}", path);
            }
        }
        None => println!("{}", text),
    }
    Ok(())
}

/// Run a countdown until it finishes.
fn run_countdown(minutes: u64) -> Result<()> {
    let mut timer = CookTimer::new();
    timer.start(minutes)?;
    println!("Timer started: {} minutes", minutes);

    loop {
        match timer.poll() {
            TimerStatus::Running(remaining) => {
                render_timer_readout(remaining);
                thread::sleep(TIMER_POLL);
            }
            TimerStatus::Finished => {
                // \x07 rings the terminal bell.
                println!("\rTimer done! Check your wings.\x07");
                return Ok(());
            }
            TimerStatus::Idle => return Ok(()),
        }
    }
}

fn cmd_timer(minutes: u64) -> Result<()> {
    run_countdown(minutes)
}

/// Remove all saved step checks.
fn cmd_reset_checks(file: &str) -> Result<()> {
    let mut store = CheckStore::load_or_default(file);
    let removed = store.reset();
    store.save()?;
    println!("Removed {} saved check entries.", removed);
    Ok(())
}

/// The interactive session: a menu loop over the same controls the
/// recipe card exposes.
fn cmd_cook(file: &str) -> Result<()> {
    let mut session = Session::new();
    let mut store = CheckStore::load_or_default(file);
    let mut timer = CookTimer::new();

    println!("Wing Lab — pick a flavor, scale the batch, cook the wings.");

    loop {
        let recipe = match catalog::get(session.flavor_key()) {
            Some(r) => r,
            None => {
                // Session setters validate, so this is unreachable in
                // practice; bail rather than loop on a bad key.
                return Err(WingError::UnknownFlavor(session.flavor_key().to_string()));
            }
        };

        render_recipe_header(recipe, &session);
        render_panel(recipe, &session, &store)?;
        report_timer(&mut timer);

        let actions = [
            "View ingredients",
            "View steps / check progress",
            "View nutrition",
            "Change flavor",
            "Change method",
            "Batch +1 lb",
            "Batch -1 lb",
            "Toggle units",
            "Set sauce eaten %",
            "Start timer",
            "Stop timer",
            "Print full recipe card",
            "Export shopping list",
            "Reset all checks",
            "Quit",
        ];

        println!();
        let choice = Select::new()
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()
            .map_err(WingError::from)?;

        match choice {
            0 => session.set_panel(DetailPanel::Ingredients),
            1 => {
                session.set_panel(DetailPanel::Steps);
                toggle_steps_loop(recipe, &session, &mut store)?;
            }
            2 => session.set_panel(DetailPanel::Nutrition),
            3 => {
                let recipe = prompt_flavor()?;
                session.set_flavor(recipe.key)?;
            }
            4 => {
                let method = prompt_method()?;
                session.set_method(method);
            }
            5 => session.adjust_lbs(1),
            6 => session.adjust_lbs(-1),
            7 => session.toggle_units(),
            8 => match report_invalid(prompt_sauce_pct()) {
                Ok(pct) => {
                    session.set_sauce_pct(pct);
                    session.set_panel(DetailPanel::Nutrition);
                }
                Err(WingError::InvalidInput(_)) => {}
                Err(e) => return Err(e),
            },
            9 => {
                session.set_panel(DetailPanel::Timer);
                start_timer_menu(&mut timer)?;
            }
            10 => {
                if timer.is_running() {
                    timer.stop();
                    println!("Timer stopped.");
                } else {
                    println!("No timer running.");
                }
            }
            11 => {
                render_ingredients(recipe, &session)?;
                render_steps(recipe, &session, &store);
                render_nutrition(&session);
            }
            12 => {
                let text = shopping_list_text(recipe, &session)?;
                println!();
                println!("{}", text);
            }
            13 => {
                if prompt_yes_no("Remove all saved step checks?", false)? {
                    let removed = store.reset();
                    save_or_warn(&store);
                    println!("Checks reset ({} entries removed).", removed);
                }
            }
            _ => return Ok(()),
        }
    }
}

/// Re-render whichever detail panel the session is focused on.
fn render_panel(recipe: &Recipe, session: &Session, store: &CheckStore) -> Result<()> {
    match session.panel() {
        DetailPanel::Ingredients => render_ingredients(recipe, session)?,
        DetailPanel::Steps => render_steps(recipe, session, store),
        DetailPanel::Nutrition => render_nutrition(session),
        DetailPanel::Timer => {}
    }
    Ok(())
}

/// Turn an `InvalidInput` error into a printed message, keeping the
/// session loop alive; other errors propagate.
fn report_invalid<T>(result: Result<T>) -> Result<T> {
    if let Err(WingError::InvalidInput(msg)) = &result {
        println!("{}", msg);
    }
    result
}

/// Show the step list and toggle checks until the user backs out.
fn toggle_steps_loop(recipe: &Recipe, session: &Session, store: &mut CheckStore) -> Result<()> {
    let key = CheckStore::key_for(
        session.flavor_key(),
        session.method(),
        session.batch_lbs(),
        session.units(),
    );
    let total = (recipe.steps)(session.method()).len();

    loop {
        render_steps(recipe, session, store);
        match report_invalid(prompt_step_toggle(total)) {
            Ok(Some(idx)) => {
                let checked = store.is_checked(&key, idx);
                store.set_check(&key, idx, !checked);
                save_or_warn(store);
            }
            Ok(None) => return Ok(()),
            Err(WingError::InvalidInput(_)) => continue,
            Err(e) => return Err(e),
        }
    }
}

/// One-line timer status, printed on each pass through the menu. The
/// finished notice fires once; polling self-cancels the timer after it.
fn report_timer(timer: &mut CookTimer) {
    match timer.poll() {
        TimerStatus::Running(remaining) => {
            println!("Timer: {} remaining", format_remaining(remaining));
        }
        TimerStatus::Finished => {
            // \x07 rings the terminal bell.
            println!("Timer done! Check your wings.\x07");
        }
        TimerStatus::Idle => {}
    }
}

/// Preset-or-custom timer entry for the interactive session. Arms the
/// shared timer; starting over a running countdown replaces it.
fn start_timer_menu(timer: &mut CookTimer) -> Result<()> {
    let mut options: Vec<String> = TIMER_PRESETS.iter().map(|m| format!("{} min", m)).collect();
    options.push("Custom".to_string());

    let selection = Select::new()
        .with_prompt("Timer")
        .items(&options)
        .default(0)
        .interact()
        .map_err(WingError::from)?;

    let minutes = if selection < TIMER_PRESETS.len() {
        TIMER_PRESETS[selection]
    } else {
        match report_invalid(prompt_minutes()) {
            Ok(m) => m,
            Err(WingError::InvalidInput(_)) => return Ok(()),
            Err(e) => return Err(e),
        }
    };

    timer.start(minutes)?;
    println!("Timer started: {} minutes", minutes);
    Ok(())
}
