use clap::{Parser, Subcommand};

/// Wing Lab — an interactive wing recipe configurator with batch scaling,
/// nutrition estimates, and a cook timer.
#[derive(Parser, Debug)]
#[command(name = "wing_lab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the step-checks JSON file.
    #[arg(short, long, default_value = "wing_checks.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an interactive cooking session.
    Cook,

    /// Print a recipe card: ingredients, steps, and nutrition.
    Show {
        /// Flavor key or title (fuzzy-matched).
        flavor: String,

        /// Cooking method: bake or airfry.
        #[arg(short, long, default_value = "bake")]
        method: String,

        /// Batch weight in pounds (1-6).
        #[arg(short, long, default_value_t = 2)]
        lbs: u32,

        /// Display metric units.
        #[arg(long)]
        metric: bool,
    },

    /// List all flavors in the catalog.
    Flavors,

    /// Print a per-serving nutrition estimate.
    Nutrition {
        /// Flavor key or title (fuzzy-matched).
        flavor: String,

        /// Batch weight in pounds (1-6).
        #[arg(short, long, default_value_t = 2)]
        lbs: u32,

        /// How much of the sauce gets eaten (0-100%).
        #[arg(short, long, default_value_t = 100)]
        sauce_pct: u32,
    },

    /// Export a shopping list to stdout or a file.
    Export {
        /// Flavor key or title (fuzzy-matched).
        flavor: String,

        /// Cooking method: bake or airfry.
        #[arg(short, long, default_value = "bake")]
        method: String,

        /// Batch weight in pounds (1-6).
        #[arg(short, long, default_value_t = 2)]
        lbs: u32,

        /// Display metric units.
        #[arg(long)]
        metric: bool,

        /// Write the list to a file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run a countdown cook timer.
    Timer {
        /// Minutes to count down (1-120).
        minutes: u64,
    },

    /// Remove all saved step checks.
    ResetChecks,
}

impl Default for Command {
    fn default() -> Self {
        Command::Cook
    }
}
