pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_flavor, prompt_method, prompt_minutes, prompt_sauce_pct, prompt_step_toggle,
    prompt_yes_no, resolve_flavor,
};
pub use render::{
    render_flavor_list, render_ingredients, render_nutrition, render_recipe_header, render_steps,
    render_timer_readout, shopping_list_text,
};
