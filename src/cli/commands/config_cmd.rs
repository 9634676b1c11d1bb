//! config command - Show the effective configuration

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::ui::output;

/// Print the effective configuration as TOML.
pub fn config(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let verbosity = ctx.verbosity();

    match config.user_config_loaded_from() {
        Some(path) => output::debug(format!("user config: {}", path.display()), verbosity),
        None => output::debug("user config: (defaults)", verbosity),
    }
    if let Some(path) = config.project_config_loaded_from() {
        output::debug(format!("project config: {}", path.display()), verbosity);
    }

    let text = config.to_toml().context("Failed to render configuration")?;
    output::result(&text);
    Ok(())
}
