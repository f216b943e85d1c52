//! Check command - local preflight diagnostics.

use std::path::Path;

use crate::cli::output;
use crate::core::constants::APP_NAME;
use crate::core::flyctl::{FlyTool, Flyctl};
use crate::error::{GantryError, Result};

/// Report tool, auth, env-file, and app state as key/value lines.
pub fn execute(tool: &Flyctl, env_file: &Path) -> Result<()> {
    output::section("Gantry Preflight");

    match tool.resolve_path() {
        Some(path) => output::kv("flyctl", path.display()),
        None => return Err(GantryError::ToolMissing),
    }

    match tool.current_identity()? {
        Some(identity) => output::kv("account", identity),
        None => output::kv("account", "not logged in"),
    }

    if env_file.exists() {
        output::kv("env file", env_file.display());
    } else {
        output::kv("env file", format!("{} (missing)", env_file.display()));
    }

    let deployed = tool.app_exists(APP_NAME)?;
    output::kv(
        "app",
        format!(
            "{} ({})",
            APP_NAME,
            if deployed { "deployed" } else { "not created" }
        ),
    );

    Ok(())
}
