//! Secrets commands - push env-file values to the remote application.

use std::path::Path;

use crate::cli::output;
use crate::core::constants::APP_NAME;
use crate::core::envfile;
use crate::core::flyctl::FlyTool;
use crate::error::{GantryError, Result};

/// Push every entry of an env file to the application.
///
/// Unlike the deploy flow, a missing file is an error here: the operator
/// asked for a sync and there is nothing to sync from.
pub fn sync(tool: &dyn FlyTool, env_file: &Path) -> Result<()> {
    tool.check_installed()?;

    if !env_file.exists() {
        return Err(GantryError::EnvFileMissing(
            env_file.display().to_string(),
        ));
    }

    let pairs = envfile::load(env_file)?;
    if pairs.is_empty() {
        output::dimmed("no secrets to push");
        return Ok(());
    }

    for (key, value) in &pairs {
        tool.set_secret(APP_NAME, key, value)?;
        output::list_item(key);
    }

    output::success(&format!("pushed {} secrets to {}", pairs.len(), APP_NAME));
    Ok(())
}

/// Set a single secret value on the application.
pub fn set(tool: &dyn FlyTool, key: &str, value: &str) -> Result<()> {
    tool.check_installed()?;
    tool.set_secret(APP_NAME, key, value)?;
    output::success(&format!("set {} on {}", key, APP_NAME));
    Ok(())
}
