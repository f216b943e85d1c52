//! Deploy command - create-or-update deploy orchestration.
//!
//! Strictly sequential: tool check, auth check, existence probe, then
//! either a plain redeploy or launch + secret propagation + deploy. Any
//! failing external command aborts the run with that command's exit code.

use std::path::Path;

use tracing::{debug, info};

use crate::cli::output;
use crate::core::constants::{app_url, APP_NAME, REGION};
use crate::core::envfile;
use crate::core::flyctl::FlyTool;
use crate::error::Result;

/// Run the full deploy flow.
pub fn execute(tool: &dyn FlyTool, env_file: &Path) -> Result<()> {
    tool.check_installed()?;

    match tool.current_identity()? {
        Some(identity) => {
            debug!("authenticated as {}", identity);
            output::kv("account", identity);
        }
        None => {
            output::warn("not logged in to Fly.io, starting interactive login");
            tool.login()?;
        }
    }

    if tool.app_exists(APP_NAME)? {
        info!("app {} exists, deploying update", APP_NAME);
        output::dimmed("existing app found, deploying update");
        tool.deploy(APP_NAME)?;
    } else {
        info!("app {} not found, launching", APP_NAME);
        output::dimmed("app not found, creating it");
        tool.launch(APP_NAME, REGION)?;
        push_env_secrets(tool, env_file)?;
        tool.deploy(APP_NAME)?;
    }

    output::success(&format!("deployed {}", APP_NAME));
    output::kv("url", app_url(APP_NAME));
    Ok(())
}

/// Push secrets from the env file to the freshly launched app.
///
/// A missing file is not an error during deploy; the operator is told to
/// configure secrets manually instead.
fn push_env_secrets(tool: &dyn FlyTool, env_file: &Path) -> Result<()> {
    if !env_file.exists() {
        output::warn(&format!(
            "{} not found, set secrets manually with `flyctl secrets set`",
            env_file.display()
        ));
        return Ok(());
    }

    let pairs = envfile::load(env_file)?;
    for (key, value) in &pairs {
        tool.set_secret(APP_NAME, key, value)?;
    }

    if !pairs.is_empty() {
        output::success(&format!("pushed {} secrets", pairs.len()));
    }
    Ok(())
}
