//! Status command - remote application overview.

use crate::cli::output;
use crate::core::constants::{app_url, APP_NAME, REGION};
use crate::core::flyctl::FlyTool;
use crate::error::Result;

/// Show the remote application overview.
pub fn execute(tool: &dyn FlyTool, json: bool) -> Result<()> {
    tool.check_installed()?;
    let deployed = tool.app_exists(APP_NAME)?;

    if json {
        let value = serde_json::json!({
            "app": APP_NAME,
            "region": REGION,
            "url": app_url(APP_NAME),
            "deployed": deployed,
        });
        println!("{}", value);
        return Ok(());
    }

    output::section("Application");
    output::kv("app", APP_NAME);
    output::kv("region", REGION);
    output::kv("url", app_url(APP_NAME));
    output::kv("deployed", if deployed { "yes" } else { "no" });
    Ok(())
}
