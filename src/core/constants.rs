//! Constants used throughout gantry.
//!
//! Centralizes magic strings and configuration values.

/// Remote application name. Fixed for the lifetime of the tool;
/// there is no multi-app support.
pub const APP_NAME: &str = "avatar-crew-backend";

/// Fly.io region the application is launched into.
pub const REGION: &str = "iad";

/// Default environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// External CLI binary gantry shells out to.
pub const FLYCTL_BIN: &str = "flyctl";

/// Public URL of the deployed application.
///
/// Assembled by interpolation only, never verified by a network call.
pub fn app_url(app: &str) -> String {
    format!("https://{}.fly.dev", app)
}
