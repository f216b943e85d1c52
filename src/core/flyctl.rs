//! Typed adapter over the flyctl CLI.
//!
//! All platform work is delegated to the external tool; this module turns
//! its exit codes into structured results. The `FlyTool` trait is the seam
//! that lets the deploy orchestration run against a fake in tests.
//!
//! ## Requirements
//!
//! - `flyctl` must be installed and resolvable on PATH
//! - interactive login is delegated to `flyctl auth login`

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::core::constants::FLYCTL_BIN;
use crate::error::{GantryError, Result};

/// Operations gantry needs from the deployment tool.
pub trait FlyTool {
    /// Verify the external binary is resolvable.
    fn check_installed(&self) -> Result<()>;

    /// Identity of the currently authenticated user, or `None` when the
    /// tool reports not logged in. A non-zero exit here is a signal, not
    /// an error.
    fn current_identity(&self) -> Result<Option<String>>;

    /// Run the interactive login flow, blocking until it completes.
    fn login(&self) -> Result<()>;

    /// Whether the named application exists on the platform. Queried via
    /// the status operation's exit code.
    fn app_exists(&self, app: &str) -> Result<bool>;

    /// First-time application creation. Suppresses the launch operation's
    /// own auto-deploy behavior.
    fn launch(&self, app: &str, region: &str) -> Result<()>;

    /// Push application code/config to a new or existing application.
    fn deploy(&self, app: &str) -> Result<()>;

    /// Set one secret on the named application.
    fn set_secret(&self, app: &str, key: &str, value: &str) -> Result<()>;
}

/// The real adapter, shelling out to `flyctl`.
pub struct Flyctl {
    program: String,
}

impl Flyctl {
    pub fn new() -> Self {
        Self {
            program: FLYCTL_BIN.to_string(),
        }
    }

    #[cfg(test)]
    fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// Resolved path of the external binary, if present.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        which::which(&self.program).ok()
    }

    /// Run a command that streams its output to the operator and must
    /// succeed. A non-zero exit aborts the whole run with that code.
    fn run_checked(&self, operation: &'static str, args: &[&str]) -> Result<()> {
        debug!("running {} {}", self.program, args.join(" "));

        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| GantryError::Spawn { operation, source })?;

        if status.success() {
            Ok(())
        } else {
            Err(GantryError::CommandFailed {
                operation,
                code: status.code().unwrap_or(1),
            })
        }
    }

    /// Run a command whose exit status is a signal rather than an error.
    /// Output is captured, not streamed.
    fn probe(
        &self,
        operation: &'static str,
        args: &[&str],
    ) -> Result<std::process::Output> {
        trace!("probing {} {}", self.program, args.join(" "));

        Command::new(&self.program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| GantryError::Spawn { operation, source })
    }
}

impl Default for Flyctl {
    fn default() -> Self {
        Self::new()
    }
}

impl FlyTool for Flyctl {
    fn check_installed(&self) -> Result<()> {
        which::which(&self.program)
            .map(|_| ())
            .map_err(|_| GantryError::ToolMissing)
    }

    fn current_identity(&self) -> Result<Option<String>> {
        let output = self.probe("auth whoami", &["auth", "whoami"])?;
        if output.status.success() {
            let identity = String::from_utf8_lossy(&output.stdout).trim().to_string();
            Ok(Some(identity))
        } else {
            Ok(None)
        }
    }

    fn login(&self) -> Result<()> {
        self.run_checked("auth login", &["auth", "login"])
    }

    fn app_exists(&self, app: &str) -> Result<bool> {
        let output = self.probe("status", &["status", "--app", app])?;
        Ok(output.status.success())
    }

    fn launch(&self, app: &str, region: &str) -> Result<()> {
        self.run_checked(
            "launch",
            &["launch", "--name", app, "--region", region, "--no-deploy"],
        )
    }

    fn deploy(&self, app: &str) -> Result<()> {
        self.run_checked("deploy", &["deploy", "--app", app])
    }

    fn set_secret(&self, app: &str, key: &str, value: &str) -> Result<()> {
        let pair = format!("{}={}", key, value);
        self.run_checked("secrets set", &["secrets", "set", &pair, "--app", app])
    }
}
