//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a gantry command with the fake tool dir as its entire PATH.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("gantry").expect("failed to find gantry binary");
        cmd.env("PATH", self.bin.path());
        cmd.env_remove("GANTRY_LOG");
        cmd.env_remove("NO_COLOR");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for the zero-argument invocation (default deploy flow).
    pub fn deploy_default(&self) -> Output {
        self.cmd().output().expect("failed to run gantry")
    }

    /// Shortcut for `gantry deploy`.
    pub fn deploy(&self) -> Output {
        self.cmd()
            .arg("deploy")
            .output()
            .expect("failed to run gantry deploy")
    }

    /// Shortcut for `gantry secrets sync`.
    pub fn sync(&self) -> Output {
        self.cmd()
            .args(["secrets", "sync"])
            .output()
            .expect("failed to run gantry secrets sync")
    }

    /// Shortcut for `gantry secrets set`.
    pub fn set(&self, key: &str, val: &str) -> Output {
        self.cmd()
            .args(["secrets", "set", key, val])
            .output()
            .expect("failed to run gantry secrets set")
    }

    /// Shortcut for `gantry check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run gantry check")
    }

    /// Shortcut for `gantry status`.
    pub fn status(&self) -> Output {
        self.cmd()
            .arg("status")
            .output()
            .expect("failed to run gantry status")
    }

    /// Shortcut for `gantry status --json`.
    pub fn status_json(&self) -> Output {
        self.cmd()
            .args(["status", "--json"])
            .output()
            .expect("failed to run gantry status --json")
    }
}
