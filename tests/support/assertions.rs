//! Test assertion helpers.

use std::process::Output;

use super::Test;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Assert a command exited with a specific code.
pub fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert the fake tool saw an invocation containing the given needle.
pub fn assert_invoked(t: &Test, needle: &str) {
    let invocations = t.invocations();
    assert!(
        invocations.iter().any(|line| line.contains(needle)),
        "expected an invocation containing '{}', got: {:?}",
        needle,
        invocations
    );
}

/// Assert the fake tool never saw an invocation containing the needle.
pub fn assert_not_invoked(t: &Test, needle: &str) {
    let invocations = t.invocations();
    assert!(
        !invocations.iter().any(|line| line.contains(needle)),
        "expected no invocation containing '{}', got: {:?}",
        needle,
        invocations
    );
}

/// Position of the first invocation containing the needle.
pub fn invocation_index(t: &Test, needle: &str) -> usize {
    let invocations = t.invocations();
    invocations
        .iter()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| {
            panic!(
                "no invocation containing '{}', got: {:?}",
                needle, invocations
            )
        })
}
