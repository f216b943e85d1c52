use thiserror::Error;

#[derive(Error, Debug)]
pub enum GantryError {
    #[error("flyctl not found on PATH")]
    ToolMissing,

    #[error("flyctl {operation} failed with exit status {code}")]
    CommandFailed { operation: &'static str, code: i32 },

    #[error("failed to run flyctl {operation}: {source}")]
    Spawn {
        operation: &'static str,
        source: std::io::Error,
    },

    #[error("env file not found: {0}")]
    EnvFileMissing(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GantryError {
    /// Process exit code for this error.
    ///
    /// The missing-tool precondition exits 1; a failed external command
    /// propagates that command's own exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            GantryError::ToolMissing => 1,
            GantryError::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GantryError>;
