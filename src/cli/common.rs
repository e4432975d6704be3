//! Shared CLI plumbing: error type, exit codes, directory resolution.

use crate::config::Config;
use crate::error::InventoryError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Invalid input or state: bad quantity, duplicate name, malformed file.
    Validation = 1,
    /// Filesystem or serialization failure.
    Io = 2,
    /// A named inventory or equipment item does not exist.
    NotFound = 3,
}

impl ExitCode {
    /// The numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A user-facing CLI error carrying the exit code to terminate with.
#[derive(Debug)]
pub struct CliError {
    message: String,
    exit_code: ExitCode,
}

impl CliError {
    /// An input or state validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Validation,
        }
    }

    /// A filesystem or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Io,
        }
    }

    /// A lookup of something that does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::NotFound,
        }
    }

    /// The exit code this error maps to.
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<InventoryError> for CliError {
    fn from(err: InventoryError) -> Self {
        let exit_code = match &err {
            InventoryError::InvalidArgument(_) | InventoryError::DuplicateName(_) => {
                ExitCode::Validation
            }
            InventoryError::MalformedData(_) | InventoryError::Io(_) => ExitCode::Io,
        };
        Self {
            message: err.to_string(),
            exit_code,
        }
    }
}

/// Resolves the inventory directory for a command: the explicit `--dir`
/// override if given, otherwise the configured location.
pub fn resolve_inventory_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => {
            let config = Config::load()
                .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;
            config
                .inventory_dir()
                .map_err(|e| CliError::io(format!("Failed to resolve inventory directory: {e}")))
        }
    }
}
