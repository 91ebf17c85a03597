//! # CLI Error Type
//!
//! Unified error type for till commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in till                                   │
//! │                                                                         │
//! │  main()                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  run(cli) -> Result<(), CliError>                                       │
//! │    │                                                                    │
//! │    ├── TillConfig::load ─── ConfigError ──────────┐                     │
//! │    ├── parse_amount ─────── ValidationError ──────┤                     │
//! │    ├── calculate ────────── CoreError ────────────┼──► CliError         │
//! │    ├── stdin / stdout ───── io::Error ────────────┤       │             │
//! │    └── JSON in / out ────── serde_json::Error ────┘       │             │
//! │                                                           ▼             │
//! │                             "error: ..." on stderr, exit_code()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;
use thiserror::Error;

use crate::config::ConfigError;
use till_core::{CoreError, ValidationError};

/// Error returned by every command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid amount: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Process exit codes.
///
/// | Code | Meaning                               |
/// |------|---------------------------------------|
/// | 0    | Success                               |
/// | 1    | I/O failure                           |
/// | 2    | Configuration could not be loaded     |
/// | 3    | Input rejected (amount, request)      |
pub mod exit {
    pub const IO: u8 = 1;
    pub const CONFIG: u8 = 2;
    pub const INPUT: u8 = 3;
}

impl CliError {
    /// Exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            CliError::Config(_) => exit::CONFIG,
            // Writing JSON to a closed stdout surfaces as a serde_json error
            CliError::Json(err) if err.is_io() => exit::IO,
            CliError::Validation(_) | CliError::Core(_) | CliError::Json(_) => exit::INPUT,
            CliError::Io(_) => exit::IO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let err: CliError = ConfigError::NotFound(PathBuf::from("till.toml")).into();
        assert_eq!(err.code(), exit::CONFIG);

        let err: CliError = ValidationError::Negative {
            field: "amount".to_string(),
        }
        .into();
        assert_eq!(err.code(), exit::INPUT);

        let err: CliError = std::io::Error::other("broken pipe").into();
        assert_eq!(err.code(), exit::IO);
    }

    struct ClosedPipe;

    impl std::io::Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_write_failure_is_io() {
        let err: CliError = serde_json::to_writer(ClosedPipe, &[1, 2, 3])
            .unwrap_err()
            .into();
        assert_eq!(err.code(), exit::IO);

        let err: CliError = serde_json::from_str::<u32>("\"lots\"").unwrap_err().into();
        assert_eq!(err.code(), exit::INPUT);
    }

    #[test]
    fn test_messages() {
        let err: CliError = ValidationError::Required {
            field: "amount".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid amount: amount is required");
    }
}
