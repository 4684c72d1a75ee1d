//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConstantsError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use env_constants::ConstantsError;

/// Structured exit codes for envconst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The selecting environment variable is not set.
    MissingVariable = 2,

    /// The config file does not exist or cannot be read.
    FileNotFound = 3,

    /// The config file has a syntax or interpolation error.
    MalformedConfig = 4,

    /// The environment names a section the file does not have.
    UnknownEnvironment = 5,

    /// The requested constant does not exist.
    UnknownKey = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConstantsError> for ExitCode {
    fn from(err: &ConstantsError) -> Self {
        match err {
            ConstantsError::MissingEnvironmentVariable(_) => ExitCode::MissingVariable,
            ConstantsError::FileNotFound { .. } => ExitCode::FileNotFound,
            ConstantsError::MalformedConfig { .. } | ConstantsError::Interpolation { .. } => {
                ExitCode::MalformedConfig
            }
            ConstantsError::UnknownEnvironment { .. } => ExitCode::UnknownEnvironment,
            ConstantsError::UnknownKey(_) => ExitCode::UnknownKey,
            ConstantsError::TypeMismatch { .. }
            | ConstantsError::DotenvParse { .. }
            | ConstantsError::DotenvIo { .. }
            | ConstantsError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ConstantsError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConstantsError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
