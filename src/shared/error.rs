use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between a missing login,
/// bad arguments and failures while talking to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// A catalog command was run without logging in first
    NotAuthenticated = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to the exit code the CLI should report
    pub fn for_error(error: &anyhow::Error) -> Self {
        let not_authenticated = error.chain().any(|cause| {
            matches!(
                cause.downcast_ref::<CatalogError>(),
                Some(CatalogError::NotAuthenticated)
            )
        });

        if not_authenticated {
            ExitCode::NotAuthenticated
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotAuthenticated => write!(f, "Not Authenticated (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Step of the character detail aggregation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationStage {
    Character,
    Homeworld,
    Species,
    /// Zero-based position in the character's film reference list
    Film(usize),
}

impl fmt::Display for AggregationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationStage::Character => write!(f, "character"),
            AggregationStage::Homeworld => write!(f, "homeworld"),
            AggregationStage::Species => write!(f, "species"),
            AggregationStage::Film(index) => write!(f, "film #{}", index + 1),
        }
    }
}

/// Application-specific errors for talking to the catalog and managing the session.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {locator}\nHTTP status: {status}")]
    FetchFailure { locator: String, status: u16 },

    #[error("Could not reach the catalog: {locator}\nDetails: {details}\n\n💡 Hint: Please check your internet connection")]
    Transport { locator: String, details: String },

    #[error("Unexpected response from the catalog: {locator}\nDetails: {details}")]
    InvalidResponse { locator: String, details: String },

    #[error("Failed to resolve {stage} for character: {locator}")]
    AggregationFailed {
        locator: String,
        stage: AggregationStage,
    },

    #[error("You are not logged in\n\n💡 Hint: Run `swapi-explorer login` first")]
    NotAuthenticated,

    #[error("Failed to access session file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    SessionError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for user-supplied values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl CatalogError {
    /// True for failures that came from talking to the remote catalog
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::FetchFailure { .. }
                | CatalogError::Transport { .. }
                | CatalogError::InvalidResponse { .. }
                | CatalogError::AggregationFailed { .. }
        )
    }
}
