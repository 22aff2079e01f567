//! Crate-level error types.
//!
//! Wraps core resolution errors together with CLI, configuration and output
//! failures, each with an actionable message.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for crate-level operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Main error type for the resolver binary and configuration loading
#[derive(Error, Debug)]
pub enum ResolveError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Variant resolution errors
    #[error("{0}")]
    Variant(#[from] crate::variant::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Project settings file errors
    #[error("Invalid project settings in {}: {source}", .path.display())]
    ProjectSettings {
        /// Settings file path
        path: PathBuf,
        /// TOML parser error
        #[source]
        source: toml::de::Error,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },
}

impl ResolveError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::variant::Error as V;

        match self {
            Self::Variant(V::UnknownFlavor { known, .. }) => {
                vec![format!("Use one of the flavors: {}", known.join(", "))]
            }
            Self::Variant(V::UnknownBuildType { known, .. }) => {
                vec![format!("Use one of the build types: {}", known.join(", "))]
            }
            Self::Variant(V::MalformedEntry { .. }) => vec![
                "Each line must be 'key=value' with keys keyAlias, keyPassword, storeFile, storePassword".to_string(),
                "Delete the credentials file to fall back to the debug keystore".to_string(),
            ],
            Self::Variant(V::IncompleteCredentials { missing, .. }) => {
                vec![format!("Add the missing keys: {}", missing.join(", "))]
            }
            Self::Variant(V::NoHomeDirectory) => {
                vec!["Set HOME so the debug keystore can be located".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
