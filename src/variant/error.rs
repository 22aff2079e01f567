//! Error types for variant resolution.
//!
//! Every variant carries enough context (offending id, line, key or path) for
//! the caller to fix the configuration. None of these are retried: resolution
//! is deterministic, so retrying without a configuration change reproduces
//! the same failure.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for variant resolution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while resolving a build variant
#[derive(Error, Debug)]
pub enum Error {
    /// Flavor id outside the registry
    #[error("Unknown flavor '{id}'. Known flavors: {}", .known.join(", "))]
    UnknownFlavor {
        /// Requested flavor id
        id: String,
        /// Ids the registry does know
        known: Vec<String>,
    },

    /// Build type id outside the registry
    #[error("Unknown build type '{id}'. Known build types: {}", .known.join(", "))]
    UnknownBuildType {
        /// Requested build type id
        id: String,
        /// Ids the registry does know
        known: Vec<String>,
    },

    /// Credentials file exists but contains an unparsable line
    #[error("{}:{line_number}: malformed entry '{line}': {reason}", .path.display())]
    MalformedEntry {
        /// Credentials file path
        path: PathBuf,
        /// 1-based line number
        line_number: usize,
        /// Offending line with the key kept and any value redacted
        line: String,
        /// What is wrong with the line
        reason: String,
    },

    /// Credentials file exists but does not define every required key
    #[error("{}: incomplete credentials, missing {}", .path.display(), .missing.join(", "))]
    IncompleteCredentials {
        /// Credentials file path
        path: PathBuf,
        /// Required keys that were not found, in canonical order
        missing: Vec<&'static str>,
    },

    /// The composed descriptor violates an invariant
    #[error("Invalid composition for variant '{variant}': {reason}")]
    InvalidComposition {
        /// Variant name (e.g. `stagingRelease`)
        variant: String,
        /// Violated invariant
        reason: String,
    },

    /// Two registry entries share one id
    #[error("Duplicate {kind} id '{id}'")]
    DuplicateVariant {
        /// `flavor` or `build type`
        kind: &'static str,
        /// Repeated id
        id: String,
    },

    /// Packaging exclusion pattern is not a valid glob
    #[error("Invalid packaging pattern '{pattern}': {reason}")]
    InvalidPackagingPattern {
        /// Pattern as given
        pattern: String,
        /// Parser message
        reason: String,
    },

    /// Home directory needed for the default debug keystore could not be determined
    #[error("Failed to determine home directory for the default debug keystore")]
    NoHomeDirectory,

    /// File system error with operation context
    #[error("Error {context} {}: {error}", .path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: std::io::Error,
    },
}

/// Attaches file system context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps an I/O error into [`Error::Fs`] with the operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}
