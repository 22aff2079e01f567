//! Build variant resolution library for multi-environment mobile packaging.
//!
//! This library resolves a target flavor and build type into one validated
//! build descriptor:
//! - Application id and display name per environment
//! - Signing identity, from a release credentials file or the debug keystore
//! - Minify, resource shrinking and packaging exclusion policy
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod variant;

// Re-export commonly used types
pub use error::{CliError, ResolveError, Result};
