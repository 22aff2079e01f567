//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation of
//! argument combinations that clap alone does not express.

use crate::error::CliError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output rendering for resolved descriptors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary, passwords hidden
    #[default]
    Text,
    /// Full descriptor JSON for the packaging pipeline
    Json,
}

/// Build variant resolver for Android packaging
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_variant",
    version,
    about = "Build variant resolver for Android packaging",
    long_about = "Resolves a flavor (dev, staging, prod) and a build type (debug, profile, release)
into one validated build descriptor: application id, display name, signing identity and
optimization policy.

Release signing comes from the credentials file when it exists and falls back to the
debug keystore when it does not. A malformed or incomplete credentials file is an error.

Usage:
  kodegen_bundler_variant --flavor dev --build-type debug
  kodegen_bundler_variant -f prod -b release -c android/key.properties --format json
  kodegen_bundler_variant --all --project variant.toml"
)]
pub struct Args {
    /// Flavor to resolve: dev, staging, prod
    #[arg(short, long, value_name = "FLAVOR")]
    pub flavor: Option<String>,

    /// Build type to resolve: debug, profile, release
    #[arg(short, long, value_name = "BUILD_TYPE")]
    pub build_type: Option<String>,

    /// Release credentials file (a missing file is allowed)
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "KODEGEN_VARIANT_CREDENTIALS",
        default_value = "key.properties"
    )]
    pub credentials: PathBuf,

    /// Project settings TOML file
    #[arg(short, long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Directory relative keystore paths resolve against
    #[arg(long, value_name = "DIR")]
    pub module_dir: Option<PathBuf>,

    /// Resolve every flavor and build type pair
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), CliError> {
        if self.all {
            if self.flavor.is_some() || self.build_type.is_some() {
                return Err(CliError::InvalidArguments {
                    reason: "--all cannot be combined with --flavor or --build-type".to_string(),
                });
            }
            return Ok(());
        }

        if self.flavor.is_none() {
            return Err(CliError::MissingArgument {
                argument: "--flavor".to_string(),
            });
        }
        if self.build_type.is_none() {
            return Err(CliError::MissingArgument {
                argument: "--build-type".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("kodegen_bundler_variant").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn single_variant_arguments() {
        let args = parse(&["-f", "dev", "-b", "debug"]);
        assert_eq!(args.flavor.as_deref(), Some("dev"));
        assert_eq!(args.build_type.as_deref(), Some("debug"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn missing_build_type_is_reported() {
        let args = parse(&["--flavor", "dev"]);
        assert!(matches!(
            args.validate(),
            Err(CliError::MissingArgument { argument }) if argument == "--build-type"
        ));
    }

    #[test]
    fn all_conflicts_with_explicit_ids() {
        assert!(parse(&["--all"]).validate().is_ok());
        assert!(matches!(
            parse(&["--all", "--flavor", "dev"]).validate(),
            Err(CliError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn json_format_parses() {
        let args = parse(&["--all", "--format", "json"]);
        assert_eq!(args.format, OutputFormat::Json);
    }
}
