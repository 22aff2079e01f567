//! Command line interface for the variant resolver.
//!
//! This module wires argument parsing, configuration loading and descriptor
//! rendering around the [`variant`](crate::variant) core.

mod args;
mod output;

pub use args::{Args, OutputFormat};
pub use output::render;

use crate::error::Result;
use crate::metadata::load_project_settings;
use crate::variant::{Compositor, ProjectSettings, credentials};
use std::io::Write;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    let stdout = std::io::stdout();
    execute(&args, &mut stdout.lock())
}

/// Resolves the variants requested by `args` and writes them to `out`.
///
/// The credentials file is loaded before any flavor or build type lookup.
pub fn execute(args: &Args, out: &mut impl Write) -> Result<i32> {
    args.validate()?;

    let project = match &args.project {
        Some(path) => load_project_settings(path)?,
        None => ProjectSettings::default(),
    };

    let mut builder = Compositor::builder().project(project);
    if let Some(dir) = &args.module_dir {
        builder = builder.module_dir(dir);
    }
    let compositor = builder.build()?;
    log::debug!(
        "Debug keystore: {}",
        compositor.signing().debug_store_file().display()
    );

    let credentials = credentials::load(&args.credentials)?;

    let descriptors = match (&args.flavor, &args.build_type) {
        (Some(flavor), Some(build_type)) if !args.all => {
            vec![compositor.compose(flavor, build_type, credentials.as_ref())?]
        }
        _ => compositor.compose_all(credentials.as_ref())?,
    };

    render(&descriptors, args.format, out)?;
    Ok(0)
}
