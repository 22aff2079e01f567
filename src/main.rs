//! Kodegen Bundler Variant - Build variant resolver for Android packaging.
//!
//! This binary resolves a flavor and build type into a build descriptor,
//! printing it as text or JSON for the packaging pipeline.

use kodegen_bundler_variant::cli;
use std::process;

fn main() {
    // Initialize logging; warnings (such as the signing fallback) show by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
