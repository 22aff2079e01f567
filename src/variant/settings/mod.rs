//! Static variant configuration.
//!
//! Flavors, build types and packaging rules are plain data: lookup tables
//! built once per process and never mutated. Project defaults are an
//! immutable struct handed to the compositor.

mod build_type;
mod flavor;
mod packaging;
mod project;

pub use build_type::{
    BuildType, BuildTypeRegistry, DEFAULT_PROGUARD_FILE, PROJECT_PROGUARD_FILE, SigningPolicy,
};
pub use flavor::{Flavor, FlavorRegistry};
pub use packaging::{DEFAULT_EXCLUDES, PackagingPolicy, PackagingRule};
pub use project::ProjectSettings;
