//! Build variant resolution.
//!
//! Resolves a flavor (`dev`, `staging`, `prod`) and a build type (`debug`,
//! `profile`, `release`) into one [`BuildDescriptor`] for the packaging
//! pipeline.
//!
//! Data flows one way:
//!
//! ```text
//! credentials ──> signing ──> compositor <── settings (flavors, build types, packaging)
//! ```
//!
//! # Module Organization
//!
//! - [`credentials`] - Optional release credentials file
//! - [`settings`] - Flavor, build type, packaging and project tables
//! - [`signing`] - Signing identity with debug keystore fallback
//! - [`compositor`] - Composition and invariant validation

pub mod compositor;
pub mod credentials;
pub mod error;
pub mod settings;
pub mod signing;

pub use compositor::{BuildDescriptor, Compositor, CompositorBuilder};
pub use credentials::CredentialsFile;
pub use error::{Error, ErrorExt, Result};
pub use settings::{
    BuildType, BuildTypeRegistry, Flavor, FlavorRegistry, PackagingPolicy, PackagingRule,
    ProjectSettings, SigningPolicy,
};
pub use signing::{SigningIdentity, SigningOrigin, SigningResolver};
