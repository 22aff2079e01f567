//! Variant composition.
//!
//! The [`Compositor`] combines a flavor, a build type, the signing identity
//! and the packaging rules into one validated [`BuildDescriptor`].
//!
//! # Overview
//!
//! [`Compositor::compose`]:
//! 1. Resolves flavor and build type from the registries
//! 2. Resolves the signing identity via [`SigningResolver`]
//! 3. Merges packaging rules
//! 4. Validates composite invariants
//! 5. Returns the descriptor
//!
//! Composition is pure: the same inputs and the same credentials always give
//! an equal descriptor, and nothing is shared or mutated between calls, so
//! variants may be composed from several threads at once.
//!
//! # Example
//!
//! ```
//! use kodegen_bundler_variant::variant::{CompositorBuilder, SigningOrigin};
//!
//! # fn example() -> kodegen_bundler_variant::variant::Result<()> {
//! let compositor = CompositorBuilder::new()
//!     .debug_keystore("/home/ci/.android/debug.keystore")
//!     .build()?;
//!
//! let descriptor = compositor.compose("prod", "release", None)?;
//! assert_eq!(descriptor.application_id, "com.udharoo");
//! assert_eq!(descriptor.signing.origin, SigningOrigin::DefaultDebug);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod builder;
mod descriptor;
mod validate;

pub use builder::CompositorBuilder;
pub use descriptor::{APP_NAME_PLACEHOLDER, APP_NAME_RES_VALUE, BuildDescriptor};

use super::credentials::{self, CredentialsFile};
use super::error::Result;
use super::settings::{BuildTypeRegistry, FlavorRegistry, PackagingPolicy, ProjectSettings};
use super::signing::SigningResolver;
use std::collections::BTreeMap;
use std::path::Path;

/// Resolves build variants into [`BuildDescriptor`]s.
///
/// Constructed via [`CompositorBuilder`]. Holds only immutable configuration.
#[derive(Clone, Debug)]
pub struct Compositor {
    project: ProjectSettings,
    flavors: FlavorRegistry,
    build_types: BuildTypeRegistry,
    packaging: PackagingPolicy,
    signing: SigningResolver,
}

impl Compositor {
    /// Creates a compositor (used by [`CompositorBuilder`]).
    pub(super) fn new(
        project: ProjectSettings,
        flavors: FlavorRegistry,
        build_types: BuildTypeRegistry,
        packaging: PackagingPolicy,
        signing: SigningResolver,
    ) -> Self {
        Self {
            project,
            flavors,
            build_types,
            packaging,
            signing,
        }
    }

    /// Returns a builder with standard defaults.
    pub fn builder() -> CompositorBuilder {
        CompositorBuilder::new()
    }

    /// Returns the project settings.
    pub fn project(&self) -> &ProjectSettings {
        &self.project
    }

    /// Returns the flavor table.
    pub fn flavors(&self) -> &FlavorRegistry {
        &self.flavors
    }

    /// Returns the build type table.
    pub fn build_types(&self) -> &BuildTypeRegistry {
        &self.build_types
    }

    /// Returns the packaging exclusions.
    pub fn packaging(&self) -> &PackagingPolicy {
        &self.packaging
    }

    /// Returns the signing resolver.
    pub fn signing(&self) -> &SigningResolver {
        &self.signing
    }

    /// Composes the descriptor for one flavor and build type.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownFlavor`](crate::variant::Error::UnknownFlavor)
    /// - [`Error::UnknownBuildType`](crate::variant::Error::UnknownBuildType)
    /// - [`Error::InvalidComposition`](crate::variant::Error::InvalidComposition)
    pub fn compose(
        &self,
        flavor_id: &str,
        build_type_id: &str,
        credentials: Option<&CredentialsFile>,
    ) -> Result<BuildDescriptor> {
        let flavor = self.flavors.resolve(flavor_id)?;
        let build_type = self.build_types.resolve(build_type_id)?;

        let signing = self.signing.resolve(build_type, credentials);

        let display_name = flavor.display_name(&self.project.display_name);
        let version_name = self.project.version_name.as_ref().map(|base| {
            format!(
                "{base}{}",
                flavor.version_name_suffix.as_deref().unwrap_or_default()
            )
        });

        let descriptor = BuildDescriptor {
            variant_name: descriptor::variant_name(&flavor.id, &build_type.id),
            flavor: flavor.id.clone(),
            build_type: build_type.id.clone(),
            namespace: self.project.namespace.clone(),
            application_id: flavor.application_id(&self.project.application_id),
            version_suffix: flavor.version_name_suffix.clone(),
            version_name,
            version_code: self.project.version_code,
            min_sdk: self.project.min_sdk,
            multi_dex: self.project.multi_dex,
            compile_sdk: self.project.compile_sdk,
            target_sdk: self.project.target_sdk,
            ndk_version: self.project.ndk_version.clone(),
            java_version: self.project.java_version.clone(),
            signing,
            debuggable: build_type.debuggable,
            minify: build_type.minify,
            shrink_resources: build_type.shrink_resources,
            proguard_rule_files: build_type.proguard_rule_files.clone(),
            packaging_excludes: self.packaging.rules().clone(),
            res_values: BTreeMap::from([(APP_NAME_RES_VALUE.to_string(), display_name.clone())]),
            manifest_placeholders: BTreeMap::from([(
                APP_NAME_PLACEHOLDER.to_string(),
                display_name.clone(),
            )]),
            display_name,
        };

        validate::validate(&descriptor)?;

        log::info!(
            "Resolved {} ({}, signed with {:?})",
            descriptor.variant_name,
            descriptor.application_id,
            descriptor.signing.origin
        );
        Ok(descriptor)
    }

    /// Loads the credentials file at `path`, then composes.
    ///
    /// The file is read before any flavor or build type lookup, so a malformed
    /// file fails even when the ids are valid. A missing file means no
    /// credentials.
    pub fn compose_with_credentials_file(
        &self,
        flavor_id: &str,
        build_type_id: &str,
        path: &Path,
    ) -> Result<BuildDescriptor> {
        let credentials = credentials::load(path)?;
        self.compose(flavor_id, build_type_id, credentials.as_ref())
    }

    /// Composes every flavor and build type pair.
    ///
    /// Flavors vary slowest, both in registry declaration order. Stops at the
    /// first failing variant.
    pub fn compose_all(&self, credentials: Option<&CredentialsFile>) -> Result<Vec<BuildDescriptor>> {
        let mut descriptors = Vec::new();
        for flavor in self.flavors.iter() {
            for build_type in self.build_types.iter() {
                descriptors.push(self.compose(&flavor.id, &build_type.id, credentials)?);
            }
        }
        Ok(descriptors)
    }
}
