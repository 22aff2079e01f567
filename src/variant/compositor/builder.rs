//! Builder for constructing a [`Compositor`].

use super::Compositor;
use crate::variant::error::Result;
use crate::variant::settings::{BuildTypeRegistry, FlavorRegistry, PackagingPolicy, ProjectSettings};
use crate::variant::signing::SigningResolver;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Compositor`].
///
/// Every field is optional; unset fields take the standard tables, the
/// default project settings and the invoking user's debug keystore.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_variant::variant::{CompositorBuilder, ProjectSettings};
///
/// # fn example() -> kodegen_bundler_variant::variant::Result<()> {
/// let compositor = CompositorBuilder::new()
///     .project(ProjectSettings {
///         version_name: Some("2.1.0".into()),
///         ..Default::default()
///     })
///     .debug_keystore("/home/ci/.android/debug.keystore")
///     .build()?;
///
/// let descriptor = compositor.compose("dev", "debug", None)?;
/// assert_eq!(descriptor.version_name.as_deref(), Some("2.1.0-dev"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Default)]
pub struct CompositorBuilder {
    project: Option<ProjectSettings>,
    flavors: Option<FlavorRegistry>,
    build_types: Option<BuildTypeRegistry>,
    packaging: Option<PackagingPolicy>,
    debug_keystore: Option<PathBuf>,
    module_dir: Option<PathBuf>,
}

impl CompositorBuilder {
    /// Creates a new compositor builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets project-wide defaults.
    ///
    /// Default: [`ProjectSettings::default`]
    pub fn project(mut self, project: ProjectSettings) -> Self {
        self.project = Some(project);
        self
    }

    /// Sets the flavor table.
    ///
    /// Default: [`FlavorRegistry::standard`]
    pub fn flavors(mut self, flavors: FlavorRegistry) -> Self {
        self.flavors = Some(flavors);
        self
    }

    /// Sets the build type table.
    ///
    /// Default: [`BuildTypeRegistry::standard`]
    pub fn build_types(mut self, build_types: BuildTypeRegistry) -> Self {
        self.build_types = Some(build_types);
        self
    }

    /// Sets the packaging exclusions.
    ///
    /// Default: [`PackagingPolicy::default`]
    pub fn packaging(mut self, packaging: PackagingPolicy) -> Self {
        self.packaging = Some(packaging);
        self
    }

    /// Overrides the debug keystore location.
    ///
    /// Default: `<home>/.android/debug.keystore`
    pub fn debug_keystore<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.debug_keystore = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the directory relative `storeFile` entries resolve against.
    ///
    /// Default: None (paths are kept as written)
    pub fn module_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.module_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the compositor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoHomeDirectory`](crate::variant::Error::NoHomeDirectory)
    /// when no debug keystore override is set and the home directory is unknown.
    pub fn build(self) -> Result<Compositor> {
        let signing = match self.debug_keystore {
            Some(path) => SigningResolver::new(path),
            None => SigningResolver::from_home_dir()?,
        };
        let signing = match self.module_dir {
            Some(dir) => signing.with_module_dir(dir),
            None => signing,
        };

        Ok(Compositor::new(
            self.project.unwrap_or_default(),
            self.flavors
                .unwrap_or_else(|| FlavorRegistry::standard().clone()),
            self.build_types
                .unwrap_or_else(|| BuildTypeRegistry::standard().clone()),
            self.packaging.unwrap_or_default(),
            signing,
        ))
    }
}
