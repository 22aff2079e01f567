//! Build types and their optimization and signing policy.

use crate::variant::error::{Error, Result};
use std::sync::LazyLock;

/// Default optimizing ProGuard configuration shipped with the Android SDK.
pub const DEFAULT_PROGUARD_FILE: &str = "proguard-android-optimize.txt";

/// Project-local ProGuard rules file.
pub const PROJECT_PROGUARD_FILE: &str = "proguard-rules.pro";

/// Which signing configuration a build type uses.
///
/// The identity itself is resolved by
/// [`SigningResolver`](crate::variant::SigningResolver).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningPolicy {
    /// Always the default debug keystore.
    Debug,
    /// Release credentials file, falling back to the debug keystore when absent.
    Release,
}

/// Named optimization/signing policy.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_variant::variant::{BuildTypeRegistry, SigningPolicy};
///
/// let profile = BuildTypeRegistry::standard().resolve("profile").unwrap();
/// assert!(!profile.debuggable);
/// assert!(!profile.minify);
/// assert_eq!(profile.signing, SigningPolicy::Release);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildType {
    /// Build type id, unique within a registry.
    pub id: String,

    /// Whether the artifact is debuggable.
    pub debuggable: bool,

    /// Code shrinking and obfuscation.
    pub minify: bool,

    /// Unused resource removal. Requires `minify`.
    pub shrink_resources: bool,

    /// ProGuard rule files in application order. Non-empty only if `minify`.
    pub proguard_rule_files: Vec<String>,

    /// Signing configuration.
    pub signing: SigningPolicy,
}

static STANDARD: LazyLock<BuildTypeRegistry> = LazyLock::new(|| BuildTypeRegistry {
    build_types: vec![
        BuildType {
            id: "debug".into(),
            debuggable: true,
            minify: false,
            shrink_resources: false,
            proguard_rule_files: Vec::new(),
            signing: SigningPolicy::Debug,
        },
        // Release-signed, unoptimized; used for performance measurement.
        BuildType {
            id: "profile".into(),
            debuggable: false,
            minify: false,
            shrink_resources: false,
            proguard_rule_files: Vec::new(),
            signing: SigningPolicy::Release,
        },
        BuildType {
            id: "release".into(),
            debuggable: false,
            minify: true,
            shrink_resources: true,
            proguard_rule_files: vec![
                DEFAULT_PROGUARD_FILE.to_string(),
                PROJECT_PROGUARD_FILE.to_string(),
            ],
            signing: SigningPolicy::Release,
        },
    ],
});

/// Lookup table of build types keyed by id.
#[derive(Clone, Debug)]
pub struct BuildTypeRegistry {
    build_types: Vec<BuildType>,
}

impl BuildTypeRegistry {
    /// Returns the process-wide `debug`, `profile`, `release` table.
    pub fn standard() -> &'static BuildTypeRegistry {
        &STANDARD
    }

    /// Builds a custom registry.
    ///
    /// Entries are not checked for consistency here; the compositor rejects
    /// inconsistent combinations when a descriptor is composed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVariant`] if two build types share an id.
    pub fn from_build_types(build_types: impl IntoIterator<Item = BuildType>) -> Result<Self> {
        let mut collected: Vec<BuildType> = Vec::new();
        for build_type in build_types {
            if collected.iter().any(|b| b.id == build_type.id) {
                return Err(Error::DuplicateVariant {
                    kind: "build type",
                    id: build_type.id,
                });
            }
            collected.push(build_type);
        }
        Ok(Self {
            build_types: collected,
        })
    }

    /// Looks up a build type by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownBuildType`] for ids outside the table.
    pub fn resolve(&self, id: &str) -> Result<&BuildType> {
        log::debug!("Resolving build type '{id}'");
        self.build_types
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::UnknownBuildType {
                id: id.to_string(),
                known: self.ids().map(String::from).collect(),
            })
    }

    /// Iterates build types in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &BuildType> {
        self.build_types.iter()
    }

    /// Iterates build type ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.build_types.iter().map(|b| b.id.as_str())
    }
}
