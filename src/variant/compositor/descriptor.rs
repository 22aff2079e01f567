//! The fully resolved build descriptor.

use crate::variant::settings::PackagingRule;
use crate::variant::signing::SigningIdentity;
use std::collections::{BTreeMap, BTreeSet};

/// Resource value key holding the launcher label.
pub const APP_NAME_RES_VALUE: &str = "app_name";

/// Manifest placeholder key holding the launcher label.
pub const APP_NAME_PLACEHOLDER: &str = "appName";

/// Validated output consumed by the packaging pipeline.
///
/// Produced only by [`Compositor`](super::Compositor), after every composite
/// invariant has been checked. Serializes to JSON for the pipeline; the
/// `Debug` output redacts signing passwords.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BuildDescriptor {
    /// Variant name, flavor id followed by the capitalized build type id.
    ///
    /// Example: "stagingRelease"
    pub variant_name: String,

    /// Flavor id.
    pub flavor: String,

    /// Build type id.
    pub build_type: String,

    /// Namespace for generated classes.
    pub namespace: String,

    /// Base application id plus the flavor suffix.
    pub application_id: String,

    /// Launcher label.
    pub display_name: String,

    /// Flavor version suffix.
    pub version_suffix: Option<String>,

    /// Base version name plus `version_suffix`, when a base version is configured.
    pub version_name: Option<String>,

    /// Version code.
    pub version_code: Option<u32>,

    /// Minimum supported SDK level.
    pub min_sdk: u32,

    /// Multidex support.
    pub multi_dex: bool,

    /// SDK level compiled against.
    pub compile_sdk: Option<u32>,

    /// SDK level targeted at runtime.
    pub target_sdk: Option<u32>,

    /// NDK version for native code.
    pub ndk_version: Option<String>,

    /// Java source/target compatibility and Kotlin JVM target.
    pub java_version: String,

    /// Signing identity.
    pub signing: SigningIdentity,

    /// Whether the artifact is debuggable.
    pub debuggable: bool,

    /// Code shrinking and obfuscation.
    pub minify: bool,

    /// Unused resource removal.
    pub shrink_resources: bool,

    /// ProGuard rule files in application order.
    pub proguard_rule_files: Vec<String>,

    /// Entry patterns left out of the artifact.
    pub packaging_excludes: BTreeSet<PackagingRule>,

    /// Generated string resources.
    pub res_values: BTreeMap<String, String>,

    /// Manifest placeholders.
    pub manifest_placeholders: BTreeMap<String, String>,
}

/// `dev` + `release` -> `devRelease`.
pub(crate) fn variant_name(flavor: &str, build_type: &str) -> String {
    let mut chars = build_type.chars();
    match chars.next() {
        Some(first) => format!("{flavor}{}{}", first.to_uppercase(), chars.as_str()),
        None => flavor.to_string(),
    }
}
