//! Project-wide defaults shared by every variant.

/// Immutable project configuration passed explicitly into the compositor.
///
/// Maps to the Android `defaultConfig` block. Can be loaded from a TOML file
/// with [`load_project_settings`](crate::metadata::load_project_settings).
///
/// # Examples
///
/// ```
/// use kodegen_bundler_variant::variant::ProjectSettings;
///
/// let settings = ProjectSettings {
///     version_name: Some("1.4.0".into()),
///     version_code: Some(14),
///     ..Default::default()
/// };
/// assert_eq!(settings.application_id, "com.udharoo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectSettings {
    /// Namespace for generated R and BuildConfig classes.
    ///
    /// Default: "com.udharoo"
    pub namespace: String,

    /// Base application id; flavors append their suffix to it.
    ///
    /// Default: "com.udharoo"
    pub application_id: String,

    /// Base display name; flavors append their suffix to it.
    ///
    /// Default: "Udharoo"
    pub display_name: String,

    /// Base version name. Flavors append their version suffix when set.
    ///
    /// Default: None (supplied by the packaging pipeline)
    pub version_name: Option<String>,

    /// Version code.
    ///
    /// Default: None (supplied by the packaging pipeline)
    pub version_code: Option<u32>,

    /// Minimum supported SDK level.
    ///
    /// Default: 23
    pub min_sdk: u32,

    /// Multidex support.
    ///
    /// Default: true
    pub multi_dex: bool,

    /// SDK level compiled against.
    ///
    /// Default: None (supplied by the Flutter toolchain)
    pub compile_sdk: Option<u32>,

    /// SDK level targeted at runtime.
    ///
    /// Default: None (supplied by the Flutter toolchain)
    pub target_sdk: Option<u32>,

    /// NDK version for native code.
    ///
    /// Default: "27.0.12077973"
    pub ndk_version: Option<String>,

    /// Java source/target compatibility and Kotlin JVM target.
    ///
    /// Default: "11"
    pub java_version: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            namespace: "com.udharoo".into(),
            application_id: "com.udharoo".into(),
            display_name: "Udharoo".into(),
            version_name: None,
            version_code: None,
            min_sdk: 23,
            multi_dex: true,
            compile_sdk: None,
            target_sdk: None,
            ndk_version: Some("27.0.12077973".into()),
            java_version: "11".into(),
        }
    }
}
