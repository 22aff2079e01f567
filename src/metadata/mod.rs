//! Project settings discovery from a TOML file.
//!
//! ```toml
//! [project]
//! namespace = "com.udharoo"
//! application_id = "com.udharoo"
//! display_name = "Udharoo"
//! version_name = "1.4.0"
//! version_code = 14
//! min_sdk = 23
//! target_sdk = 34
//! ndk_version = "27.0.12077973"
//! java_version = "11"
//! ```
//!
//! Every key is optional and falls back to [`ProjectSettings::default`].

use crate::error::{ResolveError, Result};
use crate::variant::{ErrorExt, ProjectSettings};
use std::path::Path;

/// Whole settings file; only the `[project]` table is read.
#[derive(Debug, serde::Deserialize)]
struct SettingsFile {
    #[serde(default)]
    project: ProjectSettings,
}

/// Loads project settings from `path`.
///
/// A file without a `[project]` table yields the defaults. Unknown keys
/// inside `[project]` are rejected.
pub fn load_project_settings(path: &Path) -> Result<ProjectSettings> {
    let contents = std::fs::read_to_string(path).fs_context("reading project settings", path)?;
    let settings = parse_project_settings(&contents, path)?;
    log::info!(
        "Loaded project settings from {} (application id '{}')",
        path.display(),
        settings.application_id
    );
    Ok(settings)
}

/// Parses project settings file contents; `path` is only used in errors.
pub fn parse_project_settings(contents: &str, path: &Path) -> Result<ProjectSettings> {
    let file: SettingsFile =
        toml::from_str(contents).map_err(|source| ResolveError::ProjectSettings {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(file.project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_table_keeps_defaults() {
        let settings = parse_project_settings(
            "[project]\nversion_name = \"1.4.0\"\nversion_code = 14\n",
            Path::new("variant.toml"),
        )
        .unwrap();
        assert_eq!(settings.version_name.as_deref(), Some("1.4.0"));
        assert_eq!(settings.version_code, Some(14));
        assert_eq!(settings.application_id, "com.udharoo");
        assert_eq!(settings.min_sdk, 23);
        assert!(settings.multi_dex);
        assert_eq!(settings.ndk_version.as_deref(), Some("27.0.12077973"));
        assert_eq!(settings.java_version, "11");
    }

    #[test]
    fn toolchain_keys_are_read() {
        let settings = parse_project_settings(
            "[project]\ncompile_sdk = 35\ntarget_sdk = 34\nndk_version = \"26.1.10909125\"\njava_version = \"17\"\n",
            Path::new("variant.toml"),
        )
        .unwrap();
        assert_eq!(settings.compile_sdk, Some(35));
        assert_eq!(settings.target_sdk, Some(34));
        assert_eq!(settings.ndk_version.as_deref(), Some("26.1.10909125"));
        assert_eq!(settings.java_version, "17");
    }

    #[test]
    fn missing_table_is_default() {
        let settings = parse_project_settings("", Path::new("variant.toml")).unwrap();
        assert_eq!(settings, ProjectSettings::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = parse_project_settings("[project]\nflavor = \"dev\"\n", Path::new("variant.toml"))
            .unwrap_err();
        assert!(matches!(err, ResolveError::ProjectSettings { .. }));
        assert!(err.to_string().contains("variant.toml"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variant.toml");
        std::fs::write(&path, "[project]\napplication_id = \"org.example.ledger\"\n").unwrap();
        let settings = load_project_settings(&path).unwrap();
        assert_eq!(settings.application_id, "org.example.ledger");
    }
}
