//! Release signing credentials file loading.
//!
//! The credentials file is an optional `key=value` text file (conventionally
//! `key.properties` next to the Android project root) supplying the release
//! keystore. A missing file is a supported state and yields `None`; a file
//! that exists must be complete and well formed, otherwise loading fails and
//! no part of it is used.
//!
//! # Format
//!
//! ```text
//! # release keystore
//! keyAlias=upload
//! keyPassword=secret
//! storeFile=/keys/upload.jks
//! storePassword=secret
//! ```
//!
//! Blank lines and lines starting with `#` or `!` are ignored. Keys and
//! values are trimmed. Every other line must hold exactly one `=` with a
//! recognized key and a non-empty value.

use super::error::{Error, ErrorExt, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Key holding the signing key alias.
pub const KEY_ALIAS: &str = "keyAlias";
/// Key holding the signing key password.
pub const KEY_PASSWORD: &str = "keyPassword";
/// Key holding the keystore file path.
pub const STORE_FILE: &str = "storeFile";
/// Key holding the keystore password.
pub const STORE_PASSWORD: &str = "storePassword";

/// Recognized keys, in the order missing keys are reported.
pub const RECOGNIZED_KEYS: [&str; 4] = [KEY_ALIAS, KEY_PASSWORD, STORE_FILE, STORE_PASSWORD];

/// Fully populated release signing credentials.
///
/// Only constructed by [`parse`]/[`load`], so a value of this type always has
/// all four fields. Passwords are redacted from the `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialsFile {
    key_alias: String,
    key_password: String,
    store_file: PathBuf,
    store_password: String,
}

impl CredentialsFile {
    /// Returns the signing key alias.
    pub fn key_alias(&self) -> &str {
        &self.key_alias
    }

    /// Returns the signing key password.
    pub fn key_password(&self) -> &str {
        &self.key_password
    }

    /// Returns the keystore path exactly as written in the file.
    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    /// Returns the keystore password.
    pub fn store_password(&self) -> &str {
        &self.store_password
    }
}

impl fmt::Debug for CredentialsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsFile")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"<redacted>")
            .field("store_file", &self.store_file)
            .field("store_password", &"<redacted>")
            .finish()
    }
}

/// Loads the credentials file at `path`.
///
/// Returns `Ok(None)` when the file does not exist. The file is read in one
/// scoped operation and closed before parsing starts.
///
/// # Errors
///
/// - [`Error::MalformedEntry`] for an unparsable line, an unrecognized key or
///   content that is not UTF-8
/// - [`Error::IncompleteCredentials`] when a required key is missing
/// - [`Error::Fs`] when the file exists but cannot be read
pub fn load(path: &Path) -> Result<Option<CredentialsFile>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No credentials file at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e).fs_context("reading credentials file", path),
    };

    let contents = decode(bytes, path)?;
    let credentials = parse(&contents, path)?;
    log::info!(
        "Loaded release credentials from {} (alias '{}')",
        path.display(),
        credentials.key_alias
    );
    Ok(Some(credentials))
}

/// Decodes file bytes as UTF-8, reporting the first offending line.
fn decode(bytes: Vec<u8>, path: &Path) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        Error::MalformedEntry {
            path: path.to_path_buf(),
            line_number: valid.iter().filter(|b| **b == b'\n').count() + 1,
            line: "<redacted>".to_string(),
            reason: "invalid UTF-8".to_string(),
        }
    })
}

/// Parses credentials file contents.
///
/// `path` is only used for error reporting.
pub fn parse(contents: &str, path: &Path) -> Result<CredentialsFile> {
    let mut values: [Option<String>; 4] = Default::default();

    for (index, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let malformed = |reason: String| Error::MalformedEntry {
            path: path.to_path_buf(),
            line_number: index + 1,
            line: redact(line),
            reason,
        };

        let (key, value) = match line.split_once('=') {
            Some((key, value)) if !value.contains('=') => (key.trim(), value.trim()),
            Some(_) => return Err(malformed("expected exactly one '='".into())),
            None => return Err(malformed("expected 'key=value'".into())),
        };

        let slot = RECOGNIZED_KEYS
            .iter()
            .position(|known| *known == key)
            .ok_or_else(|| malformed(format!("unrecognized key '{key}'")))?;

        if value.is_empty() {
            return Err(malformed(format!("empty value for '{key}'")));
        }
        if values[slot].is_some() {
            return Err(malformed(format!("duplicate key '{key}'")));
        }
        values[slot] = Some(value.to_string());
    }

    let missing: Vec<&'static str> = RECOGNIZED_KEYS
        .iter()
        .zip(values.iter())
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| *key)
        .collect();

    match values {
        [Some(key_alias), Some(key_password), Some(store_file), Some(store_password)] => {
            Ok(CredentialsFile {
                key_alias,
                key_password,
                store_file: PathBuf::from(store_file),
                store_password,
            })
        }
        _ => Err(Error::IncompleteCredentials {
            path: path.to_path_buf(),
            missing,
        }),
    }
}

/// Keeps the key part of a line and hides any value, which may be a password.
///
/// Lines without `=` are cut at the first whitespace or `:`, which covers the
/// `key: value` and `key value` property forms.
fn redact(line: &str) -> String {
    if let Some((key, _)) = line.split_once('=') {
        return format!("{}=<redacted>", key.trim());
    }
    match line.find(|c: char| c.is_whitespace() || c == ':') {
        Some(end) => format!("{} <redacted>", &line[..end]),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str = "\
keyAlias=relkey
keyPassword=p1
storeFile=/keys/rel.jks
storePassword=p2
";

    fn path() -> &'static Path {
        Path::new("key.properties")
    }

    #[test]
    fn parses_complete_file() {
        let creds = parse(COMPLETE, path()).unwrap();
        assert_eq!(creds.key_alias(), "relkey");
        assert_eq!(creds.key_password(), "p1");
        assert_eq!(creds.store_file(), Path::new("/keys/rel.jks"));
        assert_eq!(creds.store_password(), "p2");
    }

    #[test]
    fn skips_comments_and_blank_lines_and_trims() {
        let contents = "# release\n\n! legacy comment\n  keyAlias = relkey \nkeyPassword=p1\r\nstoreFile=/keys/rel.jks\nstorePassword=p2";
        let creds = parse(contents, path()).unwrap();
        assert_eq!(creds.key_alias(), "relkey");
        assert_eq!(creds.key_password(), "p1");
    }

    #[test]
    fn line_without_equals_is_malformed() {
        let err = parse("keyAlias\n", path()).unwrap_err();
        match err {
            Error::MalformedEntry {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 1);
                assert_eq!(line, "keyAlias");
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_key_is_malformed() {
        let contents = format!("{COMPLETE}foo=bar\n");
        let err = parse(&contents, path()).unwrap_err();
        match err {
            Error::MalformedEntry {
                line_number,
                line,
                reason,
                ..
            } => {
                assert_eq!(line_number, 5);
                assert_eq!(line, "foo=<redacted>");
                assert!(reason.contains("'foo'"));
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn second_equals_is_malformed_and_value_is_hidden() {
        let err = parse("keyPassword=a=b\n", path()).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, Error::MalformedEntry { .. }));
        assert!(!message.contains("a=b"));
    }

    #[test]
    fn colon_and_space_separated_values_are_hidden() {
        for contents in ["keyAlias=relkey\nkeyPassword: hunter2\n", "keyPassword hunter2\n"] {
            let err = parse(contents, path()).unwrap_err();
            let message = err.to_string();
            assert!(matches!(err, Error::MalformedEntry { .. }));
            assert!(message.contains("keyPassword"));
            assert!(!message.contains("hunter2"));
        }
    }

    #[test]
    fn duplicate_and_empty_values_are_malformed() {
        let err = parse("keyAlias=a\nkeyAlias=b\n", path()).unwrap_err();
        assert!(matches!(err, Error::MalformedEntry { line_number: 2, .. }));

        let err = parse("keyAlias=\n", path()).unwrap_err();
        assert!(matches!(err, Error::MalformedEntry { line_number: 1, .. }));
    }

    #[test]
    fn missing_keys_are_reported_together() {
        let err = parse("keyAlias=relkey\nkeyPassword=p1\n", path()).unwrap_err();
        match err {
            Error::IncompleteCredentials { missing, .. } => {
                assert_eq!(missing, vec![STORE_FILE, STORE_PASSWORD]);
            }
            other => panic!("expected IncompleteCredentials, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_incomplete() {
        let err = parse("", path()).unwrap_err();
        assert!(matches!(err, Error::IncompleteCredentials { ref missing, .. } if missing.len() == 4));
    }

    #[test]
    fn debug_output_redacts_passwords() {
        let creds = parse(COMPLETE, path()).unwrap();
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("relkey"));
        assert!(!rendered.contains("p1"));
        assert!(!rendered.contains("p2"));
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(&dir.path().join("key.properties")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_rejects_invalid_utf8_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("key.properties");
        std::fs::write(&file, b"# release\nkeyAlias=\xff\xfe\n").unwrap();
        match load(&file).unwrap_err() {
            Error::MalformedEntry {
                line_number,
                reason,
                ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(reason, "invalid UTF-8");
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("key.properties");
        std::fs::write(&file, COMPLETE).unwrap();
        let loaded = load(&file).unwrap().unwrap();
        assert_eq!(loaded.key_alias(), "relkey");
    }
}
