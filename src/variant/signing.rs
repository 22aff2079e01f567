//! Signing identity resolution.
//!
//! Debuggable builds always sign with the default debug keystore. Release
//! signed builds use the credentials file when one was loaded and fall back
//! to the debug keystore when none exists, so that release and profile builds
//! stay buildable on machines without release secrets. The fallback produces
//! a non-distributable signature and is logged as a warning.
//!
//! Malformed or incomplete credentials never reach this module: they fail in
//! [`credentials::load`](super::credentials::load) instead of degrading.

use super::credentials::CredentialsFile;
use super::error::{Error, Result};
use super::settings::{BuildType, SigningPolicy};
use std::fmt;
use std::path::{Path, PathBuf};

/// Alias of the key in the default debug keystore.
pub const DEBUG_KEY_ALIAS: &str = "androiddebugkey";

/// Password of the key in the default debug keystore.
pub const DEBUG_KEY_PASSWORD: &str = "android";

/// Password of the default debug keystore.
pub const DEBUG_STORE_PASSWORD: &str = "android";

/// Where a signing identity came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum SigningOrigin {
    /// Release credentials file.
    ExternalFile,
    /// Default debug keystore.
    DefaultDebug,
}

/// Complete credential set used to sign an artifact.
///
/// Always fully populated. Passwords are redacted from the `Debug` output but
/// serialized, since the packaging pipeline needs them.
#[derive(Clone, PartialEq, Eq, serde::Serialize)]
pub struct SigningIdentity {
    /// Key alias.
    pub alias: String,
    /// Key password.
    pub password: String,
    /// Keystore path.
    pub store_file: PathBuf,
    /// Keystore password.
    pub store_password: String,
    /// Source of the identity.
    pub origin: SigningOrigin,
}

impl SigningIdentity {
    /// The default debug identity backed by the keystore at `store_file`.
    pub fn default_debug(store_file: impl Into<PathBuf>) -> Self {
        Self {
            alias: DEBUG_KEY_ALIAS.to_string(),
            password: DEBUG_KEY_PASSWORD.to_string(),
            store_file: store_file.into(),
            store_password: DEBUG_STORE_PASSWORD.to_string(),
            origin: SigningOrigin::DefaultDebug,
        }
    }
}

impl fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("alias", &self.alias)
            .field("password", &"<redacted>")
            .field("store_file", &self.store_file)
            .field("store_password", &"<redacted>")
            .field("origin", &self.origin)
            .finish()
    }
}

/// Returns `<home>/.android/debug.keystore` for the invoking user.
///
/// # Errors
///
/// Returns [`Error::NoHomeDirectory`] when the home directory is unknown.
pub fn default_debug_keystore() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".android").join("debug.keystore"))
        .ok_or(Error::NoHomeDirectory)
}

/// Derives the signing identity for a build type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningResolver {
    debug_store_file: PathBuf,
    module_dir: Option<PathBuf>,
}

impl SigningResolver {
    /// Creates a resolver whose debug identity uses `debug_store_file`.
    pub fn new(debug_store_file: impl Into<PathBuf>) -> Self {
        Self {
            debug_store_file: debug_store_file.into(),
            module_dir: None,
        }
    }

    /// Creates a resolver using the invoking user's default debug keystore.
    pub fn from_home_dir() -> Result<Self> {
        Ok(Self::new(default_debug_keystore()?))
    }

    /// Resolves relative `storeFile` entries against `dir`.
    pub fn with_module_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.module_dir = Some(dir.into());
        self
    }

    /// Returns the debug keystore path.
    pub fn debug_store_file(&self) -> &Path {
        &self.debug_store_file
    }

    /// Resolves exactly one identity for `build_type`.
    ///
    /// `credentials` is ignored for debuggable or debug-signed build types.
    pub fn resolve(
        &self,
        build_type: &BuildType,
        credentials: Option<&CredentialsFile>,
    ) -> SigningIdentity {
        if build_type.debuggable || build_type.signing == SigningPolicy::Debug {
            log::debug!("Build type '{}' signs with the debug keystore", build_type.id);
            return SigningIdentity::default_debug(&self.debug_store_file);
        }

        match credentials {
            Some(credentials) => SigningIdentity {
                alias: credentials.key_alias().to_string(),
                password: credentials.key_password().to_string(),
                store_file: self.resolve_store_file(credentials.store_file()),
                store_password: credentials.store_password().to_string(),
                origin: SigningOrigin::ExternalFile,
            },
            None => {
                log::warn!(
                    "Release signing not configured for build type '{}'; \
                     falling back to the debug keystore. The artifact is not distributable.",
                    build_type.id
                );
                SigningIdentity::default_debug(&self.debug_store_file)
            }
        }
    }

    fn resolve_store_file(&self, store_file: &Path) -> PathBuf {
        match &self.module_dir {
            Some(dir) if store_file.is_relative() => dir.join(store_file),
            _ => store_file.to_path_buf(),
        }
    }
}
