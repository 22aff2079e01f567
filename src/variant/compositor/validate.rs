//! Composite invariant checks.

use super::BuildDescriptor;
use crate::variant::error::{Error, Result};
use crate::variant::signing::SigningOrigin;

/// Checks every cross-component invariant of a composed descriptor.
///
/// Returns the first violation as [`Error::InvalidComposition`].
pub(super) fn validate(descriptor: &BuildDescriptor) -> Result<()> {
    let fail = |reason: String| {
        Err(Error::InvalidComposition {
            variant: descriptor.variant_name.clone(),
            reason,
        })
    };

    if descriptor.build_type == "release" && descriptor.debuggable {
        return fail("release build type must not be debuggable".into());
    }
    if descriptor.build_type == "debug" && !descriptor.debuggable {
        return fail("debug build type must be debuggable".into());
    }
    if descriptor.debuggable && descriptor.signing.origin != SigningOrigin::DefaultDebug {
        return fail("debuggable variants must sign with the default debug keystore".into());
    }
    if descriptor.debuggable && descriptor.minify {
        return fail("debuggable variants must not be minified".into());
    }
    if descriptor.shrink_resources && !descriptor.minify {
        return fail("resource shrinking requires minify".into());
    }
    if !descriptor.proguard_rule_files.is_empty() && !descriptor.minify {
        return fail("ProGuard rule files are only allowed when minify is enabled".into());
    }
    if descriptor.display_name.trim().is_empty() {
        return fail("display name is empty".into());
    }
    if let Err(reason) = check_application_id(&descriptor.application_id) {
        return fail(reason);
    }

    Ok(())
}

/// Android package name rules: two or more dot-separated segments, each
/// starting with an ASCII letter and holding only ASCII alphanumerics or `_`.
fn check_application_id(id: &str) -> std::result::Result<(), String> {
    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() < 2 {
        return Err(format!(
            "application id '{id}' needs at least two segments"
        ));
    }
    for segment in segments {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => {
                return Err(format!(
                    "application id '{id}' has a segment '{segment}' that does not start with a letter"
                ));
            }
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!(
                "application id '{id}' has invalid characters in segment '{segment}'"
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_flavored_ids() {
        assert!(check_application_id("com.udharoo").is_ok());
        assert!(check_application_id("com.udharoo.dev").is_ok());
        assert!(check_application_id("com.my_app.v2").is_ok());
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(check_application_id("udharoo").is_err());
        assert!(check_application_id("com..udharoo").is_err());
        assert!(check_application_id("com.1udharoo").is_err());
        assert!(check_application_id("com.udharoo-dev").is_err());
        assert!(check_application_id("com.udharoo.").is_err());
    }
}
