//! Resource exclusion rules merged into every descriptor.

use crate::variant::error::{Error, Result};
use std::collections::BTreeSet;

/// License and build metadata that dependencies ship inside their jars.
///
/// Duplicates of these across dependencies break packaging, and none of them
/// are needed at runtime.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "META-INF/AL2.0",
    "META-INF/LGPL2.1",
    "META-INF/DEPENDENCIES",
    "META-INF/LICENSE",
    "META-INF/LICENSE.txt",
    "META-INF/LICENSE.md",
    "META-INF/NOTICE",
    "META-INF/NOTICE.txt",
    "META-INF/NOTICE.md",
    "META-INF/*.kotlin_module",
];

/// Glob pattern for an artifact entry to leave out of the final package.
///
/// Compiled once on construction. Ordering, equality and serialization use
/// the pattern text.
#[derive(Clone, Debug)]
pub struct PackagingRule {
    pattern: String,
    compiled: glob::Pattern,
}

impl PackagingRule {
    /// Validates `pattern` as a glob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPackagingPattern`] for malformed globs.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let compiled = glob::Pattern::new(&pattern).map_err(|e| Error::InvalidPackagingPattern {
            pattern: pattern.clone(),
            reason: e.msg.to_string(),
        })?;
        Ok(Self { pattern, compiled })
    }

    /// Returns the pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether `entry` (a `/`-separated path inside the artifact) matches.
    pub fn matches(&self, entry: &str) -> bool {
        let options = glob::MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        self.compiled
            .matches_with(entry.trim_start_matches('/'), options)
    }
}

impl PartialEq for PackagingRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for PackagingRule {}

impl PartialOrd for PackagingRule {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackagingRule {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.pattern.cmp(&other.pattern)
    }
}

impl serde::Serialize for PackagingRule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.pattern)
    }
}

/// Flavor and build type independent packaging exclusions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackagingPolicy {
    rules: BTreeSet<PackagingRule>,
}

impl Default for PackagingPolicy {
    fn default() -> Self {
        Self {
            rules: DEFAULT_EXCLUDES
                .iter()
                .filter_map(|p| match PackagingRule::new(*p) {
                    Ok(rule) => Some(rule),
                    Err(e) => {
                        log::error!("Skipping built-in packaging rule: {e}");
                        None
                    }
                })
                .collect(),
        }
    }
}

impl PackagingPolicy {
    /// Returns the fixed exclusion rules.
    pub fn rules(&self) -> &BTreeSet<PackagingRule> {
        &self.rules
    }

    /// Adds further exclusion patterns on top of the current rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPackagingPattern`] for the first malformed glob.
    pub fn with_extra<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            self.rules.insert(PackagingRule::new(pattern)?);
        }
        Ok(self)
    }

    /// Whether any rule excludes `entry`.
    pub fn is_excluded(&self, entry: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(entry))
    }
}
