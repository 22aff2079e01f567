//! Product flavors (environment variants).

use crate::variant::error::{Error, Result};
use std::sync::LazyLock;

/// Environment variant controlling identifier and naming.
///
/// The flavor only carries suffixes; the base application id and display
/// name come from [`ProjectSettings`](super::ProjectSettings).
///
/// # Examples
///
/// ```
/// use kodegen_bundler_variant::variant::FlavorRegistry;
///
/// let dev = FlavorRegistry::standard().resolve("dev").unwrap();
/// assert_eq!(dev.application_id("com.udharoo"), "com.udharoo.dev");
/// assert_eq!(dev.display_name("Udharoo"), "Udharoo Dev");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flavor {
    /// Flavor id, unique within a registry.
    pub id: String,

    /// Appended to the base application id. Empty for none.
    ///
    /// Example: ".dev"
    pub application_id_suffix: String,

    /// Appended to the base display name. Empty for none.
    ///
    /// Example: " Dev"
    pub display_name_suffix: String,

    /// Appended to the version name.
    ///
    /// Example: "-dev"
    ///
    /// Default: None
    pub version_name_suffix: Option<String>,
}

impl Flavor {
    /// Creates a flavor that keeps the base identifier and naming unchanged.
    pub fn plain(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            application_id_suffix: String::new(),
            display_name_suffix: String::new(),
            version_name_suffix: None,
        }
    }

    /// Returns `base + application_id_suffix`.
    pub fn application_id(&self, base: &str) -> String {
        format!("{base}{}", self.application_id_suffix)
    }

    /// Returns `base + display_name_suffix`.
    pub fn display_name(&self, base: &str) -> String {
        format!("{base}{}", self.display_name_suffix)
    }
}

fn suffixed(id: &str, display: &str) -> Flavor {
    Flavor {
        id: id.to_string(),
        application_id_suffix: format!(".{id}"),
        display_name_suffix: format!(" {display}"),
        version_name_suffix: Some(format!("-{id}")),
    }
}

static STANDARD: LazyLock<FlavorRegistry> = LazyLock::new(|| FlavorRegistry {
    flavors: vec![
        suffixed("dev", "Dev"),
        suffixed("staging", "Staging"),
        Flavor::plain("prod"),
    ],
});

/// Lookup table of flavors keyed by id.
///
/// Entries keep their declaration order, which is the order
/// [`Compositor::compose_all`](crate::variant::Compositor::compose_all)
/// walks them in.
#[derive(Clone, Debug)]
pub struct FlavorRegistry {
    flavors: Vec<Flavor>,
}

impl FlavorRegistry {
    /// Returns the process-wide `dev`, `staging`, `prod` table.
    pub fn standard() -> &'static FlavorRegistry {
        &STANDARD
    }

    /// Builds a custom registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVariant`] if two flavors share an id.
    pub fn from_flavors(flavors: impl IntoIterator<Item = Flavor>) -> Result<Self> {
        let mut collected: Vec<Flavor> = Vec::new();
        for flavor in flavors {
            if collected.iter().any(|f| f.id == flavor.id) {
                return Err(Error::DuplicateVariant {
                    kind: "flavor",
                    id: flavor.id,
                });
            }
            collected.push(flavor);
        }
        Ok(Self { flavors: collected })
    }

    /// Looks up a flavor by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFlavor`] for ids outside the table.
    pub fn resolve(&self, id: &str) -> Result<&Flavor> {
        log::debug!("Resolving flavor '{id}'");
        self.flavors
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| Error::UnknownFlavor {
                id: id.to_string(),
                known: self.ids().map(String::from).collect(),
            })
    }

    /// Iterates flavors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Flavor> {
        self.flavors.iter()
    }

    /// Iterates flavor ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.flavors.iter().map(|f| f.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_three_flavors() {
        let ids: Vec<&str> = FlavorRegistry::standard().ids().collect();
        assert_eq!(ids, ["dev", "staging", "prod"]);
    }

    #[test]
    fn dev_and_staging_append_suffixes() {
        let registry = FlavorRegistry::standard();

        let staging = registry.resolve("staging").unwrap();
        assert_eq!(staging.application_id("com.udharoo"), "com.udharoo.staging");
        assert_eq!(staging.display_name("Udharoo"), "Udharoo Staging");
        assert_eq!(staging.version_name_suffix.as_deref(), Some("-staging"));
    }

    #[test]
    fn prod_appends_nothing() {
        let prod = FlavorRegistry::standard().resolve("prod").unwrap();
        assert_eq!(prod.application_id("com.udharoo"), "com.udharoo");
        assert_eq!(prod.display_name("Udharoo"), "Udharoo");
        assert_eq!(prod.version_name_suffix, None);
    }

    #[test]
    fn unknown_flavor_fails() {
        let err = FlavorRegistry::standard().resolve("qa").unwrap_err();
        match err {
            Error::UnknownFlavor { id, known } => {
                assert_eq!(id, "qa");
                assert_eq!(known, ["dev", "staging", "prod"]);
            }
            other => panic!("expected UnknownFlavor, got {other:?}"),
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(FlavorRegistry::standard().resolve("Dev").is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = FlavorRegistry::from_flavors([Flavor::plain("prod"), Flavor::plain("prod")])
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateVariant { kind: "flavor", .. }));
    }
}
